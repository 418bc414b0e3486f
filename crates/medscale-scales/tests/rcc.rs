use medscale_core::models::answers::{Answers, FieldInput};
use medscale_core::models::band::Tier;
use medscale_core::models::definition::CompletionPolicy;
use medscale_scales::scales::rcc::{self, LeibovichRcc};
use medscale_scales::Scale;

fn answer(pairs: &[(&str, &str)]) -> Answers {
    let def = rcc::definition();
    pairs.iter().fold(Answers::new(), |answers, (field, value)| {
        answers
            .with(def, field, FieldInput::Select(value.to_string()))
            .unwrap()
    })
}

fn lowest_risk() -> Vec<(&'static str, &'static str)> {
    vec![
        ("t_stage", "t1a"),
        ("n_stage", "n0"),
        ("tumor_size", "lt_10"),
        ("nuclear_grade", "grade_1"),
        ("tumor_necrosis", "absent"),
    ]
}

#[test]
fn lowest_risk_case_is_low() {
    let result = LeibovichRcc.evaluate(&answer(&lowest_risk())).unwrap();
    assert_eq!(result.score, 0);
    assert_eq!(result.band.label, "Niskie ryzyko");
    assert_eq!(result.band.tier, Tier::Low);
    assert!(result.is_complete);
}

#[test]
fn single_field_change_crosses_band_boundary() {
    let mut pairs = lowest_risk();
    pairs[3] = ("nuclear_grade", "grade_4");

    let result = LeibovichRcc.evaluate(&answer(&pairs)).unwrap();
    assert_eq!(result.score, 3);
    assert_eq!(result.band.label, "Średnie ryzyko");
    assert_eq!(result.band.tier, Tier::Intermediate);
}

#[test]
fn worst_case_is_high() {
    let result = LeibovichRcc
        .evaluate(&answer(&[
            ("t_stage", "t3_t4"),
            ("n_stage", "n1_n2"),
            ("tumor_size", "gte_10"),
            ("nuclear_grade", "grade_4"),
            ("tumor_necrosis", "present"),
        ]))
        .unwrap();
    assert_eq!(result.score, 11);
    assert_eq!(result.band.label, "Wysokie ryzyko");
}

#[test]
fn incomplete_whenever_any_field_is_missing() {
    let all = lowest_risk();
    for skip in 0..all.len() {
        let partial: Vec<_> = all
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != skip)
            .map(|(_, pair)| *pair)
            .collect();
        let answers = answer(&partial);
        assert!(!LeibovichRcc.is_complete(&answers), "missing {}", all[skip].0);

        let result = LeibovichRcc.evaluate(&answers).unwrap();
        assert!(!result.should_display_verdict(CompletionPolicy::AllRequired));
    }
}

#[test]
fn policy_requires_all_fields() {
    let def = rcc::definition();
    assert_eq!(def.completion_policy, CompletionPolicy::AllRequired);
    assert!(def.fields.iter().all(|f| f.required));
    assert_eq!(def.score_range(), (0, 11));
}
