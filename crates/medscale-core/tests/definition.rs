use medscale_core::error::DefinitionError;
use medscale_core::models::answers::{AnswerValue, Answers, FieldInput, TriState};
use medscale_core::models::band::{ColorHint, InterpretationBand, Tier};
use medscale_core::models::condition::Condition;
use medscale_core::models::definition::{CompletionPolicy, ScaleDefinition, ScoreLimits};
use medscale_core::models::field::{Field, FieldKind, FieldOption};

fn band(min: Option<i32>, max: Option<i32>, label: &str) -> InterpretationBand {
    InterpretationBand::new(min, max, label, Tier::Low, ColorHint::Gray)
}

/// Two choices worth -1..2 and a gated finding worth 1: range -1..=3.
fn gated() -> ScaleDefinition {
    ScaleDefinition {
        id: "gated".to_string(),
        version: 1,
        title: "Gated".to_string(),
        description: None,
        fields: vec![
            Field::single_choice(
                "base",
                "Base",
                vec![FieldOption::new("minus", "Minus", -1), FieldOption::new("plus", "Plus", 2)],
            )
            .required(),
            Field::tri_state("screened", "Screened", 0),
            Field::tri_state("finding", "Finding", 1)
                .visible_when(Condition::equals(
                    "screened",
                    AnswerValue::TriState(TriState::Present),
                ))
                .required(),
        ],
        bands: vec![band(None, Some(0), "low"), band(Some(1), None, "high")],
        completion_policy: CompletionPolicy::AllRequired,
        score_limits: None,
    }
}

#[test]
fn valid_definition_passes() {
    assert!(gated().validate().is_ok());
}

#[test]
fn score_range_counts_unanswered_as_zero() {
    assert_eq!(gated().score_range(), (-1, 3));
}

#[test]
fn score_range_respects_limits() {
    let mut def = gated();
    def.score_limits = Some(ScoreLimits {
        floor: Some(0),
        ceiling: None,
    });
    assert_eq!(def.score_range(), (0, 3));
}

#[test]
fn hidden_required_field_does_not_block_completeness() {
    let def = gated();
    let answers = Answers::new()
        .with(&def, "base", FieldInput::Select("plus".to_string()))
        .unwrap();
    assert!(def.is_complete(&answers));

    let answers = answers
        .with(&def, "screened", FieldInput::Toggle(TriState::Present))
        .unwrap();
    assert!(!def.is_complete(&answers));

    let answers = answers
        .with(&def, "finding", FieldInput::Toggle(TriState::Absent))
        .unwrap();
    assert!(def.is_complete(&answers));
}

#[test]
fn answer_on_hidden_field_is_ignored() {
    let def = gated();
    let answers = Answers::new()
        .with(&def, "finding", FieldInput::Toggle(TriState::Present))
        .unwrap();

    let resolved = def.resolve(&answers);
    let finding = resolved.iter().find(|r| r.field.id == "finding").unwrap();
    assert!(!finding.visible);
    assert!(finding.answer.is_none());
}

#[test]
fn gap_in_bands_is_unclassifiable() {
    let mut def = gated();
    def.bands = vec![band(None, Some(0), "low"), band(Some(2), None, "high")];
    assert_eq!(
        def.validate(),
        Err(DefinitionError::Unclassifiable {
            scale_id: "gated".to_string(),
            score: 1,
        })
    );
}

#[test]
fn overlapping_bands_are_rejected() {
    let mut def = gated();
    def.bands = vec![band(None, Some(1), "low"), band(Some(1), None, "high")];
    assert_eq!(
        def.validate(),
        Err(DefinitionError::OverlappingBands {
            scale_id: "gated".to_string(),
            score: 1,
        })
    );
}

#[test]
fn bands_must_ascend() {
    let mut def = gated();
    def.bands = vec![band(Some(1), Some(3), "high"), band(Some(-1), Some(0), "low")];
    assert!(matches!(
        def.validate(),
        Err(DefinitionError::BandsOutOfOrder { index: 1, .. })
    ));
}

#[test]
fn inverted_band_is_rejected() {
    let mut def = gated();
    def.bands = vec![band(None, Some(0), "low"), band(Some(5), Some(1), "odd"), band(Some(6), None, "high")];
    assert!(matches!(
        def.validate(),
        Err(DefinitionError::InvalidBand { index: 1, .. })
    ));
}

#[test]
fn structural_defects_are_reported() {
    let mut def = gated();
    def.fields.push(Field::tri_state("base", "Again", 1));
    assert!(matches!(def.validate(), Err(DefinitionError::DuplicateField { .. })));

    let mut def = gated();
    def.fields.push(Field::single_choice("empty", "Empty", vec![]));
    assert!(matches!(def.validate(), Err(DefinitionError::NoOptions { .. })));

    let mut def = gated();
    def.fields[0] = Field::single_choice(
        "base",
        "Base",
        vec![FieldOption::new("x", "X", 0), FieldOption::new("x", "X again", 1)],
    );
    assert!(matches!(def.validate(), Err(DefinitionError::DuplicateOption { .. })));

    let mut def = gated();
    def.fields[1] = Field::tri_state("screened", "Screened", 0).visible_when(Condition::answered("finding"));
    assert!(matches!(
        def.validate(),
        Err(DefinitionError::ForwardConditionReference { .. })
    ));

    let mut def = gated();
    def.fields[1] = Field::tri_state("screened", "Screened", 0).visible_when(Condition::answered("nowhere"));
    assert!(matches!(
        def.validate(),
        Err(DefinitionError::UnknownConditionField { .. })
    ));

    let mut def = gated();
    def.fields.push(Field::numeric("n", "N", 10.0, 1.0, vec![]));
    assert!(matches!(def.validate(), Err(DefinitionError::InvalidNumericRange { .. })));

    let mut def = gated();
    def.score_limits = Some(ScoreLimits {
        floor: Some(3),
        ceiling: Some(1),
    });
    assert!(matches!(def.validate(), Err(DefinitionError::InvalidLimits { .. })));

    let mut def = gated();
    def.bands.clear();
    assert!(matches!(def.validate(), Err(DefinitionError::NoBands { .. })));
}

#[test]
fn definition_json_uses_tagged_kinds() {
    let json = serde_json::to_value(gated()).unwrap();
    assert_eq!(json["fields"][0]["kind"]["type"], "single_choice");
    assert_eq!(json["fields"][2]["kind"]["type"], "tri_state");
    assert_eq!(json["fields"][2]["visible_when"]["op"], "equals");
    assert_eq!(json["completion_policy"], "all_required");
}

const PRESENT: AnswerValue = AnswerValue::TriState(TriState::Present);

/// Two findings and a third field shown when `condition` holds.
fn conditioned(condition: Condition) -> ScaleDefinition {
    ScaleDefinition {
        id: "conditioned".to_string(),
        version: 1,
        title: "Conditioned".to_string(),
        description: None,
        fields: vec![
            Field::tri_state("a", "A", 1),
            Field::tri_state("b", "B", 1),
            Field::tri_state("gated", "Gated", 1).visible_when(condition),
        ],
        bands: vec![band(None, None, "any")],
        completion_policy: CompletionPolicy::Live,
        score_limits: None,
    }
}

fn gated_visible(def: &ScaleDefinition, answers: &[(&str, TriState)]) -> bool {
    let answers = answers.iter().fold(Answers::new(), |acc, (field, state)| {
        acc.with(def, field, FieldInput::Toggle(*state)).unwrap()
    });
    def.resolve(&answers)
        .iter()
        .find(|r| r.field.id == "gated")
        .unwrap()
        .visible
}

#[test]
fn all_requires_every_condition() {
    let def = conditioned(Condition::all(vec![
        Condition::equals("a", PRESENT),
        Condition::answered("b"),
    ]));
    assert!(def.validate().is_ok());

    assert!(!gated_visible(&def, &[]));
    assert!(!gated_visible(&def, &[("a", TriState::Present)]));
    assert!(gated_visible(&def, &[("a", TriState::Present), ("b", TriState::Absent)]));
    assert!(!gated_visible(&def, &[("a", TriState::Absent), ("b", TriState::Absent)]));
}

#[test]
fn any_requires_one_condition() {
    let def = conditioned(Condition::any(vec![
        Condition::equals("a", PRESENT),
        Condition::equals("b", PRESENT),
    ]));
    assert!(def.validate().is_ok());

    assert!(!gated_visible(&def, &[]));
    assert!(gated_visible(&def, &[("b", TriState::Present)]));
    assert!(gated_visible(&def, &[("a", TriState::Present), ("b", TriState::Absent)]));
    assert!(!gated_visible(&def, &[("a", TriState::Absent), ("b", TriState::NotEvaluated)]));
}

#[test]
fn not_inverts_its_condition() {
    let def = conditioned(Condition::not(Condition::answered("a")));
    assert!(def.validate().is_ok());

    assert!(gated_visible(&def, &[]));
    assert!(gated_visible(&def, &[("b", TriState::Present)]));
    assert!(!gated_visible(&def, &[("a", TriState::Absent)]));
}

#[test]
fn nested_combinators_compose() {
    let condition = Condition::all(vec![
        Condition::answered("a"),
        Condition::not(Condition::equals("b", PRESENT)),
    ]);
    assert_eq!(condition.referenced_fields(), vec!["a", "b"]);

    let def = conditioned(condition);
    assert!(def.validate().is_ok());
    assert!(!gated_visible(&def, &[("a", TriState::Absent), ("b", TriState::Present)]));
    assert!(gated_visible(&def, &[("a", TriState::Absent), ("b", TriState::Absent)]));
    assert!(!gated_visible(&def, &[("b", TriState::Absent)]));
}

#[test]
fn hidden_field_answer_is_not_seen_by_later_combinators() {
    let mut def = conditioned(Condition::any(vec![Condition::answered("b")]));
    def.fields[1] = Field::tri_state("b", "B", 1).visible_when(Condition::answered("a"));

    assert!(!gated_visible(&def, &[("b", TriState::Absent)]));
    assert!(gated_visible(&def, &[("a", TriState::Absent), ("b", TriState::Absent)]));
}

#[test]
fn nested_forward_reference_is_rejected() {
    let mut def = conditioned(Condition::answered("a"));
    def.fields[1] = Field::tri_state("b", "B", 1).visible_when(Condition::any(vec![
        Condition::answered("a"),
        Condition::not(Condition::answered("gated")),
    ]));

    assert_eq!(
        def.validate(),
        Err(DefinitionError::ForwardConditionReference {
            scale_id: "conditioned".to_string(),
            field_id: "b".to_string(),
            referenced: "gated".to_string(),
        })
    );
}

#[test]
fn nested_unknown_reference_is_rejected() {
    let def = conditioned(Condition::all(vec![
        Condition::answered("a"),
        Condition::not(Condition::answered("missing")),
    ]));
    assert!(matches!(
        def.validate(),
        Err(DefinitionError::UnknownConditionField { referenced, .. }) if referenced == "missing"
    ));
}

fn swing(id: &str, present_points: i32, absent_points: i32) -> Field {
    let mut field = Field::tri_state(id, id, present_points);
    field.kind = FieldKind::TriState {
        present_points,
        absent_points,
    };
    field
}

#[test]
fn summed_points_past_i32_are_rejected() {
    let mut def = conditioned(Condition::answered("a"));
    def.fields = vec![swing("x", i32::MAX, 0), swing("y", i32::MAX, 0)];

    assert_eq!(def.checked_score_range(), None);
    assert_eq!(def.score_range(), (0, i32::MAX));
    assert_eq!(
        def.validate(),
        Err(DefinitionError::ScoreOverflow {
            scale_id: "conditioned".to_string(),
        })
    );
}

#[test]
fn wide_range_is_checked_by_band_edges() {
    let mut def = conditioned(Condition::answered("a"));
    def.fields = vec![swing("x", 2_000_000_000, -2_000_000_000)];
    def.bands = vec![band(None, Some(0), "low"), band(Some(1), None, "high")];
    assert_eq!(def.score_range(), (-2_000_000_000, 2_000_000_000));
    assert!(def.validate().is_ok());

    def.bands = vec![band(None, Some(0), "low"), band(Some(2), None, "high")];
    assert_eq!(
        def.validate(),
        Err(DefinitionError::Unclassifiable {
            scale_id: "conditioned".to_string(),
            score: 1,
        })
    );

    def.bands = vec![band(Some(-5), Some(0), "low"), band(Some(1), None, "high")];
    assert_eq!(
        def.validate(),
        Err(DefinitionError::Unclassifiable {
            scale_id: "conditioned".to_string(),
            score: -2_000_000_000,
        })
    );

    def.bands = vec![band(None, Some(10), "low"), band(Some(1), Some(1_999_999_999), "high")];
    assert_eq!(
        def.validate(),
        Err(DefinitionError::OverlappingBands {
            scale_id: "conditioned".to_string(),
            score: 1,
        })
    );
}

#[test]
fn bands_outside_the_range_are_ignored() {
    let mut def = gated();
    def.bands = vec![
        band(None, Some(-10), "unreachable"),
        band(Some(-9), Some(0), "low"),
        band(Some(1), Some(3), "high"),
        band(Some(4), None, "unreachable"),
    ];
    assert!(def.validate().is_ok());

    def.bands.truncate(3);
    def.bands[2] = band(Some(1), Some(2), "high");
    assert_eq!(
        def.validate(),
        Err(DefinitionError::Unclassifiable {
            scale_id: "gated".to_string(),
            score: 3,
        })
    );
}
