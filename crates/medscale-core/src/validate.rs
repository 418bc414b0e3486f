//! Load-time validation of scale definitions.
//!
//! A definition that passes [`ScaleDefinition::validate`] classifies every
//! score its fields can produce into exactly one band, so interpretation never
//! fails at evaluation time.

use std::collections::HashSet;

use crate::error::DefinitionError;
use crate::models::definition::ScaleDefinition;
use crate::models::field::FieldKind;

impl ScaleDefinition {
    pub fn validate(&self) -> Result<(), DefinitionError> {
        self.check_structure()
            .and_then(|()| self.check_bands())
            .and_then(|()| self.check_coverage())
            .inspect_err(|e| tracing::warn!(scale_id = %self.id, error = %e, "invalid scale definition"))
    }

    fn check_structure(&self) -> Result<(), DefinitionError> {
        let scale_id = || self.id.clone();

        if self.fields.is_empty() {
            return Err(DefinitionError::NoFields { scale_id: scale_id() });
        }

        let mut seen = HashSet::new();
        for (index, field) in self.fields.iter().enumerate() {
            if !seen.insert(field.id.as_str()) {
                return Err(DefinitionError::DuplicateField {
                    scale_id: scale_id(),
                    field_id: field.id.clone(),
                });
            }

            match &field.kind {
                FieldKind::SingleChoice { options } => {
                    if options.is_empty() {
                        return Err(DefinitionError::NoOptions {
                            scale_id: scale_id(),
                            field_id: field.id.clone(),
                        });
                    }
                    let mut values = HashSet::new();
                    for option in options {
                        if !values.insert(option.value.as_str()) {
                            return Err(DefinitionError::DuplicateOption {
                                scale_id: scale_id(),
                                field_id: field.id.clone(),
                                value: option.value.clone(),
                            });
                        }
                    }
                }
                FieldKind::TriState { .. } => {}
                FieldKind::Numeric { min, max, brackets, .. } => {
                    let range_ok = min.is_finite() && max.is_finite() && min <= max;
                    let brackets_ok = brackets.iter().all(|b| {
                        b.min.is_finite() && b.max.is_none_or(|m| m.is_finite() && m > b.min)
                    });
                    if !range_ok || !brackets_ok {
                        return Err(DefinitionError::InvalidNumericRange {
                            scale_id: scale_id(),
                            field_id: field.id.clone(),
                        });
                    }
                }
            }

            if let Some(condition) = &field.visible_when {
                for referenced in condition.referenced_fields() {
                    match self.fields.iter().position(|f| f.id == referenced) {
                        None => {
                            return Err(DefinitionError::UnknownConditionField {
                                scale_id: scale_id(),
                                field_id: field.id.clone(),
                                referenced: referenced.to_string(),
                            });
                        }
                        Some(position) if position >= index => {
                            return Err(DefinitionError::ForwardConditionReference {
                                scale_id: scale_id(),
                                field_id: field.id.clone(),
                                referenced: referenced.to_string(),
                            });
                        }
                        Some(_) => {}
                    }
                }
            }
        }

        if let Some(limits) = &self.score_limits
            && let (Some(floor), Some(ceiling)) = (limits.floor, limits.ceiling)
            && floor > ceiling
        {
            return Err(DefinitionError::InvalidLimits { scale_id: scale_id() });
        }

        if self.checked_score_range().is_none() {
            return Err(DefinitionError::ScoreOverflow { scale_id: scale_id() });
        }

        Ok(())
    }

    fn check_bands(&self) -> Result<(), DefinitionError> {
        if self.bands.is_empty() {
            return Err(DefinitionError::NoBands {
                scale_id: self.id.clone(),
            });
        }

        let last = self.bands.len() - 1;
        for (index, band) in self.bands.iter().enumerate() {
            let inverted = matches!((band.min, band.max), (Some(min), Some(max)) if min > max);
            let misplaced_open = (band.min.is_none() && index != 0) || (band.max.is_none() && index != last);
            if inverted || misplaced_open {
                return Err(DefinitionError::InvalidBand {
                    scale_id: self.id.clone(),
                    index,
                });
            }
        }

        for (index, pair) in self.bands.windows(2).enumerate() {
            if let [prev, next] = pair
                && let (Some(prev_min), Some(next_min)) = (prev.min, next.min)
                && next_min < prev_min
            {
                return Err(DefinitionError::BandsOutOfOrder {
                    scale_id: self.id.clone(),
                    index: index + 1,
                });
            }
        }

        Ok(())
    }

    /// Every integer score in the theoretical range must hit exactly one band.
    ///
    /// Walks the band edges clipped to the range rather than every score, so
    /// the cost depends on the number of bands only. Relies on `check_bands`
    /// having ordered the bands by their lower edge.
    fn check_coverage(&self) -> Result<(), DefinitionError> {
        let (lo, hi) = self.score_range();
        let (lo, hi) = (i64::from(lo), i64::from(hi));

        let mut next = lo;
        for band in &self.bands {
            let min = band.min.map_or(lo, |m| i64::from(m).max(lo));
            let max = band.max.map_or(hi, |m| i64::from(m).min(hi));
            if min > max {
                continue;
            }
            if min > next {
                return Err(self.uncovered(next));
            }
            if min < next {
                return Err(DefinitionError::OverlappingBands {
                    scale_id: self.id.clone(),
                    score: clip(min),
                });
            }
            next = max + 1;
        }

        if next <= hi {
            return Err(self.uncovered(next));
        }
        Ok(())
    }

    fn uncovered(&self, score: i64) -> DefinitionError {
        DefinitionError::Unclassifiable {
            scale_id: self.id.clone(),
            score: clip(score),
        }
    }
}

/// Scores reaching here lie within an `i32` range.
fn clip(score: i64) -> i32 {
    i32::try_from(score).unwrap_or(if score < 0 { i32::MIN } else { i32::MAX })
}
