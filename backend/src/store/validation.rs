//! Schema validation shared by the campus-owned collections.
//!
//! Records are validated as a whole right before they are written, both on
//! insert and after a partial update has been merged into the stored record.

use std::fmt;

/// Every rule a record broke, rendered as
/// `"<Entity> validation failed: <field>: <problem>, ..."`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    entity: &'static str,
    problems: Vec<(&'static str, &'static str)>,
}

impl ValidationError {
    #[cfg(test)]
    pub fn fields(&self) -> Vec<&'static str> {
        self.problems.iter().map(|(field, _)| *field).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation failed: ", self.entity)?;
        for (i, (field, problem)) in self.problems.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {problem}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// The business fields every campus-owned record carries.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFields {
    pub name: String,
    pub amount: f64,
    pub description: Option<String>,
    pub campus_id: String,
}

/// Candidate values for [`RecordFields`], before validation.
#[derive(Debug, Default)]
pub struct Draft {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub description: Option<String>,
    pub campus_id: Option<String>,
}

impl Draft {
    /// Overlays `self` on an already stored record: absent fields keep the
    /// stored value.
    pub fn over(self, stored: RecordFields) -> Draft {
        Draft {
            name: self.name.or(Some(stored.name)),
            amount: self.amount.or(Some(stored.amount)),
            description: self.description.or(stored.description),
            campus_id: self.campus_id.or(Some(stored.campus_id)),
        }
    }

    pub fn validate(self, entity: &'static str) -> Result<RecordFields, ValidationError> {
        let mut problems = Vec::new();

        let name = self.name.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            problems.push(("name", "is required"));
        }

        let amount = match self.amount {
            None => {
                problems.push(("amount", "is required"));
                0.0
            }
            Some(a) if !a.is_finite() => {
                problems.push(("amount", "must be a finite number"));
                a
            }
            Some(a) if a < 0.0 => {
                problems.push(("amount", "must not be negative"));
                a
            }
            Some(a) => a,
        };

        let campus_id = self.campus_id.as_deref().map(str::trim).unwrap_or_default();
        if campus_id.is_empty() {
            problems.push(("campusID", "is required"));
        }

        if !problems.is_empty() {
            return Err(ValidationError { entity, problems });
        }

        Ok(RecordFields {
            name: name.to_string(),
            amount,
            description: self
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            campus_id: campus_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn complete() -> Draft {
        Draft {
            name: Some("  Library Fine ".into()),
            amount: Some(50.0),
            description: Some("   ".into()),
            campus_id: Some("C1".into()),
        }
    }

    #[test]
    fn valid_draft_is_trimmed() {
        let fields = complete().validate("Deduction").unwrap();
        assert_eq!(fields.name, "Library Fine");
        assert_eq!(fields.amount, 50.0);
        assert_eq!(fields.description, None);
        assert_eq!(fields.campus_id, "C1");
    }

    #[rstest]
    #[case::missing_name(Draft { name: None, ..complete() }, "name")]
    #[case::blank_name(Draft { name: Some("  ".into()), ..complete() }, "name")]
    #[case::missing_amount(Draft { amount: None, ..complete() }, "amount")]
    #[case::negative_amount(Draft { amount: Some(-1.0), ..complete() }, "amount")]
    #[case::nan_amount(Draft { amount: Some(f64::NAN), ..complete() }, "amount")]
    #[case::missing_campus(Draft { campus_id: None, ..complete() }, "campusID")]
    fn invalid_field_is_reported(#[case] draft: Draft, #[case] field: &str) {
        let err = draft.validate("Deduction").unwrap_err();
        assert_eq!(err.fields(), vec![field]);
        assert!(err.to_string().starts_with("Deduction validation failed: "));
    }

    #[test]
    fn every_problem_is_listed() {
        let err = Draft::default().validate("Scholarship").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Scholarship validation failed: name: is required, amount: is required, campusID: is required"
        );
    }

    #[test]
    fn overlay_keeps_stored_values_for_absent_fields() {
        let stored = complete().validate("Deduction").unwrap();
        let merged = Draft {
            amount: Some(75.0),
            ..Draft::default()
        }
        .over(stored)
        .validate("Deduction")
        .unwrap();
        assert_eq!(merged.name, "Library Fine");
        assert_eq!(merged.amount, 75.0);
        assert_eq!(merged.campus_id, "C1");
    }
}
