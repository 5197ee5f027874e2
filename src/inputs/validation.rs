//! Input validation boundary
//!
//! All inputs are checked here before the engine runs; the engine itself
//! performs no validation.

use super::data::ProjectionInput;

/// Field-level input error
#[derive(Debug, Clone, thiserror::Error)]
pub enum InputError {
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("term_months must be at least 1")]
    ZeroTerm,

    #[error("unknown {field} '{value}'")]
    UnknownFrequency { field: &'static str, value: String },
}

/// Validate all fields of a projection input
pub fn validate(input: &ProjectionInput) -> Result<(), InputError> {
    check_amount("initial_deposit_cd", input.initial_deposit_cd)?;
    check_amount("initial_deposit_hysa", input.initial_deposit_hysa)?;
    check_amount("cd_rate", input.cd_rate)?;
    check_amount("hysa_rate", input.hysa_rate)?;
    check_amount("regular_contribution", input.regular_contribution)?;

    if input.term_months == 0 {
        return Err(InputError::ZeroTerm);
    }

    Ok(())
}

fn check_amount(field: &'static str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(InputError::Negative { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate(&ProjectionInput::default()).is_ok());
    }

    #[test]
    fn test_rejects_negative_deposit() {
        let input = ProjectionInput {
            initial_deposit_cd: -100.0,
            ..Default::default()
        };
        let err = validate(&input).unwrap_err();
        assert!(matches!(
            err,
            InputError::Negative {
                field: "initial_deposit_cd",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_negative_rate_and_contribution() {
        let input = ProjectionInput {
            hysa_rate: -0.5,
            ..Default::default()
        };
        assert!(validate(&input).is_err());

        let input = ProjectionInput {
            regular_contribution: -1.0,
            ..Default::default()
        };
        assert!(validate(&input).is_err());
    }

    #[test]
    fn test_rejects_zero_term() {
        let input = ProjectionInput {
            term_months: 0,
            ..Default::default()
        };
        assert!(matches!(validate(&input), Err(InputError::ZeroTerm)));
    }

    #[test]
    fn test_rejects_non_finite() {
        let input = ProjectionInput {
            cd_rate: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            validate(&input),
            Err(InputError::NotFinite { field: "cd_rate" })
        ));

        let input = ProjectionInput {
            initial_deposit_hysa: f64::INFINITY,
            ..Default::default()
        };
        assert!(validate(&input).is_err());
    }

    #[test]
    fn test_zero_amounts_are_valid() {
        let input = ProjectionInput {
            initial_deposit_cd: 0.0,
            initial_deposit_hysa: 0.0,
            cd_rate: 0.0,
            hysa_rate: 0.0,
            regular_contribution: 0.0,
            term_months: 1,
            ..Default::default()
        };
        assert!(validate(&input).is_ok());
    }
}
