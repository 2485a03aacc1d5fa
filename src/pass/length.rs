//! Password length validation.

use crate::error::ValidationError;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 16;

/// Parse and bound-check raw length input (inclusive `[MIN_LENGTH, MAX_LENGTH]`).
pub fn validate_length(raw: &str) -> Result<usize, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }

    if let Ok(n) = trimmed.parse::<i64>() {
        return check_bounds(n as f64);
    }

    // Float syntax ("8.0", "1e1") still counts as numeric input
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() && n.fract() == 0.0 => check_bounds(n),
        Ok(n) if n.is_finite() => Err(ValidationError::NotWhole(trimmed.to_string())),
        _ => Err(ValidationError::NotANumber(trimmed.to_string())),
    }
}

fn check_bounds(n: f64) -> Result<usize, ValidationError> {
    if n < MIN_LENGTH as f64 {
        Err(ValidationError::too_short())
    } else if n > MAX_LENGTH as f64 {
        Err(ValidationError::too_long())
    } else {
        Ok(n as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_inclusive() {
        assert_eq!(validate_length("4"), Ok(4));
        assert_eq!(validate_length("16"), Ok(16));
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            validate_length("3"),
            Err(ValidationError::TooShort { min: 4 })
        );
        assert_eq!(
            validate_length("17"),
            Err(ValidationError::TooLong { max: 16 })
        );
        assert_eq!(
            validate_length("-5"),
            Err(ValidationError::TooShort { min: 4 })
        );
        assert_eq!(
            validate_length("99999999999999999999999"),
            Err(ValidationError::TooLong { max: 16 })
        );
    }

    #[test]
    fn rejects_missing() {
        assert_eq!(validate_length(""), Err(ValidationError::Required));
        assert_eq!(validate_length("   "), Err(ValidationError::Required));
    }

    #[test]
    fn rejects_non_numeric() {
        assert!(matches!(
            validate_length("abc"),
            Err(ValidationError::NotANumber(_))
        ));
        assert!(matches!(
            validate_length("inf"),
            Err(ValidationError::NotANumber(_))
        ));
        assert!(matches!(
            validate_length("NaN"),
            Err(ValidationError::NotANumber(_))
        ));
        assert!(matches!(
            validate_length("8a"),
            Err(ValidationError::NotANumber(_))
        ));
    }

    #[test]
    fn rejects_fractions() {
        assert_eq!(
            validate_length("8.5"),
            Err(ValidationError::NotWhole("8.5".into()))
        );
    }

    #[test]
    fn accepts_padded_and_float_whole_input() {
        assert_eq!(validate_length(" 8 "), Ok(8));
        assert_eq!(validate_length("12.0"), Ok(12));
    }

    #[test]
    fn messages_match_form_copy() {
        assert_eq!(
            ValidationError::Required.to_string(),
            "Password length is required"
        );
        assert_eq!(
            ValidationError::too_short().to_string(),
            "Password length must be at least 4"
        );
        assert_eq!(
            ValidationError::too_long().to_string(),
            "Password length must be at most 16"
        );
    }
}
