use crate::services::NewReading;

pub const TEMPERATURE_MIN_C: f64 = -100.0;
pub const TEMPERATURE_MAX_C: f64 = 100.0;
pub const LOCATION_MAX_CHARS: usize = 100;
pub const NOTES_MAX_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Temperature {0} out of range [-100, 100]")]
    TemperatureOutOfRange(f64),

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

/// Inclusive range check. NaN and infinities are out of range.
pub fn validate_temperature(temperature_c: f64) -> Result<(), ValidationError> {
    if (TEMPERATURE_MIN_C..=TEMPERATURE_MAX_C).contains(&temperature_c) {
        Ok(())
    } else {
        Err(ValidationError::TemperatureOutOfRange(temperature_c))
    }
}

fn validate_length(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), ValidationError> {
    match value {
        Some(v) if v.chars().count() > max => Err(ValidationError::TooLong { field, max }),
        _ => Ok(()),
    }
}

/// Validate a reading before it is stamped or persisted.
pub fn validate_new_reading(draft: &NewReading) -> Result<(), ValidationError> {
    validate_temperature(draft.temperature_c)?;
    validate_length("location", draft.location.as_deref(), LOCATION_MAX_CHARS)?;
    validate_length("notes", draft.notes.as_deref(), NOTES_MAX_CHARS)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(validate_temperature(-100.0).is_ok());
        assert!(validate_temperature(100.0).is_ok());
        assert!(validate_temperature(0.0).is_ok());
        assert!(validate_temperature(22.5).is_ok());
    }

    #[test]
    fn test_out_of_range_temperature() {
        assert_eq!(
            validate_temperature(-101.0),
            Err(ValidationError::TemperatureOutOfRange(-101.0))
        );
        assert!(validate_temperature(101.0).is_err());
        assert!(validate_temperature(100.000_1).is_err());
    }

    #[test]
    fn test_non_finite_temperature() {
        assert!(validate_temperature(f64::NAN).is_err());
        assert!(validate_temperature(f64::INFINITY).is_err());
        assert!(validate_temperature(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_text_lengths() {
        let mut draft = NewReading::new(20.0);
        draft.location = Some("x".repeat(LOCATION_MAX_CHARS));
        draft.notes = Some("y".repeat(NOTES_MAX_CHARS));
        assert!(validate_new_reading(&draft).is_ok());

        draft.location = Some("x".repeat(LOCATION_MAX_CHARS + 1));
        assert_eq!(
            validate_new_reading(&draft),
            Err(ValidationError::TooLong {
                field: "location",
                max: LOCATION_MAX_CHARS
            })
        );
    }

    #[test]
    fn test_temperature_checked_first() {
        let draft = NewReading {
            temperature_c: 150.0,
            location: Some("x".repeat(1000)),
            notes: None,
        };
        assert_eq!(
            validate_new_reading(&draft),
            Err(ValidationError::TemperatureOutOfRange(150.0))
        );
    }

    #[test]
    fn test_multibyte_characters_count_once() {
        let mut draft = NewReading::new(20.0);
        draft.notes = Some("°".repeat(NOTES_MAX_CHARS));
        assert!(validate_new_reading(&draft).is_ok());
    }
}
