use crate::domain::models::AssessmentInput;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum InputError {
    #[error("{0} must be a finite number")]
    NonFiniteValue(&'static str),
    #[error("wind speed cannot be negative: {0}")]
    NegativeWindSpeed(f64),
    #[error("hours to landfall cannot be negative: {0}")]
    NegativeHoursToLandfall(f64),
    #[error("household size must be at least 1")]
    EmptyHousehold,
}

pub fn validate_family_size(family_size: u32) -> Result<(), InputError> {
    if family_size == 0 {
        return Err(InputError::EmptyHousehold);
    }
    Ok(())
}

/// Front-end guard; the scoring functions themselves accept anything.
pub fn validate_input(input: &AssessmentInput) -> Result<(), InputError> {
    if !input.wind_speed.is_finite() {
        return Err(InputError::NonFiniteValue("wind speed"));
    }
    if !input.hours_to_landfall.is_finite() {
        return Err(InputError::NonFiniteValue("hours to landfall"));
    }
    if input.wind_speed < 0.0 {
        return Err(InputError::NegativeWindSpeed(input.wind_speed));
    }
    if input.hours_to_landfall < 0.0 {
        return Err(InputError::NegativeHoursToLandfall(input.hours_to_landfall));
    }
    validate_family_size(input.family_size)
}
