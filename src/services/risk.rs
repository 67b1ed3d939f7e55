use crate::domain::constants::{
    ELDERLY_OR_DISABLED_POINTS, HIGH_RISK_SCORE, HURRICANE_FORCE_MPH, HURRICANE_FORCE_POINTS,
    IMMINENT_LANDFALL_HOURS, IMMINENT_LANDFALL_POINTS, LARGE_HOUSEHOLD_POINTS,
    LARGE_HOUSEHOLD_SIZE, MEDIUM_RISK_SCORE, NEAR_LANDFALL_HOURS, NEAR_LANDFALL_POINTS,
    NO_CAR_POINTS, PETS_POINTS, STRONG_STORM_MPH, STRONG_STORM_POINTS,
};
use crate::domain::models::{AssessmentInput, RiskCategory};

fn wind_points(wind_speed: f64) -> f64 {
    if wind_speed >= HURRICANE_FORCE_MPH {
        HURRICANE_FORCE_POINTS
    } else if wind_speed >= STRONG_STORM_MPH {
        STRONG_STORM_POINTS
    } else {
        0.0
    }
}

fn landfall_points(hours_to_landfall: f64) -> f64 {
    if hours_to_landfall <= IMMINENT_LANDFALL_HOURS {
        IMMINENT_LANDFALL_POINTS
    } else if hours_to_landfall <= NEAR_LANDFALL_HOURS {
        NEAR_LANDFALL_POINTS
    } else {
        0.0
    }
}

fn household_points(input: &AssessmentInput) -> f64 {
    let mut points = 0.0;
    if input.family_size > LARGE_HOUSEHOLD_SIZE {
        points += LARGE_HOUSEHOLD_POINTS;
    }
    if !input.has_car {
        points += NO_CAR_POINTS;
    }
    if input.has_elderly_or_disabled {
        points += ELDERLY_OR_DISABLED_POINTS;
    }
    if input.has_pets {
        points += PETS_POINTS;
    }
    points
}

/// Additive evacuation score. Each wind/landfall group contributes only its highest band.
pub fn risk_score(input: &AssessmentInput) -> f64 {
    let wind = wind_points(input.wind_speed);
    let landfall = landfall_points(input.hours_to_landfall);
    let household = household_points(input);
    let score = wind + landfall + household;
    tracing::debug!(wind, landfall, household, score, "risk score");
    score
}

pub fn categorize(score: f64) -> RiskCategory {
    if score >= HIGH_RISK_SCORE {
        RiskCategory::High
    } else if score >= MEDIUM_RISK_SCORE {
        RiskCategory::Medium
    } else {
        RiskCategory::Low
    }
}

pub fn compute_risk(input: &AssessmentInput) -> RiskCategory {
    categorize(risk_score(input))
}
