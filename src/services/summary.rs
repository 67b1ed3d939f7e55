use crate::domain::constants::{DISCLAIMER, LARGE_HOUSEHOLD_SIZE};
use crate::domain::models::{AssessmentInput, AssessmentResult, Reason, RiskCategory};
use crate::services::advice::recommend_leave_time;
use crate::services::packing::generate_packing_list;
use crate::services::risk::{categorize, risk_score};

/// Household factors present in `input`, in narrative order.
pub fn household_reasons(input: &AssessmentInput) -> Vec<Reason> {
    let mut reasons = Vec::new();
    if input.family_size > LARGE_HOUSEHOLD_SIZE {
        reasons.push(Reason::LargeHousehold);
    }
    if !input.has_car {
        reasons.push(Reason::NoCar);
    }
    if input.has_elderly_or_disabled {
        reasons.push(Reason::ElderlyOrDisabled);
    }
    if input.has_pets {
        reasons.push(Reason::Pets);
    }
    reasons
}

fn people_text(family_size: u32) -> String {
    if family_size == 1 {
        "1 person".to_string()
    } else {
        format!("{} people", family_size)
    }
}

fn reasons_clause(reasons: &[Reason]) -> Option<String> {
    if reasons.is_empty() {
        return None;
    }
    let joined = reasons
        .iter()
        .map(Reason::phrase)
        .collect::<Vec<_>>()
        .join(" and ");
    Some(format!("This rating reflects that you have {}.", joined))
}

fn narrative(
    input: &AssessmentInput,
    risk: RiskCategory,
    recommendation: &str,
    reasons: &[Reason],
) -> String {
    let car_text = if input.has_car { "a car" } else { "no car" };
    let mut parts = vec![
        format!(
            "Based on wind speeds of {} mph and an estimated landfall in {} hours, \
             your household of {} with {} is at {} risk.",
            input.wind_speed,
            input.hours_to_landfall,
            people_text(input.family_size),
            car_text,
            risk
        ),
        recommendation.to_string(),
    ];
    parts.extend(reasons_clause(reasons));
    parts.push(DISCLAIMER.to_string());
    parts.join(" ")
}

/// Full assessment: category, narrative and packing list for one household.
#[tracing::instrument(level = "debug", skip_all, fields(wind = input.wind_speed, hours = input.hours_to_landfall))]
pub fn generate_summary(input: &AssessmentInput) -> AssessmentResult {
    let score = risk_score(input);
    let risk = categorize(score);
    let recommendation = recommend_leave_time(risk);
    let reasons = household_reasons(input);
    let summary = narrative(input, risk, recommendation, &reasons);
    let packing_list = generate_packing_list(input.family_size, input.has_pets);
    tracing::debug!(%risk, score, reasons = reasons.len(), "assessment ready");

    AssessmentResult {
        risk,
        score,
        recommendation: recommendation.to_string(),
        reasons,
        summary,
        packing_list,
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_summary, household_reasons};
    use crate::domain::models::{AssessmentInput, Reason, RiskCategory};

    #[test]
    fn reasons_follow_fixed_order() {
        let input = AssessmentInput::new(50.0, 30.0, 6, false)
            .with_elderly_or_disabled(true)
            .with_pets(true);
        assert_eq!(
            household_reasons(&input),
            vec![
                Reason::LargeHousehold,
                Reason::NoCar,
                Reason::ElderlyOrDisabled,
                Reason::Pets
            ]
        );
    }

    #[test]
    fn summary_for_high_risk_household() {
        let input = AssessmentInput::new(80.0, 20.0, 3, false).with_pets(true);
        let result = generate_summary(&input);
        assert_eq!(result.risk, RiskCategory::High);
        assert_eq!(result.score, 5.5);
        assert_eq!(
            result.summary,
            "Based on wind speeds of 80 mph and an estimated landfall in 20 hours, \
             your household of 3 people with no car is at High risk. \
             Leave within the next 6 hours. \
             This rating reflects that you have no car and pets. \
             Always follow instructions from local officials and the National Hurricane Center."
        );
        assert_eq!(result.packing_list.len(), 6);
    }

    #[test]
    fn reasons_clause_omitted_when_nothing_applies() {
        let input = AssessmentInput::new(40.0, 48.0, 2, true);
        let result = generate_summary(&input);
        assert_eq!(result.risk, RiskCategory::Low);
        assert!(result.reasons.is_empty());
        assert!(!result.summary.contains("reflects"));
        assert!(result
            .summary
            .contains("Monitor local alerts, but evacuation isn’t urgent yet."));
        assert!(result.summary.ends_with("National Hurricane Center."));
    }

    #[test]
    fn negative_zero_reads_as_zero() {
        let input = AssessmentInput::new(-0.0, -0.0, 2, true);
        assert!(input.wind_speed.is_sign_positive());
        let result = generate_summary(&input);
        assert!(result
            .summary
            .starts_with("Based on wind speeds of 0 mph and an estimated landfall in 0 hours,"));
    }

    #[test]
    fn single_person_wording() {
        let input = AssessmentInput::new(60.5, 36.0, 1, true).with_elderly_or_disabled(true);
        let result = generate_summary(&input);
        assert!(result
            .summary
            .contains("wind speeds of 60.5 mph and an estimated landfall in 36 hours"));
        assert!(result.summary.contains("household of 1 person with a car"));
        assert!(result
            .summary
            .contains("This rating reflects that you have an elderly or disabled member."));
        assert_eq!(result.risk, RiskCategory::Medium);
        assert_eq!(result.recommendation, "Prepare to leave within 12–18 hours.");
    }
}
