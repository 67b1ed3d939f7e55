use crate::domain::constants::{LEAVE_HIGH, LEAVE_LOW, LEAVE_MEDIUM};
use crate::domain::models::RiskCategory;

pub fn recommend_leave_time(risk: RiskCategory) -> &'static str {
    match risk {
        RiskCategory::High => LEAVE_HIGH,
        RiskCategory::Medium => LEAVE_MEDIUM,
        RiskCategory::Low => LEAVE_LOW,
    }
}
