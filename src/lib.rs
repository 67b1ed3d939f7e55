//! Storm evacuation risk assessment.
//!
//! The engine is a set of pure functions: [`compute_risk`] scores a household against a
//! forecast, [`recommend_leave_time`] and [`generate_packing_list`] turn that into advice,
//! and [`generate_summary`] assembles everything a front end needs to display.
//!
//! ```
//! use stormsense::{generate_summary, AssessmentInput, RiskCategory};
//!
//! let input = AssessmentInput::new(80.0, 20.0, 3, false).with_pets(true);
//! let result = generate_summary(&input);
//! assert_eq!(result.risk, RiskCategory::High);
//! assert_eq!(result.packing_list.len(), 6);
//! ```

pub mod domain;
pub mod services;

pub use domain::models::{AssessmentInput, AssessmentResult, Reason, RiskCategory};
pub use services::advice::recommend_leave_time;
pub use services::packing::generate_packing_list;
pub use services::risk::{compute_risk, risk_score};
pub use services::summary::generate_summary;
