//! Service layer containing the assessment engine and side-effect helpers.
//!
//! ## Service map
//! - `risk.rs` — additive score and Low/Medium/High categorization.
//! - `advice.rs` — leave-time recommendation per category.
//! - `packing.rs` — ordered packing checklist.
//! - `summary.rs` — orchestrator: reasons, narrative, packing list.
//! - `validation.rs` — input guard for front ends.
//! - `scenarios.rs` — TOML scenario files evaluated in one run.
//! - `config.rs` — config file loading (form defaults, logging).
//! - `resources.rs` — official emergency resources.
//! - `telemetry.rs` — tracing subscriber setup.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Engine functions (`risk`, `advice`, `packing`, `summary`) are pure.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod advice;
pub mod config;
pub mod output;
pub mod packing;
pub mod resources;
pub mod risk;
pub mod scenarios;
pub mod summary;
pub mod telemetry;
pub mod validation;
