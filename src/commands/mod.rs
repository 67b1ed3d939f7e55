//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `settings.rs` — `config show` / `config path`.
//! - `runtime.rs` — assess/risk/leave-time/pack/scenarios/resources.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate assessment logic to `stormsense::services`.
//! - Keep behavior and output schema stable.

pub mod runtime;
pub mod settings;

pub use runtime::handle_runtime_commands;
pub use settings::handle_config_commands;
