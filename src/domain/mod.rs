//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep assessment input/result records in one place.
//! - Keep every scoring threshold and fixed text in a single table so front ends never
//!   carry their own copy.
//!
//! ## Files
//! - `models.rs` — input record, risk category, result/report structs.
//! - `constants.rs` — scoring thresholds, weights, fixed advice text, official resources.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` outputs. Keep schema-impacting changes explicit
//! and synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
