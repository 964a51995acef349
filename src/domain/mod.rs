//! Domain layer containing the preference computation.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, validation and domain errors)
//! - `promethee` - Thresholds, preference functions, aggregation and discordance

pub mod foundation;
pub mod promethee;
