//! PROMETHEE Module - Pure preference computation over validated inputs.
//!
//! # Components
//!
//! - `Threshold` - Constant or linear thresholds resolved per compared pair
//! - `GeneralisedCriterion` - The six preference-degree shapes
//! - `InputBundle` / `PrometheeInputs` - Raw inputs and their validated form
//! - `PartialPreferenceBuilder` - One degree per pair and criterion
//! - `InteractionAggregator` - Total preference with interaction effects
//! - `ReinforcedAggregator` - Total preference with reinforced weights
//! - `DiscordanceCalculator` - Partial and overall discordance
//! - `PrometheeEngine` - Runs the whole pipeline
//!
//! # Design Philosophy
//!
//! Every stage takes its inputs by reference and returns a freshly built
//! result. Nothing here performs I/O; reading bundles and writing results
//! happens behind the storage ports.

mod aggregation;
mod criterion;
mod discordance;
mod engine;
mod errors;
mod generalised_criterion;
mod inputs;
mod interactions;
mod matrix;
mod parameters;
mod partial_preferences;
mod reinforced;
mod threshold;

// Re-export all public types
pub use aggregation::InteractionAggregator;
pub use criterion::{Criterion, CriterionSpec};
pub use discordance::{DiscordanceCalculator, DiscordanceMatrices};
pub use engine::{DiscordanceResult, PrometheeEngine, PrometheeResult};
pub use errors::PrometheeError;
pub use generalised_criterion::GeneralisedCriterion;
pub use inputs::{Entity, InputBundle, InputBundleBuilder, PrometheeInputs};
pub use interactions::{Interaction, InteractionEffects, InteractionKind, InteractionSpec};
pub use matrix::{
    CriterionMatrix, DiscordanceMatrix, PairMatrix, PartialDiscordanceMatrix,
    PartialPreferenceMatrix, PreferenceMatrix,
};
pub use parameters::{
    ComparisonMode, FunctionSelection, OperatingMode, PreferenceDirection, ZFunction,
};
pub use partial_preferences::PartialPreferenceBuilder;
pub use reinforced::ReinforcedAggregator;
pub use threshold::{CriterionThresholds, ResolvedThresholds, Threshold, ThresholdKind};
