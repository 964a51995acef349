//! Engine facade - runs the full preference pipeline on validated inputs.

use serde::Serialize;
use tracing::{debug, info};

use super::{
    DiscordanceCalculator, DiscordanceMatrices, DiscordanceMatrix, InteractionAggregator,
    OperatingMode, PartialDiscordanceMatrix, PartialPreferenceBuilder, PartialPreferenceMatrix,
    PreferenceMatrix, PrometheeError, PrometheeInputs, ReinforcedAggregator,
};

/// Discordance outputs, present when requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscordanceResult {
    pub partial: PartialDiscordanceMatrix,
    pub overall: DiscordanceMatrix,
    /// Total preferences capped by discordance.
    pub preferences: PreferenceMatrix,
}

/// Everything one computation produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrometheeResult {
    pub partial_preferences: PartialPreferenceMatrix,
    pub preferences: PreferenceMatrix,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discordance: Option<DiscordanceResult>,
}

/// Stateless entry point of the preference engine.
pub struct PrometheeEngine;

impl PrometheeEngine {
    /// Computes partial and total preferences.
    ///
    /// Normal mode checks net balance before any partial preference is
    /// built, then aggregates with interaction effects; reinforced mode
    /// amplifies weights of gaps beyond the reinforced-preference threshold.
    pub fn compute(inputs: &PrometheeInputs) -> Result<PrometheeResult, PrometheeError> {
        info!(
            criteria = inputs.criteria().len(),
            alternatives = inputs.alternatives().len(),
            profiles = inputs.profiles().len(),
            comparison = %inputs.comparison(),
            mode = %inputs.operating_mode(),
            "Computing preferences"
        );

        if inputs.operating_mode() == OperatingMode::Normal {
            inputs.interactions().check_net_balance(inputs.criteria())?;
        }

        let partial_preferences = PartialPreferenceBuilder::build(inputs);
        let preferences = match inputs.operating_mode() {
            OperatingMode::Normal => InteractionAggregator::aggregate(inputs, &partial_preferences)?,
            OperatingMode::ReinforcedPreference => {
                ReinforcedAggregator::aggregate(inputs, &partial_preferences)?
            }
        };

        debug!(pairs = preferences.len(), "Preferences computed");
        Ok(PrometheeResult {
            partial_preferences,
            preferences,
            discordance: None,
        })
    }

    /// Computes preferences, then discordance and discordance-capped
    /// preferences.
    pub fn compute_with_discordance(
        inputs: &PrometheeInputs,
    ) -> Result<PrometheeResult, PrometheeError> {
        let mut result = Self::compute(inputs)?;

        let DiscordanceMatrices { partial, overall } =
            DiscordanceCalculator::compute(inputs, &result.partial_preferences)?;
        let preferences = DiscordanceCalculator::apply(&result.preferences, &overall)?;

        debug!(pairs = overall.len(), "Discordance applied");
        result.discordance = Some(DiscordanceResult {
            partial,
            overall,
            preferences,
        });
        Ok(result)
    }
}
