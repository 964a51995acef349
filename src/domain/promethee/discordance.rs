//! Discordance Calculator - how strongly each pair's reverse preference
//! speaks against it.

use serde::Serialize;
use tracing::debug;

use super::aggregation::pair_values;
use super::{
    DiscordanceMatrix, PartialDiscordanceMatrix, PartialPreferenceMatrix, PreferenceMatrix,
    PrometheeError, PrometheeInputs,
};

/// Partial and overall discordance for every comparison pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscordanceMatrices {
    pub partial: PartialDiscordanceMatrix,
    pub overall: DiscordanceMatrix,
}

/// Discordance computation functions.
pub struct DiscordanceCalculator;

impl DiscordanceCalculator {
    /// Computes partial and overall discordance.
    ///
    /// # Algorithm
    /// - `D_j(a,b) = π_j(b,a)`
    /// - `D(a,b) = 1 − Π_j (1 − D_j(a,b))`
    pub fn compute(
        inputs: &PrometheeInputs,
        partials: &PartialPreferenceMatrix,
    ) -> Result<DiscordanceMatrices, PrometheeError> {
        let mut partial = PartialDiscordanceMatrix::new(inputs.criterion_ids());
        let mut overall = DiscordanceMatrix::new();

        for (a, b) in inputs.comparison_pairs() {
            let reverse = pair_values(partials, b.id(), a.id())?;
            let concordance: f64 = reverse.iter().map(|d| 1.0 - d).product();
            partial.insert(a.id(), b.id(), reverse.to_vec());
            overall.insert(a.id(), b.id(), 1.0 - concordance);
        }

        debug!(pairs = overall.len(), "Discordance computed");
        Ok(DiscordanceMatrices { partial, overall })
    }

    /// Caps each preference by its discordance: `P'(a,b) = P(a,b)·(1 − D(a,b))`.
    ///
    /// Pairs without a discordance value are reported as `MissingPair`.
    pub fn apply(
        preferences: &PreferenceMatrix,
        discordance: &DiscordanceMatrix,
    ) -> Result<PreferenceMatrix, PrometheeError> {
        let mut adjusted = PreferenceMatrix::new();
        for (from, to, preference) in preferences.iter() {
            let d = discordance.get(from.as_str(), to.as_str()).ok_or_else(|| {
                PrometheeError::MissingPair {
                    from: from.clone(),
                    to: to.clone(),
                }
            })?;
            adjusted.insert(from, to, preference * (1.0 - d));
        }
        Ok(adjusted)
    }
}
