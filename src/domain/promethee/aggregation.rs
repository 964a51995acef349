//! Interaction Aggregator - total preference index with criterion interactions.

use tracing::debug;

use crate::domain::foundation::EntityId;

use super::{
    Interaction, InteractionEffects, PartialPreferenceMatrix, PreferenceMatrix, PrometheeError,
    PrometheeInputs, ZFunction,
};

/// Aggregates partial preferences into total preference indices.
pub struct InteractionAggregator;

impl InteractionAggregator {
    /// Computes the total preference index of every comparison pair.
    ///
    /// # Algorithm
    /// ```text
    /// base = Σ w_i·π_i(a,b)
    /// S    = Σ Z(π_i(a,b), π_j(a,b))·c_ij   over strengthening pairs
    /// W    = Σ Z(π_i(a,b), π_j(a,b))·c_ij   over weakening pairs
    /// A    = Σ Z(π_i(a,b), π_j(b,a))·c_ij   over antagonistic pairs
    /// P(a,b) = (base + S + W − A) / (Σ w_i + S + W − A)
    /// ```
    ///
    /// The net-balance condition is checked once before any pair is computed.
    /// Results are not clamped; a zero denominator yields a non-finite value.
    ///
    /// # Errors
    /// - `PositiveNetBalance` when a criterion's weakening and antagonistic
    ///   exposure reaches its weight
    /// - `MissingPair` when `partials` was not built from `inputs`
    pub fn aggregate(
        inputs: &PrometheeInputs,
        partials: &PartialPreferenceMatrix,
    ) -> Result<PreferenceMatrix, PrometheeError> {
        let criteria = inputs.criteria();
        let effects = inputs.interactions();
        effects.check_net_balance(criteria)?;

        let weights: Vec<f64> = criteria.iter().map(|c| c.weight()).collect();
        let total_weight: f64 = weights.iter().sum();
        let z = inputs.z_function();

        let mut preferences = PreferenceMatrix::new();
        for (a, b) in inputs.comparison_pairs() {
            let forward = pair_values(partials, a.id(), b.id())?;
            let reverse = if effects.antagonistic().is_empty() {
                forward
            } else {
                pair_values(partials, b.id(), a.id())?
            };

            let base: f64 = weights.iter().zip(forward).map(|(w, pi)| w * pi).sum();
            let interaction = interaction_sum(effects, z, forward, reverse);
            let value = (base + interaction) / (total_weight + interaction);
            preferences.insert(a.id(), b.id(), value);
        }

        debug!(
            pairs = preferences.len(),
            interactions = effects.len(),
            z_function = %z,
            "Total preferences aggregated"
        );
        Ok(preferences)
    }
}

/// Net interaction term `S + W − A` for one pair.
fn interaction_sum(
    effects: &InteractionEffects,
    z: ZFunction,
    forward: &[f64],
    reverse: &[f64],
) -> f64 {
    let term = |interaction: &Interaction, other: &[f64]| {
        z.apply(forward[interaction.row_index], other[interaction.column_index])
            * interaction.coefficient
    };

    let strengthening: f64 = effects.strengthening().iter().map(|i| term(i, forward)).sum();
    let weakening: f64 = effects.weakening().iter().map(|i| term(i, forward)).sum();
    let antagonistic: f64 = effects.antagonistic().iter().map(|i| term(i, reverse)).sum();

    strengthening + weakening - antagonistic
}

pub(crate) fn pair_values<'a>(
    partials: &'a PartialPreferenceMatrix,
    from: &EntityId,
    to: &EntityId,
) -> Result<&'a [f64], PrometheeError> {
    partials
        .values(from.as_str(), to.as_str())
        .ok_or_else(|| PrometheeError::MissingPair {
            from: from.clone(),
            to: to.clone(),
        })
}
