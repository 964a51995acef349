//! Reinforced Aggregator - amplified weights for gaps beyond the
//! reinforced-preference threshold.

use tracing::debug;

use super::aggregation::pair_values;
use super::{PartialPreferenceMatrix, PreferenceMatrix, PrometheeError, PrometheeInputs};

/// Aggregates partial preferences in `reinforced_preference` mode.
pub struct ReinforcedAggregator;

impl ReinforcedAggregator {
    /// Computes the total preference index of every comparison pair.
    ///
    /// # Algorithm
    /// For each criterion `j` of pair `(a, b)`:
    /// - if `d_j(a,b) > rp_j`: add `w_j·ω_j` to both numerator and denominator
    /// - otherwise: add `w_j·π_j(a,b)` to the numerator and `w_j` to the
    ///   denominator
    ///
    /// `P(a,b) = numerator / denominator`.
    ///
    /// Criteria validated in normal mode carry no reinforcement factor and
    /// are never reinforced.
    pub fn aggregate(
        inputs: &PrometheeInputs,
        partials: &PartialPreferenceMatrix,
    ) -> Result<PreferenceMatrix, PrometheeError> {
        let criteria = inputs.criteria();
        let mut preferences = PreferenceMatrix::new();
        let mut reinforced_count = 0usize;

        for (a, b) in inputs.comparison_pairs() {
            let degrees = pair_values(partials, a.id(), b.id())?;
            let mut numerator = 0.0;
            let mut denominator = 0.0;

            for (j, criterion) in criteria.iter().enumerate() {
                let (ga, gb) = (a.evaluations()[j], b.evaluations()[j]);
                let weight = criterion.weight();
                match criterion.reinforcement_factor() {
                    Some(factor) if criterion.is_reinforced(ga, gb) => {
                        reinforced_count += 1;
                        numerator += weight * factor;
                        denominator += weight * factor;
                    }
                    _ => {
                        numerator += weight * degrees[j];
                        denominator += weight;
                    }
                }
            }

            preferences.insert(a.id(), b.id(), numerator / denominator);
        }

        debug!(
            pairs = preferences.len(),
            reinforced = reinforced_count,
            "Reinforced preferences aggregated"
        );
        Ok(preferences)
    }
}
