//! Partial Preference Builder - one preference degree per pair and criterion.

use tracing::debug;

use super::{PartialPreferenceMatrix, PrometheeInputs};

/// Builds partial preference matrices from validated inputs.
pub struct PartialPreferenceBuilder;

impl PartialPreferenceBuilder {
    /// Computes `π_j(a, b)` for every comparison pair and criterion.
    ///
    /// # Algorithm
    /// For each ordered pair from [`PrometheeInputs::comparison_pairs`] and each
    /// criterion `j`: `π_j(a, b) = F_j(d_j(a, b))`, with thresholds resolved
    /// for that pair.
    ///
    /// # Edge Cases
    /// - A pair of an entity with itself gets 0 on every criterion
    /// - Pairs are computed in comparison order; the matrix iterates them row by row
    pub fn build(inputs: &PrometheeInputs) -> PartialPreferenceMatrix {
        let criteria = inputs.criteria();
        let mut matrix = PartialPreferenceMatrix::new(inputs.criterion_ids());

        for (a, b) in inputs.comparison_pairs() {
            let values = criteria
                .iter()
                .zip(a.evaluations().iter().zip(b.evaluations()))
                .map(|(criterion, (&ga, &gb))| criterion.preference(ga, gb))
                .collect();
            matrix.insert(a.id(), b.id(), values);
        }

        debug!(
            pairs = matrix.len(),
            criteria = criteria.len(),
            comparison = %inputs.comparison(),
            "Partial preferences computed"
        );
        matrix
    }
}
