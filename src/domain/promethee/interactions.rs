//! Pairwise interaction effects between criteria.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::domain::foundation::{CriterionId, ValidationError};

use super::{Criterion, PrometheeError};

/// Kind of interaction between two criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Strengthening,
    Weakening,
    Antagonistic,
}

impl InteractionKind {
    /// Returns the external label.
    pub fn label(&self) -> &'static str {
        match self {
            InteractionKind::Strengthening => "strengthening",
            InteractionKind::Weakening => "weakening",
            InteractionKind::Antagonistic => "antagonistic",
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One interaction coefficient as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionSpec {
    pub kind: InteractionKind,
    pub row: CriterionId,
    pub column: CriterionId,
    pub coefficient: f64,
}

impl InteractionSpec {
    /// Creates an interaction spec.
    pub fn new(kind: InteractionKind, row: CriterionId, column: CriterionId, coefficient: f64) -> Self {
        Self {
            kind,
            row,
            column,
            coefficient,
        }
    }
}

/// A validated interaction, with criterion positions resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interaction {
    pub row: CriterionId,
    pub column: CriterionId,
    #[serde(skip)]
    pub(crate) row_index: usize,
    #[serde(skip)]
    pub(crate) column_index: usize,
    pub coefficient: f64,
}

/// Interaction coefficients grouped by kind, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InteractionEffects {
    strengthening: Vec<Interaction>,
    weakening: Vec<Interaction>,
    antagonistic: Vec<Interaction>,
}

impl InteractionEffects {
    /// Validates interaction specs against the (sorted) criteria.
    ///
    /// Both criteria must exist and differ, coefficients must be finite, and
    /// a pair may appear at most once per kind.
    pub fn from_specs(
        specs: Vec<InteractionSpec>,
        criteria: &[Criterion],
    ) -> Result<Self, PrometheeError> {
        let mut effects = InteractionEffects::default();
        let mut seen: HashSet<(InteractionKind, CriterionId, CriterionId)> = HashSet::new();

        for spec in specs {
            let field = format!("interactions.{}[{},{}]", spec.kind, spec.row, spec.column);
            let row_index = position(criteria, &spec.row)
                .ok_or_else(|| ValidationError::invalid_format(&field, "unknown row criterion"))?;
            let column_index = position(criteria, &spec.column)
                .ok_or_else(|| ValidationError::invalid_format(&field, "unknown column criterion"))?;
            if row_index == column_index {
                return Err(ValidationError::invalid_format(
                    &field,
                    "an interaction needs two distinct criteria",
                )
                .into());
            }
            let coefficient = ValidationError::ensure_finite(&field, spec.coefficient)?;
            if !seen.insert((spec.kind, spec.row.clone(), spec.column.clone())) {
                return Err(ValidationError::duplicate(
                    format!("interactions.{}", spec.kind),
                    format!("{},{}", spec.row, spec.column),
                )
                .into());
            }

            let interaction = Interaction {
                row: spec.row,
                column: spec.column,
                row_index,
                column_index,
                coefficient,
            };
            match spec.kind {
                InteractionKind::Strengthening => effects.strengthening.push(interaction),
                InteractionKind::Weakening => effects.weakening.push(interaction),
                InteractionKind::Antagonistic => effects.antagonistic.push(interaction),
            }
        }

        Ok(effects)
    }

    pub fn strengthening(&self) -> &[Interaction] {
        &self.strengthening
    }

    pub fn weakening(&self) -> &[Interaction] {
        &self.weakening
    }

    pub fn antagonistic(&self) -> &[Interaction] {
        &self.antagonistic
    }

    /// Returns true when no interaction of any kind is configured.
    pub fn is_empty(&self) -> bool {
        self.strengthening.is_empty() && self.weakening.is_empty() && self.antagonistic.is_empty()
    }

    /// Total number of configured interactions.
    pub fn len(&self) -> usize {
        self.strengthening.len() + self.weakening.len() + self.antagonistic.len()
    }

    /// Sum of absolute weakening and antagonistic coefficients bearing on
    /// each criterion, indexed like `criteria`; `None` for criteria no such
    /// interaction touches.
    ///
    /// Weakening counts for both of its criteria; antagonistic counts for
    /// its row criterion only. Strengthening is not bounded.
    pub fn exposure(&self, criteria_count: usize) -> Vec<Option<f64>> {
        let mut exposure = vec![None; criteria_count];
        let mut add = |index: usize, coefficient: f64| {
            let slot: &mut Option<f64> = &mut exposure[index];
            *slot = Some(slot.unwrap_or(0.0) + coefficient.abs());
        };
        for interaction in &self.weakening {
            add(interaction.row_index, interaction.coefficient);
        }
        for interaction in &self.weakening {
            add(interaction.column_index, interaction.coefficient);
        }
        for interaction in &self.antagonistic {
            add(interaction.row_index, interaction.coefficient);
        }
        exposure
    }

    /// Checks the net-balance condition: every criterion touched by a
    /// weakening or antagonistic interaction must have a weight strictly
    /// above its exposure, even when that exposure is zero.
    pub fn check_net_balance(&self, criteria: &[Criterion]) -> Result<(), PrometheeError> {
        let exposure = self.exposure(criteria.len());
        for (criterion, exposure) in criteria.iter().zip(exposure) {
            let Some(exposure) = exposure else {
                continue;
            };
            if criterion.weight() - exposure <= 0.0 {
                return Err(PrometheeError::PositiveNetBalance {
                    criterion: criterion.id().clone(),
                    weight: criterion.weight(),
                    exposure,
                });
            }
        }
        Ok(())
    }
}

fn position(criteria: &[Criterion], id: &CriterionId) -> Option<usize> {
    criteria.iter().position(|c| c.id() == id)
}
