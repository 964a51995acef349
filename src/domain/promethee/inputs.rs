//! Input bundle and its validated form.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::domain::foundation::{CriterionId, EntityId, ValidationError};

use super::{
    ComparisonMode, Criterion, CriterionSpec, FunctionSelection, InteractionEffects,
    InteractionSpec, OperatingMode, PrometheeError, ZFunction,
};

/// Everything a preference computation needs, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputBundle {
    #[serde(default)]
    pub comparison: ComparisonMode,
    #[serde(default)]
    pub operating_mode: OperatingMode,
    #[serde(default)]
    pub generalised_criterion: FunctionSelection,
    #[serde(default)]
    pub z_function: ZFunction,
    pub criteria: Vec<CriterionSpec>,
    pub alternatives: Vec<EntityId>,
    #[serde(default)]
    pub profiles: Vec<EntityId>,
    /// Evaluations of alternatives and profiles, keyed by entity then criterion.
    pub performance_table: HashMap<EntityId, HashMap<CriterionId, f64>>,
    #[serde(default)]
    pub interactions: Vec<InteractionSpec>,
}

impl InputBundle {
    /// Creates a builder for constructing an input bundle.
    pub fn builder() -> InputBundleBuilder {
        InputBundleBuilder::new()
    }

    /// Validates the bundle and sorts its identifiers.
    ///
    /// # Errors
    ///
    /// Returns the first configuration error found; see [`PrometheeError`].
    pub fn validate(self) -> Result<PrometheeInputs, PrometheeError> {
        if self.criteria.is_empty() {
            return Err(ValidationError::empty_field("criteria").into());
        }
        if self.alternatives.is_empty() {
            return Err(ValidationError::empty_field("alternatives").into());
        }
        if self.comparison == ComparisonMode::Profiles && self.profiles.is_empty() {
            return Err(ValidationError::empty_field("profiles").into());
        }

        let mut entity_ids = HashSet::new();
        for id in self.alternatives.iter().chain(self.profiles.iter()) {
            if id.as_str().trim().is_empty() {
                return Err(ValidationError::empty_field("entity_id").into());
            }
            if !entity_ids.insert(id.clone()) {
                return Err(ValidationError::duplicate("entities", id.as_str()).into());
            }
        }

        let mut criterion_ids = HashSet::new();
        let mut criteria = Vec::with_capacity(self.criteria.len());
        for spec in self.criteria {
            if spec.id.as_str().trim().is_empty() {
                return Err(ValidationError::empty_field("criterion_id").into());
            }
            if !criterion_ids.insert(spec.id.clone()) {
                return Err(ValidationError::duplicate("criteria", spec.id.as_str()).into());
            }
            criteria.push(spec.validate(self.generalised_criterion, self.operating_mode)?);
        }
        criteria.sort_by(|a, b| a.id().cmp(b.id()));

        let alternatives = entities(self.alternatives, &criteria, &self.performance_table)?;
        let profiles = match self.comparison {
            ComparisonMode::Alternatives => Vec::new(),
            ComparisonMode::Profiles => {
                entities(self.profiles, &criteria, &self.performance_table)?
            }
        };

        if self.operating_mode == OperatingMode::ReinforcedPreference
            && !self.interactions.is_empty()
        {
            return Err(ValidationError::invalid_format(
                "interactions",
                "interaction effects are not supported in reinforced_preference mode",
            )
            .into());
        }
        let interactions = InteractionEffects::from_specs(self.interactions, &criteria)?;

        Ok(PrometheeInputs {
            comparison: self.comparison,
            operating_mode: self.operating_mode,
            z_function: self.z_function,
            criteria,
            alternatives,
            profiles,
            interactions,
        })
    }
}

fn entities(
    mut ids: Vec<EntityId>,
    criteria: &[Criterion],
    performance_table: &HashMap<EntityId, HashMap<CriterionId, f64>>,
) -> Result<Vec<Entity>, PrometheeError> {
    ids.sort();
    ids.into_iter()
        .map(|id| -> Result<Entity, PrometheeError> {
            let field = format!("performance_table[{}]", id);
            let row = performance_table
                .get(&id)
                .ok_or_else(|| ValidationError::missing_value("performance_table", id.as_str()))?;
            let evaluations = criteria
                .iter()
                .map(|criterion| {
                    let value = row
                        .get(criterion.id())
                        .copied()
                        .ok_or_else(|| ValidationError::missing_value(&field, criterion.id().as_str()))?;
                    ValidationError::ensure_finite(format!("{}.{}", field, criterion.id()), value)
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Entity { id, evaluations })
        })
        .collect()
}

/// An alternative or profile with one evaluation per criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    id: EntityId,
    evaluations: Vec<f64>,
}

impl Entity {
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    /// Evaluations ordered like the criteria of the owning inputs.
    pub fn evaluations(&self) -> &[f64] {
        &self.evaluations
    }
}

/// A validated input bundle. Only [`InputBundle::validate`] creates one.
#[derive(Debug, Clone, PartialEq)]
pub struct PrometheeInputs {
    comparison: ComparisonMode,
    operating_mode: OperatingMode,
    z_function: ZFunction,
    criteria: Vec<Criterion>,
    alternatives: Vec<Entity>,
    profiles: Vec<Entity>,
    interactions: InteractionEffects,
}

impl PrometheeInputs {
    pub fn comparison(&self) -> ComparisonMode {
        self.comparison
    }

    pub fn operating_mode(&self) -> OperatingMode {
        self.operating_mode
    }

    pub fn z_function(&self) -> ZFunction {
        self.z_function
    }

    /// Criteria sorted by id.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Criterion ids sorted ascending.
    pub fn criterion_ids(&self) -> Vec<CriterionId> {
        self.criteria.iter().map(|c| c.id().clone()).collect()
    }

    /// Alternatives sorted by id.
    pub fn alternatives(&self) -> &[Entity] {
        &self.alternatives
    }

    /// Profiles sorted by id; empty when comparing alternatives only.
    pub fn profiles(&self) -> &[Entity] {
        &self.profiles
    }

    pub fn interactions(&self) -> &InteractionEffects {
        &self.interactions
    }

    /// Ordered pairs to compare, in computation order.
    ///
    /// Alternatives mode yields the full alternatives cross product. Profiles
    /// mode yields, for every alternative and profile, the alternative-profile
    /// pair followed by its reverse, then the full profiles cross product.
    /// Result matrices regroup these pairs row by row.
    pub fn comparison_pairs(&self) -> Vec<(&Entity, &Entity)> {
        match self.comparison {
            ComparisonMode::Alternatives => cross(&self.alternatives, &self.alternatives),
            ComparisonMode::Profiles => {
                let mut pairs = Vec::with_capacity(
                    2 * self.alternatives.len() * self.profiles.len()
                        + self.profiles.len() * self.profiles.len(),
                );
                for alternative in &self.alternatives {
                    for profile in &self.profiles {
                        pairs.push((alternative, profile));
                        pairs.push((profile, alternative));
                    }
                }
                pairs.extend(cross(&self.profiles, &self.profiles));
                pairs
            }
        }
    }
}

fn cross<'a>(rows: &'a [Entity], columns: &'a [Entity]) -> Vec<(&'a Entity, &'a Entity)> {
    rows.iter()
        .flat_map(|row| columns.iter().map(move |column| (row, column)))
        .collect()
}

/// Builder for constructing InputBundle instances.
#[derive(Debug, Default)]
pub struct InputBundleBuilder {
    comparison: ComparisonMode,
    operating_mode: OperatingMode,
    generalised_criterion: FunctionSelection,
    z_function: ZFunction,
    criteria: Vec<CriterionSpec>,
    alternatives: Vec<EntityId>,
    profiles: Vec<EntityId>,
    performance_table: HashMap<EntityId, HashMap<CriterionId, f64>>,
    interactions: Vec<InteractionSpec>,
}

impl InputBundleBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the comparison mode.
    pub fn comparison(mut self, comparison: ComparisonMode) -> Self {
        self.comparison = comparison;
        self
    }

    /// Sets the operating mode.
    pub fn operating_mode(mut self, mode: OperatingMode) -> Self {
        self.operating_mode = mode;
        self
    }

    /// Sets the program-wide generalised criterion selection.
    pub fn generalised_criterion(mut self, selection: FunctionSelection) -> Self {
        self.generalised_criterion = selection;
        self
    }

    /// Sets the combination function for interactions.
    pub fn z_function(mut self, z_function: ZFunction) -> Self {
        self.z_function = z_function;
        self
    }

    /// Adds a criterion.
    pub fn criterion(mut self, spec: CriterionSpec) -> Self {
        self.criteria.push(spec);
        self
    }

    /// Adds an alternative with its evaluations.
    pub fn alternative(mut self, id: EntityId, evaluations: Vec<(CriterionId, f64)>) -> Self {
        self.performance_table
            .insert(id.clone(), evaluations.into_iter().collect());
        self.alternatives.push(id);
        self
    }

    /// Adds a profile with its evaluations.
    pub fn profile(mut self, id: EntityId, evaluations: Vec<(CriterionId, f64)>) -> Self {
        self.performance_table
            .insert(id.clone(), evaluations.into_iter().collect());
        self.profiles.push(id);
        self
    }

    /// Adds an interaction coefficient.
    pub fn interaction(mut self, spec: InteractionSpec) -> Self {
        self.interactions.push(spec);
        self
    }

    /// Builds the input bundle.
    pub fn build(self) -> InputBundle {
        InputBundle {
            comparison: self.comparison,
            operating_mode: self.operating_mode,
            generalised_criterion: self.generalised_criterion,
            z_function: self.z_function,
            criteria: self.criteria,
            alternatives: self.alternatives,
            profiles: self.profiles,
            performance_table: self.performance_table,
            interactions: self.interactions,
        }
    }
}
