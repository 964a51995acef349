//! Pairwise result matrices.
//!
//! Values are kept in one flat table per matrix, keyed by ordered entity
//! pair. Iteration is row by row: rows appear in the order their `from`
//! entity was first inserted, and each row lists its pairs in insertion
//! order.

use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};
use std::collections::HashMap;

use crate::domain::foundation::{CriterionId, EntityId};

/// Flat table of values keyed by ordered entity pair.
#[derive(Debug, Clone, PartialEq)]
struct PairTable<T> {
    pairs: Vec<(EntityId, EntityId)>,
    values: Vec<T>,
    /// Slots of each row, rows in first-insertion order.
    rows: Vec<Vec<usize>>,
    index: HashMap<EntityId, Row>,
}

#[derive(Debug, Clone, PartialEq)]
struct Row {
    position: usize,
    slots: HashMap<EntityId, usize>,
}

impl<T> PairTable<T> {
    fn new() -> Self {
        Self {
            pairs: Vec::new(),
            values: Vec::new(),
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Inserts or replaces the value for `(from, to)`.
    fn insert(&mut self, from: &EntityId, to: &EntityId, value: T) {
        if let Some(&slot) = self.index.get(from).and_then(|row| row.slots.get(to)) {
            self.values[slot] = value;
            return;
        }
        let slot = self.values.len();
        self.pairs.push((from.clone(), to.clone()));
        self.values.push(value);

        let next_position = self.rows.len();
        let row = self.index.entry(from.clone()).or_insert_with(|| Row {
            position: next_position,
            slots: HashMap::new(),
        });
        row.slots.insert(to.clone(), slot);
        if row.position == next_position {
            self.rows.push(Vec::new());
        }
        self.rows[row.position].push(slot);
    }

    fn get(&self, from: &str, to: &str) -> Option<&T> {
        let slot = self.index.get(from)?.slots.get(to)?;
        self.values.get(*slot)
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn iter(&self) -> impl Iterator<Item = (&EntityId, &EntityId, &T)> {
        self.rows.iter().flatten().map(move |&slot| {
            let (from, to) = &self.pairs[slot];
            (from, to, &self.values[slot])
        })
    }
}

/// Real value per ordered pair of entities.
#[derive(Debug, Clone, PartialEq)]
pub struct PairMatrix {
    table: PairTable<f64>,
}

/// Total preference index per ordered pair.
pub type PreferenceMatrix = PairMatrix;

/// Overall discordance per ordered pair.
pub type DiscordanceMatrix = PairMatrix;

impl PairMatrix {
    /// Creates an empty matrix.
    pub fn new() -> Self {
        Self {
            table: PairTable::new(),
        }
    }

    /// Sets the value for `(from, to)`.
    pub fn insert(&mut self, from: &EntityId, to: &EntityId, value: f64) {
        self.table.insert(from, to, value);
    }

    /// Returns the value for `(from, to)`.
    pub fn get(&self, from: &str, to: &str) -> Option<f64> {
        self.table.get(from, to).copied()
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if no pair is stored.
    pub fn is_empty(&self) -> bool {
        self.table.len() == 0
    }

    /// Iterates `(from, to, value)` row by row.
    pub fn iter(&self) -> impl Iterator<Item = (&EntityId, &EntityId, f64)> {
        self.table.iter().map(|(from, to, value)| (from, to, *value))
    }
}

impl Default for PairMatrix {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-criterion values for every ordered pair of entities.
#[derive(Debug, Clone, PartialEq)]
pub struct CriterionMatrix {
    criteria: Vec<CriterionId>,
    table: PairTable<Vec<f64>>,
}

/// Partial preference degree per ordered pair and criterion.
pub type PartialPreferenceMatrix = CriterionMatrix;

/// Partial discordance degree per ordered pair and criterion.
pub type PartialDiscordanceMatrix = CriterionMatrix;

impl CriterionMatrix {
    /// Creates an empty matrix over the given criteria.
    pub fn new(criteria: Vec<CriterionId>) -> Self {
        Self {
            criteria,
            table: PairTable::new(),
        }
    }

    /// Criteria in column order.
    pub fn criteria(&self) -> &[CriterionId] {
        &self.criteria
    }

    /// Sets all criterion values of `(from, to)`, ordered like [`Self::criteria`].
    pub fn insert(&mut self, from: &EntityId, to: &EntityId, values: Vec<f64>) {
        debug_assert_eq!(values.len(), self.criteria.len());
        self.table.insert(from, to, values);
    }

    /// Returns all criterion values of `(from, to)`.
    pub fn values(&self, from: &str, to: &str) -> Option<&[f64]> {
        self.table.get(from, to).map(Vec::as_slice)
    }

    /// Returns the value of `(from, to)` on one criterion.
    pub fn get(&self, from: &str, to: &str, criterion: &str) -> Option<f64> {
        let column = self.criteria.iter().position(|c| c.as_str() == criterion)?;
        self.values(from, to)?.get(column).copied()
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if no pair is stored.
    pub fn is_empty(&self) -> bool {
        self.table.len() == 0
    }

    /// Iterates `(from, to, values)` row by row.
    pub fn iter(&self) -> impl Iterator<Item = (&EntityId, &EntityId, &[f64])> {
        self.table
            .iter()
            .map(|(from, to, values)| (from, to, values.as_slice()))
    }
}

struct PairEntry<'a> {
    from: &'a EntityId,
    to: &'a EntityId,
    value: f64,
}

impl Serialize for PairEntry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut entry = serializer.serialize_struct("PairEntry", 3)?;
        entry.serialize_field("from", self.from)?;
        entry.serialize_field("to", self.to)?;
        entry.serialize_field("value", &self.value)?;
        entry.end()
    }
}

impl Serialize for PairMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|(from, to, value)| PairEntry { from, to, value }))
    }
}

struct CriterionValues<'a> {
    criteria: &'a [CriterionId],
    values: &'a [f64],
}

impl Serialize for CriterionValues<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.criteria.len()))?;
        for (criterion, value) in self.criteria.iter().zip(self.values) {
            map.serialize_entry(criterion, value)?;
        }
        map.end()
    }
}

struct CriterionEntry<'a> {
    from: &'a EntityId,
    to: &'a EntityId,
    values: CriterionValues<'a>,
}

impl Serialize for CriterionEntry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut entry = serializer.serialize_struct("CriterionEntry", 3)?;
        entry.serialize_field("from", self.from)?;
        entry.serialize_field("to", self.to)?;
        entry.serialize_field("values", &self.values)?;
        entry.end()
    }
}

impl Serialize for CriterionMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|(from, to, values)| CriterionEntry {
            from,
            to,
            values: CriterionValues {
                criteria: &self.criteria,
                values,
            },
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(id: &str) -> EntityId {
        EntityId::new(id).unwrap()
    }

    fn criterion(id: &str) -> CriterionId {
        CriterionId::new(id).unwrap()
    }

    #[test]
    fn pair_matrix_keeps_insertion_order() {
        let mut matrix = PairMatrix::new();
        matrix.insert(&entity("b"), &entity("a"), 0.2);
        matrix.insert(&entity("a"), &entity("b"), 0.8);

        let order: Vec<_> = matrix
            .iter()
            .map(|(from, to, _)| format!("{}{}", from, to))
            .collect();
        assert_eq!(order, vec!["ba", "ab"]);
    }

    #[test]
    fn pair_matrix_groups_pairs_by_first_inserted_row() {
        let mut matrix = PairMatrix::new();
        for (from, to) in [("a1", "p1"), ("p1", "a1"), ("a1", "p2"), ("p2", "a1"), ("p1", "p1")] {
            matrix.insert(&entity(from), &entity(to), 0.0);
        }

        let order: Vec<_> = matrix
            .iter()
            .map(|(from, to, _)| format!("{}>{}", from, to))
            .collect();
        assert_eq!(order, vec!["a1>p1", "a1>p2", "p1>a1", "p1>p1", "p2>a1"]);
    }

    #[test]
    fn pair_matrix_insert_replaces_existing_value() {
        let mut matrix = PairMatrix::new();
        matrix.insert(&entity("a"), &entity("b"), 0.1);
        matrix.insert(&entity("a"), &entity("b"), 0.9);
        assert_eq!(matrix.len(), 1);
        assert_eq!(matrix.get("a", "b"), Some(0.9));
    }

    #[test]
    fn pair_matrix_directions_are_independent() {
        let mut matrix = PairMatrix::new();
        matrix.insert(&entity("a"), &entity("b"), 1.0);
        assert_eq!(matrix.get("a", "b"), Some(1.0));
        assert_eq!(matrix.get("b", "a"), None);
    }

    #[test]
    fn criterion_matrix_looks_up_by_criterion() {
        let mut matrix = CriterionMatrix::new(vec![criterion("g1"), criterion("g2")]);
        matrix.insert(&entity("a"), &entity("b"), vec![0.25, 1.0]);

        assert_eq!(matrix.get("a", "b", "g1"), Some(0.25));
        assert_eq!(matrix.get("a", "b", "g2"), Some(1.0));
        assert_eq!(matrix.get("a", "b", "g3"), None);
        assert_eq!(matrix.values("a", "b"), Some(&[0.25, 1.0][..]));
    }

    #[test]
    fn pair_matrix_serializes_as_entry_list() {
        let mut matrix = PairMatrix::new();
        matrix.insert(&entity("a"), &entity("b"), 0.5);
        let json = serde_json::to_value(&matrix).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "from": "a", "to": "b", "value": 0.5 }])
        );
    }

    #[test]
    fn criterion_matrix_serializes_values_by_criterion() {
        let mut matrix = CriterionMatrix::new(vec![criterion("g1"), criterion("g2")]);
        matrix.insert(&entity("a"), &entity("b"), vec![0.0, 1.0]);
        let json = serde_json::to_string(&matrix).unwrap();
        assert_eq!(
            json,
            r#"[{"from":"a","to":"b","values":{"g1":0.0,"g2":1.0}}]"#
        );
    }
}
