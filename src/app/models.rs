//! Data models for TX400 processing
//!
//! This module contains the core data structures for representing TX400
//! feeder definitions, placed-component records, and the dataset produced by
//! one parse of one export file.

use crate::app::services::heuristics;
use crate::constants::UNKNOWN_PLACEHOLDER;
use serde::Serialize;
use std::collections::HashMap;

// =============================================================================
// Feeder Attributes
// =============================================================================

/// Attributes of one feeder slot, keyed by feeder id within a [`Dataset`]
///
/// The derived value and tolerance class are pure functions of the comment
/// text; they are recomputed on every comment change and never stored
/// independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeederAttributes {
    /// Raw free-text comment from the export row; may be empty
    comment: String,

    /// Trailing value token derived from the comment, or the unknown placeholder
    derived_value: String,

    /// Coarse tolerance bucket derived from the comment
    tolerance_class: String,
}

impl FeederAttributes {
    /// Build feeder attributes from a comment, deriving value and tolerance
    pub fn from_comment(comment: impl Into<String>) -> Self {
        let comment = comment.into();
        let derived_value = heuristics::derive_value(&comment);
        let tolerance_class = heuristics::derive_tolerance(&comment);
        Self {
            comment,
            derived_value,
            tolerance_class,
        }
    }

    /// Raw comment text
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Derived component value (e.g. `100R`), or `—` when not derivable
    pub fn derived_value(&self) -> &str {
        &self.derived_value
    }

    /// Derived tolerance class: `±5%`, `±1%`, or `—`
    pub fn tolerance_class(&self) -> &str {
        &self.tolerance_class
    }

    /// Replace the comment, recomputing both derived attributes
    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
        self.derived_value = heuristics::derive_value(&self.comment);
        self.tolerance_class = heuristics::derive_tolerance(&self.comment);
    }
}

// =============================================================================
// Component Records
// =============================================================================

/// One placed-component record from the export
///
/// Component records are order-preserving: the dataset keeps them in the
/// sequence the machine emitted them. The feeder id should reference a
/// feeder in the same dataset, but that is only enforced by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentRecord {
    /// Board reference label, normalized to uppercase (e.g. "R1")
    pub designator: String,

    /// Feeder slot this component is picked from
    pub feeder_id: String,

    /// Footprint name, free-form (e.g. "0402")
    pub footprint: String,
}

impl ComponentRecord {
    /// Create a component record, normalizing the designator to uppercase
    pub fn new(
        designator: impl AsRef<str>,
        feeder_id: impl Into<String>,
        footprint: impl Into<String>,
    ) -> Self {
        Self {
            designator: designator.as_ref().to_uppercase(),
            feeder_id: feeder_id.into(),
            footprint: footprint.into(),
        }
    }
}

/// Display attributes of one component joined with its feeder
///
/// Mirrors the operator-facing table: a component whose feeder id resolves
/// to nothing shows the unknown placeholder for value, tolerance, and
/// comment alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub designator: String,
    pub value: String,
    pub tolerance: String,
    pub footprint: String,
    pub feeder_id: String,
    pub comment: String,
}

// =============================================================================
// Dataset
// =============================================================================

/// The result of one parse of one export file
///
/// Pairs the feeder-attributes mapping with the ordered component sequence.
/// A dataset is exclusively owned by whichever context loaded it; parsing a
/// different file produces a fresh dataset rather than updating this one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dataset {
    feeders: HashMap<String, FeederAttributes>,
    components: Vec<ComponentRecord>,
}

impl Dataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a feeder entry (last write wins)
    pub fn insert_feeder(&mut self, feeder_id: impl Into<String>, attributes: FeederAttributes) {
        self.feeders.insert(feeder_id.into(), attributes);
    }

    /// Append a component record, preserving export order
    pub fn push_component(&mut self, component: ComponentRecord) {
        self.components.push(component);
    }

    /// Look up a feeder by id
    pub fn feeder(&self, feeder_id: &str) -> Option<&FeederAttributes> {
        self.feeders.get(feeder_id)
    }

    /// Iterate over all feeder entries
    pub fn feeders(&self) -> impl Iterator<Item = (&String, &FeederAttributes)> {
        self.feeders.iter()
    }

    /// All component records in export order
    pub fn components(&self) -> &[ComponentRecord] {
        &self.components
    }

    /// Number of distinct feeders
    pub fn feeder_count(&self) -> usize {
        self.feeders.len()
    }

    /// Number of placed-component records
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// True when the dataset holds neither feeders nor components
    pub fn is_empty(&self) -> bool {
        self.feeders.is_empty() && self.components.is_empty()
    }

    /// Find components whose designator contains the search term
    ///
    /// The term is trimmed and uppercased before matching; designators are
    /// already uppercase, so the search is effectively case-insensitive. An
    /// empty term returns every component.
    pub fn search(&self, term: &str) -> Vec<&ComponentRecord> {
        let term = term.trim().to_uppercase();
        if term.is_empty() {
            return self.components.iter().collect();
        }
        self.components
            .iter()
            .filter(|c| c.designator.contains(&term))
            .collect()
    }

    /// Build the operator-facing display row for a component
    pub fn display_row(&self, component: &ComponentRecord) -> DisplayRow {
        match self.feeder(&component.feeder_id) {
            Some(feeder) => DisplayRow {
                designator: component.designator.clone(),
                value: feeder.derived_value().to_string(),
                tolerance: feeder.tolerance_class().to_string(),
                footprint: component.footprint.clone(),
                feeder_id: component.feeder_id.clone(),
                comment: feeder.comment().to_string(),
            },
            None => DisplayRow {
                designator: component.designator.clone(),
                value: UNKNOWN_PLACEHOLDER.to_string(),
                tolerance: UNKNOWN_PLACEHOLDER.to_string(),
                footprint: component.footprint.clone(),
                feeder_id: component.feeder_id.clone(),
                comment: UNKNOWN_PLACEHOLDER.to_string(),
            },
        }
    }
}

// =============================================================================
// Validation Report
// =============================================================================

/// Ordered sequence of line-tagged validation error messages
///
/// An empty report signals a valid file. Reports are produced fresh per
/// validation call and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    entries: Vec<String>,
}

impl ValidationReport {
    /// Create an empty (passing) report
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error entry
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// True when no errors were recorded
    pub fn is_valid(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of error entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the report holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All error entries in scan order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Consume the report, yielding its entries
    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feeder_attributes_derivation() {
        let feeder = FeederAttributes::from_comment("R1 100R");
        assert_eq!(feeder.derived_value(), "100R");
        assert_eq!(feeder.tolerance_class(), "±1%");
    }

    #[test]
    fn test_feeder_attributes_recompute_on_comment_change() {
        let mut feeder = FeederAttributes::from_comment("R1 100R");
        feeder.set_comment("");
        assert_eq!(feeder.derived_value(), "—");
        assert_eq!(feeder.tolerance_class(), "—");

        feeder.set_comment("jumper 0R");
        assert_eq!(feeder.derived_value(), "0R");
        assert_eq!(feeder.tolerance_class(), "±5%");
    }

    #[test]
    fn test_component_record_uppercases_designator() {
        let component = ComponentRecord::new("r12", "F3", "0603");
        assert_eq!(component.designator, "R12");
        assert_eq!(component.feeder_id, "F3");
    }

    #[test]
    fn test_dataset_last_feeder_wins() {
        let mut dataset = Dataset::new();
        dataset.insert_feeder("F1", FeederAttributes::from_comment("old 10K"));
        dataset.insert_feeder("F1", FeederAttributes::from_comment("new 22K"));

        assert_eq!(dataset.feeder_count(), 1);
        assert_eq!(dataset.feeder("F1").unwrap().derived_value(), "22K");
    }

    #[test]
    fn test_dataset_search() {
        let mut dataset = Dataset::new();
        dataset.push_component(ComponentRecord::new("R1", "F1", "0402"));
        dataset.push_component(ComponentRecord::new("R12", "F1", "0402"));
        dataset.push_component(ComponentRecord::new("C3", "F2", "0603"));

        assert_eq!(dataset.search("").len(), 3);
        assert_eq!(dataset.search("r1").len(), 2);
        assert_eq!(dataset.search(" c3 ").len(), 1);
        assert!(dataset.search("Q9").is_empty());
    }

    #[test]
    fn test_display_row_with_unresolved_feeder() {
        let mut dataset = Dataset::new();
        dataset.push_component(ComponentRecord::new("R1", "F9", "0402"));

        let row = dataset.display_row(&dataset.components()[0]);
        assert_eq!(row.value, "—");
        assert_eq!(row.tolerance, "—");
        assert_eq!(row.comment, "—");
        assert_eq!(row.feeder_id, "F9");
    }

    #[test]
    fn test_validation_report_display() {
        let mut report = ValidationReport::new();
        assert!(report.is_valid());

        report.push("Linha 1: Feeder incompleto");
        report.push("Nenhum componente encontrado");
        assert!(!report.is_valid());
        assert_eq!(report.len(), 2);
        assert_eq!(
            report.to_string(),
            "Linha 1: Feeder incompleto\nNenhum componente encontrado\n"
        );
    }
}
