//! Sub-score metrics for metadata assessment.
//!
//! Each metric is gathered from a [`MetadataDocument`] and then scored on a
//! 0-100 scale. A field of the wrong shape counts as absent for the metric
//! that reads it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{MetadataDocument, OPTIONAL_FIELDS, REQUIRED_FIELDS};

/// AI generation modes that qualify a document as generation-ready.
pub const AI_READY_MODES: [&str; 2] = ["full_automation", "assisted"];

/// Presence of recognized top-level fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPresence {
    /// Required field name to presence, in required-list order
    pub required: IndexMap<String, bool>,
    /// Optional field name to presence, in optional-list order
    pub optional: IndexMap<String, bool>,
}

impl FieldPresence {
    /// A field is present when its key exists and its value is not `null`.
    #[must_use]
    pub fn from_document(doc: &MetadataDocument) -> Self {
        let collect = |fields: &[&str]| {
            fields
                .iter()
                .map(|f| ((*f).to_string(), doc.is_present(f)))
                .collect::<IndexMap<_, _>>()
        };
        Self {
            required: collect(&REQUIRED_FIELDS),
            optional: collect(&OPTIONAL_FIELDS),
        }
    }

    #[must_use]
    pub fn required_present(&self) -> usize {
        self.required.values().filter(|p| **p).count()
    }

    #[must_use]
    pub fn optional_present(&self) -> usize {
        self.optional.values().filter(|p| **p).count()
    }

    /// Whether all required fields are present
    #[must_use]
    pub fn all_required_present(&self) -> bool {
        self.required_present() == REQUIRED_FIELDS.len()
    }

    /// Missing required fields, in required-list order
    #[must_use]
    pub fn missing_required(&self) -> Vec<&str> {
        self.required
            .iter()
            .filter(|(_, present)| !**present)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Percentage of the 15 recognized fields that are present
    #[must_use]
    pub fn completeness(&self) -> f64 {
        let total = REQUIRED_FIELDS.len() + OPTIONAL_FIELDS.len();
        let present = self.required_present() + self.optional_present();
        present as f64 / total as f64 * 100.0
    }
}

/// Interface definition quality
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceMetrics {
    /// Entries in the `interfaces` sequence, mappings or not
    pub interface_count: usize,
    /// Mapping entries carrying both `type` and `signals`
    pub typed_with_signals: usize,
    /// Mapping entries carrying `protocol`
    pub with_protocol: usize,
}

impl InterfaceMetrics {
    #[must_use]
    pub fn from_document(doc: &MetadataDocument) -> Self {
        let Some(interfaces) = doc.get_array("interfaces") else {
            return Self::default();
        };

        let mut metrics = Self {
            interface_count: interfaces.len(),
            ..Self::default()
        };
        for entry in interfaces.iter().filter_map(Value::as_object) {
            if entry.contains_key("type") && entry.contains_key("signals") {
                metrics.typed_with_signals += 1;
            }
            if entry.contains_key("protocol") {
                metrics.with_protocol += 1;
            }
        }
        metrics
    }

    /// Each typed entry earns 1.0 and each protocol 0.5, averaged over all
    /// entries and capped at 100.
    #[must_use]
    pub fn quality_score(&self) -> f64 {
        if self.interface_count == 0 {
            return 0.0;
        }
        let acc = self.typed_with_signals as f64 + 0.5 * self.with_protocol as f64;
        (acc / self.interface_count as f64 * 100.0).min(100.0)
    }
}

/// Test metadata keys under `test`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestMetadataMetrics {
    pub has_coverage: bool,
    pub has_testbenches: bool,
    pub has_simulators: bool,
    pub has_status: bool,
}

impl TestMetadataMetrics {
    #[must_use]
    pub fn from_document(doc: &MetadataDocument) -> Self {
        Self {
            has_coverage: doc.has_key("test.coverage"),
            has_testbenches: doc.has_key("test.testbenches"),
            has_simulators: doc.has_key("test.simulators"),
            has_status: doc.has_key("test.status"),
        }
    }

    /// 25 points per key
    #[must_use]
    pub fn score(&self) -> f64 {
        25.0 * count_true(&[
            self.has_coverage,
            self.has_testbenches,
            self.has_simulators,
            self.has_status,
        ])
    }
}

/// ASIC and FPGA flow configuration under `flows`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowMetrics {
    pub has_asic: bool,
    pub has_fpga: bool,
    pub asic_synthesis: bool,
    pub fpga_synthesis: bool,
}

impl FlowMetrics {
    #[must_use]
    pub fn from_document(doc: &MetadataDocument) -> Self {
        Self {
            has_asic: doc.has_key("flows.asic"),
            has_fpga: doc.has_key("flows.fpga"),
            asic_synthesis: doc.has_key("flows.asic.synthesis"),
            fpga_synthesis: doc.has_key("flows.fpga.synthesis"),
        }
    }

    /// 25 points per key
    #[must_use]
    pub fn score(&self) -> f64 {
        25.0 * count_true(&[
            self.has_asic,
            self.has_fpga,
            self.asic_synthesis,
            self.fpga_synthesis,
        ])
    }
}

/// Provenance keys under `meta`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentationMetadataMetrics {
    pub has_generated_by: bool,
    pub has_schema: bool,
    pub has_template: bool,
    pub has_ai_generation: bool,
    /// `meta.ai_generation.mode` when it is a string
    pub ai_mode: Option<String>,
}

impl DocumentationMetadataMetrics {
    #[must_use]
    pub fn from_document(doc: &MetadataDocument) -> Self {
        Self {
            has_generated_by: doc.has_key("meta.generated_by"),
            has_schema: doc.has_key("meta.schema"),
            has_template: doc.has_key("meta.template"),
            has_ai_generation: doc.has_key("meta.ai_generation"),
            ai_mode: doc.get_str("meta.ai_generation.mode").map(str::to_string),
        }
    }

    /// 20 points each for generator, schema and template; 40 for AI generation.
    #[must_use]
    pub fn score(&self) -> f64 {
        let mut score = 20.0 * count_true(&[self.has_generated_by, self.has_schema, self.has_template]);
        if self.has_ai_generation {
            score += 40.0;
        }
        score
    }

    /// Whether the AI generation mode is one of [`AI_READY_MODES`]
    #[must_use]
    pub fn ai_generation_ready(&self) -> bool {
        self.ai_mode
            .as_deref()
            .is_some_and(|mode| AI_READY_MODES.contains(&mode))
    }
}

fn count_true(flags: &[bool]) -> f64 {
    flags.iter().filter(|f| **f).count() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> MetadataDocument {
        MetadataDocument::from_value(value).unwrap()
    }

    #[test]
    fn test_field_presence_null_is_absent() {
        let presence = FieldPresence::from_document(&doc(json!({
            "name": "uart",
            "version": null,
            "flows": {}
        })));
        assert_eq!(presence.required_present(), 1);
        assert_eq!(presence.optional_present(), 1);
        assert_eq!(presence.missing_required()[0], "version");
        assert!((presence.completeness() - 200.0 / 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_interface_score_counts_non_mapping_entries() {
        let m = InterfaceMetrics::from_document(&doc(json!({
            "interfaces": [{"type": "apb", "signals": []}, "bogus"]
        })));
        assert_eq!(m.interface_count, 2);
        assert!((m.quality_score() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_interface_score_capped() {
        let m = InterfaceMetrics::from_document(&doc(json!({
            "interfaces": [{"type": "axi", "signals": [], "protocol": "AXI4"}]
        })));
        assert!((m.quality_score() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_interfaces_wrong_shape() {
        let m = InterfaceMetrics::from_document(&doc(json!({"interfaces": {"type": "apb"}})));
        assert_eq!(m.quality_score(), 0.0);
        let m = InterfaceMetrics::from_document(&doc(json!({"interfaces": []})));
        assert_eq!(m.quality_score(), 0.0);
    }

    #[test]
    fn test_test_metadata_null_keys_count() {
        let m = TestMetadataMetrics::from_document(&doc(json!({
            "test": {"coverage": null, "status": "passing"}
        })));
        assert_eq!(m.score(), 50.0);
    }

    #[test]
    fn test_flow_non_mapping_parent() {
        let m = FlowMetrics::from_document(&doc(json!({
            "flows": {"asic": "sky130", "fpga": {"synthesis": "yosys"}}
        })));
        assert_eq!(m.score(), 75.0);
    }

    #[test]
    fn test_ai_generation_modes() {
        let ready = DocumentationMetadataMetrics::from_document(&doc(json!({
            "meta": {"ai_generation": {"mode": "assisted"}}
        })));
        assert!(ready.ai_generation_ready());
        assert_eq!(ready.score(), 40.0);

        let manual = DocumentationMetadataMetrics::from_document(&doc(json!({
            "meta": {"generated_by": "hand", "ai_generation": {"mode": "manual"}}
        })));
        assert!(!manual.ai_generation_ready());
        assert_eq!(manual.score(), 60.0);

        let wrong_case = DocumentationMetadataMetrics::from_document(&doc(json!({
            "meta": {"ai_generation": {"mode": "Assisted"}}
        })));
        assert!(!wrong_case.ai_generation_ready());
    }
}
