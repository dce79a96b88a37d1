use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::record::Record;

/// Result every analyzer returns, whichever framework produced it.
///
/// Read it through the fields or through [`Record`]:
///
/// ```
/// use docframe_core::{AnalysisResult, Record};
///
/// let result = AnalysisResult::new("S1000D Technical Manual", 0.98, "xml-analysis-framework");
/// assert_eq!(result.document_type, "S1000D Technical Manual");
/// assert_eq!(result.get("confidence").unwrap(), 0.98);
/// assert!(result.contains_key("framework"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisResult {
    /// Human-readable classification, e.g. `"PDF Technical Manual"`.
    pub document_type: String,
    /// Detection confidence, expected in `0.0..=1.0`.
    ///
    /// Serialized as a number when finite, otherwise as `"Infinity"`,
    /// `"-Infinity"` or `"NaN"`.
    #[serde(with = "confidence")]
    pub confidence: f64,
    /// Identifier of the producing framework.
    pub framework: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Extracted text content, if the framework extracts any.
    #[serde(default)]
    pub content: Option<String>,
    /// Suggested AI/ML use cases for the document.
    #[serde(default)]
    pub ai_opportunities: Vec<String>,
    /// Complete framework-specific analysis output.
    #[serde(default)]
    pub raw_analysis: Map<String, Value>,
}

impl AnalysisResult {
    pub fn new(
        document_type: impl Into<String>,
        confidence: f64,
        framework: impl Into<String>,
    ) -> Self {
        Self {
            document_type: document_type.into(),
            confidence,
            framework: framework.into(),
            metadata: Map::new(),
            content: None,
            ai_opportunities: Vec::new(),
            raw_analysis: Map::new(),
        }
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn with_ai_opportunities<I, S>(mut self, opportunities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ai_opportunities = opportunities.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_raw_analysis(mut self, raw_analysis: Map<String, Value>) -> Self {
        self.raw_analysis = raw_analysis;
        self
    }

    /// Range is part of the contract but never enforced on construction.
    #[must_use]
    pub fn confidence_in_range(&self) -> bool {
        (0.0..=1.0).contains(&self.confidence)
    }
}

impl Record for AnalysisResult {
    const NAME: &'static str = "AnalysisResult";
    const FIELDS: &'static [&'static str] = &[
        "document_type",
        "confidence",
        "framework",
        "metadata",
        "content",
        "ai_opportunities",
        "raw_analysis",
    ];

    fn field(&self, key: &str) -> Option<Value> {
        let value = match key {
            "document_type" => Value::from(self.document_type.as_str()),
            "confidence" => confidence::to_value(self.confidence),
            "framework" => Value::from(self.framework.as_str()),
            "metadata" => Value::Object(self.metadata.clone()),
            "content" => self.content.as_deref().map_or(Value::Null, Value::from),
            "ai_opportunities" => Value::from(self.ai_opportunities.clone()),
            "raw_analysis" => Value::Object(self.raw_analysis.clone()),
            _ => return None,
        };
        Some(value)
    }
}

/// JSON has no non-finite numbers, so those travel as their names.
mod confidence {
    use serde::de::{self, Deserializer};
    use serde::{Deserialize, Serializer};
    use serde_json::Value;

    const INFINITY: &str = "Infinity";
    const NEG_INFINITY: &str = "-Infinity";
    const NAN: &str = "NaN";

    fn name(value: f64) -> &'static str {
        if value.is_nan() {
            NAN
        } else if value.is_sign_positive() {
            INFINITY
        } else {
            NEG_INFINITY
        }
    }

    pub(super) fn to_value(value: f64) -> Value {
        if value.is_finite() {
            Value::from(value)
        } else {
            Value::from(name(value))
        }
    }

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub(super) fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_str(name(*value))
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Name(String),
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Name(name) => match name.as_str() {
                INFINITY => Ok(f64::INFINITY),
                NEG_INFINITY => Ok(f64::NEG_INFINITY),
                NAN => Ok(f64::NAN),
                other => Err(de::Error::custom(format!(
                    "invalid confidence {other:?}, expected a number, \"Infinity\", \"-Infinity\" or \"NaN\""
                ))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::record::RecordError;

    fn sample() -> AnalysisResult {
        AnalysisResult::new("Test Document", 0.95, "test-framework")
    }

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    fn full() -> AnalysisResult {
        AnalysisResult::new("S1000D Technical Manual", 0.98, "xml-analysis-framework")
            .with_metadata(object(json!({ "version": "4.2", "schema": "s1000d" })))
            .with_content("Sample content")
            .with_ai_opportunities(["classification", "extraction"])
            .with_raw_analysis(object(json!({ "nodes": 12, "root": { "tag": "dmodule" } })))
    }

    #[test]
    fn basic_creation_defaults() {
        let result = sample();
        assert_eq!(result.document_type, "Test Document");
        assert!((result.confidence - 0.95).abs() < f64::EPSILON);
        assert_eq!(result.framework, "test-framework");
        assert!(result.metadata.is_empty());
        assert!(result.content.is_none());
        assert!(result.ai_opportunities.is_empty());
        assert!(result.raw_analysis.is_empty());
    }

    #[test]
    fn full_creation() {
        let result = full();
        assert_eq!(result.metadata["version"], "4.2");
        assert_eq!(result.content.as_deref(), Some("Sample content"));
        assert_eq!(result.ai_opportunities, ["classification", "extraction"]);
        assert_eq!(result.raw_analysis["nodes"], 12);
    }

    #[test]
    fn key_access_matches_fields() {
        let result = full();
        assert_eq!(result.get("document_type").unwrap(), "S1000D Technical Manual");
        assert_eq!(result.get("confidence").unwrap(), 0.98);
        assert_eq!(result.get("framework").unwrap(), "xml-analysis-framework");
        assert_eq!(result.get("content").unwrap(), "Sample content");
        assert_eq!(
            result.get("ai_opportunities").unwrap(),
            json!(["classification", "extraction"])
        );
        assert_eq!(
            result.get("metadata").unwrap(),
            Value::Object(result.metadata.clone())
        );
    }

    #[test]
    fn absent_content_reads_as_null() {
        assert_eq!(sample().get("content").unwrap(), Value::Null);
    }

    #[test]
    fn unknown_key_is_not_found() {
        let err = sample().get("invalid_key").unwrap_err();
        assert!(matches!(
            &err,
            RecordError::UnknownField { record: "AnalysisResult", key } if key == "invalid_key"
        ));
        assert_eq!(err.to_string(), "'invalid_key' not found in AnalysisResult");
    }

    #[test]
    fn get_or_falls_back_only_for_unknown_keys() {
        let result = sample();
        assert_eq!(result.get_or("document_type", json!("x")), "Test Document");
        assert_eq!(result.get_or("missing_key", json!("default")), "default");
        assert_eq!(result.get_or("missing_key", Value::Null), Value::Null);
    }

    #[test]
    fn contains_declared_fields_only() {
        let result = sample();
        assert!(result.contains_key("document_type"));
        assert!(result.contains_key("content"));
        assert!(!result.contains_key("missing_key"));
        assert!(!result.contains_key(""));
    }

    #[test]
    fn keys_in_declaration_order() {
        assert_eq!(
            sample().keys(),
            [
                "document_type",
                "confidence",
                "framework",
                "metadata",
                "content",
                "ai_opportunities",
                "raw_analysis",
            ]
        );
    }

    #[test]
    fn values_follow_keys() {
        let result = sample();
        let values = result.values();
        assert_eq!(values.len(), 7);
        assert_eq!(values[0], "Test Document");
        assert_eq!(values[2], "test-framework");
        assert_eq!(values[4], Value::Null);
    }

    #[test]
    fn items_pair_keys_with_values() {
        let items = sample().items();
        assert!(items.contains(&("document_type", json!("Test Document"))));
        assert!(items.contains(&("framework", json!("test-framework"))));
        assert_eq!(items.len(), 7);
    }

    #[test]
    fn to_map_shape() {
        let map = sample().to_map();
        assert_eq!(
            Value::Object(map),
            json!({
                "document_type": "Test Document",
                "confidence": 0.95,
                "framework": "test-framework",
                "metadata": {},
                "content": null,
                "ai_opportunities": [],
                "raw_analysis": {},
            })
        );
    }

    #[test]
    fn to_map_is_a_deep_copy() {
        let result = full();
        let mut map = result.to_map();
        map["metadata"]["version"] = json!("changed");
        assert_eq!(result.metadata["version"], "4.2");
    }

    #[test]
    fn serde_matches_to_map() {
        let result = full();
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            Value::Object(result.to_map())
        );
    }

    #[test]
    fn from_map_roundtrip() {
        let result = full();
        assert_eq!(AnalysisResult::from_map(result.to_map()).unwrap(), result);
    }

    #[test]
    fn from_map_fills_defaults() {
        let map = object(json!({
            "document_type": "Test",
            "confidence": 1.0,
            "framework": "test",
        }));
        assert_eq!(
            AnalysisResult::from_map(map).unwrap(),
            AnalysisResult::new("Test", 1.0, "test")
        );
    }

    #[test]
    fn from_map_rejects_undeclared_keys() {
        let mut map = sample().to_map();
        map.insert("extra".into(), json!(1));
        let err = AnalysisResult::from_map(map).unwrap_err();
        assert!(matches!(err, RecordError::Malformed { record: "AnalysisResult", .. }));
    }

    #[test]
    fn from_map_rejects_missing_required() {
        let mut map = sample().to_map();
        map.remove("framework");
        assert!(AnalysisResult::from_map(map).is_err());
    }

    #[test]
    fn confidence_range_check() {
        assert!(sample().confidence_in_range());
        assert!(AnalysisResult::new("t", 0.0, "f").confidence_in_range());
        assert!(AnalysisResult::new("t", 1.0, "f").confidence_in_range());
        assert!(!AnalysisResult::new("t", 1.5, "f").confidence_in_range());
        assert!(!AnalysisResult::new("t", -0.1, "f").confidence_in_range());
    }

    #[test]
    fn non_finite_confidence_survives_to_map() {
        for (confidence, name) in [
            (f64::INFINITY, "Infinity"),
            (f64::NEG_INFINITY, "-Infinity"),
            (f64::NAN, "NaN"),
        ] {
            let result = AnalysisResult::new("t", confidence, "f");
            assert_eq!(result.get("confidence").unwrap(), name);
            assert_eq!(
                serde_json::to_value(&result).unwrap()["confidence"],
                result.get("confidence").unwrap()
            );

            let back = AnalysisResult::from_map(result.to_map()).unwrap();
            if confidence.is_nan() {
                assert!(back.confidence.is_nan());
            } else {
                assert_eq!(back, result);
            }
            assert!(!back.confidence_in_range());
        }
    }

    #[test]
    fn from_map_rejects_unknown_confidence_name() {
        let mut map = sample().to_map();
        map.insert("confidence".into(), json!("high"));
        assert!(matches!(
            AnalysisResult::from_map(map),
            Err(RecordError::Malformed { record: "AnalysisResult", .. })
        ));
    }

    #[test]
    fn integer_confidence_is_accepted() {
        let mut map = sample().to_map();
        map.insert("confidence".into(), json!(1));
        let result = AnalysisResult::from_map(map).unwrap();
        assert!((result.confidence - 1.0).abs() < f64::EPSILON);
    }

    fn metadata_strategy() -> impl Strategy<Value = Map<String, Value>> {
        proptest::collection::vec(("[a-z_]{1,12}", "\\PC{0,24}"), 0..6).prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(k, v)| (k, Value::from(v)))
                .collect()
        })
    }

    prop_compose! {
        fn arb_result()(
            document_type in "\\PC{1,40}",
            confidence in prop_oneof![
                8 => 0.0f64..=1.0,
                1 => proptest::num::f64::NORMAL | proptest::num::f64::INFINITE,
            ],
            framework in "[a-z-]{1,24}",
            metadata in metadata_strategy(),
            content in proptest::option::of("\\PC{0,80}"),
            ai_opportunities in proptest::collection::vec("[a-z ]{1,20}", 0..4),
            raw_analysis in metadata_strategy(),
        ) -> AnalysisResult {
            AnalysisResult {
                document_type,
                confidence,
                framework,
                metadata,
                content,
                ai_opportunities,
                raw_analysis,
            }
        }
    }

    proptest! {
        #[test]
        fn keys_are_stable(result in arb_result()) {
            prop_assert_eq!(result.keys(), AnalysisResult::FIELDS);
            prop_assert_eq!(result.keys(), result.keys());
        }

        #[test]
        fn key_access_agrees_with_serialized_fields(result in arb_result()) {
            let serialized = serde_json::to_value(&result).unwrap();
            for key in AnalysisResult::FIELDS {
                prop_assert_eq!(&result.get(key).unwrap(), &serialized[*key]);
            }
        }

        #[test]
        fn undeclared_keys_are_absent(result in arb_result(), key in "[a-z_]{1,20}") {
            prop_assume!(!AnalysisResult::FIELDS.contains(&key.as_str()));
            prop_assert!(!result.contains_key(&key));
            prop_assert!(result.get(&key).is_err());
        }

        #[test]
        fn to_map_roundtrips(result in arb_result()) {
            let back = AnalysisResult::from_map(result.to_map()).unwrap();
            prop_assert_eq!(back, result);
        }
    }
}
