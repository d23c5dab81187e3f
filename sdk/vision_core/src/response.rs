//! The uniform response shape returned by every provider.

use serde::{Deserialize, Serialize};

/// One labeled classification with its confidence score.
///
/// Label strings and numeric scores pass through from the backend
/// unchanged; no normalization or aggregation is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextEntity {
    /// The label text.
    pub text: String,
    /// Confidence score as reported by the backend.
    pub score: f64,
}

impl TextEntity {
    /// Creates a new entity.
    pub fn new(text: impl Into<String>, score: f64) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }
}

/// Wraps one raw backend result for one submitted blob.
///
/// Responses are position-correlated with the input batch: response *i*
/// corresponds to blob *i*. The structured view is a flat list of
/// [`TextEntity`] classifications; the original backend result stays
/// reachable through [`native_object`](Self::native_object) for callers
/// that need backend-specific fields.
#[derive(Debug, Clone)]
pub struct VisionResponse {
    labels: Vec<TextEntity>,
    native: serde_json::Value,
}

impl VisionResponse {
    /// Creates a response from its structured view and the raw backend result.
    pub fn new(labels: Vec<TextEntity>, native: serde_json::Value) -> Self {
        Self { labels, native }
    }

    /// Returns the structured classification labels.
    pub fn classification_labels(&self) -> &[TextEntity] {
        &self.labels
    }

    /// Returns the untouched raw backend result.
    ///
    /// The shape of this value is backend-specific and not portable across
    /// providers; prefer [`classification_labels`](Self::classification_labels)
    /// unless you need fields the uniform view does not carry.
    pub fn native_object(&self) -> &serde_json::Value {
        &self.native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_labels_and_native_object() {
        let native = serde_json::json!({"Labels": [{"Name": "Plane", "Confidence": 99.1}]});
        let response = VisionResponse::new(vec![TextEntity::new("Plane", 99.1)], native.clone());

        assert_eq!(response.classification_labels().len(), 1);
        assert_eq!(response.classification_labels()[0].text, "Plane");
        assert_eq!(response.native_object(), &native);
    }

    #[test]
    fn scores_pass_through_unchanged() {
        let entity = TextEntity::new("Cat", 87.654_321);
        assert!((entity.score - 87.654_321).abs() < f64::EPSILON);
    }

    #[test]
    fn text_entity_serializes_roundtrip() {
        let entity = TextEntity::new("Dog", 42.0);
        let json = serde_json::to_string(&entity).expect("should serialize");
        let back: TextEntity = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(back, entity);
    }
}
