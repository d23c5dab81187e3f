//! Structural adaptation of raw Rekognition results.

use serde::Deserialize;
use vision_core::{TextEntity, VisionResponse};

/// One label entry as both detection operations report it.
///
/// Entries carry more fields (instances, parent labels, taxonomies); only
/// the name/confidence pair feeds the uniform view, and everything stays
/// reachable through the native object.
#[derive(Debug, Clone, Deserialize)]
struct DetectedLabel {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Confidence")]
    confidence: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawDetection {
    #[serde(rename = "Labels")]
    labels: Option<Vec<DetectedLabel>>,
    #[serde(rename = "ModerationLabels")]
    moderation_labels: Option<Vec<DetectedLabel>>,
}

/// Wraps one raw detection result into the platform's uniform shape.
///
/// Label strings and confidence scores pass through unchanged. A result
/// without a recognizable label array yields an empty structured view; the
/// raw object is kept verbatim either way.
pub(crate) fn wrap(raw: serde_json::Value, max_results: u32) -> VisionResponse {
    let parsed: RawDetection = serde_json::from_value(raw.clone()).unwrap_or_default();
    let mut entities: Vec<TextEntity> = parsed
        .labels
        .or(parsed.moderation_labels)
        .unwrap_or_default()
        .into_iter()
        .map(|label| TextEntity::new(label.name, label.confidence))
        .collect();

    // DetectModerationLabels has no server-side cap; enforce the caller's
    // result cap uniformly across both operations.
    entities.truncate(max_results as usize);

    VisionResponse::new(entities, raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_label_detection_results() {
        let raw = serde_json::json!({
            "Labels": [
                {"Name": "Airplane", "Confidence": 99.22, "Instances": [], "Parents": []},
                {"Name": "Vehicle", "Confidence": 97.4}
            ],
            "LabelModelVersion": "3.0"
        });

        let response = wrap(raw.clone(), 5);
        let labels = response.classification_labels();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].text, "Airplane");
        assert!((labels[0].score - 99.22).abs() < f64::EPSILON);
        assert_eq!(labels[1].text, "Vehicle");
        assert_eq!(response.native_object(), &raw);
    }

    #[test]
    fn wraps_moderation_results() {
        let raw = serde_json::json!({
            "ModerationLabels": [
                {"Name": "Suggestive", "Confidence": 81.5, "ParentName": ""}
            ],
            "ModerationModelVersion": "7.0"
        });

        let response = wrap(raw, 5);
        let labels = response.classification_labels();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].text, "Suggestive");
    }

    #[test]
    fn applies_the_result_cap() {
        let raw = serde_json::json!({
            "ModerationLabels": [
                {"Name": "A", "Confidence": 90.0},
                {"Name": "B", "Confidence": 80.0},
                {"Name": "C", "Confidence": 70.0}
            ]
        });

        let response = wrap(raw, 2);
        assert_eq!(response.classification_labels().len(), 2);
        assert_eq!(response.classification_labels()[1].text, "B");
    }

    #[test]
    fn unrecognized_results_yield_an_empty_view_with_raw_intact() {
        let raw = serde_json::json!({"FaceDetails": [{"Confidence": 99.0}]});
        let response = wrap(raw.clone(), 5);
        assert!(response.classification_labels().is_empty());
        assert_eq!(response.native_object(), &raw);
    }

    #[test]
    fn empty_label_array_is_not_an_error() {
        let raw = serde_json::json!({"Labels": [], "LabelModelVersion": "3.0"});
        let response = wrap(raw, 5);
        assert!(response.classification_labels().is_empty());
    }
}
