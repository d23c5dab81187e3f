//! Detection capabilities a provider can be asked for.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VisionError;

/// A detection capability requested from a vision provider.
///
/// The set is fixed; providers advertise the subset they support via
/// [`VisionProvider::supported_features`](crate::provider::VisionProvider::supported_features).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisionFeature {
    /// Detect content labels describing the image.
    #[serde(rename = "LABEL_DETECTION")]
    LabelDetection,
    /// Detect faces in the image.
    #[serde(rename = "FACE_DETECTION")]
    FaceDetection,
    /// Extract printed text from the image.
    #[serde(rename = "TEXT_DETECTION")]
    TextDetection,
    /// Detect unsafe or moderated content.
    #[serde(rename = "SAFE_SEARCH_DETECTION")]
    SafeSearchDetection,
}

impl VisionFeature {
    /// Returns the stable string name of this feature.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LabelDetection => "LABEL_DETECTION",
            Self::FaceDetection => "FACE_DETECTION",
            Self::TextDetection => "TEXT_DETECTION",
            Self::SafeSearchDetection => "SAFE_SEARCH_DETECTION",
        }
    }
}

impl std::fmt::Display for VisionFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VisionFeature {
    type Err = VisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LABEL_DETECTION" => Ok(Self::LabelDetection),
            "FACE_DETECTION" => Ok(Self::FaceDetection),
            "TEXT_DETECTION" => Ok(Self::TextDetection),
            "SAFE_SEARCH_DETECTION" => Ok(Self::SafeSearchDetection),
            other => Err(VisionError::MissingConfig(format!(
                "unknown vision feature `{other}`"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_matches_serde_names() {
        let variants = [
            (VisionFeature::LabelDetection, "LABEL_DETECTION"),
            (VisionFeature::FaceDetection, "FACE_DETECTION"),
            (VisionFeature::TextDetection, "TEXT_DETECTION"),
            (VisionFeature::SafeSearchDetection, "SAFE_SEARCH_DETECTION"),
        ];

        for (variant, expected) in &variants {
            assert_eq!(variant.as_str(), *expected);
            let serialized = serde_json::to_string(variant).expect("should serialize");
            assert_eq!(serialized, format!("\"{expected}\""));
        }
    }

    #[test]
    fn parses_stable_names() {
        assert_eq!(
            "LABEL_DETECTION".parse::<VisionFeature>().unwrap(),
            VisionFeature::LabelDetection
        );
        assert_eq!(
            "SAFE_SEARCH_DETECTION".parse::<VisionFeature>().unwrap(),
            VisionFeature::SafeSearchDetection
        );
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "LOGO_DETECTION".parse::<VisionFeature>().unwrap_err();
        assert!(err.to_string().contains("LOGO_DETECTION"), "error: {err}");
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(VisionFeature::FaceDetection.to_string(), "FACE_DETECTION");
    }
}
