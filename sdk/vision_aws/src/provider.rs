//! The Rekognition vision provider.

use std::any::Any;

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use vision_core::error::{VisionError, VisionResult};
use vision_core::{Blob, ProviderConfig, VisionFeature, VisionProvider, VisionResponse};

use crate::client::RekognitionClient;
use crate::response;

/// Configuration key for the service region.
pub const REGION_PARAM: &str = "region";

/// Configuration key for the static access key.
pub const ACCESS_KEY_PARAM: &str = "accessKey";

/// Configuration key for the static secret key.
pub const SECRET_KEY_PARAM: &str = "secretKey";

/// Rekognition's per-image size ceiling for inline bytes (5 MiB).
pub const MAX_BLOB_SIZE: usize = 5 * 1024 * 1024;

/// Image formats accepted by the detection operations.
pub const SUPPORTED_FORMATS: [&str; 2] = ["image/jpeg", "image/png"];

/// Vision provider backed by AWS Rekognition.
///
/// One instance is bound to one configured backend entry. The underlying
/// client is built lazily on first use from the `region` / `accessKey` /
/// `secretKey` parameters and shared for the provider's lifetime; no other
/// configuration keys are recognized.
#[derive(Debug)]
pub struct RekognitionProvider {
    config: ProviderConfig,
    client: OnceCell<RekognitionClient>,
}

impl RekognitionProvider {
    /// Creates a provider from its configuration parameters.
    ///
    /// The configuration is not validated here; missing parameters surface
    /// on first use of the client.
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    /// Creates a provider around an already-built client.
    ///
    /// Useful when the client needs non-default settings (endpoint
    /// override, custom timeouts); the lazy initializer is bypassed.
    pub fn with_client(config: ProviderConfig, client: RekognitionClient) -> Self {
        Self {
            config,
            client: OnceCell::with_value(client),
        }
    }

    /// Returns the shared client, constructing it on first use.
    ///
    /// Concurrent first callers race safely: exactly one client is ever
    /// constructed, later reads are lock-free, and a failed construction
    /// caches nothing.
    pub fn client(&self) -> VisionResult<&RekognitionClient> {
        self.client.get_or_try_init(|| self.build_client())
    }

    fn build_client(&self) -> VisionResult<RekognitionClient> {
        RekognitionClient::builder()
            .region(self.config.require(REGION_PARAM)?)
            .access_key(self.config.require(ACCESS_KEY_PARAM)?)
            .secret_key(self.config.require(SECRET_KEY_PARAM)?)
            .build()
    }
}

#[async_trait]
impl VisionProvider for RekognitionProvider {
    /// Runs one detection call per blob, in input order.
    ///
    /// A batch that asks for [`VisionFeature::SafeSearchDetection`] is
    /// routed to `DetectModerationLabels`; every other combination issues
    /// `DetectLabels` with the `max_results` cap. The first remote failure
    /// aborts the batch.
    #[tracing::instrument(
        name = "rekognition::execute",
        skip(self, blobs, features),
        fields(blobs = blobs.len(), max_results)
    )]
    async fn execute(
        &self,
        blobs: &[Blob],
        features: &[VisionFeature],
        max_results: u32,
    ) -> VisionResult<Vec<VisionResponse>> {
        let client = self.client()?;
        let moderation = features.contains(&VisionFeature::SafeSearchDetection);

        let mut responses = Vec::with_capacity(blobs.len());
        for blob in blobs {
            let raw = if moderation {
                client.detect_moderation_labels(blob.bytes()).await?
            } else {
                client.detect_labels(blob.bytes(), max_results).await?
            };
            responses.push(response::wrap(raw, max_results));
        }

        tracing::debug!(responses = responses.len(), "batch complete");
        Ok(responses)
    }

    fn check_blobs(&self, blobs: &[Blob]) -> VisionResult<bool> {
        for blob in blobs {
            if blob.is_empty() {
                return Err(VisionError::Io("could not read the blob size".into()));
            }
            if blob.len() > MAX_BLOB_SIZE {
                return Ok(false);
            }
            if !SUPPORTED_FORMATS.contains(&blob.mime_type()) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn supported_features(&self) -> Vec<VisionFeature> {
        vec![VisionFeature::LabelDetection, VisionFeature::FaceDetection]
    }

    fn native_client(&self) -> VisionResult<&(dyn Any + Send + Sync)> {
        Ok(self.client()?)
    }
}
