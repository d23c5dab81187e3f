//! Signed HTTP client for the Rekognition detection API.
//!
//! Rekognition speaks the AWS JSON 1.1 protocol: every operation is a
//! `POST /` to the regional endpoint with an `X-Amz-Target` header naming
//! the operation and a SigV4 `Authorization` header. This client covers the
//! two detection operations the adapter issues and returns the raw result
//! JSON untouched so it can be handed through as the native object.
//!
//! ## Example
//!
//! ```rust,no_run
//! use vision_aws::client::RekognitionClient;
//!
//! # async fn example() -> vision_core::VisionResult<()> {
//! let client = RekognitionClient::builder()
//!     .region("eu-west-1")
//!     .access_key("AKIA...")
//!     .secret_key("...")
//!     .build()?;
//!
//! let image = std::fs::read("plane.jpg").unwrap();
//! let result = client.detect_labels(&image, 5).await?;
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use secrecy::{ExposeSecret, SecretString};
use url::Url;
use vision_core::error::{VisionError, VisionResult};

use crate::sign::{self, SigningParams};

/// Default connection timeout (10 seconds).
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default read/response timeout (60 seconds).
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(60);

const CONTENT_TYPE: &str = "application/x-amz-json-1.1";
const TARGET_DETECT_LABELS: &str = "RekognitionService.DetectLabels";
const TARGET_DETECT_MODERATION_LABELS: &str = "RekognitionService.DetectModerationLabels";

/// Client for Rekognition detection calls.
///
/// The client is cheaply cloneable and safe to share across threads;
/// detection calls carry no client-side state between invocations.
#[derive(Debug, Clone)]
pub struct RekognitionClient {
    http: reqwest::Client,
    endpoint: Url,
    host: String,
    region: String,
    access_key: String,
    secret_key: SecretString,
}

/// Builder for [`RekognitionClient`].
///
/// Use [`RekognitionClient::builder()`] to create a new builder.
#[derive(Debug, Default)]
pub struct RekognitionClientBuilder {
    region: Option<String>,
    access_key: Option<String>,
    secret_key: Option<String>,
    endpoint: Option<String>,
    http_client: Option<reqwest::Client>,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
}

impl RekognitionClient {
    /// Create a new builder for configuring a `RekognitionClient`.
    pub fn builder() -> RekognitionClientBuilder {
        RekognitionClientBuilder::default()
    }

    /// Get the endpoint URL requests are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Get the configured region.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Detect content labels in an image.
    ///
    /// Sends the raw image bytes (base64-encoded on the wire) with the
    /// `max_labels` result cap and returns the raw `DetectLabels` result.
    ///
    /// # Tracing
    ///
    /// Emits a span named `rekognition::detect_labels` with fields
    /// `image_bytes` and `max_labels`.
    #[tracing::instrument(
        name = "rekognition::detect_labels",
        skip(self, image),
        fields(image_bytes = image.len(), max_labels)
    )]
    pub async fn detect_labels(
        &self,
        image: &[u8],
        max_labels: u32,
    ) -> VisionResult<serde_json::Value> {
        let body = serde_json::json!({
            "Image": { "Bytes": BASE64.encode(image) },
            "MaxLabels": max_labels,
        });
        self.call(TARGET_DETECT_LABELS, &body).await
    }

    /// Detect moderation (unsafe-content) labels in an image.
    ///
    /// The operation has no result cap of its own; callers that need one
    /// apply it to the wrapped result.
    ///
    /// # Tracing
    ///
    /// Emits a span named `rekognition::detect_moderation_labels` with
    /// field `image_bytes`.
    #[tracing::instrument(
        name = "rekognition::detect_moderation_labels",
        skip(self, image),
        fields(image_bytes = image.len())
    )]
    pub async fn detect_moderation_labels(&self, image: &[u8]) -> VisionResult<serde_json::Value> {
        let body = serde_json::json!({
            "Image": { "Bytes": BASE64.encode(image) },
        });
        self.call(TARGET_DETECT_MODERATION_LABELS, &body).await
    }

    /// Send one signed detection request and parse the result JSON.
    async fn call(
        &self,
        target: &str,
        body: &serde_json::Value,
    ) -> VisionResult<serde_json::Value> {
        let payload = serde_json::to_vec(body)?;
        let amz_date = sign::amz_date_now();
        let authorization = sign::authorization_header(&SigningParams {
            access_key: &self.access_key,
            secret_key: self.secret_key.expose_secret(),
            region: &self.region,
            host: &self.host,
            content_type: CONTENT_TYPE,
            amz_target: target,
            amz_date: &amz_date,
            payload: &payload,
        });

        tracing::debug!(operation = target, "sending detection request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .header("Authorization", authorization)
            .header("X-Amz-Date", amz_date)
            .header("X-Amz-Target", target)
            .header("Content-Type", CONTENT_TYPE)
            .body(payload)
            .send()
            .await?;

        Self::check_response(response).await
    }

    /// Check the response status and parse either the result or the error body.
    async fn check_response(response: reqwest::Response) -> VisionResult<serde_json::Value> {
        if response.status().is_success() {
            return Ok(response.json::<serde_json::Value>().await?);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        // AWS JSON 1.1 errors carry `__type` plus `message` (casing varies).
        if let Ok(error) = serde_json::from_str::<serde_json::Value>(&body) {
            if let Some(code) = error.get("__type").and_then(|c| c.as_str()) {
                let message = error
                    .get("message")
                    .or_else(|| error.get("Message"))
                    .and_then(|m| m.as_str())
                    .unwrap_or(&body);
                return Err(VisionError::Api {
                    code: code.to_string(),
                    message: message.to_string(),
                });
            }
        }

        Err(VisionError::Http {
            status,
            message: body,
        })
    }
}

impl RekognitionClientBuilder {
    /// Set the service region (required), e.g. `eu-west-1`.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the static access key (required).
    pub fn access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    /// Set the static secret key (required).
    pub fn secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Override the endpoint URL.
    ///
    /// By default the endpoint is derived from the region
    /// (`https://rekognition.<region>.amazonaws.com`). Overriding it is
    /// intended for tests and private gateways.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set a custom HTTP client.
    ///
    /// **Note:** timeout configuration on this builder is ignored when a
    /// custom HTTP client is provided.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set the connection timeout. Defaults to [`DEFAULT_CONNECT_TIMEOUT`].
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the read timeout, covering the whole request/response cycle.
    /// Defaults to [`DEFAULT_READ_TIMEOUT`].
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Build the `RekognitionClient`.
    ///
    /// # Errors
    ///
    /// Returns [`VisionError::MissingConfig`] if the region, access key,
    /// or secret key is absent, and [`VisionError::InvalidEndpoint`] if
    /// the endpoint URL cannot be parsed.
    pub fn build(self) -> VisionResult<RekognitionClient> {
        let region = self
            .region
            .filter(|r| !r.is_empty())
            .ok_or_else(|| VisionError::MissingConfig("region is required".into()))?;
        let access_key = self
            .access_key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| VisionError::MissingConfig("access key is required".into()))?;
        let secret_key = self
            .secret_key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| VisionError::MissingConfig("secret key is required".into()))?;

        let endpoint_str = self
            .endpoint
            .unwrap_or_else(|| format!("https://rekognition.{region}.amazonaws.com"));
        let endpoint = Url::parse(&endpoint_str)
            .map_err(|e| VisionError::InvalidEndpoint(format!("{endpoint_str}: {e}")))?;

        // The host header must match what reqwest sends, port included.
        let host = endpoint
            .host_str()
            .ok_or_else(|| VisionError::InvalidEndpoint(format!("{endpoint_str}: no host")))?;
        let host = match endpoint.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };

        let http = self.http_client.unwrap_or_else(|| {
            reqwest::Client::builder()
                .connect_timeout(self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT))
                .timeout(self.read_timeout.unwrap_or(DEFAULT_READ_TIMEOUT))
                .build()
                .expect("failed to build HTTP client")
        });

        Ok(RekognitionClient {
            http,
            endpoint,
            host,
            region,
            access_key,
            secret_key: SecretString::from(secret_key),
        })
    }
}
