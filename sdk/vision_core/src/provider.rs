//! The pluggable provider interface.

use std::any::Any;

use async_trait::async_trait;

use crate::blob::Blob;
use crate::error::VisionResult;
use crate::feature::VisionFeature;
use crate::response::VisionResponse;

/// Capability interface implemented by each vision backend adapter.
///
/// One provider instance is bound to one configured backend entry. All
/// methods are safe to call concurrently from multiple threads sharing
/// the same instance.
#[async_trait]
pub trait VisionProvider: Send + Sync {
    /// Runs the requested detection features over a batch of blobs.
    ///
    /// Returns exactly one response per submitted blob, in input order.
    /// Callers are expected to validate the batch with
    /// [`check_blobs`](Self::check_blobs) first; this method does not
    /// re-validate. The first remote failure aborts the batch and
    /// propagates unchanged; there is no retry and no partial result.
    async fn execute(
        &self,
        blobs: &[Blob],
        features: &[VisionFeature],
        max_results: u32,
    ) -> VisionResult<Vec<VisionResponse>>;

    /// Checks whether a batch satisfies the backend's size and format limits.
    ///
    /// Validation is all-or-nothing: a single disqualifying blob rejects
    /// the whole batch. A blob whose size cannot be determined fails with
    /// [`VisionError::Io`](crate::error::VisionError::Io); limit violations
    /// return `Ok(false)` rather than an error.
    fn check_blobs(&self, blobs: &[Blob]) -> VisionResult<bool>;

    /// Returns the features this backend advertises.
    ///
    /// This is a static capability declaration, not negotiated with the
    /// remote service.
    fn supported_features(&self) -> Vec<VisionFeature>;

    /// Returns the backend-specific client as an opaque handle.
    ///
    /// The handle is non-portable: callers must downcast it to the
    /// adapter's concrete client type. Constructs the client on first use;
    /// construction failures propagate.
    fn native_client(&self) -> VisionResult<&(dyn Any + Send + Sync)>;
}
