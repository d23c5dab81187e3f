//! Binary payloads submitted for analysis.

use bytes::Bytes;

/// An opaque binary payload with a declared mime type.
///
/// Blobs are owned by the caller; providers only read them. The payload is
/// stored as [`Bytes`], so cloning a blob is cheap and does not copy the
/// underlying buffer.
#[derive(Debug, Clone)]
pub struct Blob {
    bytes: Bytes,
    mime_type: String,
}

impl Blob {
    /// Creates a blob from a payload and its declared mime type.
    ///
    /// The mime type is taken at face value; providers decide which types
    /// they accept via their blob validation rules.
    pub fn new(bytes: impl Into<Bytes>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Returns the payload length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the payload is empty.
    ///
    /// An empty payload is how an unreadable or indeterminate blob size
    /// surfaces here; providers reject such blobs before any network call.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the declared mime type.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Returns the raw payload bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
