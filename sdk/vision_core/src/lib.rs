#![doc = include_str!("../README.md")]

pub mod blob;
pub mod config;
pub mod error;
pub mod feature;
pub mod provider;
pub mod response;

pub use blob::Blob;
pub use config::ProviderConfig;
pub use error::{VisionError, VisionResult};
pub use feature::VisionFeature;
pub use provider::VisionProvider;
pub use response::{TextEntity, VisionResponse};
