#![doc = include_str!("../README.md")]

pub mod client;
pub mod provider;
mod response;
mod sign;

pub use client::{RekognitionClient, RekognitionClientBuilder};
pub use provider::RekognitionProvider;
