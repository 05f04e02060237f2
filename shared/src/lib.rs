//! Shared types and the advisory engine for the Crop Stress Monitoring Platform
//!
//! This crate contains the pure core shared between the backend and the
//! browser (via WASM): reading snapshots, the threshold table, the
//! recommendation generator, the stress-score normalizer and range
//! validation. Nothing in here performs I/O.

pub mod advisory;
pub mod models;
pub mod score;
pub mod validation;

pub use advisory::*;
pub use models::*;
pub use score::*;
pub use validation::*;
