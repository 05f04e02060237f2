//! Domain models for the Crop Stress Monitoring Platform

mod advisory;
mod prediction;
mod reading;

pub use advisory::*;
pub use prediction::*;
pub use reading::*;
