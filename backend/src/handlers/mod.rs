//! HTTP handlers for the Crop Stress Monitoring Platform

pub mod advisory;
pub mod health;

pub use advisory::*;
pub use health::*;
