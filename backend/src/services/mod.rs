//! Business logic services for the Crop Stress Monitoring Platform

pub mod advisory;

pub use advisory::AdvisoryService;
