//! Shared foundation for the BrandPulse marketing-operations platform:
//! configuration, error taxonomy, and the domain types used across crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{BrandPulseError, BrandPulseResult};
