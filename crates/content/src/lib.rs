//! Generative-content boundary for BrandPulse — the backend client that
//! produces social copy, images, and video, plus trend discovery and the
//! in-memory trend catalog.

pub mod backend;
pub mod trends;

pub use backend::GenerativeBackend;
pub use trends::TrendCatalog;
