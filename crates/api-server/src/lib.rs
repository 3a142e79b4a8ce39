//! REST surface for the BrandPulse dashboard shell — clients, campaigns,
//! the dynamic rollout flow, content generation, and trends.

pub mod handlers;
pub mod models;
pub mod router;
pub mod server;

pub use handlers::AppState;
pub use server::ApiServer;
