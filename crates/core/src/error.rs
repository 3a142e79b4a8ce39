use thiserror::Error;
use uuid::Uuid;

pub type BrandPulseResult<T> = Result<T, BrandPulseError>;

#[derive(Error, Debug)]
pub enum BrandPulseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Generative backend error: {0}")]
    Backend(String),

    #[error("Campaign {0} not found")]
    CampaignNotFound(Uuid),

    #[error("Client {0} not found")]
    ClientNotFound(Uuid),

    #[error("Campaign {0} already has a headline test running")]
    TestAlreadyRunning(Uuid),

    #[error("Campaign {0} has no headline test running")]
    TestNotRunning(Uuid),

    #[error("Headline test requires at least one non-blank variant")]
    EmptyVariants,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
