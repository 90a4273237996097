use thiserror::Error;

#[derive(Debug, Error)]
pub enum DietError {
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("No profile found: set one up with the 'profile' command")]
    ProfileNotFound,

    #[error("No diet found: calculate your diet first")]
    DietNotCalculated,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, DietError>;
