use thiserror::Error;

/// Fatal failures. Rule-level rejections are not errors; they are returned
/// as `RegistrationOutcome::Rejected` values by the registrar.
#[derive(Error, Debug)]
pub enum PodiumError {
    #[error("speaker store failure: {message}")]
    Store { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, PodiumError>;
