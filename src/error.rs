pub type Result<T> = std::result::Result<T, DeskError>;

#[derive(Debug, thiserror::Error)]
pub enum DeskError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Unknown page: {0}")]
    UnknownPage(String),

    #[error("Unknown analytics period: {0}")]
    UnknownPeriod(String),

    #[error("Unknown {kind} label: {value}")]
    UnknownLabel { kind: &'static str, value: String },

    #[error("Invalid stage transition: {from} -> {to}")]
    InvalidTransition { from: &'static str, to: &'static str },

    #[error("Fixture {file}: {reason}")]
    Fixture { file: &'static str, reason: String },

    #[error("Fixture {file} failed schema validation: {}", errors.join("; "))]
    FixtureSchema { file: &'static str, errors: Vec<String> },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeskError {
    pub fn fixture(file: &'static str, reason: impl Into<String>) -> Self {
        DeskError::Fixture {
            file,
            reason: reason.into(),
        }
    }
}
