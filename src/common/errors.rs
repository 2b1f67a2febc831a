use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read content library: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed content library: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Article with slug {0:?} appears more than once")]
    DuplicateSlug(String),

    #[error("Article at position {0} has an empty slug")]
    MissingSlug(usize),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    #[error("Unknown dashboard panel: {0}")]
    Unknown(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeadError {
    #[error("A name is required")]
    MissingName,

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}
