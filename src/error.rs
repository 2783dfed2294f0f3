use thiserror::Error;

/// Failures while reading or overriding configuration values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Unknown config key: {0}")]
    UnknownKey(String),

    #[error("Invalid value '{value}' for {key}: expected {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },

    #[error("Malformed override '{0}': expected key=value")]
    MalformedOverride(String),
}

/// Lookups into the bundled static content.
#[derive(Debug, Error, PartialEq)]
pub enum ContentError {
    #[error("Unknown docs section '{id}'. Available: {available}")]
    UnknownSection { id: String, available: String },
}
