/// Result alias for fallible startup and decoding APIs.
pub type BackdropResult<T> = Result<T, BackdropError>;

/// Errors raised while loading or validating startup configuration.
///
/// Per-request input never produces one of these: malformed options degrade to defaults.
#[derive(thiserror::Error, Debug)]
pub enum BackdropError {
    /// Invalid option tables, payload fields or media paths.
    #[error("validation error: {0}")]
    Validation(String),

    /// A locale table that is malformed or disagrees with another registered locale.
    #[error("locale table error: {0}")]
    Locale(String),

    /// JSON that could not be parsed into the expected shape.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error, such as an unreadable image file.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BackdropError {
    /// Build a [`BackdropError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BackdropError::Locale`] value.
    pub fn locale(msg: impl Into<String>) -> Self {
        Self::Locale(msg.into())
    }

    /// Build a [`BackdropError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
