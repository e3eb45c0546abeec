/// Convenience result type used across lintrans.
pub type LintransResult<T> = Result<T, LintransError>;

/// Error taxonomy shared by the library and the CLI.
#[derive(thiserror::Error, Debug)]
pub enum LintransError {
    /// Invalid configuration or target data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Matrix text that cannot be used, or a request made in the wrong mode.
    #[error("input error: {0}")]
    Input(String),

    /// Errors raised by a render backend.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LintransError {
    /// Build a [`LintransError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LintransError::Input`] value.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Build a [`LintransError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`LintransError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
