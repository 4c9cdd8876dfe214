/// Result alias used across the crate.
pub type ReticleResult<T> = Result<T, ReticleError>;

/// Boundary errors.
///
/// The cursor core itself is total; these only surface from scene/config parsing and
/// validation, rasterization limits and CLI IO.
#[derive(thiserror::Error, Debug)]
pub enum ReticleError {
    /// Invalid configuration or input value.
    #[error("validation error: {0}")]
    Validation(String),

    /// Scene definition or script problem (unknown element id, bad keyframes, ...).
    #[error("scene error: {0}")]
    Scene(String),

    /// Rasterization failure.
    #[error("render error: {0}")]
    Render(String),

    /// JSON encode/decode failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error (IO, etc).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReticleError {
    /// Build a [`ReticleError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReticleError::Scene`].
    pub fn scene(msg: impl Into<String>) -> Self {
        Self::Scene(msg.into())
    }

    /// Build a [`ReticleError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ReticleError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
