/// Convenience result type used across the crate.
pub type InviteResult<T> = Result<T, InviteError>;

/// Top-level error taxonomy used by the invitation APIs.
#[derive(thiserror::Error, Debug)]
pub enum InviteError {
    /// Invalid user-provided or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures reading or writing the persisted key/value state.
    #[error("storage error: {0}")]
    Storage(String),

    /// Failures while building or rasterizing the invitation image.
    #[error("render error: {0}")]
    Render(String),

    /// Failures while encoding or saving the exported image.
    #[error("export error: {0}")]
    Export(String),

    /// A share capability rejected the payload.
    #[error("share error: {0}")]
    Share(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InviteError {
    /// Build an [`InviteError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`InviteError::Storage`] value.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Build an [`InviteError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`InviteError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build an [`InviteError::Share`] value.
    pub fn share(msg: impl Into<String>) -> Self {
        Self::Share(msg.into())
    }

    /// Build an [`InviteError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
