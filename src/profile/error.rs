use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("No profile available")]
    NoProfile,

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Failed to serialize profile: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Timeline storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Render failed: {0}")]
    Render(String),
}

impl ProfileError {
    /// True for errors caused by something that does not exist yet
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProfileError::NoProfile | ProfileError::SessionNotFound(_))
    }
}
