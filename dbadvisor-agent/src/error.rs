use thiserror::Error;

/// Failures while assembling an analysis
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Payload is not a JSON object or lacks a required field
    #[error("Invalid project data: {message}")]
    InvalidProject { message: String },

    /// The provider prompt could not be rendered
    #[error("Failed to build provider prompt: {message}")]
    Prompt { message: String },
}

impl AnalysisError {
    pub fn invalid_project<S: Into<String>>(message: S) -> Self {
        Self::InvalidProject {
            message: message.into(),
        }
    }

    pub fn prompt<S: Into<String>>(message: S) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }
}
