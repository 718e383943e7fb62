use thiserror::Error;

/// The only failure the calculator reports. The reason is kept for logging;
/// the user always sees the same message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CreditError {
    #[error("Incorrect parameters")]
    InvalidParameters { reason: String },
}

impl CreditError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        CreditError::InvalidParameters {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            CreditError::InvalidParameters { reason } => reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, CreditError>;
