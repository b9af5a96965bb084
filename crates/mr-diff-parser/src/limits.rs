//! Size guard applied to diff text before it is handed to the parser.

use thiserror::Error;

/// Errors raised when diff input is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LimitError {
    #[error("Diff input is {size} bytes, limit is {limit} bytes")]
    TooLarge { size: usize, limit: usize },
}

/// Upper bound on accepted diff input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputLimit {
    /// Maximum input length in bytes. `None` accepts anything.
    pub max_bytes: Option<usize>,
}

impl InputLimit {
    pub fn unlimited() -> Self {
        Self { max_bytes: None }
    }

    pub fn max_bytes(max_bytes: usize) -> Self {
        Self {
            max_bytes: Some(max_bytes),
        }
    }

    /// Reject input longer than the limit.
    pub fn check(&self, diff_text: &str) -> Result<(), LimitError> {
        match self.max_bytes {
            Some(limit) if diff_text.len() > limit => {
                log::warn!("Rejecting diff of {} bytes (limit {})", diff_text.len(), limit);
                Err(LimitError::TooLarge {
                    size: diff_text.len(),
                    limit,
                })
            }
            _ => Ok(()),
        }
    }
}
