use thiserror::Error;

use crate::domain::{Complexity, Modality};

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// Data errors in the static catalog. These are programming errors and are
/// reported once, at startup validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("rate table has no price for {complexity:?} × {modality:?}")]
    MissingRate { complexity: Complexity, modality: Modality },

    #[error("rate table price for {complexity:?} × {modality:?} must be positive")]
    NonPositiveRate { complexity: Complexity, modality: Modality },

    #[error("rate table lists {complexity:?} × {modality:?} more than once")]
    DuplicateRate { complexity: Complexity, modality: Modality },

    #[error("standard code {0} appears more than once")]
    DuplicateCode(String),

    #[error("catalog contains no standards")]
    Empty,
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::new(4, format!("Catalog misconfiguration: {err}"))
    }
}
