use thiserror::Error;

use crate::category::CategoryTag;

#[derive(Debug, Error)]
pub enum PageError {
    /// A required element was not found when the controller was assembled.
    #[error("required element not found: {selector}")]
    MissingElement { selector: String },

    #[error("unknown theme '{0}', expected 'light' or 'dark'")]
    UnknownTheme(String),

    #[error("invalid page config: {0}")]
    InvalidConfig(String),

    #[error("failed to parse page config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("no filter control at index {0}")]
    NoSuchControl(usize),

    #[error("no filter control for category '{0}'")]
    NoControlForCategory(CategoryTag),

    #[error("failed to attach listener: {0}")]
    Listener(String),
}

impl PageError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement {
            selector: selector.into(),
        }
    }
}

pub type PageResult<T> = Result<T, PageError>;
