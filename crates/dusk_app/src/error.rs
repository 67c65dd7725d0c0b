//! Error types for dusk_app

use dusk_theme::ThemeConfigError;
use thiserror::Error;

/// Errors raised while setting up the toggle screen
#[derive(Debug, Error)]
pub enum DuskError {
    #[error(transparent)]
    ThemeConfig(#[from] ThemeConfigError),

    #[error("unknown animated property '{0}'")]
    UnknownProperty(String),

    #[error("unknown color element '{0}'")]
    UnknownElement(String),
}

pub type Result<T> = std::result::Result<T, DuskError>;
