//! View error types

use ekos_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("No page for path: {0}")]
    UnknownRoute(String),
}

pub type Result<T> = std::result::Result<T, ViewError>;
