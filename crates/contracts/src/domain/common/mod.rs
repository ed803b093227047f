//! Common types shared by all domain contracts

use thiserror::Error;

/// Ответ API разобран, но его форма не соответствует контракту
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("{0} data is missing")]
    MissingField(&'static str),
}
