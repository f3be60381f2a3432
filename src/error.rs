use thiserror::Error;

use crate::Key;

/// Errors returned by table lookups.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
  #[error("key not found: {0}")]
  KeyNotFound(Key),
}
