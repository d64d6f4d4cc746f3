use super::require_non_blank;
use crate::error::ClientError;
use serde::{Deserialize, Serialize};

/// A bus station as returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terminal {
    pub id: u64,
    pub name: String,
}

/// Terminal registration payload. Terminal ids are chosen by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminalCreate {
    pub id: u64,
    pub name: String,
}

impl TerminalCreate {
    pub fn new(id: i64, name: impl Into<String>) -> Result<Self, ClientError> {
        let id = u64::try_from(id).map_err(|_| {
            ClientError::Validation(format!("terminal id must be non-negative, got {}", id))
        })?;
        Ok(Self {
            id,
            name: require_non_blank("terminal name", name.into())?,
        })
    }
}
