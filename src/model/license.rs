use super::require_non_blank;
use crate::error::ClientError;
use serde::{Deserialize, Serialize};

/// Single-use signup activation code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub id: u64,
    pub value: String,
    pub used: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LicenseCreate {
    pub value: String,
}

impl LicenseCreate {
    pub fn new(value: impl Into<String>) -> Result<Self, ClientError> {
        Ok(Self {
            value: require_non_blank("license value", value.into())?,
        })
    }
}
