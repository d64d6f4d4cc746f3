use super::Terminal;
use crate::error::ClientError;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Matching constraints attached to a pipeline, as returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    pub origin_terminals: Vec<Terminal>,
    pub dest_terminals: Vec<Terminal>,
    #[serde(default)]
    pub start_price: Option<u64>,
    #[serde(default)]
    pub end_price: Option<u64>,
}

/// Filter payload; terminals are referenced by id.
///
/// Time and price bounds always serialize, absent ones as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCreate {
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub origin_terminals: Vec<u64>,
    pub dest_terminals: Vec<u64>,
    pub start_price: Option<u64>,
    pub end_price: Option<u64>,
}

impl FilterCreate {
    /// Build a time-window filter from raw CLI input.
    ///
    /// Both bounds empty means no filter at all. Otherwise an empty bound
    /// maps to `None` and a non-empty one must parse as a time of day.
    pub fn from_time_bounds(start: &str, end: &str) -> Result<Option<Self>, ClientError> {
        if start.is_empty() && end.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self {
            start_time: optional_time("start_time", start)?,
            end_time: optional_time("end_time", end)?,
            ..Self::default()
        }))
    }
}

fn optional_time(field: &str, raw: &str) -> Result<Option<NaiveTime>, ClientError> {
    if raw.is_empty() {
        return Ok(None);
    }
    parse_time_of_day(raw)
        .map(Some)
        .map_err(|e| ClientError::Validation(format!("{}: {}", field, e)))
}

/// Parse `HH:MM` or `HH:MM:SS`.
pub fn parse_time_of_day(raw: &str) -> Result<NaiveTime, ClientError> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(|_| {
            ClientError::Validation(format!(
                "'{}' is not a time of day (expected HH:MM or HH:MM:SS)",
                raw
            ))
        })
}
