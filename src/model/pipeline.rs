use super::{require_non_blank, Filter, FilterCreate, Terminal};
use crate::error::ClientError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The part of a pipeline's owner the server exposes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationOwner {
    #[serde(rename = "gotify_app_token")]
    pub notification_token: String,
}

/// A monitoring task as returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    pub id: u64,
    pub desc: String,
    pub date: NaiveDate,
    pub origin_terminal: Terminal,
    pub dest_terminal: Terminal,
    pub search_filter: Option<Filter>,
    pub buy_filter: Option<Filter>,
    pub owner: NotificationOwner,
    pub active: bool,
}

/// Pipeline payload. Filters are left out of the JSON when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineCreate {
    pub desc: String,
    pub date: NaiveDate,
    pub origin_terminal: String,
    pub dest_terminal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_filter: Option<FilterCreate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_filter: Option<FilterCreate>,
}

impl PipelineCreate {
    /// `date` is an ISO calendar date (`YYYY-MM-DD`).
    pub fn new(
        desc: impl Into<String>,
        date: &str,
        origin_terminal: impl Into<String>,
        dest_terminal: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| {
            ClientError::Validation(format!(
                "'{}' is not a calendar date (expected YYYY-MM-DD)",
                date
            ))
        })?;
        Ok(Self {
            desc: desc.into(),
            date,
            origin_terminal: require_non_blank("origin_terminal", origin_terminal.into())?,
            dest_terminal: require_non_blank("dest_terminal", dest_terminal.into())?,
            search_filter: None,
            buy_filter: None,
        })
    }

    pub fn with_search_filter(mut self, filter: Option<FilterCreate>) -> Self {
        self.search_filter = filter;
        self
    }

    pub fn with_buy_filter(mut self, filter: Option<FilterCreate>) -> Self {
        self.buy_filter = filter;
        self
    }
}
