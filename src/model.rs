//! Domain Model
//!
//! Wire schemas exchanged with the monitoring service. Each entity comes as a
//! pair: a `*Create` record holding the fields the client supplies, built
//! through a validating constructor, and a read record deserialized from the
//! server's response. Read records only check structure; business rules are
//! the server's responsibility.

use crate::error::ClientError;

mod filter;
mod license;
mod pipeline;
mod terminal;
mod token;
mod user;

pub use filter::{parse_time_of_day, Filter, FilterCreate};
pub use license::{License, LicenseCreate};
pub use pipeline::{NotificationOwner, Pipeline, PipelineCreate};
pub use terminal::{Terminal, TerminalCreate};
pub use token::{LoginRequest, Token};
pub use user::{User, UserCreate};

/// Reject empty or whitespace-only values for required text fields.
fn require_non_blank(field: &str, value: String) -> Result<String, ClientError> {
    if value.trim().is_empty() {
        return Err(ClientError::Validation(format!("{} must not be empty", field)));
    }
    Ok(value)
}
