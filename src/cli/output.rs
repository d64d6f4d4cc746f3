//! CLI output: error mapping from client errors to the stderr surface.

use crate::error::ClientError;

/// Map a client error to the message shown on stderr.
pub fn map_error(e: &ClientError) -> String {
    match e {
        ClientError::Transport {
            status: Some(401), ..
        } => format!("{}\nRun `ticketwatch login` to authenticate.", e),
        ClientError::Schema(_) => format!(
            "{}\nThe server may be running a different version than this client.",
            e
        ),
        _ => e.to_string(),
    }
}
