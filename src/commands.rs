//! Command services: one per resource group. Each operation builds a typed
//! request, hands it to the [`ApiClient`](crate::client::ApiClient) and
//! returns the validated read schema. No output formatting happens here.

use serde::Serialize;

mod diagnostics;
mod license;
mod pipeline;
mod terminal;
mod user;

pub use diagnostics::DiagnosticsCommandService;
pub use license::LicenseCommandService;
pub use pipeline::PipelineCommandService;
pub use terminal::TerminalCommandService;
pub use user::UserCommandService;

/// Offset pagination accepted by the list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    pub skip: u32,
    pub limit: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: 100,
        }
    }
}
