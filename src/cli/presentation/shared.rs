//! Shared presentation helpers.

use crate::error::ClientError;
use owo_colors::OwoColorize;
use serde::Serialize;

/// Pretty JSON rendering of any read schema.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ClientError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ClientError::Schema(format!("Failed to render JSON output: {}", e)))
}

pub(super) fn heading(title: &str, color: bool) -> String {
    if color {
        format!("{}", title.bold())
    } else {
        title.to_string()
    }
}

/// `label` in green when `good`, yellow otherwise.
pub(super) fn status(label: &str, good: bool, color: bool) -> String {
    match (color, good) {
        (false, _) => label.to_string(),
        (true, true) => format!("{}", label.green()),
        (true, false) => format!("{}", label.yellow()),
    }
}

pub(super) fn new_table() -> comfy_table::Table {
    let mut table = comfy_table::Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table
}
