use super::shared::{new_table, status};
use crate::model::License;

fn license_status(license: &License, color: bool) -> String {
    if license.used {
        status("used", false, color)
    } else {
        status("available", true, color)
    }
}

pub fn format_license_text(license: &License, color: bool) -> String {
    format!(
        "License #{}: {} ({})",
        license.id,
        license.value,
        license_status(license, color)
    )
}

pub fn format_license_list_text(licenses: &[License]) -> String {
    if licenses.is_empty() {
        return "No licenses found.".to_string();
    }
    let mut table = new_table();
    table.set_header(vec!["ID", "Value", "Status"]);
    for license in licenses {
        table.add_row(vec![
            license.id.to_string(),
            license.value.clone(),
            license_status(license, false),
        ]);
    }
    format!("{}\nTotal: {} license(s)", table, licenses.len())
}
