use super::shared::new_table;
use crate::model::Terminal;

pub fn format_terminal_text(terminal: &Terminal) -> String {
    format!("Terminal #{}: {}", terminal.id, terminal.name)
}

pub fn format_terminal_list_text(terminals: &[Terminal]) -> String {
    if terminals.is_empty() {
        return "No terminals found.".to_string();
    }
    let mut table = new_table();
    table.set_header(vec!["ID", "Name"]);
    for terminal in terminals {
        table.add_row(vec![terminal.id.to_string(), terminal.name.clone()]);
    }
    format!("{}\nTotal: {} terminal(s)", table, terminals.len())
}
