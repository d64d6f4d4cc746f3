use super::shared::{heading, new_table, status};
use crate::model::{Filter, Pipeline, Terminal};
use chrono::NaiveTime;

fn route(origin: &Terminal, dest: &Terminal) -> String {
    format!("{} -> {}", origin.name, dest.name)
}

fn time_bound(time: Option<NaiveTime>) -> String {
    time.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "any".to_string())
}

fn price_bound(price: Option<u64>) -> String {
    price
        .map(|p| p.to_string())
        .unwrap_or_else(|| "any".to_string())
}

fn terminal_names(terminals: &[Terminal]) -> String {
    terminals
        .iter()
        .map(|t| t.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_filter(filter: Option<&Filter>) -> String {
    let Some(filter) = filter else {
        return "none".to_string();
    };
    let mut parts = vec![
        format!(
            "time {}-{}",
            time_bound(filter.start_time),
            time_bound(filter.end_time)
        ),
        format!(
            "price {}-{}",
            price_bound(filter.start_price),
            price_bound(filter.end_price)
        ),
    ];
    if !filter.origin_terminals.is_empty() {
        parts.push(format!("from {}", terminal_names(&filter.origin_terminals)));
    }
    if !filter.dest_terminals.is_empty() {
        parts.push(format!("to {}", terminal_names(&filter.dest_terminals)));
    }
    parts.join(", ")
}

fn active_label(pipeline: &Pipeline, color: bool) -> String {
    if pipeline.active {
        status("active", true, color)
    } else {
        status("inactive", false, color)
    }
}

pub fn format_pipeline_text(pipeline: &Pipeline, color: bool) -> String {
    let mut output = heading(
        &format!("Pipeline #{} ({})", pipeline.id, active_label(pipeline, color)),
        color,
    );
    output.push('\n');
    output.push_str(&format!("  Description:   {}\n", pipeline.desc));
    output.push_str(&format!("  Date:          {}\n", pipeline.date));
    output.push_str(&format!(
        "  Route:         {}\n",
        route(&pipeline.origin_terminal, &pipeline.dest_terminal)
    ));
    output.push_str(&format!(
        "  Search filter: {}\n",
        describe_filter(pipeline.search_filter.as_ref())
    ));
    output.push_str(&format!(
        "  Buy filter:    {}",
        describe_filter(pipeline.buy_filter.as_ref())
    ));
    output
}

pub fn format_pipeline_list_text(pipelines: &[Pipeline]) -> String {
    if pipelines.is_empty() {
        return "No pipelines found.\n\nUse 'ticketwatch pipelines create' to add one.".to_string();
    }
    let mut table = new_table();
    table.set_header(vec!["ID", "Date", "Route", "Description", "Status"]);
    for pipeline in pipelines {
        table.add_row(vec![
            pipeline.id.to_string(),
            pipeline.date.to_string(),
            route(&pipeline.origin_terminal, &pipeline.dest_terminal),
            pipeline.desc.clone(),
            active_label(pipeline, false),
        ]);
    }
    format!("{}\nTotal: {} pipeline(s)", table, pipelines.len())
}

pub fn format_pipeline_deleted_text(pipeline: &Pipeline) -> String {
    format!(
        "Deleted pipeline #{} ({}, {})",
        pipeline.id,
        route(&pipeline.origin_terminal, &pipeline.dest_terminal),
        pipeline.date
    )
}
