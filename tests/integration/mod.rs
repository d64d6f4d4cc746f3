//! Integration tests for the ticketwatch client

mod login_flow;
mod pipelines_cli;
mod test_utils;
