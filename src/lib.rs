//! Ticketwatch: command-line client for the bus ticket monitoring service.
//!
//! Users register monitoring pipelines that watch a route between two
//! terminals on a date, optionally narrowed by search and buy filters. This
//! crate holds the typed wire schemas, the file-backed client configuration,
//! the request executor and the command layer on top of them.

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
