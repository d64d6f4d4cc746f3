//! Shared test utilities for integration tests
//!
//! Provides a minimal in-process HTTP server that answers with canned
//! responses and records what the client sent, plus helpers for running CLI
//! commands against an isolated config file.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use ticketwatch::cli::{Cli, RunContext};
use ticketwatch::error::ClientError;

use clap::Parser;

/// One request as seen by the stub server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path plus query string, as on the request line
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or("")
    }

    pub fn query(&self) -> Option<&str> {
        self.target.split_once('?').map(|(_, q)| q)
    }

    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is not JSON")
    }
}

/// Serves canned `(status, body)` responses in order, one per connection.
pub struct StubServer {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: Option<JoinHandle<()>>,
}

impl StubServer {
    pub fn start(responses: Vec<(u16, &str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);
        let responses: Vec<(u16, String)> = responses
            .into_iter()
            .map(|(status, body)| (status, body.to_string()))
            .collect();

        let handle = std::thread::spawn(move || {
            for (status, body) in responses {
                let (mut stream, _) = match listener.accept() {
                    Ok(conn) => conn,
                    Err(_) => return,
                };
                if let Some(request) = read_request(&mut stream) {
                    recorded.lock().unwrap().push(request);
                }
                let response = format!(
                    "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });

        Self {
            base_url,
            requests,
            handle: Some(handle),
        }
    }

    /// Serve a single 200 response.
    pub fn ok(body: &str) -> Self {
        Self::start(vec![(200, body)])
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Wait until every canned response was served and return the recorded requests.
    pub fn finish(mut self) -> Vec<RecordedRequest> {
        if let Some(handle) = self.handle.take() {
            handle.join().unwrap();
        }
        self.requests.lock().unwrap().clone()
    }
}

fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let request_line = lines.next()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let target = parts.next()?.to_string();

    let headers: Vec<(String, String)> = lines
        .filter(|l| !l.is_empty())
        .filter_map(|l| l.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = buf[header_end..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }

    Some(RecordedRequest {
        method,
        target,
        headers,
        body: String::from_utf8_lossy(&body).to_string(),
    })
}

/// A base URL nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Parse `args` as a command line (program name implied) and run it against
/// the config file at `config_path`.
pub fn run_cli(config_path: &Path, base_url: &str, args: &[&str]) -> Result<String, ClientError> {
    let mut argv = vec![
        "ticketwatch".to_string(),
        "--config".to_string(),
        config_path.display().to_string(),
        "--base-url".to_string(),
        base_url.to_string(),
    ];
    argv.extend(args.iter().map(|a| a.to_string()));
    let cli = Cli::try_parse_from(argv).expect("command line should parse");
    let mut context = RunContext::new(cli.config.clone(), cli.base_url.as_deref(), &cli.format)?;
    context.execute(&cli.command)
}

pub fn terminal_json(id: u64, name: &str) -> String {
    format!(r#"{{"id": {}, "name": "{}"}}"#, id, name)
}

pub fn pipeline_json(id: u64) -> String {
    format!(
        r#"{{
            "id": {},
            "desc": "trip",
            "date": "2026-11-02",
            "origin_terminal": {{"id": 1, "name": "North"}},
            "dest_terminal": {{"id": 2, "name": "South"}},
            "search_filter": null,
            "buy_filter": null,
            "owner": {{"gotify_app_token": "tok"}},
            "active": true
        }}"#,
        id
    )
}
