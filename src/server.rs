//! HTTP boundary.
//!
//! A small `tiny_http` loop exposing the dashboard endpoint and a health
//! check. The async fetch pipeline runs on the Tokio runtime handed in by
//! the binary; rendering itself is synchronous and pure.
//!
//! Query strings are parsed with plain splitting — every recognized value
//! (usernames, theme names, alignment modes) is a plain token, so percent
//! decoding is not needed.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use serde_json::json;
use tiny_http::{Header, Request, Response, Server, StatusCode};
use tokio::runtime::Handle;
use tracing::{info, warn};

use crate::compose::render_dashboard;
use crate::fetch::{DataSource, ProfileService};
use crate::theme;
use crate::types::Alignment;

/// Shared-cache lifetime advertised to clients: 30 minutes.
const CACHE_MAX_AGE: u64 = 1800;

/// Accept requests forever. Each request runs the fetch pipeline to
/// completion on the given runtime before the next one is read.
pub fn serve<S: DataSource>(
    service: Arc<ProfileService<S>>,
    port: u16,
    runtime: Handle,
) -> Result<()> {
    let server =
        Server::http(("0.0.0.0", port)).map_err(|e| anyhow!("failed to bind port {port}: {e}"))?;
    info!(port, "listening");

    for request in server.incoming_requests() {
        if let Err(error) = handle_request(request, &service, &runtime) {
            warn!(%error, "request handling failed");
        }
    }

    Ok(())
}

fn handle_request<S: DataSource>(
    request: Request,
    service: &ProfileService<S>,
    runtime: &Handle,
) -> Result<()> {
    let url = request.url().to_string();
    let (path, query) = url.split_once('?').unwrap_or((url.as_str(), ""));

    match path {
        "/health" => respond_json(request, 200, &json!({ "status": "ok" })),
        "/api/profile" => respond_profile(request, query, service, runtime),
        _ => respond_json(request, 404, &json!({ "error": "not found" })),
    }
}

fn respond_profile<S: DataSource>(
    request: Request,
    query: &str,
    service: &ProfileService<S>,
    runtime: &Handle,
) -> Result<()> {
    let params = parse_query(query);

    let Some(username) = params.get("username").filter(|u| !u.is_empty()) else {
        return respond_json(
            request,
            400,
            &json!({ "error": "username query parameter is required" }),
        );
    };

    let theme = theme::named(params.get("theme").map(String::as_str).unwrap_or(""));
    let alignment = Alignment::parse(params.get("align").map(String::as_str).unwrap_or(""));
    let coding_handle = params
        .get("leetcode")
        .map(String::as_str)
        .and_then(normalize_judge_handle);

    info!(%username, theme = theme.name, "rendering dashboard");

    match runtime.block_on(service.load_dashboard(username, coding_handle)) {
        Ok(data) => {
            let svg = render_dashboard(&data, theme, alignment);
            respond_svg(request, svg)
        }
        Err(error) => {
            warn!(%username, %error, "mandatory profile fetch failed");
            respond_json(request, 500, &json!({ "error": error.to_string() }))
        }
    }
}

/// Map the coding-judge query value to a handle, treating the disable
/// sentinels as absent.
fn normalize_judge_handle(value: &str) -> Option<&str> {
    match value {
        "" | "none" | "disabled" | "false" => None,
        handle => Some(handle),
    }
}

/// Split a query string into key/value pairs. Later duplicates win.
fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

fn respond_svg(request: Request, body: String) -> Result<()> {
    let response = Response::from_string(body)
        .with_header(make_header("Content-Type", "image/svg+xml"))
        .with_header(make_header(
            "Cache-Control",
            &format!("public, max-age={CACHE_MAX_AGE}"),
        ));
    request.respond(response)?;
    Ok(())
}

fn respond_json(request: Request, status: u16, body: &serde_json::Value) -> Result<()> {
    let response = Response::from_string(body.to_string())
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", "application/json"));
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &str, value: &str) -> Header {
    Header::from_bytes(key, value).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_parsing_handles_pairs_and_bare_keys() {
        let params = parse_query("username=octocat&theme=nord&flag");
        assert_eq!(params.get("username").unwrap(), "octocat");
        assert_eq!(params.get("theme").unwrap(), "nord");
        assert_eq!(params.get("flag").unwrap(), "");
        assert!(parse_query("").is_empty());
    }

    #[test]
    fn later_duplicate_params_win() {
        let params = parse_query("theme=dark&theme=nord");
        assert_eq!(params.get("theme").unwrap(), "nord");
    }

    #[test]
    fn judge_sentinels_disable_the_integration() {
        assert_eq!(normalize_judge_handle(""), None);
        assert_eq!(normalize_judge_handle("none"), None);
        assert_eq!(normalize_judge_handle("disabled"), None);
        assert_eq!(normalize_judge_handle("false"), None);
        assert_eq!(normalize_judge_handle("octocat"), Some("octocat"));
    }
}
