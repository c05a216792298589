//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, route
//! matching, dispatching, and access logging.

use crate::config::AppState;
use crate::handler::scripts;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::routing::{self, Dispatch};
use crate::script::{self, ReadOutcome};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Redirect status used for `/`, matching a temporary redirect
const ROOT_REDIRECT_CODE: u16 = 307;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();

    let response = if req.method() == Method::GET {
        route_request(req.uri().path(), &state).await
    } else {
        logger::log_warning(&format!("Method not allowed: {}", req.method()));
        http::build_405_response()
    };

    if state.config.logging.access_log {
        let entry = access_entry(&req, &response, peer_addr, started);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route a GET request path to the landing page, redirect, or script handler
pub async fn route_request(path: &str, state: &AppState) -> Response<Full<Bytes>> {
    match routing::match_route(path, &state.routes) {
        Some(Dispatch::Redirect(target)) => {
            http::build_redirect_response_with_code(&target, ROOT_REDIRECT_CODE)
        }
        Some(Dispatch::Landing) => http::build_html_response(state.landing_html.clone()),
        Some(Dispatch::Script(kind)) => {
            http::build_script_response(scripts::serve_script(&kind, state).await)
        }
        Some(Dispatch::Undecodable(kind)) => {
            logger::log_warning(&format!("Request path is not valid UTF-8: {path}"));
            http::build_script_response(script::build(&kind, ReadOutcome::Absent))
        }
        None => http::build_404_response(),
    }
}

fn access_entry<B>(
    req: &Request<B>,
    response: &Response<Full<Bytes>>,
    peer_addr: SocketAddr,
    started: Instant,
) -> AccessLogEntry {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = version_label(req.version()).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0);
    entry.referer = header("referer");
    entry.user_agent = header("user-agent");
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}

fn version_label(version: hyper::Version) -> &'static str {
    match version {
        hyper::Version::HTTP_10 => "1.0",
        hyper::Version::HTTP_2 => "2",
        _ => "1.1",
    }
}
