// API module entry
// JSON endpoints for the student roster service

mod handlers;
mod response;
mod types;

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::header::{HeaderValue, USER_AGENT};
use hyper::{Request, Response};

use crate::config::{AppState, HttpConfig};
use crate::logger;

/// Request entry point
///
/// Dispatches on method and path, applies the common response headers, and
/// writes the access log entry.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let user_agent = req
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);

    let mut resp = dispatch(req, &state, &method, &path).await?;
    apply_common_headers(&mut resp, &state.config.http);

    if state.config.logging.access_log {
        let mut entry = logger::AccessLogEntry::new(peer_addr.to_string(), method, path);
        entry.status = resp.status().as_u16();
        entry.body_bytes = resp.body().size_hint().exact().unwrap_or(0);
        entry.user_agent = user_agent;
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(resp)
}

/// Route the request to its handler
async fn dispatch(
    req: Request<hyper::body::Incoming>,
    state: &Arc<AppState>,
    method: &str,
    path: &str,
) -> Result<Response<Full<Bytes>>, Infallible> {
    match (method, path) {
        // The filter endpoint
        ("POST", "/students/above-threshold") => {
            handlers::handle_above_threshold(req, state).await
        }
        // Health probes
        ("GET", "/healthz" | "/readyz") => Ok(response::health_response()),
        // CORS preflight
        ("OPTIONS", _) => Ok(response::preflight_response(state.config.http.enable_cors)),
        // Known path, wrong method
        (_, "/students/above-threshold") => {
            logger::log_api_request(method, path, 405);
            Ok(response::method_not_allowed("POST"))
        }
        // Unknown route
        _ => {
            logger::log_api_request(method, path, 404);
            Ok(response::not_found())
        }
    }
}

/// Set the Server header and, when enabled, the CORS origin header
fn apply_common_headers(resp: &mut Response<Full<Bytes>>, http: &HttpConfig) {
    let headers = resp.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&http.server_name) {
        headers.insert(hyper::header::SERVER, value);
    }
    if http.enable_cors {
        headers.insert(
            hyper::header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        );
    }
}
