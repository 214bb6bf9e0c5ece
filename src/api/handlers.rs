// Student filtering endpoint handlers

use std::convert::Infallible;
use std::sync::Arc;

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Request, Response, StatusCode};

use super::response::{bad_request, json_response, payload_too_large};
use super::types::ThresholdRequest;
use crate::config::AppState;
use crate::filter;
use crate::logger;

const THRESHOLD_PATH: &str = "/students/above-threshold";

/// POST /students/above-threshold
///
/// Validates the threshold, scans the roster once, and returns the
/// projected matches in roster order.
pub async fn handle_above_threshold(
    req: Request<hyper::body::Incoming>,
    state: &Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    // Reject oversized bodies before buffering them
    if let Some(len) = content_length(&req) {
        let max = state.config.http.max_body_size;
        if len > max {
            logger::log_warning(&format!("Request body too large: {len} bytes (max: {max})"));
            logger::log_api_request("POST", THRESHOLD_PATH, 413);
            return Ok(payload_too_large());
        }
    }

    // Read request body
    let whole_body = if let Ok(collected) = req.collect().await {
        collected.to_bytes()
    } else {
        logger::log_api_request("POST", THRESHOLD_PATH, 400);
        return Ok(bad_request());
    };

    // A body that is not a JSON object cannot carry a threshold, so it
    // gets the same validation failure as a bad threshold field
    let threshold = match serde_json::from_slice::<ThresholdRequest>(&whole_body)
        .map_err(|_| filter::ThresholdError)
        .and_then(|body| filter::parse_threshold(&body.threshold))
    {
        Ok(t) => t,
        Err(_) => {
            logger::log_api_request("POST", THRESHOLD_PATH, 400);
            return Ok(bad_request());
        }
    };

    let result = filter::above_threshold(state.roster.students(), threshold);

    logger::log_api_request("POST", THRESHOLD_PATH, 200);
    json_response(StatusCode::OK, &result)
}

/// Parse the Content-Length header if present and well-formed
fn content_length(req: &Request<hyper::body::Incoming>) -> Option<u64> {
    req.headers()
        .get(hyper::header::CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}
