// API response utility functions module

use std::convert::Infallible;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::filter::INVALID_THRESHOLD;
use crate::logger;

const CONTENT_TYPE_JSON: &str = "application/json";

/// Build JSON response
#[allow(clippy::unnecessary_wraps)]
pub fn json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return Ok(Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header("Content-Type", CONTENT_TYPE_JSON)
                .body(Full::new(Bytes::from(
                    r#"{"error":"Internal server error"}"#,
                )))
                .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error")))));
        }
    };

    Ok(Response::builder()
        .status(status)
        .header("Content-Type", CONTENT_TYPE_JSON)
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            Response::new(Full::new(Bytes::from("Error")))
        }))
}

/// 400 Bad Request with the fixed threshold validation message
pub fn bad_request() -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "error": INVALID_THRESHOLD });
    Response::builder()
        .status(StatusCode::BAD_REQUEST)
        .header("Content-Type", CONTENT_TYPE_JSON)
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Bad Request"))))
}

/// 404 Not Found response
pub fn not_found() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", CONTENT_TYPE_JSON)
        .body(Full::new(Bytes::from(
            r#"{"error":"Not Found","available_endpoints":["/students/above-threshold","/healthz","/readyz"]}"#,
        )))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Not Found"))))
}

/// 405 Method Not Allowed response
pub fn method_not_allowed(allow: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "error": "Method Not Allowed" });
    Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header("Content-Type", CONTENT_TYPE_JSON)
        .header("Allow", allow)
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Method Not Allowed"))))
}

/// 413 Payload Too Large response
pub fn payload_too_large() -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "error": "Request body too large" });
    Response::builder()
        .status(StatusCode::PAYLOAD_TOO_LARGE)
        .header("Content-Type", CONTENT_TYPE_JSON)
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Payload Too Large"))))
}

/// 200 health probe response
pub fn health_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", CONTENT_TYPE_JSON)
        .body(Full::new(Bytes::from(r#"{"status":"ok"}"#)))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("ok"))))
}

/// 204 preflight response; CORS headers only when enabled
pub fn preflight_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder().status(StatusCode::NO_CONTENT);
    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, GET, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type");
    }
    builder
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::new())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_fixed_message() {
        let resp = bad_request();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            CONTENT_TYPE_JSON
        );
    }

    #[test]
    fn test_bad_request_body_shape() {
        // The wire message is fixed and must not drift
        let body = serde_json::json!({ "error": INVALID_THRESHOLD });
        assert_eq!(
            body["error"],
            "Invalid threshold value. Please provide a valid number."
        );
    }

    #[test]
    fn test_method_not_allowed_sets_allow_header() {
        let resp = method_not_allowed("POST");
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers().get("Allow").unwrap(), "POST");
    }

    #[test]
    fn test_json_response_serializes() {
        let resp = json_response(StatusCode::OK, &serde_json::json!({"count": 0})).unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[test]
    fn test_preflight_cors_headers() {
        let with_cors = preflight_response(true);
        assert_eq!(with_cors.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            with_cors
                .headers()
                .get("Access-Control-Allow-Origin")
                .unwrap(),
            "*"
        );

        let without = preflight_response(false);
        assert!(without
            .headers()
            .get("Access-Control-Allow-Origin")
            .is_none());
    }
}
