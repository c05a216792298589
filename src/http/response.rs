//! HTTP response building module
//!
//! Builders for the handful of responses the server sends. None of them
//! can fail at runtime; a builder error is logged and replaced by a bare
//! response.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::script::ScriptResponse;

/// Build the response for a script or repository file route
pub fn build_script_response(script: ScriptResponse) -> Response<Full<Bytes>> {
    let status = script.status.code();
    let content_type = script.content_type();
    Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .body(Full::new(Bytes::from(script.body)))
        .unwrap_or_else(|e| {
            log_build_error(&status.to_string(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response for paths no route matches
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build redirect response with the given status code
pub fn build_redirect_response_with_code(target: &str, code: u16) -> Response<Full<Bytes>> {
    Response::builder()
        .status(code)
        .header("Location", target)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error(&code.to_string(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build generic HTML response
pub fn build_html_response(content: String) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ScriptStatus;
    use http_body_util::BodyExt;

    async fn body_text(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_script_response_not_found() {
        let resp = build_script_response(ScriptResponse {
            status: ScriptStatus::NotFound,
            body: "File not found: a.txt".to_string(),
        });
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["Content-Type"], "text/plain");
        assert!(resp.headers().get("Cache-Control").is_none());
        assert_eq!(body_text(resp).await, "File not found: a.txt");
    }

    #[test]
    fn test_redirect() {
        let resp = build_redirect_response_with_code("/agent-os", 307);
        assert_eq!(resp.status(), 307);
        assert_eq!(resp.headers()["Location"], "/agent-os");
    }

    #[test]
    fn test_405_allows_get_only() {
        let resp = build_405_response();
        assert_eq!(resp.status(), 405);
        assert_eq!(resp.headers()["Allow"], "GET");
    }
}
