use lambda_http::http::header::{HeaderValue, ALLOW, CONTENT_TYPE};
use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::Serialize;

use crate::error::GalleryError;
use crate::types::ErrorBody;

pub const ALLOWED_METHODS: &str = "GET, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type";

/// Attach the permissive CORS headers the public gallery page relies on
pub fn with_cors_headers(mut resp: Response<Body>) -> Response<Body> {
    let headers = resp.headers_mut();
    headers.insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    resp
}

pub fn preflight_response() -> Result<Response<Body>, Error> {
    let resp = Response::builder()
        .status(StatusCode::OK)
        .body(Body::Empty)
        .map_err(Box::new)?;
    Ok(with_cors_headers(resp))
}

pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response<Body>, Error> {
    let resp = Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(serde_json::to_string(body)?.into())
        .map_err(Box::new)?;
    Ok(with_cors_headers(resp))
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Result<Response<Body>, Error> {
    json_response(status, &ErrorBody { error: message.into() })
}

pub fn gallery_error_response(err: &GalleryError) -> Result<Response<Body>, Error> {
    error_response(err.status_code(), err.public_message())
}

pub fn method_not_allowed() -> Result<Response<Body>, Error> {
    let mut resp = error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")?;
    resp.headers_mut()
        .insert(ALLOW, HeaderValue::from_static(ALLOWED_METHODS));
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_cors(resp: &Response<Body>) {
        let headers = resp.headers();
        assert_eq!(headers["Access-Control-Allow-Origin"], "*");
        assert_eq!(headers["Access-Control-Allow-Methods"], "GET, OPTIONS");
        assert_eq!(headers["Access-Control-Allow-Headers"], "Content-Type");
    }

    #[test]
    fn test_preflight_has_no_body() {
        let resp = preflight_response().unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(matches!(resp.body(), Body::Empty));
        assert_cors(&resp);
    }

    #[test]
    fn test_error_response_shape() {
        let resp = error_response(StatusCode::INTERNAL_SERVER_ERROR, "Server error").unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");
        assert_cors(&resp);

        let body: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Server error" }));
    }

    #[test]
    fn test_method_not_allowed() {
        let resp = method_not_allowed().unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers()[ALLOW], "GET, OPTIONS");
        assert_cors(&resp);
    }
}
