//! Response writing.
//!
//! # Responsibilities
//! - Define the write target handed to route behaviors
//! - Record status, headers and body in memory
//! - Convert a recorded response into an Axum response
//!
//! # Design Decisions
//! - First status wins; later calls are ignored and logged
//! - Writing the body without a status implies 200 OK
//! - Recording is fully in memory: test bodies are small

use axum::{
    body::{Body, Bytes},
    http::{
        header::{CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS},
        HeaderMap, HeaderValue, StatusCode,
    },
    response::{IntoResponse, Response},
};

/// Body written by the not-found response.
pub const NOT_FOUND_BODY: &str = "404 page not found\n";

/// Write target for a single response.
pub trait ResponseWriter {
    /// Set the response status code.
    fn set_status(&mut self, status: StatusCode);

    /// Append bytes to the response body.
    fn write_body(&mut self, bytes: &[u8]);

    /// Mutable access to the response headers.
    fn headers_mut(&mut self) -> &mut HeaderMap;
}

/// Write the standard 404 response.
pub fn not_found(w: &mut dyn ResponseWriter) {
    let headers = w.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    w.set_status(StatusCode::NOT_FOUND);
    w.write_body(NOT_FOUND_BODY.as_bytes());
}

/// In-memory `ResponseWriter`.
#[derive(Debug, Default, Clone)]
pub struct ResponseRecorder {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ResponseRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded status, 200 if none was set.
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body as text, with invalid UTF-8 replaced.
    pub fn body_str(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl ResponseWriter for ResponseRecorder {
    fn set_status(&mut self, status: StatusCode) {
        match self.status {
            Some(current) => {
                tracing::warn!(
                    current = %current,
                    ignored = %status,
                    "Superfluous status write"
                );
            }
            None => self.status = Some(status),
        }
    }

    fn write_body(&mut self, bytes: &[u8]) {
        if self.status.is_none() {
            self.status = Some(StatusCode::OK);
        }
        self.body.extend_from_slice(bytes);
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
}

impl IntoResponse for ResponseRecorder {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut response = Response::new(Body::from(Bytes::from(self.body)));
        *response.status_mut() = status;
        *response.headers_mut() = self.headers;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status_is_ok() {
        let rec = ResponseRecorder::new();
        assert_eq!(rec.status(), StatusCode::OK);
        assert!(rec.body().is_empty());
    }

    #[test]
    fn test_first_status_wins() {
        let mut rec = ResponseRecorder::new();
        rec.set_status(StatusCode::CREATED);
        rec.set_status(StatusCode::ACCEPTED);
        assert_eq!(rec.status(), StatusCode::CREATED);
    }

    #[test]
    fn test_body_write_implies_ok() {
        let mut rec = ResponseRecorder::new();
        rec.write_body(b"hello");
        rec.set_status(StatusCode::IM_A_TEAPOT);
        assert_eq!(rec.status(), StatusCode::OK);
        assert_eq!(rec.body_str(), "hello");
    }

    #[test]
    fn test_not_found() {
        let mut rec = ResponseRecorder::new();
        not_found(&mut rec);
        assert_eq!(rec.status(), StatusCode::NOT_FOUND);
        assert_eq!(rec.body_str(), NOT_FOUND_BODY);
        assert_eq!(rec.headers()[CONTENT_TYPE], "text/plain; charset=utf-8");
        assert_eq!(rec.headers()[X_CONTENT_TYPE_OPTIONS], "nosniff");
    }

    #[test]
    fn test_into_response() {
        let mut rec = ResponseRecorder::new();
        rec.headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        rec.set_status(StatusCode::ACCEPTED);
        rec.write_body(b"done");

        let response = rec.into_response();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(response.headers()[CONTENT_TYPE], "text/plain");
    }
}
