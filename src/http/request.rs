//! Inbound request metadata.
//!
//! # Responsibilities
//! - Capture method, path, query, headers and body of a dispatched request
//! - Hand that snapshot to custom route behaviors
//!
//! # Design Decisions
//! - Path is percent-decoded before matching; the raw form is kept
//! - Body is buffered before dispatch so behaviors stay synchronous
//! - Owned snapshot: no borrow of the transport's request outlives dispatch

use axum::{
    body::Bytes,
    http::{request::Parts, HeaderMap, Method},
};
use percent_encoding::percent_decode_str;

/// Snapshot of an inbound request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    method: Method,
    path: String,
    raw_path: String,
    query: Option<String>,
    headers: HeaderMap,
    body: Bytes,
}

impl RequestContext {
    /// Build a context with no headers, query or body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            method,
            raw_path: path.clone(),
            path,
            query: None,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// Build a context from the parts of a received request.
    pub fn from_parts(parts: Parts, body: Bytes) -> Self {
        let raw_path = parts.uri.path();
        Self {
            method: parts.method,
            path: percent_decode_str(raw_path).decode_utf8_lossy().into_owned(),
            raw_path: raw_path.to_string(),
            query: parts.uri.query().map(str::to_string),
            headers: parts.headers,
            body,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Decoded request path, as matched against routes.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path exactly as it appeared on the request line.
    pub fn raw_path(&self) -> &str {
        &self.raw_path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[test]
    fn test_from_parts() {
        let req = Request::builder()
            .method(Method::POST)
            .uri("http://example.com/items?page=2")
            .header("x-trace", "abc")
            .body(())
            .unwrap();
        let (parts, _) = req.into_parts();

        let ctx = RequestContext::from_parts(parts, Bytes::from_static(b"payload"));
        assert_eq!(ctx.method(), Method::POST);
        assert_eq!(ctx.path(), "/items");
        assert_eq!(ctx.query(), Some("page=2"));
        assert_eq!(ctx.headers()["x-trace"], "abc");
        assert_eq!(ctx.body().as_ref(), b"payload");
    }

    #[test]
    fn test_from_parts_decodes_path() {
        let req = Request::builder()
            .uri("/a%20b/caf%C3%A9?q=%20")
            .body(())
            .unwrap();
        let (parts, _) = req.into_parts();

        let ctx = RequestContext::from_parts(parts, Bytes::new());
        assert_eq!(ctx.path(), "/a b/café");
        assert_eq!(ctx.raw_path(), "/a%20b/caf%C3%A9");
        assert_eq!(ctx.query(), Some("q=%20"));
    }

    #[test]
    fn test_builder() {
        let ctx = RequestContext::new(Method::GET, "/foo").with_query("a=1");
        assert_eq!(ctx.path(), "/foo");
        assert_eq!(ctx.query(), Some("a=1"));
        assert!(ctx.body().is_empty());
    }
}
