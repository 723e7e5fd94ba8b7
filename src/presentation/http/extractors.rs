// src/presentation/http/extractors.rs
use axum::{
    extract::FromRequestParts,
    http::{Method, Uri, request::Parts},
};
use std::convert::Infallible;

/// The parts of the incoming request the responder pipeline looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
}

impl RequestContext {
    pub fn new(method: Method, uri: &Uri) -> Self {
        let query = uri
            .query()
            .and_then(|query| serde_urlencoded::from_str(query).ok())
            .unwrap_or_default();

        Self {
            method,
            path: uri.path().to_owned(),
            query,
        }
    }

    pub fn from_parts(parts: &Parts) -> Self {
        Self::new(parts.method.clone(), &parts.uri)
    }

    pub const fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        if self.path.is_empty() { "/" } else { &self.path }
    }

    /// Last value given for `key`.
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .rev()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn has(&self, key: &str) -> bool {
        self.query.iter().any(|(name, _)| name == key)
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_uses_the_last_occurrence() {
        let uri: Uri = "/planets?page=1&per_page=5&page=3".parse().unwrap();
        let ctx = RequestContext::new(Method::GET, &uri);
        assert_eq!(ctx.path(), "/planets");
        assert_eq!(ctx.query("page"), Some("3"));
        assert_eq!(ctx.query("per_page"), Some("5"));
        assert!(ctx.has("page"));
        assert!(!ctx.has("perPage"));
        assert_eq!(ctx.method(), &Method::GET);
    }

    #[test]
    fn missing_or_malformed_query_is_empty() {
        let ctx = RequestContext::new(Method::POST, &"/x".parse().unwrap());
        assert_eq!(ctx.query("page"), None);
        assert_eq!(RequestContext::default().path(), "/");
    }
}
