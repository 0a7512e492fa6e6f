//! Request handlers for the `/api/swamiji/*` content endpoints.
//!
//! Every endpoint answers `GET` only:
//! - `200` with the JSON-encoded content,
//! - `405 {"error":"Method not allowed"}` for any other method,
//! - `500 {"error": <endpoint message>}` when the repository fails.
//!
//! [`route`] adds path resolution on top and answers `404` for unknown paths.

use std::str::FromStr;

use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::error::ContentError;
use crate::repository::ContentRepository;
use crate::use_cases::{GetEvents, GetQuotes, GetSwamiJiInfo, GetTeachings};

pub const STATUS_OK: u16 = 200;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_METHOD_NOT_ALLOWED: u16 = 405;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Options,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown HTTP method `{0}`")]
pub struct UnknownMethod(pub String);

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "HEAD" => Ok(Method::Head),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            "OPTIONS" => Ok(Method::Options),
            _ => Err(UnknownMethod(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Info,
    Teachings,
    Quotes,
    Events,
}

impl Endpoint {
    pub const ALL: [Endpoint; 4] = [
        Endpoint::Info,
        Endpoint::Teachings,
        Endpoint::Quotes,
        Endpoint::Events,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Info => "/api/swamiji/info",
            Endpoint::Teachings => "/api/swamiji/teachings",
            Endpoint::Quotes => "/api/swamiji/quotes",
            Endpoint::Events => "/api/swamiji/events",
        }
    }

    /// Resolve a request path, tolerating a trailing slash and a query string.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split('?').next().unwrap_or(path);
        let path = path.strip_suffix('/').unwrap_or(path);
        Self::ALL.into_iter().find(|endpoint| endpoint.path() == path)
    }

    fn failure_message(self) -> &'static str {
        match self {
            Endpoint::Info => "Failed to fetch Swami Ji information",
            Endpoint::Teachings => "Failed to fetch teachings",
            Endpoint::Quotes => "Failed to fetch quotes",
            Endpoint::Events => "Failed to fetch events",
        }
    }
}

/// Status code plus JSON body, as written back to the client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn ok(body: Value) -> Self {
        Self {
            status: STATUS_OK,
            body,
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "error": message }),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The `error` field of a failure body, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }
}

/// Answer a request already matched to `endpoint`.
pub fn handle<R: ContentRepository>(repo: &R, method: Method, endpoint: Endpoint) -> ApiResponse {
    if method != Method::Get {
        tracing::debug!(?method, path = endpoint.path(), "rejecting non-GET request");
        return ApiResponse::error(STATUS_METHOD_NOT_ALLOWED, "Method not allowed");
    }

    let result = match endpoint {
        Endpoint::Info => encode(GetSwamiJiInfo::new(repo).execute()),
        Endpoint::Teachings => encode(GetTeachings::new(repo).execute()),
        Endpoint::Quotes => encode(GetQuotes::new(repo).execute()),
        Endpoint::Events => encode(GetEvents::new(repo).execute()),
    };

    match result {
        Ok(body) => ApiResponse::ok(body),
        Err(err) => {
            tracing::warn!(path = endpoint.path(), "content request failed: {err}");
            ApiResponse::error(STATUS_INTERNAL_ERROR, endpoint.failure_message())
        }
    }
}

/// Resolve `path` and answer the request; unknown paths get `404`.
pub fn route<R: ContentRepository>(repo: &R, method: Method, path: &str) -> ApiResponse {
    match Endpoint::from_path(path) {
        Some(endpoint) => handle(repo, method, endpoint),
        None => ApiResponse::error(STATUS_NOT_FOUND, "Not found"),
    }
}

fn encode<T: Serialize>(result: Result<T, ContentError>) -> Result<Value, ContentError> {
    let value = result?;
    serde_json::to_value(value).map_err(|err| ContentError::Unavailable(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn methods_parse_case_insensitively() {
        assert_eq!("get".parse::<Method>(), Ok(Method::Get));
        assert_eq!("DELETE".parse::<Method>(), Ok(Method::Delete));
        assert!("BREW".parse::<Method>().is_err());
    }

    #[test]
    fn unknown_method_keeps_the_raw_token() {
        let err = "Brew".parse::<Method>().unwrap_err();
        assert_eq!(err, UnknownMethod("Brew".to_string()));
        assert_eq!(err.to_string(), "unknown HTTP method `Brew`");
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.source().is_none());
    }

    #[test]
    fn endpoint_paths_resolve_with_slash_and_query() {
        assert_eq!(Endpoint::from_path("/api/swamiji/info"), Some(Endpoint::Info));
        assert_eq!(Endpoint::from_path("/api/swamiji/quotes/"), Some(Endpoint::Quotes));
        assert_eq!(
            Endpoint::from_path("/api/swamiji/events?lang=hi"),
            Some(Endpoint::Events)
        );
        assert_eq!(Endpoint::from_path("/api/swamiji"), None);
    }

    #[test]
    fn every_endpoint_path_round_trips() {
        for endpoint in Endpoint::ALL {
            assert_eq!(Endpoint::from_path(endpoint.path()), Some(endpoint));
        }
    }
}
