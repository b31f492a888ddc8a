use std::error;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use model::{Coordinate, Route};

pub use reqwest::StatusCode;

pub mod client;
pub mod response;

/// Anything that can produce a route between two points. The map screen
/// only depends on this, so it can be driven without network access.
#[async_trait]
pub trait RouteService: Send + Sync {
    async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Route, RouteFetchError>;
}

#[derive(Debug, Clone)]
pub enum RouteFetchError {
    RequestError(Arc<reqwest::Error>),
    JsonError(Arc<serde_json::Error>),
    InvalidResponse {
        status_code: StatusCode,
        url: String,
        response: Option<String>,
    },
}

impl error::Error for RouteFetchError {}

impl fmt::Display for RouteFetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RouteFetchError::RequestError(e) => write!(f, "HTTP request error: {}", e),
            RouteFetchError::JsonError(e) => write!(f, "JSON parse error: {}", e),
            RouteFetchError::InvalidResponse {
                status_code,
                url,
                response,
            } => match response {
                Some(text) => {
                    write!(f, "Invalid Response ({}) {}: {}", status_code, text, url)
                }
                None => write!(f, "Invalid Response ({}) {}", status_code, url),
            },
        }
    }
}

impl From<reqwest::Error> for RouteFetchError {
    fn from(e: reqwest::Error) -> Self {
        RouteFetchError::RequestError(Arc::new(e))
    }
}

impl From<serde_json::Error> for RouteFetchError {
    fn from(e: serde_json::Error) -> Self {
        RouteFetchError::JsonError(Arc::new(e))
    }
}
