use std::{env, error, fmt, str::FromStr};

use async_trait::async_trait;
use model::{Coordinate, Route};
use serde::{Deserialize, Serialize};

use crate::{response::parse_route, RouteFetchError, RouteService};

pub const ROUTING_API_URL: &str = "https://api.openrouteservice.org";

const ACCEPT: &str = "application/json, application/geo+json";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingCredentials {
    pub api_key: String,
}

impl RoutingCredentials {
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("ROUTING_API_KEY").ok()?;
        Some(Self { api_key })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Profile {
    #[default]
    DrivingCar,
    FootWalking,
}

impl Profile {
    pub fn text(&self) -> &'static str {
        match self {
            Self::DrivingCar => "driving-car",
            Self::FootWalking => "foot-walking",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownProfile(pub String);

impl error::Error for UnknownProfile {}

impl fmt::Display for UnknownProfile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown routing profile: {}", self.0)
    }
}

impl FromStr for Profile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "driving-car" | "driving" | "car" => Ok(Self::DrivingCar),
            "foot-walking" | "walking" | "foot" => Ok(Self::FootWalking),
            other => Err(UnknownProfile(other.to_owned())),
        }
    }
}

/// Client for the openrouteservice directions endpoint. Each call is a single
/// GET without retries; timeouts are the transport defaults.
#[derive(Clone)]
pub struct RouteClient {
    credentials: RoutingCredentials,
    profile: Profile,
    base_url: String,
    http: reqwest::Client,
}

impl RouteClient {
    pub fn new(credentials: &RoutingCredentials, profile: Profile) -> Self {
        Self {
            credentials: credentials.clone(),
            profile,
            base_url: ROUTING_API_URL.to_owned(),
            http: reqwest::Client::new(),
        }
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// The endpoint without query parameters, so it is safe to log.
    fn endpoint(&self) -> String {
        format!("{}/v2/directions/{}", self.base_url, self.profile.text())
    }

    pub async fn fetch_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Route, RouteFetchError> {
        let url = self.endpoint();
        let start = origin.to_string();
        let end = destination.to_string();
        log::debug!("Requesting route {start} -> {end} from '{url}'.");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("api_key", self.credentials.api_key.as_str()),
                ("start", start.as_str()),
                ("end", end.as_str()),
            ])
            .header("accept", ACCEPT)
            .send()
            .await?;

        let status_code = response.status();
        if !status_code.is_success() {
            return Err(RouteFetchError::InvalidResponse {
                status_code,
                url,
                response: response.text().await.ok(),
            });
        }

        let route = parse_route(&response.text().await?)?;
        log::debug!(
            "Received route with {} points ({:.2} km).",
            route.coordinates.len(),
            route.length_km()
        );
        Ok(route)
    }
}

#[async_trait]
impl RouteService for RouteClient {
    async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Route, RouteFetchError> {
        self.fetch_route(origin, destination).await
    }
}
