use std::{env, error, fmt, path::PathBuf};

use routing::client::{Profile, RoutingCredentials, UnknownProfile, ROUTING_API_URL};

pub const DEFAULT_PREFS_PATH: &str = "prefs_app.json";

#[derive(Debug)]
pub enum ConfigError {
    MissingApiKey,
    InvalidProfile(UnknownProfile),
}

impl error::Error for ConfigError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MissingApiKey => write!(f, "expected ROUTING_API_KEY in env."),
            Self::InvalidProfile(why) => write!(f, "ROUTING_PROFILE: {}", why),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub credentials: RoutingCredentials,
    pub base_url: String,
    pub profile: Profile,
    pub prefs_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let credentials = RoutingCredentials::from_env().ok_or(ConfigError::MissingApiKey)?;
        Self::from_vars(credentials, |name| env::var(name).ok())
    }

    fn from_vars<F>(credentials: RoutingCredentials, var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let profile = match var("ROUTING_PROFILE") {
            Some(text) => text.parse().map_err(ConfigError::InvalidProfile)?,
            None => Profile::default(),
        };
        Ok(Self {
            credentials,
            base_url: var("ROUTING_BASE_URL").unwrap_or_else(|| ROUTING_API_URL.to_owned()),
            profile,
            prefs_path: var("PREFS_PATH")
                .unwrap_or_else(|| DEFAULT_PREFS_PATH.to_owned())
                .into(),
        })
    }
}
