use std::env;

use async_trait::async_trait;
use model::Coordinate;

/// Source of the device position. `None` means no fix could be obtained.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_position(&self) -> Option<Coordinate>;
}

/// Always reports the same position, if any.
#[derive(Debug, Clone, Default)]
pub struct FixedLocationProvider {
    position: Option<Coordinate>,
}

impl FixedLocationProvider {
    pub fn new(position: Option<Coordinate>) -> Self {
        Self { position }
    }

    /// Reads `DEVICE_LATITUDE` and `DEVICE_LONGITUDE`. Missing or invalid
    /// values give a provider without a fix.
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let number = |name: &str| -> Option<f64> {
            let text = var(name)?;
            text.trim()
                .parse()
                .map_err(|why| log::warn!("Ignoring device position, {name}={text:?}: {why}"))
                .ok()
        };
        let position = (|| {
            let latitude = number("DEVICE_LATITUDE")?;
            let longitude = number("DEVICE_LONGITUDE")?;
            Coordinate::new(longitude, latitude)
                .map_err(|why| log::warn!("Ignoring device position: {why}"))
                .ok()
        })();
        Self::new(position)
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn current_position(&self) -> Option<Coordinate> {
        self.position
    }
}
