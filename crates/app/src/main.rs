use std::{error::Error, path::Path, sync::Arc};

use config::AppConfig;
use navigation::{
    location::FixedLocationProvider,
    location_store::{FileStore, LocationStore, MemoryStore},
    screen::{GetState, MapScreen, PermissionChanged, ScreenParts},
};
use routing::{client::RouteClient, RouteService};
use surface::LogSurface;

mod config;
mod surface;

fn open_store(path: &Path) -> LocationStore {
    match FileStore::open(path) {
        Ok(store) => LocationStore::new(store),
        Err(why) => {
            log::error!("Could not open '{}': {why}", path.display());
            LocationStore::new(MemoryStore::default())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // config
    let config = AppConfig::from_env()?;
    let routes: Arc<dyn RouteService> = Arc::new(
        RouteClient::new(&config.credentials, config.profile).with_base_url(config.base_url),
    );
    let locator = Arc::new(FixedLocationProvider::from_env());

    // screen
    let prefs_path = config.prefs_path;
    let screen = MapScreen::spawn(move || ScreenParts {
        surface: LogSurface::default(),
        store: open_store(&prefs_path),
        routes: routes.clone(),
        locator: locator.clone(),
    });

    // there is no permission prompt without a UI
    screen.tell(PermissionChanged { granted: true }).await?;

    tokio::signal::ctrl_c().await?;
    log::info!("{:?}", screen.ask(GetState).await?);

    Ok(())
}
