use std::{
    collections::{BTreeMap, HashMap},
    error, fmt, fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use model::Coordinate;

pub const HOME_LATITUDE_KEY: &str = "home_lat";
pub const HOME_LONGITUDE_KEY: &str = "home_lon";

#[derive(Debug, Clone)]
pub enum StoreError {
    Io(Arc<io::Error>),
    Json(Arc<serde_json::Error>),
}

impl error::Error for StoreError {}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "storage IO error: {}", e),
            Self::Json(e) => write!(f, "storage format error: {}", e),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        Self::Io(Arc::new(e))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(Arc::new(e))
    }
}

/// Flat key-value storage of numbers.
pub trait KeyValueStore: Send {
    fn get_f64(&self, key: &str) -> Option<f64>;
    fn put_f64(&mut self, key: &str, value: f64);

    /// Makes previous writes durable.
    fn flush(&mut self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, f64>,
}

impl KeyValueStore for MemoryStore {
    fn get_f64(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    fn put_f64(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_owned(), value);
    }
}

/// A JSON object on disk, read once on open and rewritten on every flush.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, f64>,
}

impl FileStore {
    /// A missing file is an empty store.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(why) if why.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(why) => return Err(why.into()),
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for FileStore {
    fn get_f64(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    fn put_f64(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_owned(), value);
    }

    fn flush(&mut self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // write-then-rename, so a crash never leaves half a file behind
        let temporary = self.path.with_extension("tmp");
        fs::write(&temporary, serde_json::to_vec_pretty(&self.values)?)?;
        fs::rename(&temporary, &self.path)?;
        Ok(())
    }
}

/// Persists the single home point.
///
/// (0, 0) doubles as "unset", so a home exactly at the equator / prime
/// meridian intersection can not be recalled.
pub struct LocationStore {
    store: Box<dyn KeyValueStore>,
}

impl LocationStore {
    pub fn new<K: KeyValueStore + 'static>(store: K) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Overwrites the previous home. Storage failures are logged only.
    pub fn save(&mut self, point: Coordinate) {
        self.store.put_f64(HOME_LATITUDE_KEY, point.latitude());
        self.store.put_f64(HOME_LONGITUDE_KEY, point.longitude());
        match self.store.flush() {
            Ok(()) => log::info!("Saved home at {point}."),
            Err(why) => log::error!("Could not persist home at {point}: {why}"),
        }
    }

    pub fn load(&self) -> Option<Coordinate> {
        let latitude = self.store.get_f64(HOME_LATITUDE_KEY)?;
        let longitude = self.store.get_f64(HOME_LONGITUDE_KEY)?;
        if latitude == 0.0 && longitude == 0.0 {
            return None;
        }
        Coordinate::new(longitude, latitude)
            .map_err(|why| log::warn!("Ignoring stored home: {why}"))
            .ok()
    }
}
