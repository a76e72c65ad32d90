use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "SymptoTrack";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default HTTP port when `SYMPTOTRACK_PORT` is not set.
pub const DEFAULT_PORT: u16 = 8000;

/// Default log filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "info,symptotrack=debug"
}

/// Get the application data directory
/// ~/SymptoTrack/ on all platforms (user-visible)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join(APP_NAME)
}

/// Default database path (~/SymptoTrack/symptotrack.db)
pub fn default_db_path() -> PathBuf {
    app_data_dir().join("symptotrack.db")
}

/// Runtime settings resolved from the environment.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
    pub db_path: PathBuf,
}

impl ServerSettings {
    /// Read `SYMPTOTRACK_PORT` and `SYMPTOTRACK_DB`, falling back to
    /// defaults. Unparseable values fall back too.
    pub fn from_env() -> Self {
        let port = std::env::var("SYMPTOTRACK_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let db_path = std::env::var("SYMPTOTRACK_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_db_path());
        Self { port, db_path }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
