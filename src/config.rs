use std::env;
use std::path::PathBuf;

/// File name of the vote market database, looked up next to the executable.
pub const DB_FILE_NAME: &str = "votemarkets.json";

/// Configuration for the votemarket-db tool
///
/// Resolution order: defaults, then environment, then command-line flags
/// (applied by the binary through the setters).
#[derive(Debug, Clone)]
pub struct Config {
    /// Database file (default: `votemarkets.json` beside the executable)
    pub db_path: PathBuf,

    /// Log level: "error", "warn", "info", "debug" (default: "warn")
    pub log_level: String,

    /// Validate and build the new document without writing it
    pub dry_run: bool,
}

impl Config {
    /// Create a new config with defaults
    pub fn new() -> Self {
        Config {
            db_path: default_db_path(),
            log_level: "warn".to_string(),
            dry_run: false,
        }
    }

    /// Create config pointing at a specific database file
    pub fn with_db_path(db_path: PathBuf) -> Self {
        Config {
            db_path,
            ..Config::new()
        }
    }

    pub fn get_db_path(&self) -> &PathBuf {
        &self.db_path
    }

    pub fn set_db_path(&mut self, path: PathBuf) {
        self.db_path = path;
    }

    pub fn get_log_level(&self) -> &str {
        &self.log_level
    }

    pub fn set_log_level(&mut self, level: String) {
        self.log_level = level;
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn set_dry_run(&mut self, dry_run: bool) {
        self.dry_run = dry_run;
    }

    /// Load config from environment variables
    ///
    /// Environment variables:
    /// - `VOTEMARKET_DB_PATH`: override the database file
    /// - `VOTEMARKET_DB_LOG_LEVEL`: log level
    pub fn from_env() -> Self {
        let mut config = Config::new();

        if let Ok(path) = env::var("VOTEMARKET_DB_PATH") {
            config.db_path = PathBuf::from(path);
        }

        if let Ok(level) = env::var("VOTEMARKET_DB_LOG_LEVEL") {
            config.log_level = level;
        }

        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

/// The database lives beside the tool itself, not in the caller's working directory.
fn default_db_path() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DB_FILE_NAME)
}
