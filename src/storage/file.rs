use crate::config::Config;
use crate::error::{Error, Result};
use crate::record::Database;
use crate::storage::Storage;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// JSON file storage for the database document.
///
/// Files:
/// - `votemarkets.json`: the document, tab-indented, no trailing newline
/// - `votemarkets.json.tmp`: scratch file for atomic replacement
pub struct JsonFileStorage {
    path: PathBuf,
    tmp_path: PathBuf,
}

impl JsonFileStorage {
    /// Create a JsonFileStorage for the configured database path
    pub fn new(config: &Config) -> Self {
        Self::with_path(config.get_db_path().clone())
    }

    pub fn with_path(path: PathBuf) -> Self {
        let tmp_path = tmp_path_for(&path);
        JsonFileStorage { path, tmp_path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, what: &str, e: std::io::Error) -> Error {
        Error::DatabaseWrite {
            path: self.path.clone(),
            reason: format!("{}: {}", what, e),
        }
    }
}

/// Render `db` exactly as it is written to disk.
pub fn render(db: &Database) -> Result<String> {
    let mut out = Vec::new();
    {
        let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"\t"));
        db.serialize(&mut ser)
            .map_err(|e| Error::Unexpected(format!("Failed to serialize database: {}", e)))?;
    }
    String::from_utf8(out)
        .map_err(|e| Error::Unexpected(format!("Serialized database is not UTF-8: {}", e)))
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name: OsString = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<Database> {
        let read_error = |reason: String| Error::DatabaseRead {
            path: self.path.clone(),
            reason,
        };

        let text = fs::read_to_string(&self.path).map_err(|e| read_error(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| read_error(format!("invalid database document: {}", e)))
    }

    fn persist(&mut self, db: &Database) -> Result<()> {
        let text = render(db)?;

        let mut file = File::create(&self.tmp_path)
            .map_err(|e| self.write_error("Failed to create temp file", e))?;
        let written = file
            .write_all(text.as_bytes())
            .and_then(|_| file.sync_all());
        drop(file);
        if let Err(e) = written {
            let _ = fs::remove_file(&self.tmp_path);
            return Err(self.write_error("Failed to write temp file", e));
        }

        // Atomic rename over the live file
        if let Err(e) = fs::rename(&self.tmp_path, &self.path) {
            let _ = fs::remove_file(&self.tmp_path);
            return Err(self.write_error("Failed to replace database file", e));
        }

        // Fsync parent directory so the rename survives a crash
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            let dir = File::open(parent)
                .map_err(|e| self.write_error("Failed to open parent directory", e))?;
            dir.sync_all()
                .map_err(|e| self.write_error("Failed to fsync parent directory", e))?;
        }

        Ok(())
    }
}
