pub mod file;

pub use file::{render, JsonFileStorage};

use crate::error::Result;
use crate::record::Database;

/// Storage abstraction for the vote market database document.
///
/// Implementations must preserve:
/// - Whole-document replacement on persist (no merging with what is on disk)
/// - A failed persist leaves the previous document readable
pub trait Storage {
    /// Load the current document
    fn load(&self) -> Result<Database>;

    /// Replace the stored document with `db`
    fn persist(&mut self, db: &Database) -> Result<()>;
}
