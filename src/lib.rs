pub mod config;
pub mod error;
pub mod logger;
pub mod record;
pub mod storage;
pub mod updater;
pub mod validation;

pub use record::{ChainId, Database, Record};
pub use updater::{run_update, UpdateOutcome, UpdateRequest};

/// Printed on stdout after a successful update.
pub const SUCCESS_SENTINEL: &str = "0xAA";
