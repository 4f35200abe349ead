use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("expected exactly 4 arguments: <protocol> <platform> <chainIds> <seed>")]
    ArgumentCount,

    #[error("chainIds must be a valid JSON array of numbers ({0})")]
    ChainIdsParse(String),

    #[error("platform must be a valid Ethereum address (got {0:?})")]
    InvalidAddress(String),

    #[error("failed to read database {}: {reason}", .path.display())]
    DatabaseRead { path: PathBuf, reason: String },

    #[error("seed must be a valid bytes8 (got {0:?})")]
    InvalidSeed(String),

    #[error("failed to write database {}: {reason}", .path.display())]
    DatabaseWrite { path: PathBuf, reason: String },

    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl Error {
    /// Second diagnostic line shown under the error, if the failure is a usage mistake.
    pub fn example(&self) -> Option<&'static str> {
        match self {
            Error::ArgumentCount => Some(
                "Example: votemarket-db curve 0x1234567890123456789012345678901234567890 \"[10,42161,8453]\" 0x1234567890abcdef",
            ),
            Error::ChainIdsParse(_) => Some("Example: \"[10,42161,8453]\""),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
