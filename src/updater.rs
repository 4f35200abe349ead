use crate::error::Result;
use crate::logger::Logger;
use crate::record::{Database, Record};
use crate::storage::Storage;
use crate::validation::{parse_chain_ids, validate_platform, validate_seed};

/// Raw arguments of one update, exactly as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    pub protocol: String,
    pub platform: String,
    pub chain_ids: String,
    pub seed: String,
}

impl UpdateRequest {
    pub fn new(
        protocol: impl Into<String>,
        platform: impl Into<String>,
        chain_ids: impl Into<String>,
        seed: impl Into<String>,
    ) -> Self {
        UpdateRequest {
            protocol: protocol.into(),
            platform: platform.into(),
            chain_ids: chain_ids.into(),
            seed: seed.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    /// Records prepended by this update
    pub added: usize,
    /// `count` after the update
    pub count: u64,
    /// Whether the document was written back
    pub persisted: bool,
    pub database: Database,
}

/// Validate `request`, prepend one record per chain id and write the result.
///
/// Checks run in a fixed order: chain ids, platform, database load, seed.
/// Nothing is written unless every check passes. With `dry_run` the updated
/// document is returned but storage is left as it was.
pub fn run_update<S: Storage>(
    storage: &mut S,
    request: &UpdateRequest,
    dry_run: bool,
) -> Result<UpdateOutcome> {
    let chain_ids = parse_chain_ids(&request.chain_ids)?;
    validate_platform(&request.platform)?;

    let mut database = storage.load()?;
    Logger::debug(&format!("Loaded database with {} records", database.len()));

    validate_seed(&request.seed)?;

    let records: Vec<Record> = chain_ids
        .into_iter()
        .map(|chain_id| Record::new(&request.protocol, chain_id, &request.platform, &request.seed))
        .collect();
    let added = records.len();
    database.prepend(records);

    if dry_run {
        Logger::info("Dry run: database not written");
    } else {
        storage.persist(&database)?;
    }

    Ok(UpdateOutcome {
        added,
        count: database.count(),
        persisted: !dry_run,
        database,
    })
}
