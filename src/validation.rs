use crate::error::{Error, Result};
use crate::record::ChainId;
use serde_json::Value;

pub const ADDRESS_PREFIX: &str = "0x";

/// Hex digits in a 20-byte address.
pub const ADDRESS_HEX_LEN: usize = 40;

/// `0x` plus 16 hex digits (bytes8).
pub const SEED_LEN: usize = 18;

/// Decode the chainIds argument. Any JSON array is accepted; elements are kept as given.
pub fn parse_chain_ids(raw: &str) -> Result<Vec<ChainId>> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| Error::ChainIdsParse(e.to_string()))?;

    match value {
        Value::Array(items) => Ok(items.into_iter().map(ChainId::from).collect()),
        other => Err(Error::ChainIdsParse(format!(
            "expected an array, got {}",
            json_kind(&other)
        ))),
    }
}

/// `^0x[a-fA-F0-9]{40}$`. Checksum casing is not verified.
pub fn validate_platform(platform: &str) -> Result<()> {
    let hex_part = platform
        .strip_prefix(ADDRESS_PREFIX)
        .ok_or_else(|| Error::InvalidAddress(platform.to_string()))?;

    if hex_part.len() != ADDRESS_HEX_LEN || hex::decode(hex_part).is_err() {
        return Err(Error::InvalidAddress(platform.to_string()));
    }
    Ok(())
}

/// Length and prefix only; the digits themselves are not checked.
///
/// Length is measured in UTF-16 code units.
pub fn validate_seed(seed: &str) -> Result<()> {
    if seed.encode_utf16().count() != SEED_LEN || !seed.starts_with(ADDRESS_PREFIX) {
        return Err(Error::InvalidSeed(seed.to_string()));
    }
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
