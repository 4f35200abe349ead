use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

const COUNT_KEY: &str = "count";
const DATA_KEY: &str = "data";

/// Chain identifier as supplied on the command line.
///
/// Integers are the expected shape; anything else in the input array is
/// stored verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ChainId {
    Numeric(u64),
    Other(Value),
}

impl From<Value> for ChainId {
    fn from(value: Value) -> Self {
        match value.as_u64() {
            Some(id) => ChainId::Numeric(id),
            None => ChainId::Other(value),
        }
    }
}

impl From<ChainId> for Value {
    fn from(chain_id: ChainId) -> Self {
        match chain_id {
            ChainId::Numeric(id) => Value::from(id),
            ChainId::Other(value) => value,
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainId::Numeric(id) => write!(f, "{}", id),
            ChainId::Other(value) => write!(f, "{}", value),
        }
    }
}

/// One campaign seed entry for a (protocol, chain) pair.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub protocol: String,
    pub chain_id: ChainId,
    pub platform: String,
    pub seed: String,
}

impl Record {
    /// The protocol name is stored lowercased.
    pub fn new(protocol: &str, chain_id: ChainId, platform: &str, seed: &str) -> Self {
        Record {
            protocol: protocol.to_lowercase(),
            chain_id,
            platform: platform.to_string(),
            seed: seed.to_string(),
        }
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        let mut entry = Map::new();
        entry.insert("protocol".to_string(), Value::String(record.protocol));
        entry.insert("chainId".to_string(), record.chain_id.into());
        entry.insert("platform".to_string(), Value::String(record.platform));
        entry.insert("seed".to_string(), Value::String(record.seed));
        Value::Object(entry)
    }
}

/// The persisted document: `{ "count": n, "data": [...] }`.
///
/// Entries of `data` are kept as the JSON they were read as, so fields this
/// tool does not know about survive a rewrite. `count` is derived from
/// `data` and the stored value is never read. Other top-level keys are
/// carried through in their original order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Database {
    pub data: Vec<Value>,

    /// Top-level keys in document order; the `count` and `data` slots are
    /// null placeholders filled in at serialization.
    fields: Map<String, Value>,
}

impl Database {
    pub fn new() -> Self {
        let mut fields = Map::new();
        fields.insert(COUNT_KEY.to_string(), Value::Null);
        fields.insert(DATA_KEY.to_string(), Value::Null);
        Database {
            data: Vec::new(),
            fields,
        }
    }

    pub fn count(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// A top-level key other than `count` and `data`.
    pub fn field(&self, key: &str) -> Option<&Value> {
        match key {
            COUNT_KEY | DATA_KEY => None,
            _ => self.fields.get(key),
        }
    }

    /// Typed view of `data[index]`, if that entry has the record shape.
    pub fn record(&self, index: usize) -> Option<Record> {
        self.data
            .get(index)
            .and_then(|entry| Record::deserialize(entry).ok())
    }

    /// Insert `records` ahead of every existing entry, keeping their order.
    pub fn prepend(&mut self, records: Vec<Record>) {
        let existing = std::mem::take(&mut self.data);
        self.data = records.into_iter().map(Value::from).collect();
        self.data.extend(existing);
    }
}

impl Default for Database {
    fn default() -> Self {
        Database::new()
    }
}

impl TryFrom<Map<String, Value>> for Database {
    type Error = String;

    fn try_from(mut fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let data = match fields.get_mut(DATA_KEY) {
            Some(Value::Array(items)) => std::mem::take(items),
            Some(_) => return Err("`data` must be an array".to_string()),
            None => return Err("missing `data` array".to_string()),
        };
        for key in [COUNT_KEY, DATA_KEY] {
            if let Some(slot) = fields.get_mut(key) {
                *slot = Value::Null;
            }
        }
        Ok(Database { data, fields })
    }
}

impl Serialize for Database {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let has_count = self.fields.contains_key(COUNT_KEY);
        let len = self.fields.len() + usize::from(!has_count);
        let mut map = serializer.serialize_map(Some(len))?;
        for (key, value) in &self.fields {
            match key.as_str() {
                COUNT_KEY => map.serialize_entry(key, &self.count())?,
                DATA_KEY => map.serialize_entry(key, &self.data)?,
                _ => map.serialize_entry(key, value)?,
            }
        }
        // a document without `count` gets it appended
        if !has_count {
            map.serialize_entry(COUNT_KEY, &self.count())?;
        }
        map.end()
    }
}
