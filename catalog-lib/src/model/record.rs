//! Catalog record

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

/// Stable identifier of a catalog record.
pub type RecordId = i64;

/// A single catalog item.
///
/// Records carry a stable integer `id` plus arbitrary display fields. Identity
/// is defined by the id alone: two records with the same id are equal even if
/// their display fields differ (a record fetched twice may have been edited
/// in between).
///
/// # Example
///
/// ```
/// use catalog_lib::model::Record;
///
/// let record = Record::new(7)
///     .set("name", "Widget")
///     .set("price", 12.5);
///
/// assert_eq!(record.id(), 7);
/// assert_eq!(record.get_str("name"), Some("Widget"));
/// assert_eq!(record, Record::new(7));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    id: RecordId,

    /// Everything other than `id`, in key order.
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl Record {
    /// Creates a record with no display fields.
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            fields: Map::new(),
        }
    }

    /// Returns the record ID.
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Sets a display field (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a display field.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the field as a string slice, if it exists and is a string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// Returns a reference to all display fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Record {}
