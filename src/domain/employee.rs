//! The employee record, the sole business entity of this service.

use serde::{Deserialize, Serialize};

/// A worker record identified by an integer id.
///
/// The identifier is assigned by the backing store on the first save; an id
/// of zero (or an absent `id` field in JSON) marks a record that has not been
/// persisted yet. Once assigned, the id is unique and never changes.
///
/// The optional business fields are omitted from JSON output when unset, so
/// a minimal record round-trips as `{"id":1,"name":"Alice"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Store-assigned identifier; zero before the first save.
    #[serde(default)]
    pub id: i32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<i32>,
}

impl Employee {
    /// Whether the store has assigned this record an identifier.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}
