use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted message board entry
///
/// `id` is assigned exactly once by the store at creation and never reused.
/// Records are immutable after creation and are never deleted. The store
/// keeps insertion order internally; it is not part of the wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Store-assigned unique identifier
    pub id: Uuid,

    /// Author display name (free text, empty accepted)
    pub name: String,

    /// Message body (free text, empty accepted)
    pub message: String,
}
