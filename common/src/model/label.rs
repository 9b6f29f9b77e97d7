use serde::{Deserialize, Serialize};

/// A vocabulary entry. The id is assigned by the server (`_id` on the wire);
/// `text` is the display string images are labeled with and is not guaranteed
/// unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    #[serde(rename = "_id")]
    pub id: String,
    pub text: String,
    /// Transient bulk-delete checkmark. UI-local only; never serialized.
    #[serde(skip)]
    pub selected: bool,
}
