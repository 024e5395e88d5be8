use serde::{Deserialize, Serialize};

/// Object type label under which products are tagged.
pub const OBJECT_TYPE_PRODUCT: &str = "product";

/// Domain representation of a tag attachable to any store entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    /// Unique identifier of the tag.
    pub id: i32,
    /// Human-readable label of the tag.
    pub label: String,
}
