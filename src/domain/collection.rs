use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a product collection.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Collection {
    /// Unique identifier of the collection.
    pub id: i32,
    /// Human-readable title of the collection.
    pub title: String,
    /// Product showcased for the collection, if any.
    pub featured_product_id: Option<i32>,
    /// Timestamp for when the collection record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the collection record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new collection.
#[derive(Debug, Clone)]
pub struct NewCollection {
    /// Human-readable title of the collection.
    pub title: String,
    /// Product showcased for the collection, if any.
    pub featured_product_id: Option<i32>,
}

impl NewCollection {
    /// Build a new collection payload with the supplied title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            featured_product_id: None,
        }
    }

    /// Attach a featured product to the collection payload.
    pub fn with_featured_product(mut self, product_id: i32) -> Self {
        self.featured_product_id = Some(product_id);
        self
    }
}

/// Full-row update applied to an existing collection. A `None` featured
/// product clears the column.
#[derive(Debug, Clone)]
pub struct UpdateCollection {
    pub title: String,
    pub featured_product_id: Option<i32>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateCollection {
    /// Build an update that retitles the collection and clears the featured
    /// product unless one is attached.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            featured_product_id: None,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }

    /// Attach a featured product to the update.
    pub fn with_featured_product(mut self, product_id: i32) -> Self {
        self.featured_product_id = Some(product_id);
        self
    }
}

/// Aggregate figures for the products of one collection, shaped for the
/// `result` template context key.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CollectionStats {
    /// Number of products in the collection.
    pub some_count: i64,
    /// Minimum unit price among them, absent when the collection is empty.
    pub min_price: Option<i32>,
}
