use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a product sold by the store.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable title of the product.
    pub title: String,
    /// Optional longer description shown to users.
    pub description: Option<String>,
    /// Unit price represented in the smallest currency unit.
    pub unit_price_cents: i32,
    /// Units currently in stock.
    pub inventory: i32,
    /// Collection the product belongs to, if any.
    pub collection_id: Option<i32>,
    /// Labels attached to the product through the tagging tables.
    pub tags: Vec<String>,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// Lightweight product reference returned by raw queries.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProductRef {
    pub id: i32,
    pub title: String,
}

/// Projection of a product together with its collection title.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProductSummary {
    pub id: i32,
    pub title: String,
    pub collection_title: Option<String>,
}

/// Product row carrying a price reduced to 80%, computed in SQL.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DiscountedProduct {
    pub id: i32,
    pub title: String,
    pub unit_price_cents: i32,
    pub discounted_cents: i32,
}

/// Single predicate applied to a product listing. Filters compose with AND.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFilter {
    /// Unit price within the inclusive range.
    PriceCentsBetween(i32, i32),
    /// Unit price at or above the given amount.
    PriceCentsAtLeast(i32),
    /// Stock level strictly below the given amount.
    InventoryBelow(i32),
    /// Stock level equal to the unit price column.
    InventoryEqualsPriceCents,
    /// Stock level equal to the collection id column.
    InventoryEqualsCollectionId,
    /// Product belongs to the given collection.
    InCollection(i32),
    /// Product appears in at least one order item.
    Ordered,
}

/// Sort key applied to a product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSort {
    PriceAsc,
    TitleAsc,
    TitleDesc,
}

/// Query definition used to list products.
///
/// Building the definition performs no work; it is evaluated when handed to
/// a repository method.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    pub filters: Vec<ProductFilter>,
    pub sort: Vec<ProductSort>,
    pub distinct: bool,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl ProductListQuery {
    /// Construct a query matching every product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predicate to the query.
    pub fn filter(mut self, filter: ProductFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Add a sort key. Keys apply in the order they were added.
    pub fn sort(mut self, sort: ProductSort) -> Self {
        self.sort.push(sort);
        self
    }

    /// Collapse duplicate rows in the result set.
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Skip the first `offset` rows.
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Cap the result set at `limit` rows.
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}
