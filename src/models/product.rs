use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{Product as DomainProduct, ProductRef as DomainProductRef};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub unit_price_cents: i32,
    pub inventory: i32,
    pub collection_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Row shape returned by the hand-written product SQL.
#[derive(Debug, Clone, QueryableByName)]
#[diesel(table_name = crate::schema::products)]
pub struct ProductRow {
    pub id: i32,
    pub title: String,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            unit_price_cents: value.unit_price_cents,
            inventory: value.inventory,
            collection_id: value.collection_id,
            tags: Vec::new(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<ProductRow> for DomainProductRef {
    fn from(value: ProductRow) -> Self {
        Self {
            id: value.id,
            title: value.title,
        }
    }
}
