use crate::db::{DbConnection, DbPool};
use crate::domain::collection::{Collection, CollectionStats, NewCollection, UpdateCollection};
use crate::domain::customer::{CustomerAlias, CustomerName, CustomerOrderCount};
use crate::domain::order::{NewOrder, Order};
use crate::domain::product::{
    DiscountedProduct, Product, ProductListQuery, ProductRef, ProductSummary,
};
use crate::domain::tag::Tag;
use crate::repository::errors::RepositoryResult;

pub mod collection;
pub mod customer;
pub mod errors;
pub mod order;
pub mod product;
pub mod tag;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over product records.
pub trait ProductReader {
    /// Point lookup; an absent row is `Ok(None)`, not an error.
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    /// Evaluate a composed [`ProductListQuery`].
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    /// Window of id/title/collection-title projections, ordered by id.
    fn list_product_summaries(
        &self,
        offset: i64,
        limit: i64,
    ) -> RepositoryResult<Vec<ProductSummary>>;
    /// Products with their collection joined in.
    fn list_products_with_collections(
        &self,
    ) -> RepositoryResult<Vec<(Product, Option<Collection>)>>;
    /// Products with tag labels attached through one batched query.
    fn list_products_with_tags(&self) -> RepositoryResult<Vec<Product>>;
    /// Products with an 80% price column computed in SQL.
    fn list_discounted_products(&self) -> RepositoryResult<Vec<DiscountedProduct>>;
    /// Count and minimum unit price for one collection's products.
    fn collection_stats(&self, collection_id: i32) -> RepositoryResult<CollectionStats>;
    /// Hand-written SQL mapped back into product references.
    fn list_product_rows_raw(&self) -> RepositoryResult<Vec<ProductRef>>;
    /// Same statement through the direct execution path, results discarded.
    fn scan_product_rows(&self) -> RepositoryResult<()>;
}

/// Read-only operations over collection records.
pub trait CollectionReader {
    fn get_collection_by_id(&self, id: i32) -> RepositoryResult<Option<Collection>>;
}

/// Write operations over collection records.
pub trait CollectionWriter {
    fn create_collection(&self, new_collection: &NewCollection) -> RepositoryResult<Collection>;
    fn update_collection(
        &self,
        collection_id: i32,
        updates: &UpdateCollection,
    ) -> RepositoryResult<Collection>;
    /// Load-free `UPDATE` clearing the featured product; returns the number
    /// of affected rows and succeeds with 0 when the id is absent.
    fn clear_featured_product(&self, collection_id: i32) -> RepositoryResult<usize>;
}

/// Read-only reporting queries over customer records.
pub trait CustomerReader {
    fn list_customer_aliases(&self) -> RepositoryResult<Vec<CustomerAlias>>;
    fn list_customer_names(&self) -> RepositoryResult<Vec<CustomerName>>;
    fn list_customer_order_counts(&self) -> RepositoryResult<Vec<CustomerOrderCount>>;
}

/// Read-only operations over order records.
pub trait OrderReader {
    /// Newest orders with customer and line items attached.
    fn list_recent_orders(&self, limit: i64) -> RepositoryResult<Vec<Order>>;
}

/// Write operations over order records.
pub trait OrderWriter {
    /// Insert the order and all of its line items in one transaction.
    fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
}

/// Read-only operations over the polymorphic tagging tables.
pub trait TagReader {
    fn tags_for(&self, object_type: &str, object_id: i32) -> RepositoryResult<Vec<Tag>>;
}
