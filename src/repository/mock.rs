use mockall::mock;

use super::{
    CollectionReader, CollectionWriter, CustomerReader, OrderReader, OrderWriter, ProductReader,
    TagReader,
};
use crate::domain::collection::{Collection, CollectionStats, NewCollection, UpdateCollection};
use crate::domain::customer::{CustomerAlias, CustomerName, CustomerOrderCount};
use crate::domain::order::{NewOrder, Order};
use crate::domain::product::{
    DiscountedProduct, Product, ProductListQuery, ProductRef, ProductSummary,
};
use crate::domain::tag::Tag;
use crate::repository::errors::RepositoryResult;

mock! {
    pub Repository {}

    impl ProductReader for Repository {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
        fn list_product_summaries(&self, offset: i64, limit: i64) -> RepositoryResult<Vec<ProductSummary>>;
        fn list_products_with_collections(&self) -> RepositoryResult<Vec<(Product, Option<Collection>)>>;
        fn list_products_with_tags(&self) -> RepositoryResult<Vec<Product>>;
        fn list_discounted_products(&self) -> RepositoryResult<Vec<DiscountedProduct>>;
        fn collection_stats(&self, collection_id: i32) -> RepositoryResult<CollectionStats>;
        fn list_product_rows_raw(&self) -> RepositoryResult<Vec<ProductRef>>;
        fn scan_product_rows(&self) -> RepositoryResult<()>;
    }

    impl CollectionReader for Repository {
        fn get_collection_by_id(&self, id: i32) -> RepositoryResult<Option<Collection>>;
    }

    impl CollectionWriter for Repository {
        fn create_collection(&self, new_collection: &NewCollection) -> RepositoryResult<Collection>;
        fn update_collection(&self, collection_id: i32, updates: &UpdateCollection) -> RepositoryResult<Collection>;
        fn clear_featured_product(&self, collection_id: i32) -> RepositoryResult<usize>;
    }

    impl CustomerReader for Repository {
        fn list_customer_aliases(&self) -> RepositoryResult<Vec<CustomerAlias>>;
        fn list_customer_names(&self) -> RepositoryResult<Vec<CustomerName>>;
        fn list_customer_order_counts(&self) -> RepositoryResult<Vec<CustomerOrderCount>>;
    }

    impl OrderReader for Repository {
        fn list_recent_orders(&self, limit: i64) -> RepositoryResult<Vec<Order>>;
    }

    impl OrderWriter for Repository {
        fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
    }

    impl TagReader for Repository {
        fn tags_for(&self, object_type: &str, object_id: i32) -> RepositoryResult<Vec<Tag>>;
    }
}
