use log::debug;

use crate::domain::collection::{CollectionStats, NewCollection, UpdateCollection};
use crate::domain::order::NewOrder;
use crate::domain::product::{ProductFilter, ProductListQuery, ProductSort};
use crate::domain::tag::{OBJECT_TYPE_PRODUCT, Tag};
use crate::repository::{
    CollectionReader, CollectionWriter, CustomerReader, OrderReader, OrderWriter, ProductReader,
    TagReader,
};
use crate::services::errors::{ServiceError, ServiceResult};

/// Product spotlighted throughout the walkthrough.
const DEMO_PRODUCT_ID: i32 = 1;
/// Secondary product used for the optional point lookup.
const ALT_PRODUCT_ID: i32 = 2;
/// Collection whose aggregate figures are rendered on the page.
const DEMO_COLLECTION_ID: i32 = 3;
/// Collection mutated by the rename-and-clear sequence.
const EDITED_COLLECTION_ID: i32 = 11;
/// Customer the demonstration order is placed for.
const DEMO_CUSTOMER_ID: i32 = 1;
/// Number of recent orders fetched during the walkthrough.
const RECENT_ORDER_COUNT: i64 = 5;

/// Values rendered into `hello.html`.
pub struct PlaygroundData {
    /// Name greeted on the page.
    pub name: String,
    /// Aggregate figures for the demo collection.
    pub stats: CollectionStats,
    /// Tags attached to the demo product.
    pub tags: Vec<Tag>,
}

/// Walks the whole data-access surface in one pass: point lookups, composed
/// filters, computed columns, joins, aggregates, record writes, one
/// transactional order insert, and the raw-SQL escape hatches.
///
/// Most intermediate results are evaluated and dropped; the page only shows
/// the collection stats and the demo product's tags. Row counts are traced
/// at debug level.
pub fn run_playground<R>(repo: &R) -> ServiceResult<PlaygroundData>
where
    R: ProductReader
        + CollectionReader
        + CollectionWriter
        + CustomerReader
        + OrderReader
        + OrderWriter
        + TagReader
        + ?Sized,
{
    // The one lookup that is allowed to find nothing.
    match repo.get_product_by_id(DEMO_PRODUCT_ID)? {
        Some(product) => debug!("demo product: {}", product.title),
        None => debug!("demo product {DEMO_PRODUCT_ID} is absent"),
    }

    if let Some(product) = repo.get_product_by_id(ALT_PRODUCT_ID)? {
        debug!("alternate product: {}", product.title);
    }

    let mid_priced = repo.list_products(
        ProductListQuery::new().filter(ProductFilter::PriceCentsBetween(2000, 3000)),
    )?;
    debug!("{} products priced between 20.00 and 30.00", mid_priced.len());

    let scarce = repo.list_products(
        ProductListQuery::new()
            .filter(ProductFilter::InventoryBelow(10))
            .filter(ProductFilter::PriceCentsAtLeast(2000)),
    )?;
    debug!("{} scarce products priced at 20.00 or more", scarce.len());

    let _ = repo.list_products(
        ProductListQuery::new().filter(ProductFilter::InventoryEqualsPriceCents),
    )?;
    let _ = repo.list_products(
        ProductListQuery::new().filter(ProductFilter::InventoryEqualsCollectionId),
    )?;

    let _ = repo.list_products(
        ProductListQuery::new()
            .filter(ProductFilter::InCollection(DEMO_COLLECTION_ID))
            .sort(ProductSort::PriceAsc)
            .sort(ProductSort::TitleDesc),
    )?;

    let cheapest = repo
        .list_products(
            ProductListQuery::new()
                .sort(ProductSort::PriceAsc)
                .sort(ProductSort::TitleDesc)
                .limit(1),
        )?
        .into_iter()
        .next();
    if let Some(product) = cheapest {
        debug!("cheapest product: {}", product.title);
    }

    let _ = repo.list_product_summaries(5, 5)?;

    let _ = repo.list_products(
        ProductListQuery::new()
            .filter(ProductFilter::Ordered)
            .distinct()
            .sort(ProductSort::TitleAsc),
    )?;

    let _ = repo.list_products_with_collections()?;
    let _ = repo.list_products_with_tags()?;
    let _ = repo.list_recent_orders(RECENT_ORDER_COUNT)?;

    let stats = repo.collection_stats(DEMO_COLLECTION_ID)?;

    let _ = repo.list_customer_aliases()?;
    let _ = repo.list_customer_names()?;
    let _ = repo.list_customer_order_counts()?;
    let _ = repo.list_discounted_products()?;

    let tags = repo.tags_for(OBJECT_TYPE_PRODUCT, DEMO_PRODUCT_ID)?;

    let created = repo.create_collection(
        &NewCollection::new("Video Games").with_featured_product(DEMO_PRODUCT_ID),
    )?;
    debug!("created collection {}", created.id);

    let edited = repo
        .get_collection_by_id(EDITED_COLLECTION_ID)?
        .ok_or(ServiceError::NotFound)?;
    repo.update_collection(edited.id, &UpdateCollection::new("Gamees"))?;
    // Load-free duplicate of the write above.
    repo.clear_featured_product(EDITED_COLLECTION_ID)?;

    let order =
        repo.create_order(&NewOrder::new(DEMO_CUSTOMER_ID).with_item(DEMO_PRODUCT_ID, 1, 1000))?;
    debug!("placed order {} with {} item(s)", order.id, order.items.len());

    let _ = repo.list_product_rows_raw()?;
    repo.scan_product_rows()?;

    Ok(PlaygroundData {
        name: "Gab".to_string(),
        stats,
        tags,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use mockall::predicate::eq;
    use serde_json::Value;

    use super::*;
    use crate::domain::collection::Collection;
    use crate::domain::customer::Customer;
    use crate::domain::order::{Order, PaymentStatus};
    use crate::domain::product::Product;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::errors::ServiceError;

    fn fixed_datetime() -> NaiveDateTime {
        match NaiveDate::from_ymd_opt(2026, 1, 1) {
            Some(date) => date.and_hms_opt(0, 0, 0).unwrap_or_default(),
            None => NaiveDateTime::default(),
        }
    }

    fn sample_product(id: i32, title: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: None,
            unit_price_cents: 1500,
            inventory: 10,
            collection_id: Some(DEMO_COLLECTION_ID),
            tags: Vec::new(),
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        }
    }

    fn sample_collection(id: i32, title: &str) -> Collection {
        Collection {
            id,
            title: title.to_string(),
            featured_product_id: None,
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        }
    }

    fn sample_order(id: i32) -> Order {
        Order {
            id,
            payment_status: PaymentStatus::Pending,
            placed_at: fixed_datetime(),
            customer: Customer {
                id: DEMO_CUSTOMER_ID,
                first_name: "Alice".to_string(),
                last_name: "Doe".to_string(),
                email: "alice@example.com".to_string(),
                created_at: fixed_datetime(),
                updated_at: fixed_datetime(),
            },
            items: Vec::new(),
        }
    }

    fn expect_reads(repo: &mut MockRepository) {
        repo.expect_get_product_by_id()
            .with(eq(DEMO_PRODUCT_ID))
            .times(1)
            .returning(|id| Ok(Some(sample_product(id, "Bread"))));
        repo.expect_get_product_by_id()
            .with(eq(ALT_PRODUCT_ID))
            .times(1)
            .returning(|id| Ok(Some(sample_product(id, "Shampoo"))));
        repo.expect_list_products().times(7).returning(|_| Ok(Vec::new()));
        repo.expect_list_product_summaries()
            .with(eq(5), eq(5))
            .times(1)
            .returning(|_, _| Ok(Vec::new()));
        repo.expect_list_products_with_collections()
            .times(1)
            .returning(|| Ok(Vec::new()));
        repo.expect_list_products_with_tags()
            .times(1)
            .returning(|| Ok(Vec::new()));
        repo.expect_list_recent_orders()
            .with(eq(RECENT_ORDER_COUNT))
            .times(1)
            .returning(|_| Ok(Vec::new()));
        repo.expect_collection_stats()
            .with(eq(DEMO_COLLECTION_ID))
            .times(1)
            .returning(|_| {
                Ok(CollectionStats {
                    some_count: 3,
                    min_price: Some(999),
                })
            });
        repo.expect_list_customer_aliases()
            .times(1)
            .returning(|| Ok(Vec::new()));
        repo.expect_list_customer_names()
            .times(1)
            .returning(|| Ok(Vec::new()));
        repo.expect_list_customer_order_counts()
            .times(1)
            .returning(|| Ok(Vec::new()));
        repo.expect_list_discounted_products()
            .times(1)
            .returning(|| Ok(Vec::new()));
        repo.expect_tags_for()
            .withf(|object_type, object_id| {
                object_type == OBJECT_TYPE_PRODUCT && *object_id == DEMO_PRODUCT_ID
            })
            .times(1)
            .returning(|_, _| {
                Ok(vec![Tag {
                    id: 1,
                    label: "bestseller".to_string(),
                }])
            });
    }

    #[test]
    fn run_playground_collects_page_data() {
        let mut repo = MockRepository::new();
        expect_reads(&mut repo);

        repo.expect_create_collection()
            .withf(|new_collection| {
                new_collection.title == "Video Games"
                    && new_collection.featured_product_id == Some(DEMO_PRODUCT_ID)
            })
            .times(1)
            .returning(|new_collection| Ok(sample_collection(12, &new_collection.title)));
        repo.expect_get_collection_by_id()
            .with(eq(EDITED_COLLECTION_ID))
            .times(1)
            .returning(|id| Ok(Some(sample_collection(id, "Games"))));
        repo.expect_update_collection()
            .withf(|collection_id, updates| {
                *collection_id == EDITED_COLLECTION_ID
                    && updates.title == "Gamees"
                    && updates.featured_product_id.is_none()
            })
            .times(1)
            .returning(|collection_id, updates| {
                Ok(sample_collection(collection_id, &updates.title))
            });
        repo.expect_clear_featured_product()
            .with(eq(EDITED_COLLECTION_ID))
            .times(1)
            .returning(|_| Ok(1));
        repo.expect_create_order()
            .withf(|new_order| {
                new_order.customer_id == DEMO_CUSTOMER_ID
                    && new_order.items.len() == 1
                    && new_order.items[0].product_id == DEMO_PRODUCT_ID
                    && new_order.items[0].quantity == 1
                    && new_order.items[0].unit_price_cents == 1000
            })
            .times(1)
            .returning(|_| Ok(sample_order(7)));
        repo.expect_list_product_rows_raw()
            .times(1)
            .returning(|| Ok(Vec::new()));
        repo.expect_scan_product_rows().times(1).returning(|| Ok(()));

        let data = match run_playground(&repo) {
            Ok(data) => data,
            Err(err) => panic!("expected success, got error: {err}"),
        };

        assert_eq!(data.name, "Gab");
        assert_eq!(data.stats.some_count, 3);
        assert_eq!(data.stats.min_price, Some(999));
        assert_eq!(data.tags.len(), 1);
        assert_eq!(data.tags[0].label, "bestseller");
    }

    #[test]
    fn run_playground_maps_missing_collection_to_not_found() {
        let mut repo = MockRepository::new();
        expect_reads(&mut repo);

        repo.expect_create_collection()
            .times(1)
            .returning(|new_collection| Ok(sample_collection(12, &new_collection.title)));
        repo.expect_get_collection_by_id()
            .with(eq(EDITED_COLLECTION_ID))
            .times(1)
            .returning(|_| Ok(None));

        let result = run_playground(&repo);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn collection_stats_serialize_with_the_template_keys() {
        let stats = CollectionStats {
            some_count: 3,
            min_price: Some(999),
        };

        let value = match serde_json::to_value(&stats) {
            Ok(value) => value,
            Err(err) => panic!("serialization failed: {err}"),
        };

        assert_eq!(value.get("some_count").and_then(Value::as_i64), Some(3));
        assert_eq!(value.get("min_price").and_then(Value::as_i64), Some(999));

        let empty = CollectionStats {
            some_count: 0,
            min_price: None,
        };
        let value = match serde_json::to_value(&empty) {
            Ok(value) => value,
            Err(err) => panic!("serialization failed: {err}"),
        };
        assert!(value.get("min_price").is_some_and(Value::is_null));
    }

    #[test]
    fn run_playground_propagates_repository_failures() {
        let mut repo = MockRepository::new();
        expect_reads(&mut repo);

        repo.expect_create_collection()
            .times(1)
            .returning(|_| Err(RepositoryError::Database(diesel::result::Error::RollbackTransaction)));

        let result = run_playground(&repo);

        assert!(matches!(result, Err(ServiceError::Repository(_))));
    }
}
