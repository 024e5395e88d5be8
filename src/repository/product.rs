use std::collections::HashMap;

use diesel::dsl::{count_star, min, sql};
use diesel::expression::expression_types::NotSelectable;
use diesel::prelude::*;
use diesel::sql_types::Integer;
use diesel::sqlite::Sqlite;

use crate::domain::collection::{Collection as DomainCollection, CollectionStats};
use crate::domain::product::{
    DiscountedProduct, Product as DomainProduct, ProductFilter, ProductListQuery, ProductRef,
    ProductSort, ProductSummary,
};
use crate::domain::tag::OBJECT_TYPE_PRODUCT;
use crate::models::collection::Collection as DbCollection;
use crate::models::product::{Product as DbProduct, ProductRow};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ProductReader};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .filter(products::id.eq(id))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        Ok(product.map(Into::into))
    }

    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<DomainProduct>> {
        use crate::schema::{order_items, products};

        let mut conn = self.conn()?;

        let mut items = products::table.into_boxed::<Sqlite>();

        for filter in &query.filters {
            items = match filter {
                ProductFilter::PriceCentsBetween(lo, hi) => {
                    items.filter(products::unit_price_cents.between(*lo, *hi))
                }
                ProductFilter::PriceCentsAtLeast(floor) => {
                    items.filter(products::unit_price_cents.ge(*floor))
                }
                ProductFilter::InventoryBelow(level) => {
                    items.filter(products::inventory.lt(*level))
                }
                ProductFilter::InventoryEqualsPriceCents => {
                    items.filter(products::inventory.eq(products::unit_price_cents))
                }
                ProductFilter::InventoryEqualsCollectionId => {
                    items.filter(products::inventory.nullable().eq(products::collection_id))
                }
                ProductFilter::InCollection(collection_id) => {
                    items.filter(products::collection_id.eq(Some(*collection_id)))
                }
                ProductFilter::Ordered => {
                    items.filter(products::id.eq_any(order_items::table.select(order_items::product_id)))
                }
            };
        }

        let mut sorts = query.sort.iter();
        if let Some(first) = sorts.next() {
            items = items.order_by(sort_expression(*first));
            for sort in sorts {
                items = items.then_order_by(sort_expression(*sort));
            }
        }

        if query.distinct {
            items = items.distinct();
        }
        if let Some(offset) = query.offset {
            items = items.offset(offset);
        }
        if let Some(limit) = query.limit {
            items = items.limit(limit);
        }

        let db_products = items.load::<DbProduct>(&mut conn)?;
        Ok(db_products.into_iter().map(Into::into).collect())
    }

    fn list_product_summaries(
        &self,
        offset: i64,
        limit: i64,
    ) -> RepositoryResult<Vec<ProductSummary>> {
        use crate::schema::{collections, products};

        let mut conn = self.conn()?;
        let rows = products::table
            .left_join(collections::table)
            .select((products::id, products::title, collections::title.nullable()))
            .order(products::id.asc())
            .offset(offset)
            .limit(limit)
            .load::<(i32, String, Option<String>)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(id, title, collection_title)| ProductSummary {
                id,
                title,
                collection_title,
            })
            .collect())
    }

    fn list_products_with_collections(
        &self,
    ) -> RepositoryResult<Vec<(DomainProduct, Option<DomainCollection>)>> {
        use crate::schema::{collections, products};

        let mut conn = self.conn()?;
        let rows = products::table
            .left_join(collections::table)
            .select(<(DbProduct, Option<DbCollection>)>::as_select())
            .load::<(DbProduct, Option<DbCollection>)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(product, collection)| (product.into(), collection.map(Into::into)))
            .collect())
    }

    fn list_products_with_tags(&self) -> RepositoryResult<Vec<DomainProduct>> {
        use crate::schema::{products, tagged_items, tags};

        let mut conn = self.conn()?;

        let db_products = products::table
            .order(products::id.asc())
            .load::<DbProduct>(&mut conn)?;
        if db_products.is_empty() {
            return Ok(Vec::new());
        }

        let product_ids: Vec<i32> = db_products.iter().map(|product| product.id).collect();
        let rows = tagged_items::table
            .inner_join(tags::table)
            .filter(tagged_items::object_type.eq(OBJECT_TYPE_PRODUCT))
            .filter(tagged_items::object_id.eq_any(&product_ids))
            .order(tags::label.asc())
            .select((tagged_items::object_id, tags::label))
            .load::<(i32, String)>(&mut conn)?;

        let mut labels_by_product: HashMap<i32, Vec<String>> = HashMap::new();
        for (product_id, label) in rows {
            labels_by_product.entry(product_id).or_default().push(label);
        }

        let mut domain_products = Vec::with_capacity(db_products.len());
        for db_product in db_products {
            let mut domain: DomainProduct = db_product.into();
            domain.tags = labels_by_product.remove(&domain.id).unwrap_or_default();
            domain_products.push(domain);
        }

        Ok(domain_products)
    }

    fn list_discounted_products(&self) -> RepositoryResult<Vec<DiscountedProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let rows = products::table
            .select((
                products::id,
                products::title,
                products::unit_price_cents,
                sql::<Integer>("unit_price_cents * 80 / 100"),
            ))
            .load::<(i32, String, i32, i32)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(id, title, unit_price_cents, discounted_cents)| DiscountedProduct {
                id,
                title,
                unit_price_cents,
                discounted_cents,
            })
            .collect())
    }

    fn collection_stats(&self, collection_id: i32) -> RepositoryResult<CollectionStats> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let (some_count, min_price) = products::table
            .filter(products::collection_id.eq(Some(collection_id)))
            .select((count_star(), min(products::unit_price_cents)))
            .first::<(i64, Option<i32>)>(&mut conn)?;

        Ok(CollectionStats {
            some_count,
            min_price,
        })
    }

    fn list_product_rows_raw(&self) -> RepositoryResult<Vec<ProductRef>> {
        let mut conn = self.conn()?;
        let rows = diesel::sql_query("SELECT id, title FROM products ORDER BY id")
            .load::<ProductRow>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn scan_product_rows(&self) -> RepositoryResult<()> {
        use diesel::connection::SimpleConnection;

        // Connection is returned to the pool when it falls out of scope,
        // whatever the statement outcome.
        let mut conn = self.conn()?;
        conn.batch_execute("SELECT id, title FROM products")?;

        Ok(())
    }
}

fn sort_expression(
    sort: ProductSort,
) -> Box<dyn BoxableExpression<crate::schema::products::table, Sqlite, SqlType = NotSelectable>> {
    use crate::schema::products;

    match sort {
        ProductSort::PriceAsc => Box::new(products::unit_price_cents.asc()),
        ProductSort::TitleAsc => Box::new(products::title.asc()),
        ProductSort::TitleDesc => Box::new(products::title.desc()),
    }
}
