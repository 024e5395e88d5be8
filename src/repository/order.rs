use std::collections::HashMap;

use diesel::prelude::*;

use crate::domain::order::{NewOrder as DomainNewOrder, Order as DomainOrder};
use crate::models::customer::Customer as DbCustomer;
use crate::models::order::{
    NewOrder as DbNewOrder, NewOrderItem as DbNewOrderItem, Order as DbOrder,
    OrderItem as DbOrderItem,
};
use crate::models::product::Product as DbProduct;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, OrderReader, OrderWriter};

impl OrderReader for DieselRepository {
    fn list_recent_orders(&self, limit: i64) -> RepositoryResult<Vec<DomainOrder>> {
        use crate::schema::{customers, order_items, orders, products};

        let mut conn = self.conn()?;

        let db_orders = orders::table
            .inner_join(customers::table)
            .order(orders::placed_at.desc())
            .limit(limit)
            .select(<(DbOrder, DbCustomer)>::as_select())
            .load::<(DbOrder, DbCustomer)>(&mut conn)?;

        if db_orders.is_empty() {
            return Ok(Vec::new());
        }

        let order_ids: Vec<i32> = db_orders.iter().map(|(order, _)| order.id).collect();

        let item_rows = order_items::table
            .inner_join(products::table)
            .filter(order_items::order_id.eq_any(&order_ids))
            .order(order_items::id.asc())
            .select(<(DbOrderItem, DbProduct)>::as_select())
            .load::<(DbOrderItem, DbProduct)>(&mut conn)?;

        let mut items_by_order: HashMap<i32, Vec<(DbOrderItem, DbProduct)>> = HashMap::new();
        for (item, product) in item_rows {
            items_by_order
                .entry(item.order_id)
                .or_default()
                .push((item, product));
        }

        let orders = db_orders
            .into_iter()
            .map(|(order, customer)| {
                let items = items_by_order.remove(&order.id).unwrap_or_default();
                order.into_domain(customer, items)
            })
            .collect();

        Ok(orders)
    }
}

impl OrderWriter for DieselRepository {
    fn create_order(&self, new_order: &DomainNewOrder) -> RepositoryResult<DomainOrder> {
        use crate::schema::{customers, order_items, orders, products};

        let mut conn = self.conn()?;

        conn.transaction::<DomainOrder, RepositoryError, _>(|conn| {
            let db_new = DbNewOrder::from(new_order);

            let created = diesel::insert_into(orders::table)
                .values(&db_new)
                .get_result::<DbOrder>(conn)?;

            let order_id = created.id;

            if !new_order.items.is_empty() {
                let payload: Vec<DbNewOrderItem> = new_order
                    .items
                    .iter()
                    .map(|item| DbNewOrderItem::from_domain(order_id, item))
                    .collect();

                diesel::insert_into(order_items::table)
                    .values(&payload)
                    .execute(conn)?;
            }

            let items = order_items::table
                .inner_join(products::table)
                .filter(order_items::order_id.eq(order_id))
                .order(order_items::id.asc())
                .select(<(DbOrderItem, DbProduct)>::as_select())
                .load::<(DbOrderItem, DbProduct)>(conn)?;

            let customer = customers::table
                .filter(customers::id.eq(created.customer_id))
                .first::<DbCustomer>(conn)?;

            Ok(created.into_domain(customer, items))
        })
    }
}
