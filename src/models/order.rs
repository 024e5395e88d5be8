use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order::{
    NewOrder as DomainNewOrder, NewOrderItem as DomainNewOrderItem, Order as DomainOrder,
    OrderItem as DomainOrderItem,
};
use crate::models::customer::Customer;
use crate::models::product::Product;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::orders)]
pub struct Order {
    pub id: i32,
    pub customer_id: i32,
    pub payment_status: String,
    pub placed_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::order_items)]
#[diesel(belongs_to(Order, foreign_key = order_id))]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price_cents: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder<'a> {
    pub customer_id: i32,
    pub payment_status: &'a str,
    pub placed_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::order_items)]
pub struct NewOrderItem {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price_cents: i32,
}

impl Order {
    pub fn into_domain(self, customer: Customer, items: Vec<(OrderItem, Product)>) -> DomainOrder {
        DomainOrder {
            id: self.id,
            payment_status: self.payment_status.as_str().into(),
            placed_at: self.placed_at,
            customer: customer.into(),
            items: items
                .into_iter()
                .map(|(item, product)| item.into_domain(product))
                .collect(),
        }
    }
}

impl OrderItem {
    pub fn into_domain(self, product: Product) -> DomainOrderItem {
        DomainOrderItem {
            product_id: self.product_id,
            product_title: product.title,
            quantity: self.quantity,
            unit_price_cents: self.unit_price_cents,
        }
    }
}

impl<'a> From<&'a DomainNewOrder> for NewOrder<'a> {
    fn from(value: &'a DomainNewOrder) -> Self {
        Self {
            customer_id: value.customer_id,
            payment_status: value.payment_status.as_str(),
            placed_at: value.placed_at,
        }
    }
}

impl NewOrderItem {
    pub fn from_domain(order_id: i32, value: &DomainNewOrderItem) -> Self {
        Self {
            order_id,
            product_id: value.product_id,
            quantity: value.quantity,
            unit_price_cents: value.unit_price_cents,
        }
    }
}
