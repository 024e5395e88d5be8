use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::customer::Customer;

/// Payment states an order moves through.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Payment has not been taken yet.
    Pending,
    /// Payment completed successfully.
    Complete,
    /// Payment was attempted and failed.
    Failed,
}

impl Default for PaymentStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl PaymentStatus {
    /// Column value stored for this state.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Complete => "complete",
            Self::Failed => "failed",
        }
    }
}

impl From<&str> for PaymentStatus {
    fn from(value: &str) -> Self {
        match value {
            "complete" => Self::Complete,
            "failed" => Self::Failed,
            _ => Self::Pending,
        }
    }
}

/// Domain representation of an order with its customer and line items.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Order {
    /// Unique identifier of the order.
    pub id: i32,
    /// Current payment state of the order.
    pub payment_status: PaymentStatus,
    /// Timestamp for when the order was placed.
    pub placed_at: NaiveDateTime,
    /// Customer who placed the order.
    pub customer: Customer,
    /// Line items belonging to the order.
    pub items: Vec<OrderItem>,
}

/// Single line item of an order, carrying the product title it was loaded
/// with.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderItem {
    pub product_id: i32,
    pub product_title: String,
    pub quantity: i32,
    /// Price per unit at the time the order was placed.
    pub unit_price_cents: i32,
}

/// Payload required to insert a new order with its line items.
#[derive(Debug, Clone)]
pub struct NewOrder {
    /// Customer placing the order.
    pub customer_id: i32,
    /// Initial payment state.
    pub payment_status: PaymentStatus,
    /// Line items persisted together with the order.
    pub items: Vec<NewOrderItem>,
    /// Timestamp captured when the order payload was created.
    pub placed_at: NaiveDateTime,
}

impl NewOrder {
    /// Build a new order payload for `customer_id` with the current
    /// timestamp and no items.
    pub fn new(customer_id: i32) -> Self {
        Self {
            customer_id,
            payment_status: PaymentStatus::default(),
            items: Vec::new(),
            placed_at: chrono::Local::now().naive_utc(),
        }
    }

    /// Append a line item to the order payload.
    pub fn with_item(mut self, product_id: i32, quantity: i32, unit_price_cents: i32) -> Self {
        self.items.push(NewOrderItem {
            product_id,
            quantity,
            unit_price_cents,
        });
        self
    }

    /// Override the initial payment state.
    pub fn with_payment_status(mut self, payment_status: PaymentStatus) -> Self {
        self.payment_status = payment_status;
        self
    }
}

/// Line item carried by a [`NewOrder`] payload.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price_cents: i32,
}
