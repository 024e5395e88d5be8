use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a store customer.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Customer {
    /// Unique identifier of the customer.
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Timestamp for when the customer record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the customer record.
    pub updated_at: NaiveDateTime,
}

/// Customer id alongside an alias column shifted by one, computed in SQL.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CustomerAlias {
    pub id: i32,
    pub shifted_id: i32,
}

/// Customer id alongside a display name concatenated in SQL.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CustomerName {
    pub id: i32,
    pub full_name: String,
}

/// Per-customer order tally, zero for customers without orders.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CustomerOrderCount {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub orders_count: i64,
}
