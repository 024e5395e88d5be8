use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::customer::Customer as DomainCustomer;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::customers)]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Customer> for DomainCustomer {
    fn from(value: Customer) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
