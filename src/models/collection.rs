use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::collection::{
    Collection as DomainCollection, NewCollection as DomainNewCollection,
    UpdateCollection as DomainUpdateCollection,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::collections)]
pub struct Collection {
    pub id: i32,
    pub title: String,
    pub featured_product_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::collections)]
pub struct NewCollection<'a> {
    pub title: &'a str,
    pub featured_product_id: Option<i32>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::collections)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateCollection<'a> {
    pub title: &'a str,
    pub featured_product_id: Option<i32>,
    pub updated_at: NaiveDateTime,
}

impl From<Collection> for DomainCollection {
    fn from(value: Collection) -> Self {
        Self {
            id: value.id,
            title: value.title,
            featured_product_id: value.featured_product_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewCollection> for NewCollection<'a> {
    fn from(value: &'a DomainNewCollection) -> Self {
        Self {
            title: value.title.as_str(),
            featured_product_id: value.featured_product_id,
        }
    }
}

impl<'a> From<&'a DomainUpdateCollection> for UpdateCollection<'a> {
    fn from(value: &'a DomainUpdateCollection) -> Self {
        Self {
            title: value.title.as_str(),
            featured_product_id: value.featured_product_id,
            updated_at: value.updated_at,
        }
    }
}
