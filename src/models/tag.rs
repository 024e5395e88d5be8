use diesel::prelude::*;

use crate::domain::tag::Tag as DomainTag;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::tags)]
pub struct Tag {
    pub id: i32,
    pub label: String,
}

impl From<Tag> for DomainTag {
    fn from(value: Tag) -> Self {
        Self {
            id: value.id,
            label: value.label,
        }
    }
}
