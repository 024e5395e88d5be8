use diesel::prelude::*;

use crate::domain::tag::Tag as DomainTag;
use crate::models::tag::Tag as DbTag;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, TagReader};

impl TagReader for DieselRepository {
    fn tags_for(&self, object_type: &str, object_id: i32) -> RepositoryResult<Vec<DomainTag>> {
        use crate::schema::{tagged_items, tags};

        let mut conn = self.conn()?;
        let db_tags = tagged_items::table
            .inner_join(tags::table)
            .filter(tagged_items::object_type.eq(object_type))
            .filter(tagged_items::object_id.eq(object_id))
            .order(tags::label.asc())
            .select(DbTag::as_select())
            .load::<DbTag>(&mut conn)?;

        Ok(db_tags.into_iter().map(Into::into).collect())
    }
}
