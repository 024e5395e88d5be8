use diesel::prelude::*;

use crate::domain::collection::{
    Collection as DomainCollection, NewCollection as DomainNewCollection,
    UpdateCollection as DomainUpdateCollection,
};
use crate::models::collection::{
    Collection as DbCollection, NewCollection as DbNewCollection,
    UpdateCollection as DbUpdateCollection,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CollectionReader, CollectionWriter, DieselRepository};

impl CollectionReader for DieselRepository {
    fn get_collection_by_id(&self, id: i32) -> RepositoryResult<Option<DomainCollection>> {
        use crate::schema::collections;

        let mut conn = self.conn()?;
        let collection = collections::table
            .filter(collections::id.eq(id))
            .first::<DbCollection>(&mut conn)
            .optional()?;

        Ok(collection.map(Into::into))
    }
}

impl CollectionWriter for DieselRepository {
    fn create_collection(
        &self,
        new_collection: &DomainNewCollection,
    ) -> RepositoryResult<DomainCollection> {
        use crate::schema::collections;

        let mut conn = self.conn()?;
        let db_new = DbNewCollection::from(new_collection);

        let created = diesel::insert_into(collections::table)
            .values(&db_new)
            .get_result::<DbCollection>(&mut conn)?;

        Ok(created.into())
    }

    fn update_collection(
        &self,
        collection_id: i32,
        updates: &DomainUpdateCollection,
    ) -> RepositoryResult<DomainCollection> {
        use crate::schema::collections;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateCollection::from(updates);

        let target = collections::table.filter(collections::id.eq(collection_id));

        let updated = diesel::update(target)
            .set(&db_updates)
            .get_result::<DbCollection>(&mut conn)?;

        Ok(updated.into())
    }

    fn clear_featured_product(&self, collection_id: i32) -> RepositoryResult<usize> {
        use crate::schema::collections;

        let mut conn = self.conn()?;
        let target = collections::table.filter(collections::id.eq(collection_id));

        let affected = diesel::update(target)
            .set(collections::featured_product_id.eq(None::<i32>))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
