use diesel::dsl::{count, sql};
use diesel::prelude::*;
use diesel::sql_types::Text;

use crate::domain::customer::{CustomerAlias, CustomerName, CustomerOrderCount};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CustomerReader, DieselRepository};

impl CustomerReader for DieselRepository {
    fn list_customer_aliases(&self) -> RepositoryResult<Vec<CustomerAlias>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let rows = customers::table
            .select((customers::id, customers::id + 1))
            .order(customers::id.asc())
            .load::<(i32, i32)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(id, shifted_id)| CustomerAlias { id, shifted_id })
            .collect())
    }

    fn list_customer_names(&self) -> RepositoryResult<Vec<CustomerName>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let rows = customers::table
            .select((
                customers::id,
                sql::<Text>("first_name || ' ' || last_name"),
            ))
            .order(customers::id.asc())
            .load::<(i32, String)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(id, full_name)| CustomerName { id, full_name })
            .collect())
    }

    fn list_customer_order_counts(&self) -> RepositoryResult<Vec<CustomerOrderCount>> {
        use crate::schema::{customers, orders};

        let mut conn = self.conn()?;
        let rows = customers::table
            .left_join(orders::table)
            .group_by((customers::id, customers::first_name, customers::last_name))
            .select((
                customers::id,
                customers::first_name,
                customers::last_name,
                count(orders::id.nullable()),
            ))
            .order(customers::id.asc())
            .load::<(i32, String, String, i64)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(id, first_name, last_name, orders_count)| CustomerOrderCount {
                id,
                first_name,
                last_name,
                orders_count,
            })
            .collect())
    }
}
