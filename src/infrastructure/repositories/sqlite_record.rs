use super::map_sqlx;
use crate::domain::binding::{RecordStore, RouteModel};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool, sqlite::SqliteRow};
use std::{marker::PhantomData, sync::Arc};

/// Reads `M` records from the table named by [`RouteModel::TABLE`], decoding
/// each row as `R` first.
pub struct SqliteRecordStore<R, M> {
    pool: Arc<SqlitePool>,
    _rows: PhantomData<fn() -> (R, M)>,
}

impl<R, M> SqliteRecordStore<R, M> {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            pool,
            _rows: PhantomData,
        }
    }
}

impl<R, M> Clone for SqliteRecordStore<R, M> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.pool))
    }
}

fn quote_identifier(ident: &str) -> String {
    format!("`{}`", ident.replace('`', "``"))
}

impl<R, M> SqliteRecordStore<R, M>
where
    R: for<'r> FromRow<'r, SqliteRow> + Send + Unpin + 'static,
    M: RouteModel + TryFrom<R, Error = DomainError>,
{
    async fn fetch_first(&self, column: &str, value: &str) -> DomainResult<Option<M>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM ");
        builder.push(quote_identifier(M::TABLE));
        builder.push(" WHERE ");
        builder.push(quote_identifier(column));
        builder.push(" = ");
        builder.push_bind(value.to_owned());
        builder.push(" LIMIT 1");

        let row = builder
            .build_query_as::<R>()
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(M::try_from).transpose().map_err(|err| {
            DomainError::Persistence(format!("stored {} row is invalid: {err}", M::TABLE))
        })
    }
}

#[async_trait]
impl<R, M> RecordStore<M> for SqliteRecordStore<R, M>
where
    R: for<'r> FromRow<'r, SqliteRow> + Send + Unpin + 'static,
    M: RouteModel + TryFrom<R, Error = DomainError>,
{
    async fn find(&self, key: &str) -> DomainResult<Option<M>> {
        self.fetch_first(M::PRIMARY_KEY, key).await
    }

    async fn first_where(&self, column: &str, value: &str) -> DomainResult<Option<M>> {
        self.fetch_first(column, value).await
    }
}
