//! Binding and pagination helpers shared by the repositories.

use archivist_core::filter::{FilterBuilder, OrderBy, SqlParam};
use archivist_core::pagination::{Page, PageRequest};
use sqlx::query::{QueryAs, QueryScalar};
use sqlx::sqlite::SqliteRow;
use sqlx::{Database, FromRow, Sqlite};

use crate::DbPool;

type Args<'q> = <Sqlite as Database>::Arguments<'q>;

/// Bind composer parameters, in order, to a `query_as` query.
pub(crate) fn bind_params<'q, O>(
    mut query: QueryAs<'q, Sqlite, O, Args<'q>>,
    params: &'q [SqlParam],
) -> QueryAs<'q, Sqlite, O, Args<'q>> {
    for param in params {
        query = match param {
            SqlParam::Int(v) => query.bind(*v),
            SqlParam::Float(v) => query.bind(*v),
            SqlParam::Bool(v) => query.bind(*v),
            SqlParam::Text(v) => query.bind(v.as_str()),
        };
    }
    query
}

/// Bind composer parameters, in order, to a `query_scalar` query.
pub(crate) fn bind_params_scalar<'q, O>(
    mut query: QueryScalar<'q, Sqlite, O, Args<'q>>,
    params: &'q [SqlParam],
) -> QueryScalar<'q, Sqlite, O, Args<'q>> {
    for param in params {
        query = match param {
            SqlParam::Int(v) => query.bind(*v),
            SqlParam::Float(v) => query.bind(*v),
            SqlParam::Bool(v) => query.bind(*v),
            SqlParam::Text(v) => query.bind(v.as_str()),
        };
    }
    query
}

/// Run a page query and its `COUNT(*)` companion concurrently.
///
/// Both statements are rendered from the same `from` clause and the same
/// `filter`, so `total` always counts exactly the rows the page is cut from.
pub(crate) async fn fetch_page<O>(
    pool: &DbPool,
    columns: &str,
    from: &str,
    filter: &FilterBuilder,
    order: &OrderBy,
    page: PageRequest,
) -> Result<Page<O>, sqlx::Error>
where
    O: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let select_sql = filter.select_sql(&format!("SELECT {columns} {from}"), order);
    let count_sql = filter.count_sql(from);

    let rows = bind_params(sqlx::query_as::<_, O>(&select_sql), filter.params())
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(pool);
    let total = bind_params_scalar(sqlx::query_scalar::<_, i64>(&count_sql), filter.params())
        .fetch_one(pool);

    let (rows, total) = tokio::try_join!(rows, total)?;
    Ok(Page::new(rows, page, total))
}

/// Run an unpaginated filtered query.
pub(crate) async fn fetch_filtered<O>(
    pool: &DbPool,
    columns: &str,
    from: &str,
    filter: &FilterBuilder,
    order: &OrderBy,
) -> Result<Vec<O>, sqlx::Error>
where
    O: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let sql = format!(
        "SELECT {columns} {from} {} {}",
        filter.where_clause(),
        order.to_sql()
    );
    bind_params(sqlx::query_as::<_, O>(&sql), filter.params())
        .fetch_all(pool)
        .await
}
