//! Search, filter, ordering and pagination over sea-orm selects.

use bazaar_domain::pagination::{ListQuery, Page, PageRequest, Sort};
use sea_orm::{
    ColumnTrait, ColumnType, Condition, ConnectionTrait, DbErr, EntityTrait, FromQueryResult,
    Order, PaginatorTrait, QueryFilter, QueryOrder, Select, Value,
    sea_query::{Expr, Func, LikeExpr},
};

#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("{value:?} is not a valid value for filter {field}")]
    InvalidFilter { field: String, value: String },
    #[error(transparent)]
    Db(#[from] DbErr),
}

/// Allow-lists of the columns a list endpoint exposes.
///
/// Names in the query string are matched against the column names.
pub struct ListFields<E: EntityTrait> {
    /// Text columns matched case-insensitively by `search`.
    pub search: &'static [E::Column],
    pub filter: &'static [E::Column],
    pub ordering: &'static [E::Column],
    /// Ordered descending when the query requests no usable ordering.
    pub primary_key: E::Column,
}

pub trait ApplyListQuery: Sized {
    type Entity: EntityTrait;

    /// Narrow and order the select. When `search` is present, field filters are ignored.
    fn apply_list_query(
        self,
        query: &ListQuery,
        fields: &ListFields<Self::Entity>,
    ) -> Result<Self, ListError>;
}

impl<E> ApplyListQuery for Select<E>
where
    E: EntityTrait,
{
    type Entity = E;

    fn apply_list_query(
        mut self,
        query: &ListQuery,
        fields: &ListFields<E>,
    ) -> Result<Self, ListError> {
        if query.search.is_some() {
            for term in query.search_terms() {
                let pattern = contains_pattern(term);
                let any_column = fields.search.iter().fold(Condition::any(), |cond, column| {
                    cond.add(
                        Expr::expr(Func::lower(Expr::col((E::default(), *column))))
                            .like(LikeExpr::new(pattern.clone()).escape('\\')),
                    )
                });
                self = self.filter(any_column);
            }
        } else {
            for (name, raw) in &query.filters {
                let Some(column) = find_column(fields.filter, name) else {
                    continue;
                };
                let value = filter_value(&column, raw).ok_or_else(|| ListError::InvalidFilter {
                    field: name.clone(),
                    value: raw.clone(),
                })?;
                self = self.filter(column.eq(value));
            }
        }

        let mut ordered = false;
        for order in &query.ordering {
            if let Some(column) = find_column(fields.ordering, &order.field) {
                let direction = match order.sort {
                    Sort::Asc => Order::Asc,
                    Sort::Desc => Order::Desc,
                };
                self = self.order_by(column, direction);
                ordered = true;
            }
        }
        if !ordered {
            self = self.order_by_desc(fields.primary_key);
        }
        Ok(self)
    }
}

/// `LIKE` pattern matching `term` anywhere, lowercased, with its own wildcards escaped.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn find_column<C: ColumnTrait>(columns: &[C], name: &str) -> Option<C> {
    columns.iter().copied().find(|column| column.as_str() == name)
}

fn filter_value<C: ColumnTrait>(column: &C, raw: &str) -> Option<Value> {
    match column.def().get_column_type() {
        ColumnType::Boolean => parse_bool(raw).map(Value::from),
        ColumnType::TinyInteger
        | ColumnType::SmallInteger
        | ColumnType::Integer
        | ColumnType::BigInteger => raw.parse::<i64>().ok().map(Value::from),
        ColumnType::Uuid => raw.parse::<uuid::Uuid>().ok().map(Value::from),
        _ => Some(Value::from(raw.to_owned())),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Fetch one page of `select` together with the total row count.
pub async fn fetch_page<'db, E, C>(
    select: Select<E>,
    db: &'db C,
    page: PageRequest,
) -> Result<Page<E::Model>, DbErr>
where
    E: EntityTrait,
    E::Model: FromQueryResult + Sized + Send + Sync + 'db,
    C: ConnectionTrait,
{
    let PageRequest { per_page, page } = page.clamped();
    let paginator = select.paginate(db, u64::from(per_page));
    let count = paginator.num_items().await?;
    let results = paginator.fetch_page(u64::from(page - 1)).await?;
    Ok(Page {
        count,
        page,
        per_page,
        results,
    })
}

/// Whether any row matches `select`.
pub async fn exists<'db, E, C>(select: Select<E>, db: &'db C) -> Result<bool, DbErr>
where
    E: EntityTrait,
    E::Model: FromQueryResult + Sized + Send + Sync + 'db,
    C: ConnectionTrait,
{
    Ok(select.count(db).await? > 0)
}
