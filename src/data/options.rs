//! Query options shared by every [`EntityRepository`](super::EntityRepository) read.
//!
//! A single [`FindOptions`] value covers filtering, sorting, pagination and nested property
//! inclusion. Every part is optional and an absent part places no constraint on the query.

use sea_orm::{sea_query::Expr, Condition, IdenStatic};

/// A predicate applied to a repository query.
#[derive(Clone, Debug)]
pub enum Filter {
    /// Typed SeaORM condition, e.g. `Column::Name.eq("Ada")`.
    Condition(Condition),
    /// Raw SQL predicate inserted verbatim into the WHERE clause.
    ///
    /// Only pass trusted input, the fragment is not escaped.
    Raw(String),
}

impl Filter {
    /// Creates a raw SQL filter.
    pub fn raw(sql: impl Into<String>) -> Self {
        Self::Raw(sql.into())
    }
}

impl From<Condition> for Filter {
    fn from(condition: Condition) -> Self {
        Self::Condition(condition)
    }
}

impl From<sea_orm::sea_query::SimpleExpr> for Filter {
    fn from(expr: sea_orm::sea_query::SimpleExpr) -> Self {
        Self::Condition(Condition::all().add(expr))
    }
}

/// Combines a filter set into one condition where every filter must hold.
pub(crate) fn to_condition(filters: &[Filter]) -> Condition {
    filters
        .iter()
        .fold(Condition::all(), |condition, filter| match filter {
            Filter::Condition(inner) => condition.add(inner.clone()),
            Filter::Raw(sql) => condition.add(Expr::cust(sql.clone())),
        })
}

/// Sort direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

/// Sort by a named entity property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderBy {
    pub property: String,
    pub direction: Direction,
}

impl OrderBy {
    pub fn asc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Ascending,
        }
    }

    pub fn desc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Descending,
        }
    }

    /// Sort by a typed entity column.
    ///
    /// # Arguments
    /// - `column` - Any SeaORM column, e.g. `entity::employee::Column::Salary`
    /// - `direction` - Sort direction
    pub fn column<C: IdenStatic>(column: C, direction: Direction) -> Self {
        Self {
            property: column.as_str().to_string(),
            direction,
        }
    }
}

/// One-based page selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    pub number: u64,
    pub size: u64,
}

impl Page {
    /// Rows skipped before this page starts.
    pub fn offset(&self) -> u64 {
        self.size.saturating_mul(self.number.saturating_sub(1))
    }
}

/// Pagination and sort settings fixed together.
///
/// Built once and read through accessors, the settings cannot change afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryLimits {
    page: Page,
    order_by: OrderBy,
}

impl QueryLimits {
    /// Creates query limits.
    ///
    /// Page number and size are validated when the limits are used by a query.
    ///
    /// # Arguments
    /// - `page` - One-based page number
    /// - `size` - Rows per page
    /// - `property` - Property to sort by
    /// - `direction` - Sort direction
    pub fn new(page: u64, size: u64, property: impl Into<String>, direction: Direction) -> Self {
        Self {
            page: Page { number: page, size },
            order_by: OrderBy {
                property: property.into(),
                direction,
            },
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn order_by(&self) -> &OrderBy {
        &self.order_by
    }
}

/// Unified read options for repository queries.
///
/// # Example
///
/// ```ignore
/// let options = FindOptions::new()
///     .filter(entity::customer::Column::Name.contains("a"))
///     .limits(QueryLimits::new(2, 5, "name", Direction::Ascending))
///     .include("addresses");
/// ```
#[derive(Clone, Debug, Default)]
pub struct FindOptions {
    pub filters: Vec<Filter>,
    pub order_by: Option<OrderBy>,
    pub page: Option<Page>,
    pub include: Vec<String>,
}

impl FindOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a typed or raw filter, all filters must match.
    pub fn filter(mut self, filter: impl Into<Filter>) -> Self {
        self.filters.push(filter.into());
        self
    }

    /// Adds a raw SQL filter.
    pub fn raw_filter(mut self, sql: impl Into<String>) -> Self {
        self.filters.push(Filter::raw(sql));
        self
    }

    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    pub fn page(mut self, number: u64, size: u64) -> Self {
        self.page = Some(Page { number, size });
        self
    }

    /// Applies pagination and sort from [`QueryLimits`].
    pub fn limits(mut self, limits: QueryLimits) -> Self {
        self.page = Some(limits.page());
        self.order_by = Some(limits.order_by().clone());
        self
    }

    /// Includes a nested navigation property in the results.
    pub fn include(mut self, property: impl Into<String>) -> Self {
        self.include.push(property.into());
        self
    }
}
