//! Filter composer for dynamic list queries.
//!
//! A [`FilterBuilder`] collects predicates and their bound values in two
//! parallel lists. Only predicates whose value is present are recorded, so an
//! unset filter imposes no constraint. Column names are `&'static str` and the
//! sort column comes from a [`SortColumn`] allow-list: caller-supplied text is
//! only ever bound as a parameter, never interpolated.
//!
//! The page query and its `COUNT(*)` companion are both rendered from the
//! same builder ([`FilterBuilder::select_sql`] / [`FilterBuilder::count_sql`])
//! so their filter semantics cannot diverge.

use std::str::FromStr;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// A value bound to a `?` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        SqlParam::Int(value)
    }
}

impl From<f64> for SqlParam {
    fn from(value: f64) -> Self {
        SqlParam::Float(value)
    }
}

impl From<bool> for SqlParam {
    fn from(value: bool) -> Self {
        SqlParam::Bool(value)
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        SqlParam::Text(value)
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        SqlParam::Text(value.to_string())
    }
}

// ---------------------------------------------------------------------------
// FilterBuilder
// ---------------------------------------------------------------------------

/// Conjunction of optional predicates plus the parameters they bind.
///
/// `params()[i]` always belongs to the `i`-th `?` placeholder of
/// `where_clause()`.
#[derive(Debug, Clone, Default)]
pub struct FilterBuilder {
    predicates: Vec<String>,
    params: Vec<SqlParam>,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fixed predicate that binds nothing (e.g. `p.is_active = 1`).
    pub fn predicate(&mut self, sql: &'static str) -> &mut Self {
        self.predicates.push(sql.to_string());
        self
    }

    /// Add `predicate` with exactly one `?` placeholder, if `value` is set.
    ///
    /// Used for predicates that are not a plain comparison, such as a
    /// membership sub-select through a join table.
    pub fn bind<V: Into<SqlParam>>(
        &mut self,
        predicate: &'static str,
        value: Option<V>,
    ) -> &mut Self {
        if let Some(value) = value {
            debug_assert_eq!(predicate.matches('?').count(), 1);
            self.predicates.push(predicate.to_string());
            self.params.push(value.into());
        }
        self
    }

    /// `column = ?` when `value` is set.
    pub fn eq<V: Into<SqlParam>>(&mut self, column: &'static str, value: Option<V>) -> &mut Self {
        self.compare(column, "=", value)
    }

    /// `column >= ?` when `value` is set.
    pub fn min<V: Into<SqlParam>>(&mut self, column: &'static str, value: Option<V>) -> &mut Self {
        self.compare(column, ">=", value)
    }

    /// `column <= ?` when `value` is set.
    pub fn max<V: Into<SqlParam>>(&mut self, column: &'static str, value: Option<V>) -> &mut Self {
        self.compare(column, "<=", value)
    }

    /// Boolean flag column. `Some(false)` is a real constraint, not "unset".
    pub fn flag(&mut self, column: &'static str, value: Option<bool>) -> &mut Self {
        self.compare(column, "=", value)
    }

    /// Case-insensitive "contains" over one or more text columns, OR-ed
    /// together as a single group. One parameter is bound per column.
    pub fn contains_any(&mut self, columns: &[&'static str], term: Option<&str>) -> &mut Self {
        let Some(term) = term else {
            return self;
        };
        if columns.is_empty() {
            return self;
        }

        let pattern = like_pattern(term);
        let group = columns
            .iter()
            .map(|column| format!("LOWER({column}) LIKE ? ESCAPE '\\'"))
            .collect::<Vec<_>>()
            .join(" OR ");

        self.predicates.push(format!("({group})"));
        self.params
            .extend(columns.iter().map(|_| SqlParam::Text(pattern.clone())));
        self
    }

    fn compare<V: Into<SqlParam>>(
        &mut self,
        column: &'static str,
        op: &'static str,
        value: Option<V>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.predicates.push(format!("{column} {op} ?"));
            self.params.push(value.into());
        }
        self
    }

    /// `""` when no predicate was added, otherwise `"WHERE a AND b ..."`.
    pub fn where_clause(&self) -> String {
        if self.predicates.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.predicates.join(" AND "))
        }
    }

    /// Bound values in placeholder order.
    pub fn params(&self) -> &[SqlParam] {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Render the page query: `{select_from} WHERE .. ORDER BY .. LIMIT ? OFFSET ?`.
    ///
    /// The caller binds `params()` followed by the limit and the offset.
    pub fn select_sql(&self, select_from: &str, order: &OrderBy) -> String {
        join_sql(&[
            select_from,
            self.where_clause().as_str(),
            order.to_sql().as_str(),
            "LIMIT ? OFFSET ?",
        ])
    }

    /// Render the matching count query: `SELECT COUNT(*) {from} WHERE ..`.
    pub fn count_sql(&self, from: &str) -> String {
        join_sql(&["SELECT COUNT(*)", from, self.where_clause().as_str()])
    }
}

fn join_sql(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build a `LIKE` pattern matching `term` anywhere, with wildcards escaped.
///
/// Only ASCII letters are folded, matching SQLite's `LOWER()` on the column
/// side. Non-ASCII letters must match case exactly.
///
/// ```
/// use archivist_core::filter::like_pattern;
/// assert_eq!(like_pattern("Sky"), "%sky%");
/// assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
/// ```
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_ascii_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    /// Parse an optional `sort_order` value; absent or blank means descending.
    pub fn parse_optional(value: Option<&str>) -> Result<Self, CoreError> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            None => Ok(SortDirection::default()),
            Some(v) => v.parse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortDirection::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortDirection::Desc)
        } else {
            Err(CoreError::Validation(format!(
                "Invalid sort_order '{s}'. Allowed: asc, desc"
            )))
        }
    }
}

/// An enumerated allow-list of sortable columns for one entity.
pub trait SortColumn: Sized + Copy {
    /// Public names accepted in `sort_by`, in the order they are reported.
    const ALLOWED: &'static [&'static str];

    fn from_name(name: &str) -> Option<Self>;

    /// SQL expression interpolated into `ORDER BY`.
    fn column(self) -> &'static str;

    /// Parse an optional `sort_by` value, falling back to `default`.
    fn parse_optional(value: Option<&str>, default: Self) -> Result<Self, CoreError> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            None => Ok(default),
            Some(name) => Self::from_name(name).ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid sort_by '{name}'. Allowed: {}",
                    Self::ALLOWED.join(", ")
                ))
            }),
        }
    }
}

/// `ORDER BY` fragment with an optional deterministic tie-break column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    column: &'static str,
    direction: SortDirection,
    tie_breaker: Option<&'static str>,
}

impl OrderBy {
    pub fn new(column: &'static str, direction: SortDirection) -> Self {
        Self {
            column,
            direction,
            tie_breaker: None,
        }
    }

    pub fn by<S: SortColumn>(sort: S, direction: SortDirection) -> Self {
        Self::new(sort.column(), direction)
    }

    /// Secondary ordering, applied in the same direction.
    pub fn then(mut self, column: &'static str) -> Self {
        self.tie_breaker = Some(column);
        self
    }

    pub fn to_sql(&self) -> String {
        let dir = self.direction.as_sql();
        match self.tie_breaker {
            Some(tie) => format!("ORDER BY {} {dir}, {tie} {dir}", self.column),
            None => format!("ORDER BY {} {dir}", self.column),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum TestSort {
        Name,
        Price,
    }

    impl SortColumn for TestSort {
        const ALLOWED: &'static [&'static str] = &["name", "price"];

        fn from_name(name: &str) -> Option<Self> {
            match name {
                "name" => Some(TestSort::Name),
                "price" => Some(TestSort::Price),
                _ => None,
            }
        }

        fn column(self) -> &'static str {
            match self {
                TestSort::Name => "p.name",
                TestSort::Price => "p.price",
            }
        }
    }

    // -- FilterBuilder -------------------------------------------------------

    #[test]
    fn empty_builder_renders_no_where_clause() {
        let filter = FilterBuilder::new();
        assert!(filter.is_empty());
        assert_eq!(filter.where_clause(), "");
        assert!(filter.params().is_empty());
    }

    #[test]
    fn unset_filters_add_nothing() {
        let mut filter = FilterBuilder::new();
        filter
            .eq::<i64>("p.brand_id", None)
            .min::<f64>("p.price", None)
            .max::<f64>("p.price", None)
            .flag("p.is_featured", None)
            .bind::<i64>("p.id IN (SELECT 1 WHERE ?)", None)
            .contains_any(&["p.name"], None);

        assert!(filter.is_empty());
        assert!(filter.params().is_empty());
    }

    #[test]
    fn params_follow_placeholder_order() {
        let mut filter = FilterBuilder::new();
        filter
            .predicate("p.is_active = 1")
            .eq("p.brand_id", Some(3_i64))
            .min("p.price", Some(10.0))
            .max("p.price", Some(50.0))
            .flag("p.is_featured", Some(false));

        assert_eq!(
            filter.where_clause(),
            "WHERE p.is_active = 1 AND p.brand_id = ? AND p.price >= ? AND p.price <= ? \
             AND p.is_featured = ?"
        );
        assert_eq!(
            filter.params(),
            &[
                SqlParam::Int(3),
                SqlParam::Float(10.0),
                SqlParam::Float(50.0),
                SqlParam::Bool(false),
            ]
        );
    }

    #[test]
    fn contains_any_builds_or_group_with_one_param_per_column() {
        let mut filter = FilterBuilder::new();
        filter
            .predicate("c.is_active = 1")
            .contains_any(&["c.name", "c.species"], Some("SKI"));

        assert_eq!(
            filter.where_clause(),
            "WHERE c.is_active = 1 AND (LOWER(c.name) LIKE ? ESCAPE '\\' \
             OR LOWER(c.species) LIKE ? ESCAPE '\\')"
        );
        assert_eq!(
            filter.params(),
            &[
                SqlParam::Text("%ski%".into()),
                SqlParam::Text("%ski%".into()),
            ]
        );
    }

    #[test]
    fn contains_any_with_no_columns_is_noop() {
        let mut filter = FilterBuilder::new();
        filter.contains_any(&[], Some("term"));
        assert!(filter.is_empty());
    }

    #[test]
    fn placeholder_count_matches_param_count() {
        let mut filter = FilterBuilder::new();
        filter
            .predicate("p.is_active = 1")
            .bind(
                "p.id IN (SELECT pc.product_id FROM product_categories pc \
                 WHERE pc.category_id = ?)",
                Some(2_i64),
            )
            .contains_any(&["p.name", "p.description", "p.sku"], Some("lamp"))
            .min("p.price", Some(1.5));

        let placeholders = filter.where_clause().matches('?').count();
        assert_eq!(placeholders, filter.params().len());
        assert_eq!(placeholders, 5);
    }

    #[test]
    fn like_pattern_folds_ascii_only() {
        assert_eq!(like_pattern("ÉOWYN"), "%Éowyn%");
        assert_eq!(like_pattern("éowyn"), "%éowyn%");
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("a_b%c\\d"), "%a\\_b\\%c\\\\d%");
    }

    #[test]
    fn select_and_count_share_the_same_where_clause() {
        let mut filter = FilterBuilder::new();
        filter
            .predicate("p.is_active = 1")
            .max("p.price", Some(20.0));
        let order = OrderBy::new("p.price", SortDirection::Asc).then("p.id");

        let select = filter.select_sql("SELECT p.id FROM products p", &order);
        let count = filter.count_sql("FROM products p");

        assert_eq!(
            select,
            "SELECT p.id FROM products p WHERE p.is_active = 1 AND p.price <= ? \
             ORDER BY p.price ASC, p.id ASC LIMIT ? OFFSET ?"
        );
        assert_eq!(
            count,
            "SELECT COUNT(*) FROM products p WHERE p.is_active = 1 AND p.price <= ?"
        );
        assert!(select.contains(&filter.where_clause()));
        assert!(count.ends_with(&filter.where_clause()));
    }

    #[test]
    fn count_sql_without_filters_has_no_where() {
        let filter = FilterBuilder::new();
        assert_eq!(filter.count_sql("FROM episodes"), "SELECT COUNT(*) FROM episodes");
    }

    // -- Sorting -------------------------------------------------------------

    #[test]
    fn sort_direction_defaults_to_desc() {
        assert_eq!(SortDirection::parse_optional(None).unwrap(), SortDirection::Desc);
        assert_eq!(SortDirection::parse_optional(Some("  ")).unwrap(), SortDirection::Desc);
    }

    #[test]
    fn sort_direction_is_case_insensitive() {
        assert_eq!(SortDirection::parse_optional(Some("ASC")).unwrap(), SortDirection::Asc);
        assert_eq!(SortDirection::parse_optional(Some("desc")).unwrap(), SortDirection::Desc);
    }

    #[test]
    fn sort_direction_rejects_unknown_values() {
        assert_matches!(
            SortDirection::parse_optional(Some("sideways")),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn sort_column_uses_allow_list() {
        assert_eq!(
            TestSort::parse_optional(Some("price"), TestSort::Name).unwrap(),
            TestSort::Price
        );
        assert_eq!(
            TestSort::parse_optional(None, TestSort::Name).unwrap(),
            TestSort::Name
        );
    }

    #[test]
    fn sort_column_rejects_injection_attempts() {
        let err = TestSort::parse_optional(Some("price; DROP TABLE products"), TestSort::Name)
            .unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("Allowed: name, price"));
    }

    #[test]
    fn order_by_renders_tie_breaker_in_same_direction() {
        let order = OrderBy::by(TestSort::Name, SortDirection::Desc).then("p.id");
        assert_eq!(order.to_sql(), "ORDER BY p.name DESC, p.id DESC");
        assert_eq!(
            OrderBy::new("e.episode_number", SortDirection::Asc).to_sql(),
            "ORDER BY e.episode_number ASC"
        );
    }
}
