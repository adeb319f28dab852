//! # Property Search Query Builder
//!
//! Turns [`FilterOptions`] plus a result limit into one parameterized SQL
//! statement and the parameter list that goes with it.
//!
//! ## How a Query Is Assembled
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FilterOptions { city: "van", minimum_price_per_night: 5000 }          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SELECT properties.*, avg(rating) ...   ← base query                   │
//! │  FROM properties                                                       │
//! │  LEFT JOIN property_reviews ...                                        │
//! │       │                                                                 │
//! │       │  checks run in a fixed order: city, owner, min, max            │
//! │       ▼                                                                 │
//! │  WHERE city LIKE $1           params = ["%van%"]                       │
//! │  AND cost_per_night > $2      params = ["%van%", 5000]                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GROUP BY properties.id                                                │
//! │  [HAVING avg(rating) >= $n]   only with minimum_rating                 │
//! │  ORDER BY cost_per_night                                               │
//! │  LIMIT $n                     limit is always the last parameter       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every placeholder index is the length of the parameter list right after
//! its value was pushed, so indices and values cannot drift apart.
//!
//! ## Usage
//! ```rust
//! use lightbnb_core::FilterOptions;
//! use lightbnb_db::query::{PropertySearch, SqlParam};
//!
//! let options = FilterOptions {
//!     city: Some("van".to_string()),
//!     ..Default::default()
//! };
//! let query = PropertySearch::new(&options).build();
//!
//! assert!(query.sql.contains("WHERE city LIKE $1"));
//! assert_eq!(query.params[0], SqlParam::Text("%van%".to_string()));
//! ```

use std::fmt;

use lightbnb_core::{FilterOptions, DEFAULT_SEARCH_LIMIT};
use serde::Serialize;

/// Select list and join shared by every property search.
///
/// The LEFT JOIN keeps properties that have no reviews; their
/// `average_rating` comes back NULL.
const BASE_QUERY: &str = "SELECT properties.*, avg(rating)::float8 AS average_rating
FROM properties
LEFT JOIN property_reviews ON properties.id = property_reviews.property_id";

// =============================================================================
// Parameters
// =============================================================================

/// A value bound to a positional placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlParam {
    Text(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for SqlParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlParam::Text(value) => write!(f, "'{}'", value.replace('\'', "''")),
            SqlParam::Int(value) => write!(f, "{value}"),
            SqlParam::Float(value) => write!(f, "{value}"),
        }
    }
}

/// A finished statement: SQL text plus parameters in placeholder order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuiltQuery {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

// =============================================================================
// Builder
// =============================================================================

/// Property search over a borrowed set of filters.
///
/// ## Example
/// ```rust
/// use lightbnb_core::FilterOptions;
/// use lightbnb_db::query::{PropertySearch, SqlParam};
///
/// let options = FilterOptions::default();
/// let query = PropertySearch::new(&options).limit(25).build();
///
/// assert!(query.sql.ends_with("LIMIT $1"));
/// assert_eq!(query.params, vec![SqlParam::Int(25)]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PropertySearch<'a> {
    options: &'a FilterOptions,
    limit: u32,
}

impl<'a> PropertySearch<'a> {
    /// Starts a search with the default limit of
    /// [`DEFAULT_SEARCH_LIMIT`] rows.
    pub fn new(options: &'a FilterOptions) -> Self {
        PropertySearch {
            options,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Sets the maximum number of rows.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Builds the SQL and its parameter list.
    pub fn build(&self) -> BuiltQuery {
        let mut query = QueryWriter::new(BASE_QUERY);
        let options = self.options;

        if let Some(city) = options.city() {
            query.filter("city LIKE", SqlParam::Text(format!("%{city}%")));
        }

        if let Some(owner_id) = options.owner_id() {
            query.filter("owner_id =", SqlParam::Int(i64::from(owner_id)));
        }

        if let Some(price) = options.minimum_price_per_night() {
            query.filter("cost_per_night >", SqlParam::Int(price.cents()));
        }

        if let Some(price) = options.maximum_price_per_night() {
            query.filter("cost_per_night <", SqlParam::Int(price.cents()));
        }

        query.line("GROUP BY properties.id");

        if let Some(rating) = options.minimum_rating() {
            let placeholder = query.push(SqlParam::Float(rating));
            query.line(&format!("HAVING avg(rating) >= {placeholder}"));
        }

        query.line("ORDER BY cost_per_night");

        let placeholder = query.push(SqlParam::Int(i64::from(self.limit)));
        query.line(&format!("LIMIT {placeholder}"));

        query.finish()
    }
}

/// Accumulates SQL lines and parameters.
struct QueryWriter {
    sql: String,
    params: Vec<SqlParam>,
    has_where: bool,
}

impl QueryWriter {
    fn new(base: &str) -> Self {
        QueryWriter {
            sql: base.to_string(),
            params: Vec::new(),
            has_where: false,
        }
    }

    /// Pushes a parameter and returns its placeholder (`$1`, `$2`, ...).
    fn push(&mut self, param: SqlParam) -> String {
        self.params.push(param);
        format!("${}", self.params.len())
    }

    fn line(&mut self, line: &str) {
        self.sql.push('\n');
        self.sql.push_str(line);
    }

    /// Appends `WHERE <condition> $n` for the first filter, `AND ...` after.
    fn filter(&mut self, condition: &str, param: SqlParam) {
        let placeholder = self.push(param);
        let keyword = if self.has_where { "AND" } else { "WHERE" };
        self.has_where = true;
        self.line(&format!("{keyword} {condition} {placeholder}"));
    }

    fn finish(self) -> BuiltQuery {
        BuiltQuery {
            sql: self.sql,
            params: self.params,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
