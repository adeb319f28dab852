//! # Property Repository
//!
//! Database operations for properties.
//!
//! ## Key Operations
//! - Filtered search (built by [`crate::query::PropertySearch`])
//! - Listing a new property
//!
//! ## Search Round Trip
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  search(&options, 10)                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PropertySearch::build() ──► BuiltQuery { sql, params }   (pure)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  sqlx::query_as(sql).bind(p1).bind(p2)...  ← one bind per $n, in order  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  fetch_all ──► Vec<Property>  (empty when nothing matches)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use lightbnb_core::{FilterOptions, NewProperty, Property};
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres};
use tracing::debug;

use crate::error::DbResult;
use crate::query::{PropertySearch, SqlParam};

/// Repository for property database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = PropertyRepository::new(pool);
///
/// let options = FilterOptions {
///     city: Some("Vancouver".to_string()),
///     ..Default::default()
/// };
/// let properties = repo.search(&options, 10).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PropertyRepository {
    pool: PgPool,
}

impl PropertyRepository {
    /// Creates a new PropertyRepository.
    pub fn new(pool: PgPool) -> Self {
        PropertyRepository { pool }
    }

    /// Searches properties matching every present filter, cheapest first.
    ///
    /// ## Arguments
    /// * `options` - Filters; absent ones are not applied
    /// * `limit` - Maximum rows to return
    ///
    /// ## Returns
    /// Matching properties with their `average_rating`, or an empty vec.
    /// Driver errors are returned as-is, see [`crate::DbError`].
    pub async fn search(&self, options: &FilterOptions, limit: u32) -> DbResult<Vec<Property>> {
        let query = PropertySearch::new(options).limit(limit).build();

        debug!(sql = %query.sql, params = ?query.params, "Searching properties");

        let properties = bind_params(sqlx::query_as::<_, Property>(&query.sql), &query.params)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = properties.len(), "Search returned properties");
        Ok(properties)
    }

    /// Inserts a new property and returns the stored row.
    ///
    /// ## Returns
    /// * `Ok(Property)` - Inserted row (`average_rating` is `None`)
    /// * `Err(DbError::ForeignKeyViolation)` - `owner_id` has no user
    pub async fn add_property(&self, property: &NewProperty) -> DbResult<Property> {
        debug!(owner_id = property.owner_id, title = %property.title, "Inserting property");

        let inserted = sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (
                owner_id, title, description,
                number_of_bedrooms, number_of_bathrooms, parking_spaces,
                cost_per_night, thumbnail_photo_url, cover_photo_url,
                street, country, city, province, post_code
            ) VALUES (
                $1, $2, $3,
                $4, $5, $6,
                $7, $8, $9,
                $10, $11, $12, $13, $14
            )
            RETURNING *
            "#,
        )
        .bind(property.owner_id)
        .bind(&property.title)
        .bind(&property.description)
        .bind(property.number_of_bedrooms)
        .bind(property.number_of_bathrooms)
        .bind(property.parking_spaces)
        .bind(property.cost_per_night.cents())
        .bind(&property.thumbnail_photo_url)
        .bind(&property.cover_photo_url)
        .bind(&property.street)
        .bind(&property.country)
        .bind(&property.city)
        .bind(&property.province)
        .bind(&property.post_code)
        .fetch_one(&self.pool)
        .await?;

        debug!(id = inserted.id, "Property inserted");
        Ok(inserted)
    }
}

/// Binds each parameter in placeholder order.
fn bind_params<'q, O>(
    mut query: QueryAs<'q, Postgres, O, PgArguments>,
    params: &'q [SqlParam],
) -> QueryAs<'q, Postgres, O, PgArguments> {
    for param in params {
        query = match param {
            SqlParam::Text(value) => query.bind(value.as_str()),
            SqlParam::Int(value) => query.bind(*value),
            SqlParam::Float(value) => query.bind(*value),
        };
    }
    query
}
