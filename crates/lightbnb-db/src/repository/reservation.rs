//! # Reservation Repository
//!
//! Read access to a guest's bookings.

use lightbnb_core::{ReservedProperty, DEFAULT_RESERVATION_LIMIT};
use sqlx::PgPool;
use tracing::debug;

use crate::error::DbResult;

/// Repository for reservation database operations.
#[derive(Debug, Clone)]
pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    /// Creates a new ReservationRepository.
    pub fn new(pool: PgPool) -> Self {
        ReservationRepository { pool }
    }

    /// Lists a guest's reservations that have not ended yet, earliest
    /// check-in first, each with the property's average rating.
    ///
    /// `limit` defaults to [`DEFAULT_RESERVATION_LIMIT`] rows.
    pub async fn get_all_reservations(
        &self,
        guest_id: i32,
        limit: Option<u32>,
    ) -> DbResult<Vec<ReservedProperty>> {
        let limit = reservation_limit(limit);
        debug!(guest_id, limit, "Listing reservations");

        let reservations = sqlx::query_as::<_, ReservedProperty>(
            r#"
            SELECT
                reservations.id AS reservation_id,
                reservations.start_date,
                reservations.end_date,
                properties.*,
                avg(property_reviews.rating)::float8 AS average_rating
            FROM reservations
            JOIN properties ON reservations.property_id = properties.id
            LEFT JOIN property_reviews ON properties.id = property_reviews.property_id
            WHERE reservations.guest_id = $1
            AND reservations.end_date > now()::date
            GROUP BY properties.id, reservations.id
            ORDER BY reservations.start_date
            LIMIT $2
            "#,
        )
        .bind(guest_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = reservations.len(), "Reservations listed");
        Ok(reservations)
    }
}

fn reservation_limit(limit: Option<u32>) -> i64 {
    i64::from(limit.unwrap_or(DEFAULT_RESERVATION_LIMIT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reservation_limit_defaults_to_ten() {
        assert_eq!(reservation_limit(None), 10);
        assert_eq!(reservation_limit(Some(3)), 3);
    }
}
