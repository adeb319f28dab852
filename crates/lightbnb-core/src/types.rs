//! # Domain Types
//!
//! Rows read from and inputs written to the LightBnB schema.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────┐   ┌─────────────────┐      │
//! │  │ FilterOptions   │   │    Property      │   │      User       │      │
//! │  │  ─────────────  │   │  ─────────────   │   │  ─────────────  │      │
//! │  │  city?          │   │  properties.*    │   │  id             │      │
//! │  │  owner_id?      │──►│  average_rating? │   │  name, email    │      │
//! │  │  min/max price? │   └────────┬─────────┘   └─────────────────┘      │
//! │  │  min rating?    │            │ flatten                               │
//! │  └─────────────────┘   ┌────────▼─────────┐                             │
//! │                        │ ReservedProperty │                             │
//! │                        │  + start/end     │                             │
//! │                        └──────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids are PostgreSQL `SERIAL` integers, so they are `i32` here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Search Filters
// =============================================================================

/// Optional criteria for a property search.
///
/// Built by the route handler per request and dropped once the query runs.
/// A filter is applied only when it is *present*: `Some` and not falsy. An
/// empty city, an owner id of 0, a zero price and a zero rating all count as
/// absent, matching how the web frontend submits blank form fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct FilterOptions {
    /// Substring match on `properties.city`.
    pub city: Option<String>,

    pub owner_id: Option<i32>,

    /// Exclusive lower bound on `cost_per_night`.
    pub minimum_price_per_night: Option<Money>,

    /// Exclusive upper bound on `cost_per_night`.
    pub maximum_price_per_night: Option<Money>,

    /// Inclusive lower bound on the average review rating.
    pub minimum_rating: Option<f64>,
}

impl FilterOptions {
    /// The city filter, if present.
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref().filter(|city| !city.is_empty())
    }

    /// The owner filter, if present.
    pub fn owner_id(&self) -> Option<i32> {
        self.owner_id.filter(|id| *id != 0)
    }

    /// The minimum-price filter, if present.
    pub fn minimum_price_per_night(&self) -> Option<Money> {
        self.minimum_price_per_night.filter(|price| !price.is_zero())
    }

    /// The maximum-price filter, if present.
    pub fn maximum_price_per_night(&self) -> Option<Money> {
        self.maximum_price_per_night.filter(|price| !price.is_zero())
    }

    /// The minimum-rating filter, if present.
    pub fn minimum_rating(&self) -> Option<f64> {
        self.minimum_rating.filter(|rating| *rating != 0.0)
    }

    /// True when no filter would be applied.
    pub fn is_empty(&self) -> bool {
        self.city().is_none()
            && self.owner_id().is_none()
            && self.minimum_price_per_night().is_none()
            && self.maximum_price_per_night().is_none()
            && self.minimum_rating().is_none()
    }
}

// =============================================================================
// Property
// =============================================================================

/// A row of `properties` plus its computed average review rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,

    /// Nightly rate in cents.
    pub cost_per_night: i32,

    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,

    /// `None` when the property has no reviews, or when the row comes from
    /// an `INSERT ... RETURNING *` that carries no aggregate.
    #[cfg_attr(feature = "sqlx", sqlx(default))]
    pub average_rating: Option<f64>,
}

impl Property {
    /// Nightly rate as [`Money`].
    pub fn nightly_rate(&self) -> Money {
        Money::from(self.cost_per_night)
    }
}

/// Input for inserting a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: i32,
    pub parking_spaces: i32,
    pub cost_per_night: Money,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub street: String,
    pub country: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
}

// =============================================================================
// Users
// =============================================================================

/// A row of `users`.
///
/// `password` holds the stored hash. It is never serialized back out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub password: String,
}

/// Input for registering a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

// =============================================================================
// Reservations
// =============================================================================

/// A property a guest has booked, with the booking's dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct ReservedProperty {
    pub reservation_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    #[serde(flatten)]
    #[cfg_attr(feature = "sqlx", sqlx(flatten))]
    pub property: Property,
}

impl ReservedProperty {
    /// Number of nights between check-in and check-out.
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// Nightly rate times number of nights.
    pub fn total_cost(&self) -> Money {
        self.property.nightly_rate() * self.nights()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
