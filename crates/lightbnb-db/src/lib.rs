//! # lightbnb-db: Database Layer for LightBnB
//!
//! Data access for users, properties and reservations over PostgreSQL,
//! using sqlx with runtime-built, parameterized statements.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        LightBnB Data Flow                               │
//! │                                                                         │
//! │  HTTP route handler (external)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   lightbnb-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories  │    │ Query builder│  │   │
//! │  │   │   (pool.rs)   │    │ PropertyRepo   │───►│  (query.rs)  │  │   │
//! │  │   │               │◄───│ UserRepo       │    │ FilterOptions│  │   │
//! │  │   │    PgPool     │    │ ReservationRepo│    │  → SQL + $n  │  │   │
//! │  │   └───────────────┘    └────────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PostgreSQL (users, properties, reservations, property_reviews)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Pool configuration, from code or environment
//! - [`pool`] - Connection pool and repository access
//! - [`query`] - Property search query builder (pure)
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lightbnb_core::FilterOptions;
//! use lightbnb_db::{Database, DbConfig};
//!
//! let db = Database::connect(DbConfig::from_env()?).await?;
//!
//! let options = FilterOptions {
//!     city: Some("Vancouver".to_string()),
//!     minimum_rating: Some(4.0),
//!     ..Default::default()
//! };
//! let properties = db.properties().search(&options, 10).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod pool;
pub mod query;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ConfigError, DbConfig};
pub use error::{DbError, DbResult};
pub use pool::Database;
pub use query::{BuiltQuery, PropertySearch, SqlParam};

pub use repository::property::PropertyRepository;
pub use repository::reservation::ReservationRepository;
pub use repository::user::UserRepository;
