//! # lightbnb-core: Domain Types for LightBnB
//!
//! Pure types shared between the data layer and the web handlers that call
//! it. Nothing here touches the database.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        LightBnB Data Flow                               │
//! │                                                                         │
//! │  HTTP route handler (GET /properties?city=van&minimum_rating=4)        │
//! │       │                                                                 │
//! │       │  serde: query map ──► FilterOptions                             │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               ★ lightbnb-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────────────────────┐  ┌─────────────────────┐  │   │
//! │  │   │            types             │  │        money        │  │   │
//! │  │   │ FilterOptions, Property      │  │        Money        │  │   │
//! │  │   │ User, ReservedProperty       │  │       (cents)       │  │   │
//! │  │   └──────────────────────────────┘  └─────────────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  lightbnb-db (query builder, repositories, PostgreSQL)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Rows and inputs (Property, User, FilterOptions, ...)
//! - [`money`] - Money type in integer cents
//!
//! Write inputs (`NewUser`, `NewProperty`) are not checked here; the schema's
//! NOT NULL, UNIQUE and foreign key constraints decide what is accepted.
//!
//! ## Example Usage
//!
//! ```rust
//! use lightbnb_core::{FilterOptions, Money};
//!
//! let options = FilterOptions {
//!     city: Some("Vancouver".to_string()),
//!     minimum_price_per_night: Some(Money::from_cents(5_000)),
//!     ..Default::default()
//! };
//!
//! assert_eq!(options.city(), Some("Vancouver"));
//! assert_eq!(options.owner_id(), None);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of properties returned by a search when the caller gives no limit.
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// Number of reservations listed for a guest when the caller gives no limit.
pub const DEFAULT_RESERVATION_LIMIT: u32 = 10;
