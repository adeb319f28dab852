//! # Repository Module
//!
//! Database repository implementations for LightBnB.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Route handler                                                          │
//! │       │                                                                 │
//! │       │  db.properties().search(&options, 10)                           │
//! │       ▼                                                                 │
//! │  PropertyRepository      UserRepository          ReservationRepository  │
//! │  ├── search              ├── get_user_with_email └── get_all_reservations│
//! │  └── add_property        ├── get_user_with_id                           │
//! │                          └── add_user                                   │
//! │       │                                                                 │
//! │       │  one parameterized statement per call                           │
//! │       ▼                                                                 │
//! │  PostgreSQL                                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each repository holds a clone of the pool (an `Arc` inside), so handing
//! them out per request is cheap.

pub mod property;
pub mod reservation;
pub mod user;
