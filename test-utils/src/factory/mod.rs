//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let court = factory::court::create_court(&db).await?;
//! let entry = factory::schedule_entry::create_schedule_entry(&db, court.id, 1).await?;
//!
//! let booking = factory::booking::BookingFactory::new(&db, court.id, "user-a")
//!     .status("Cancelled")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `court` - Create court entities
//! - `schedule_entry` - Create weekly opening rules for a court
//! - `booking` - Create bookings on a court
//! - `helpers` - Unique id generation and entities with dependencies

pub mod booking;
pub mod court;
pub mod helpers;
pub mod schedule_entry;

pub use booking::create_booking;
pub use court::create_court;
pub use schedule_entry::create_schedule_entry;
