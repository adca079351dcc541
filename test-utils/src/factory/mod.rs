//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories handle foreign key relationships through the
//! helpers module so tests stay concise.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!
//!     // Create with all dependencies
//!     let (trainer, schedule) = factory::helpers::create_schedule_with_trainer(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let trainer = factory::user::UserFactory::new(&db)
//!     .name("Coach")
//!     .role("trainer")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `class_schedule` - Create class schedule entities
//! - `booking` - Create booking entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod booking;
pub mod class_schedule;
pub mod helpers;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use booking::create_booking;
pub use class_schedule::create_schedule;
pub use user::{create_trainer, create_user};
