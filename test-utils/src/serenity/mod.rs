//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON, simulating
//! what Discord's gateway would deliver.
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects
//! - `member::create_test_member` - Create Serenity guild Member objects

pub mod member;
pub mod user;

pub use member::create_test_member;
pub use user::create_test_user;
