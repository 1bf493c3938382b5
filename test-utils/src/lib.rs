//! Venkatesh Test Utils
//!
//! Provides shared testing utilities for the venkatesh bot. Handlers and builders
//! work with serenity model types that can't be constructed directly, so this crate
//! builds them from JSON the same way the gateway delivers them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_user;
//!
//! #[test]
//! fn welcome_embed() {
//!     let user = create_test_user(123456789, "newbie");
//!     // Build embeds for the user...
//! }
//! ```

pub mod serenity;
