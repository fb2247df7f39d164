//! HTTP route handlers.
//!
//! The proxied dealer and review endpoints answer with an in-body `status`
//! field, matching the contract the frontend already consumes. Handlers
//! build those bodies directly; [`crate::error::AppError`] covers the
//! remaining failure paths.

pub mod auth;
pub mod cars;
pub mod dealers;
pub mod health;
pub mod reviews;
