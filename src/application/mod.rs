//! Application layer services implementing the lookup pipeline.
//!
//! Services consume domain source traits and provide a clean API for the
//! chat and CLI front ends.
//!
//! # Available Services
//!
//! - [`services::lookup_service::LookupService`] - Validate, fetch and extract one character

pub mod services;
