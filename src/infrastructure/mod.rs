//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations that talk to the outside world.
//!
//! # Modules
//!
//! - [`http`] - Stats page fetching over HTTP

pub mod http;
