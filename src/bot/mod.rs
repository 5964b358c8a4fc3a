//! Discord front end.
//!
//! - [`command`] - Prefix command parsing
//! - [`reply`] - Reply text formatting
//! - [`handler`] - Serenity event handler (acknowledge, look up, edit in place)
//! - [`client`] - Gateway client setup and lifecycle

pub mod client;
pub mod command;
pub mod handler;
pub mod reply;

pub use client::run;
