//! Infrastructure layer for external integrations.
//!
//! Implements the store traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - REST client for the record store backend

pub mod http;
