//! Domain layer containing records, store interfaces and aggregation.
//!
//! This module is independent of HTTP and of any concrete store backend.
//!
//! # Architecture
//!
//! - [`entities`] - Records fetched from the stores
//! - [`stores`] - Store trait definitions (list / get by id)
//! - [`aggregation`] - Pure filters, category counting and month bucketing
//!
//! # Design Principles
//!
//! - Store traits define contracts implemented by the infrastructure layer
//! - Aggregation never performs I/O; services feed it resolved labels
//!   (see [`crate::application::services`])

pub mod aggregation;
pub mod entities;
pub mod stores;
