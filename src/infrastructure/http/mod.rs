//! REST record store client.
//!
//! [`HttpStoreClient`] implements every store trait from
//! [`crate::domain::stores`] against the JSON backend. Wire payloads in
//! [`wire`] are converted into domain records before leaving this module.
//!
//! Status handling:
//!
//! - `404` on a by-id fetch is `Ok(None)`
//! - any other non-success status is [`StoreError::UnexpectedStatus`]
//! - connection errors and timeouts are [`StoreError::Transport`]
//! - bodies that do not decode are [`StoreError::Decode`]
//!
//! [`StoreError::UnexpectedStatus`]: crate::error::StoreError::UnexpectedStatus
//! [`StoreError::Transport`]: crate::error::StoreError::Transport
//! [`StoreError::Decode`]: crate::error::StoreError::Decode

pub mod client;
pub mod wire;

pub use client::HttpStoreClient;
