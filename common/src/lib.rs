//! Shared building blocks for `macvend`.
//!
//! Holds the data model passed between the lookup engine and the terminal
//! front-end, the address normalizer, and the configuration types.

pub mod config;
pub mod error;
pub mod lookup;
pub mod network;
