//! # macvend lookup engine
//!
//! * [`vendors`]: the remote sources able to name the manufacturer behind an OUI.
//! * [`resolver`]: asks every source about one address at once.
//! * [`batch`]: resolves many addresses concurrently and gathers the results.

pub mod batch;
pub mod resolver;
pub mod vendors;
