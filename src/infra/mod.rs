//! Network access to the skip pricing API.

pub mod config;
pub mod skips;
