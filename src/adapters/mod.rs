//! Adapters
//!
//! Inbound HTTP surface and outbound upstream client.

pub mod inbound;
pub mod outbound;
