//! Outbound adapters implementing the domain repository ports.
//!
//! - [`persistence`]: PostgreSQL repositories via Diesel.
//! - [`memory`]: ordered in-memory repositories.

pub mod memory;
pub mod persistence;
