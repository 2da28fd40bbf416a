//! Outbound adapters backing the domain ports.

pub mod memory;
pub mod persistence;
