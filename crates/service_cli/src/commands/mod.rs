//! CLI subcommand implementations.

pub mod expiry;
pub mod price;
