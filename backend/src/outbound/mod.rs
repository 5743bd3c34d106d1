//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: PostgreSQL repositories using Diesel ORM
//! - **memory**: volatile repositories for development and tests
//!
//! Adapters only translate between domain types and their storage
//! representation.

pub mod memory;
pub mod persistence;
