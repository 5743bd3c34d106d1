//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations translate between Diesel rows and domain
//! types only. Row structs and the schema stay private to this module;
//! connections come from a `bb8` pool driven by `diesel-async`.
//!
//! # Example
//!
//! ```ignore
//! use doctor_directory::outbound::persistence::{DbPool, DieselDoctorRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new(Zeroizing::new(url))).await?;
//! let repo = DieselDoctorRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_doctor_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_doctor_repository::DieselDoctorRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
