//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization and schema
//! - SQLite pragma configuration
//! - The `Repository` storage accessor
//! - Seeding of example rows

pub mod bootstrap;
pub mod migrations;
pub mod repo;

pub use migrations::init_db;
pub use repo::Repository;
