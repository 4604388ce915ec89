//! Configuration module for the hset command line
//!
//! Provides types and parsing for `hset.toml` project configuration.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
