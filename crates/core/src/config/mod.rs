//! Configuration loading and schema definitions
//!
//! Settings shared by the library crates and the CLI, read from TOML.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
