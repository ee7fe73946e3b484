//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `migrate` - Database migrations
//! - `seed` - Profession reference data
//! - `professions`, `professionals`, `professional` - Directory lookups

pub mod args;

pub use args::{Cli, Commands};
