//! Directory service - data access for a directory that connects
//! clients with service professionals.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities and pure business rules
//! - **services**: The directory use cases
//! - **infra**: Persistence (SeaORM repositories, migrations, Unit of Work)
//! - **types**: Result types handed to the request layer
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Apply migrations
//! cargo run -- migrate up
//!
//! # Seed the profession reference table
//! cargo run -- seed
//!
//! # List the plumbers
//! cargo run -- professionals plumber
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{Password, Profession, ProfessionalProfile, User, UserRole};
pub use errors::{AppError, AppResult};
pub use infra::{Database, Persistence, UnitOfWork};
pub use services::{Directory, DirectoryService};
pub use types::StatusResponse;
