//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on the `UnitOfWork` abstraction so
//! any storage backend can be substituted.

mod directory_service;

pub use directory_service::{Directory, DirectoryService};
