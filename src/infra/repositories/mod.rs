//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence. Each one
//! keeps its queries generic over the connection so the same statements
//! run on the pool and inside a transaction.

pub(crate) mod entities;
mod profession_repository;
mod profile_repository;
mod user_repository;

pub use profession_repository::{ProfessionRepository, ProfessionStore};
pub use profile_repository::{ProfileRepository, ProfileStore};
pub use user_repository::{UserRepository, UserStore};

pub(crate) use profession_repository::query as profession_query;
pub(crate) use profile_repository::query as profile_query;
pub(crate) use user_repository::query as user_query;

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use profession_repository::MockProfessionRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use profile_repository::MockProfileRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
