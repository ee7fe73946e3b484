//! Domain layer - Core business entities and logic
//!
//! Plain data structures and the rules that do not need storage:
//! password hashing, profession name normalization, profile
//! completeness and patch semantics.

pub mod password;
pub mod profession;
pub mod profile;
pub mod user;

pub use password::Password;
pub use profession::{normalize_profession_name, Profession};
pub use profile::{ProfessionalDetail, ProfessionalProfile, ProfessionalSummary, ProfileUpdate};
pub use user::{NewUserRecord, Registration, User, UserRole};
