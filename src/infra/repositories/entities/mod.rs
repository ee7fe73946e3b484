//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod professional_profile;
pub mod profession;
pub mod user;
