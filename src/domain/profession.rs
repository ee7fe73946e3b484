//! Profession reference entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A category professionals are listed under. Seeded externally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profession {
    pub id: Uuid,
    pub name: String,
}

/// Canonical form of a profession name, used both for storage and lookup.
///
/// Trims surrounding whitespace, upper-cases the first character and
/// lower-cases the rest. Multi-word names keep only the leading capital.
pub fn normalize_profession_name(name: &str) -> String {
    let mut chars = name.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
