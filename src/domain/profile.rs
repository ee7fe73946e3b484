//! Professional profile entity, partial updates and read projections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::User;

/// Extension record for a user with the professional role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionalProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub profession_id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub instagram_link: Option<String>,
    pub facebook_link: Option<String>,
    pub extra_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProfessionalProfile {
    /// True when location, description or phone is missing or blank.
    pub fn is_incomplete(&self) -> bool {
        [&self.location, &self.description, &self.phone]
            .into_iter()
            .any(|field| is_blank(field.as_deref()))
    }

    /// Apply a patch. Only non-empty supplied values replace stored ones.
    ///
    /// Returns whether any field changed.
    pub fn apply(&mut self, update: ProfileUpdate) -> bool {
        let mut changed = false;
        changed |= patch(&mut self.description, update.description);
        changed |= patch(&mut self.location, update.location);
        changed |= patch(&mut self.phone, update.phone);
        changed |= patch(&mut self.instagram_link, update.instagram);
        changed |= patch(&mut self.facebook_link, update.facebook);
        changed |= patch(&mut self.extra_link, update.link);
        if changed {
            self.updated_at = Utc::now();
        }
        changed
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

fn patch(slot: &mut Option<String>, value: Option<String>) -> bool {
    match value {
        Some(v) if !v.is_empty() && slot.as_deref() != Some(v.as_str()) => {
            *slot = Some(v);
            true
        }
        _ => false,
    }
}

/// Partial update for a professional profile.
///
/// `None` and empty strings leave the stored value untouched, so this
/// cannot be used to clear a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileUpdate {
    pub description: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub link: Option<String>,
}

/// Row of the professionals-by-profession listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfessionalSummary {
    pub id: Uuid,
    pub full_name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub instagram_link: Option<String>,
    pub facebook_link: Option<String>,
    pub extra_link: Option<String>,
}

impl From<(ProfessionalProfile, User)> for ProfessionalSummary {
    fn from((profile, user): (ProfessionalProfile, User)) -> Self {
        Self {
            id: profile.id,
            full_name: user.full_name,
            description: profile.description,
            location: profile.location,
            phone: profile.phone,
            instagram_link: profile.instagram_link,
            facebook_link: profile.facebook_link,
            extra_link: profile.extra_link,
        }
    }
}

/// Single professional view, looked up by profile id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfessionalDetail {
    pub full_name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub instagram_link: Option<String>,
    pub facebook_link: Option<String>,
    pub extra_link: Option<String>,
}

impl From<(ProfessionalProfile, User)> for ProfessionalDetail {
    fn from((profile, user): (ProfessionalProfile, User)) -> Self {
        Self {
            full_name: user.full_name,
            description: profile.description,
            location: profile.location,
            phone: profile.phone,
            instagram_link: profile.instagram_link,
            facebook_link: profile.facebook_link,
            extra_link: profile.extra_link,
        }
    }
}
