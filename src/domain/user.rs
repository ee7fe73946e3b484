//! User domain entity and registration input.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::config::{MIN_FIELD_LENGTH, ROLE_CLIENT, ROLE_PROFESSIONAL};
use crate::errors::AppResult;

/// User roles enumeration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Client,
    Professional,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Client => ROLE_CLIENT,
            UserRole::Professional => ROLE_PROFESSIONAL,
        }
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_PROFESSIONAL => UserRole::Professional,
            _ => UserRole::Client,
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User domain entity
///
/// Identity fields are fixed at registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub national_id: String,
    pub phone: String,
    pub email: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw registration fields, password in plaintext.
///
/// The directory stores these as given. The `Validate` rules only
/// require each field to be present, for request layers that want to
/// reject empty forms before calling in.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Registration {
    #[validate(length(min = MIN_FIELD_LENGTH, message = "Full name is required"))]
    pub full_name: String,
    pub birth_date: NaiveDate,
    #[validate(length(min = MIN_FIELD_LENGTH, message = "National ID is required"))]
    pub national_id: String,
    #[validate(length(min = MIN_FIELD_LENGTH, message = "Phone is required"))]
    pub phone: String,
    #[validate(length(min = MIN_FIELD_LENGTH, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = MIN_FIELD_LENGTH, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = MIN_FIELD_LENGTH, message = "Password is required"))]
    pub password: String,
}

impl Registration {
    /// Caller-side presence check, mapped into `AppError::Validation`.
    pub fn check_required(&self) -> AppResult<()> {
        self.validate()?;
        Ok(())
    }
}

/// User row ready to be inserted: the password is already hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserRecord {
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub national_id: String,
    pub phone: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub role: UserRole,
}

impl NewUserRecord {
    pub fn from_registration(registration: Registration, password_hash: String, role: UserRole) -> Self {
        Self {
            full_name: registration.full_name,
            birth_date: registration.birth_date,
            national_id: registration.national_id,
            phone: registration.phone,
            email: registration.email,
            username: registration.username,
            password_hash,
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> Registration {
        Registration {
            full_name: "Ana Torres".into(),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            national_id: "12345678".into(),
            phone: "555-0101".into(),
            email: "ana@example.com".into(),
            username: "ana".into(),
            password: "correct-horse".into(),
        }
    }

    #[test]
    fn test_role_round_trips_through_storage_text() {
        assert_eq!(UserRole::from("professional"), UserRole::Professional);
        assert_eq!(UserRole::from("client"), UserRole::Client);
        assert_eq!(UserRole::from("something-else"), UserRole::Client);
        assert_eq!(String::from(UserRole::Professional), "professional");
        assert_eq!(UserRole::default(), UserRole::Client);
    }

    #[test]
    fn test_valid_registration() {
        assert!(registration().validate().is_ok());
    }

    #[test]
    fn test_registration_allows_free_form_email_and_short_password() {
        let mut input = registration();
        input.email = "not-an-email".into();
        input.password = "abc1234".into();
        assert!(input.check_required().is_ok());
    }

    #[test]
    fn test_registration_flags_missing_fields() {
        let mut input = registration();
        input.username = String::new();
        input.password = String::new();

        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("password"));
        assert!(matches!(
            input.check_required(),
            Err(crate::errors::AppError::Validation(_))
        ));
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            full_name: "Ana Torres".into(),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            national_id: "12345678".into(),
            phone: "555-0101".into(),
            email: "ana@example.com".into(),
            username: "ana".into(),
            password_hash: "$argon2id$secret".into(),
            role: UserRole::Client,
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2id"));
        assert!(json.contains("\"role\":\"client\""));
    }
}
