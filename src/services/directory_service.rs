//! Directory service - registration, credentials, professional profiles
//! and profession-based lookup.
//!
//! Business failures come back as `Err` with a recoverable `AppError`
//! variant; use `StatusResponse::settle` to turn them into the
//! `(success, message)` pair. Storage errors are never swallowed.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::{MSG_LOGIN_OK, MSG_PROFESSIONAL_CREATED, MSG_PROFILE_UPDATED, MSG_USER_CREATED};
use crate::domain::{
    normalize_profession_name, NewUserRecord, Password, Profession, ProfessionalDetail,
    ProfessionalSummary, ProfileUpdate, Registration, User, UserRole,
};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::types::StatusResponse;
use crate::with_transaction;

/// Directory service trait for dependency injection.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Register a user with the given role.
    ///
    /// Fails with `DuplicateUser` if the email or the username is taken.
    async fn create_user(&self, registration: Registration, role: UserRole) -> AppResult<StatusResponse>;

    /// Look up a user by username
    async fn find_user_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Register a professional and their (empty) profile as one atomic unit.
    ///
    /// Fails with `DuplicateUser` or `InvalidProfession`; in either case
    /// no user is left behind.
    async fn create_professional(
        &self,
        registration: Registration,
        profession_name: &str,
    ) -> AppResult<StatusResponse>;

    /// Check a username/password pair.
    ///
    /// Fails with `UserNotFound` or `InvalidPassword`.
    async fn verify_user_credentials(&self, username: &str, password: &str) -> AppResult<StatusResponse>;

    /// True if the user has no profile, or its location, description or
    /// phone is missing or blank
    async fn is_profile_incomplete(&self, user_id: Uuid) -> AppResult<bool>;

    /// Patch the profile owned by `user_id`; empty values are ignored.
    ///
    /// Fails with `ProfileNotFound`.
    async fn update_professional_profile(
        &self,
        user_id: Uuid,
        update: ProfileUpdate,
    ) -> AppResult<StatusResponse>;

    /// All professions
    async fn get_professions(&self) -> AppResult<Vec<Profession>>;

    /// Professionals of a profession (case-insensitive name).
    ///
    /// `None` when the profession does not exist, as opposed to an empty
    /// list for a profession with nobody listed.
    async fn get_professionals_by_profession(
        &self,
        profession_name: &str,
    ) -> AppResult<Option<Vec<ProfessionalSummary>>>;

    /// A professional by profile id (not user id)
    async fn get_professional_by_id(&self, professional_id: Uuid) -> AppResult<Option<ProfessionalDetail>>;
}

/// Concrete implementation of DirectoryService using Unit of Work.
pub struct Directory<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> Directory<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

/// Hash the registration password into an insertable record.
fn prepare_user(registration: Registration, role: UserRole) -> AppResult<NewUserRecord> {
    let password_hash = Password::new(&registration.password)?.into_string();
    Ok(NewUserRecord::from_registration(registration, password_hash, role))
}

#[async_trait]
impl<U: UnitOfWork> DirectoryService for Directory<U> {
    async fn create_user(&self, registration: Registration, role: UserRole) -> AppResult<StatusResponse> {
        let record = prepare_user(registration, role)?;

        let users = self.uow.users();
        if users
            .exists_by_email_or_username(&record.email, &record.username)
            .await?
        {
            tracing::warn!(username = %record.username, "Registration rejected: duplicate user");
            return Err(AppError::DuplicateUser);
        }

        let user = users.create(record).await?;
        tracing::info!(user_id = %user.id, username = %user.username, role = %user.role, "User registered");

        Ok(StatusResponse::ok(MSG_USER_CREATED))
    }

    async fn find_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        tracing::debug!(username, "Looking up user");
        self.uow.users().find_by_username(username).await
    }

    async fn create_professional(
        &self,
        registration: Registration,
        profession_name: &str,
    ) -> AppResult<StatusResponse> {
        let record = prepare_user(registration, UserRole::Professional)?;
        let profession_name = normalize_profession_name(profession_name);
        let username = record.username.clone();

        let result = with_transaction!(self.uow, |ctx| {
            if ctx
                .users()
                .exists_by_email_or_username(&record.email, &record.username)
                .await?
            {
                return Err(AppError::DuplicateUser);
            }

            let user = ctx.users().create(record).await?;

            let profession = ctx
                .professions()
                .find_by_name(&profession_name)
                .await?
                .ok_or_else(|| AppError::invalid_profession(profession_name.clone()))?;

            let profile = ctx.profiles().create(user.id, profession.id).await?;
            Ok::<_, AppError>((user, profile))
        });

        match result {
            Ok((user, profile)) => {
                tracing::info!(
                    user_id = %user.id,
                    profile_id = %profile.id,
                    username = %user.username,
                    "Professional registered"
                );
                Ok(StatusResponse::ok(MSG_PROFESSIONAL_CREATED))
            }
            Err(e) => {
                if e.is_recoverable() {
                    tracing::warn!(username = %username, error = %e, "Professional registration rejected");
                }
                Err(e)
            }
        }
    }

    async fn verify_user_credentials(&self, username: &str, password: &str) -> AppResult<StatusResponse> {
        let user = self
            .uow
            .users()
            .find_by_username(username)
            .await?
            .ok_or(AppError::UserNotFound)?;

        if !Password::from_hash(user.password_hash).verify(password) {
            tracing::warn!(username, "Login rejected: incorrect password");
            return Err(AppError::InvalidPassword);
        }

        Ok(StatusResponse::ok(MSG_LOGIN_OK))
    }

    async fn is_profile_incomplete(&self, user_id: Uuid) -> AppResult<bool> {
        let profile = self.uow.profiles().find_by_user_id(user_id).await?;
        Ok(profile.map_or(true, |p| p.is_incomplete()))
    }

    async fn update_professional_profile(
        &self,
        user_id: Uuid,
        update: ProfileUpdate,
    ) -> AppResult<StatusResponse> {
        let profiles = self.uow.profiles();
        let mut profile = profiles
            .find_by_user_id(user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;

        if profile.apply(update) {
            let profile = profiles.update(profile).await?;
            tracing::info!(%user_id, profile_id = %profile.id, "Professional profile updated");
        } else {
            tracing::debug!(%user_id, "Profile update carried no changes");
        }

        Ok(StatusResponse::ok(MSG_PROFILE_UPDATED))
    }

    async fn get_professions(&self) -> AppResult<Vec<Profession>> {
        self.uow.professions().list().await
    }

    async fn get_professionals_by_profession(
        &self,
        profession_name: &str,
    ) -> AppResult<Option<Vec<ProfessionalSummary>>> {
        let name = normalize_profession_name(profession_name);
        let Some(profession) = self.uow.professions().find_by_name(&name).await? else {
            tracing::debug!(profession = %name, "Unknown profession");
            return Ok(None);
        };

        let rows = self
            .uow
            .profiles()
            .list_by_profession_with_user(profession.id)
            .await?;

        Ok(Some(rows.into_iter().map(ProfessionalSummary::from).collect()))
    }

    async fn get_professional_by_id(&self, professional_id: Uuid) -> AppResult<Option<ProfessionalDetail>> {
        let row = self
            .uow
            .profiles()
            .find_by_id_with_user(professional_id)
            .await?;

        Ok(row.map(ProfessionalDetail::from))
    }
}
