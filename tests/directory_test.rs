//! Integration tests for the directory service.
//!
//! Runs against an in-memory SQLite database with the real migrations,
//! so transactions and rollbacks are exercised end to end.

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use directory_service::domain::{ProfileUpdate, Registration};
use directory_service::{
    AppError, Config, Database, Directory, DirectoryService, Password, Persistence,
    StatusResponse, UnitOfWork, UserRole,
};

/// Helper: fresh in-memory database with migrations and two professions.
async fn setup() -> (Directory<Persistence>, Arc<Persistence>) {
    let config = Config::default().with_database_url("sqlite::memory:");
    let db = Database::connect(&config).await.unwrap();
    let uow = Arc::new(Persistence::new(db.get_connection()));

    for name in ["Plumber", "Electrician"] {
        uow.professions().create(name.to_string()).await.unwrap();
    }

    (Directory::new(uow.clone()), uow)
}

fn registration(username: &str, email: &str) -> Registration {
    Registration {
        full_name: format!("{} Example", username),
        birth_date: NaiveDate::from_ymd_opt(1992, 1, 20).unwrap(),
        national_id: format!("ID-{}", username),
        phone: "555-0142".into(),
        email: email.into(),
        username: username.into(),
        password: "plain-text-pass".into(),
    }
}

async fn register_plumber(service: &Directory<Persistence>, username: &str) -> Uuid {
    service
        .create_professional(registration(username, &format!("{}@example.com", username)), "plumber")
        .await
        .unwrap();
    service
        .find_user_by_username(username)
        .await
        .unwrap()
        .unwrap()
        .id
}

#[tokio::test]
async fn test_create_user_stores_verifiable_hash() {
    let (service, _) = setup().await;

    let status = service
        .create_user(registration("ana", "ana@example.com"), UserRole::default())
        .await
        .unwrap();
    assert!(status.success);

    let user = service.find_user_by_username("ana").await.unwrap().unwrap();
    assert_eq!(user.email, "ana@example.com");
    assert_eq!(user.role, UserRole::Client);
    assert_ne!(user.password_hash, "plain-text-pass");
    assert!(Password::from_hash(user.password_hash).verify("plain-text-pass"));
}

#[tokio::test]
async fn test_create_user_accepts_short_password_and_free_form_email() {
    let (service, _) = setup().await;
    let mut input = registration("nia", "not-an-email");
    input.password = "abc1234".into();

    let status = service.create_user(input, UserRole::Client).await.unwrap();
    assert!(status.success);

    let user = service.find_user_by_username("nia").await.unwrap().unwrap();
    assert_eq!(user.email, "not-an-email");
    assert!(Password::from_hash(user.password_hash).verify("abc1234"));

    let login = service.verify_user_credentials("nia", "abc1234").await.unwrap();
    assert!(login.success);
}

#[tokio::test]
async fn test_find_unknown_user_is_absent() {
    let (service, _) = setup().await;

    assert!(service.find_user_by_username("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_email_or_username_is_rejected() {
    let (service, uow) = setup().await;
    service
        .create_user(registration("ana", "ana@example.com"), UserRole::Client)
        .await
        .unwrap();

    let same_email = service
        .create_user(registration("ana2", "ana@example.com"), UserRole::Client)
        .await;
    assert!(matches!(same_email, Err(AppError::DuplicateUser)));

    let same_username = service
        .create_user(registration("ana", "other@example.com"), UserRole::Client)
        .await;
    assert!(matches!(same_username, Err(AppError::DuplicateUser)));

    let professional_same_email = service
        .create_professional(registration("bob", "ana@example.com"), "plumber")
        .await;
    assert!(matches!(professional_same_email, Err(AppError::DuplicateUser)));

    let professional_same_username = service
        .create_professional(registration("ana", "bob@example.com"), "plumber")
        .await;
    assert!(matches!(professional_same_username, Err(AppError::DuplicateUser)));

    assert_eq!(uow.users().count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_create_professional_with_unknown_profession_leaves_no_user() {
    let (service, uow) = setup().await;
    let before = uow.users().count().await.unwrap();

    let result = service
        .create_professional(registration("carl", "carl@example.com"), "astronaut")
        .await;

    assert!(matches!(result, Err(AppError::InvalidProfession(ref name)) if name == "Astronaut"));
    assert_eq!(uow.users().count().await.unwrap(), before);
    assert!(service.find_user_by_username("carl").await.unwrap().is_none());

    // The same registration succeeds once a valid profession is given
    let status = service
        .create_professional(registration("carl", "carl@example.com"), "electrician")
        .await
        .unwrap();
    assert!(status.success);
}

#[tokio::test]
async fn test_failed_registration_settles_into_failure_status() {
    let (service, _) = setup().await;

    let status = StatusResponse::settle(
        service
            .create_professional(registration("dina", "dina@example.com"), "astronaut")
            .await,
    )
    .unwrap();

    assert!(!status.success);
    assert_eq!(status.message, "Invalid profession: Astronaut");
}

#[tokio::test]
async fn test_create_professional_creates_user_and_profile() {
    let (service, uow) = setup().await;

    let user_id = register_plumber(&service, "eva").await;

    let user = uow.users().find_by_id(user_id).await.unwrap().unwrap();
    assert_eq!(user.role, UserRole::Professional);

    let profile = uow.profiles().find_by_user_id(user_id).await.unwrap().unwrap();
    let plumber = uow.professions().find_by_name("Plumber").await.unwrap().unwrap();
    assert_eq!(profile.profession_id, plumber.id);
    assert!(service.is_profile_incomplete(user_id).await.unwrap());
}

#[tokio::test]
async fn test_verify_user_credentials_cases() {
    let (service, _) = setup().await;
    service
        .create_user(registration("fede", "fede@example.com"), UserRole::Client)
        .await
        .unwrap();

    let ok = service
        .verify_user_credentials("fede", "plain-text-pass")
        .await
        .unwrap();
    assert!(ok.success);

    let wrong = service.verify_user_credentials("fede", "wrong-pass").await;
    assert!(matches!(wrong, Err(AppError::InvalidPassword)));

    let unknown = service.verify_user_credentials("ghost", "plain-text-pass").await;
    assert!(matches!(unknown, Err(AppError::UserNotFound)));
}

#[tokio::test]
async fn test_update_profile_is_a_patch() {
    let (service, uow) = setup().await;
    let user_id = register_plumber(&service, "gus").await;

    service
        .update_professional_profile(
            user_id,
            ProfileUpdate {
                description: Some("Leaks fixed fast".into()),
                location: Some("Downtown".into()),
                phone: Some("555-0150".into()),
                instagram: Some("https://instagram.com/gus".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(!service.is_profile_incomplete(user_id).await.unwrap());

    service
        .update_professional_profile(
            user_id,
            ProfileUpdate {
                description: Some(String::new()),
                location: None,
                phone: Some("555-0199".into()),
                facebook: Some("https://facebook.com/gus".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let profile = uow.profiles().find_by_user_id(user_id).await.unwrap().unwrap();
    assert_eq!(profile.description.as_deref(), Some("Leaks fixed fast"));
    assert_eq!(profile.location.as_deref(), Some("Downtown"));
    assert_eq!(profile.phone.as_deref(), Some("555-0199"));
    assert_eq!(profile.instagram_link.as_deref(), Some("https://instagram.com/gus"));
    assert_eq!(profile.facebook_link.as_deref(), Some("https://facebook.com/gus"));
    assert_eq!(profile.extra_link, None);
}

#[tokio::test]
async fn test_update_profile_without_profile_fails() {
    let (service, _) = setup().await;
    service
        .create_user(registration("hana", "hana@example.com"), UserRole::Client)
        .await
        .unwrap();
    let user = service.find_user_by_username("hana").await.unwrap().unwrap();

    let result = service
        .update_professional_profile(user.id, ProfileUpdate::default())
        .await;

    assert!(matches!(result, Err(AppError::ProfileNotFound)));
}

#[tokio::test]
async fn test_profile_completeness() {
    let (service, uow) = setup().await;

    // Client without any profile
    service
        .create_user(registration("ivan", "ivan@example.com"), UserRole::Client)
        .await
        .unwrap();
    let client = service.find_user_by_username("ivan").await.unwrap().unwrap();
    assert!(service.is_profile_incomplete(client.id).await.unwrap());

    let user_id = register_plumber(&service, "jade").await;
    service
        .update_professional_profile(
            user_id,
            ProfileUpdate {
                description: Some("Bathrooms".into()),
                location: Some("North".into()),
                phone: Some("555-0177".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(!service.is_profile_incomplete(user_id).await.unwrap());

    // Blank fields written straight through the repository
    let complete = uow.profiles().find_by_user_id(user_id).await.unwrap().unwrap();

    let mut profile = complete.clone();
    profile.location = Some(String::new());
    uow.profiles().update(profile).await.unwrap();
    assert!(service.is_profile_incomplete(user_id).await.unwrap());

    let mut profile = complete.clone();
    profile.description = Some(String::new());
    uow.profiles().update(profile).await.unwrap();
    assert!(service.is_profile_incomplete(user_id).await.unwrap());

    let mut profile = complete;
    profile.phone = Some(String::new());
    uow.profiles().update(profile).await.unwrap();
    assert!(service.is_profile_incomplete(user_id).await.unwrap());
}

#[tokio::test]
async fn test_professionals_lookup_is_case_insensitive() {
    let (service, _) = setup().await;
    register_plumber(&service, "kim").await;
    register_plumber(&service, "leo").await;

    let lower = service
        .get_professionals_by_profession("plumber")
        .await
        .unwrap()
        .unwrap();
    let capitalized = service
        .get_professionals_by_profession("Plumber")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(lower.len(), 2);
    assert_eq!(lower, capitalized);
    let names: Vec<&str> = lower.iter().map(|p| p.full_name.as_str()).collect();
    assert!(names.contains(&"kim Example"));
    assert!(names.contains(&"leo Example"));
}

#[tokio::test]
async fn test_professionals_lookup_distinguishes_unknown_from_empty() {
    let (service, _) = setup().await;

    let unknown = service.get_professionals_by_profession("astronaut").await.unwrap();
    assert!(unknown.is_none());

    let empty = service
        .get_professionals_by_profession("electrician")
        .await
        .unwrap();
    assert_eq!(empty, Some(Vec::new()));
}

#[tokio::test]
async fn test_get_professional_by_profile_id() {
    let (service, _) = setup().await;
    let user_id = register_plumber(&service, "mia").await;
    service
        .update_professional_profile(
            user_id,
            ProfileUpdate {
                location: Some("Harbor".into()),
                link: Some("https://mia.example.com".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let listed = service
        .get_professionals_by_profession("plumber")
        .await
        .unwrap()
        .unwrap();
    let detail = service
        .get_professional_by_id(listed[0].id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(detail.full_name, "mia Example");
    assert_eq!(detail.location.as_deref(), Some("Harbor"));
    assert_eq!(detail.extra_link.as_deref(), Some("https://mia.example.com"));

    let json = serde_json::to_value(&detail).unwrap();
    assert!(json.get("id").is_none());
    assert_eq!(json["full_name"], "mia Example");

    // Looking up by the user id instead of the profile id finds nothing
    assert!(service.get_professional_by_id(user_id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_professions_lists_reference_table() {
    let (service, _) = setup().await;

    let names: Vec<String> = service
        .get_professions()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();

    assert_eq!(names, vec!["Electrician", "Plumber"]);
}
