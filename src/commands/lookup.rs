//! Lookup commands - Read-only directory queries.

use std::sync::Arc;

use uuid::Uuid;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, Persistence};
use crate::services::{Directory, DirectoryService};

async fn directory(config: &Config) -> AppResult<Directory<Persistence>> {
    let db = Database::connect(config).await?;
    Ok(Directory::new(Arc::new(Persistence::new(db.get_connection()))))
}

fn print_json<T: serde::Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::internal(format!("Failed to render JSON: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}

/// List every profession
pub async fn professions(config: Config) -> AppResult<()> {
    let professions = directory(&config).await?.get_professions().await?;
    for profession in professions {
        println!("{}  {}", profession.id, profession.name);
    }
    Ok(())
}

/// Print the professionals of a profession
pub async fn professionals(profession: String, config: Config) -> AppResult<()> {
    match directory(&config)
        .await?
        .get_professionals_by_profession(&profession)
        .await?
    {
        Some(listed) => print_json(&listed),
        None => {
            eprintln!("Unknown profession: {}", profession);
            Ok(())
        }
    }
}

/// Print a single professional by profile id
pub async fn professional(id: Uuid, config: Config) -> AppResult<()> {
    match directory(&config).await?.get_professional_by_id(id).await? {
        Some(detail) => print_json(&detail),
        None => {
            eprintln!("Professional not found: {}", id);
            Ok(())
        }
    }
}
