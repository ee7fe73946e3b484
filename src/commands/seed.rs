//! Seed command - Profession reference data.

use crate::cli::args::SeedArgs;
use crate::config::{Config, DEFAULT_PROFESSIONS};
use crate::domain::{normalize_profession_name, Profession};
use crate::errors::AppResult;
use crate::infra::{Database, ProfessionRepository, ProfessionStore};

/// Execute the seed command
pub async fn execute(args: SeedArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;
    let store = ProfessionStore::new(db.get_connection());

    let names = if args.names.is_empty() {
        DEFAULT_PROFESSIONS.iter().map(|n| n.to_string()).collect()
    } else {
        args.names
    };

    let created = seed_professions(&store, &names).await?;
    for profession in &created {
        println!("Added {}", profession.name);
    }
    tracing::info!(added = created.len(), requested = names.len(), "Professions seeded");

    Ok(())
}

/// Insert each normalized name that is not stored yet.
///
/// Blank and repeated names are skipped; returns the professions created.
pub async fn seed_professions(
    store: &dyn ProfessionRepository,
    names: &[String],
) -> AppResult<Vec<Profession>> {
    let mut created: Vec<Profession> = Vec::new();

    for raw in names {
        let name = normalize_profession_name(raw);
        if name.is_empty() || created.iter().any(|p| p.name == name) {
            continue;
        }
        if store.find_by_name(&name).await?.is_some() {
            tracing::debug!(profession = %name, "Profession already present");
            continue;
        }
        created.push(store.create(name).await?);
    }

    Ok(created)
}
