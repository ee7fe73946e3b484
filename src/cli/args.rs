//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Directory of service professionals - database and lookup tooling
#[derive(Parser, Debug)]
#[command(name = "directory")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database URL (overrides configuration)
    #[arg(long, global = true, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run database migrations
    Migrate(MigrateArgs),

    /// Insert missing professions into the reference table
    Seed(SeedArgs),

    /// List all professions
    Professions,

    /// List the professionals of a profession as JSON
    Professionals(ProfessionalsArgs),

    /// Show one professional as JSON
    Professional(ProfessionalArgs),
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Profession names (defaults to the built-in list)
    pub names: Vec<String>,
}

/// Arguments for the professionals command
#[derive(Parser, Debug)]
pub struct ProfessionalsArgs {
    /// Profession name, case-insensitive
    pub profession: String,
}

/// Arguments for the professional command
#[derive(Parser, Debug)]
pub struct ProfessionalArgs {
    /// Professional profile id
    pub id: Uuid,
}
