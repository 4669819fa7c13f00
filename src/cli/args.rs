//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Earthquake API - read-only lookups over a seeded earthquake table
#[derive(Parser, Debug)]
#[command(name = "quake-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Reset the schema and insert the sample rows
    Seed,

    /// Generate project components
    Generate(GenerateArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "SERVER_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "3000", env = "SERVER_PORT")]
    pub port: u16,
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

/// Arguments for the generate command
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    #[command(subcommand)]
    pub component: GenerateComponent,
}

/// Components that can be generated
#[derive(Subcommand, Debug)]
pub enum GenerateComponent {
    /// Generate a new migration
    Migration {
        /// Migration name (e.g., "add_depth_column")
        name: String,
    },
}
