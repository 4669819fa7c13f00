//! Generate command - Code generation for project components.

use crate::cli::args::{GenerateArgs, GenerateComponent};
use crate::errors::AppResult;
use crate::utils::templates;

/// Execute the generate command
pub async fn execute(args: GenerateArgs) -> AppResult<()> {
    match args.component {
        GenerateComponent::Migration { name } => {
            tracing::info!("Generating migration: {}", name);
            let path = templates::generate_migration(&name)?;
            println!("Created migration: {}", path);
            println!("Don't forget to register it in src/infra/db/migrations/mod.rs!");
        }
    }

    Ok(())
}
