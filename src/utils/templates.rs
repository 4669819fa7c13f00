//! Code generation templates.

use std::fs;
use std::path::Path;

use crate::errors::{AppError, AppResult};

/// Generate a timestamped migration source file under
/// `src/infra/db/migrations/`. Returns the path written.
pub fn generate_migration(name: &str) -> AppResult<String> {
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let snake_name = to_snake_case(name);
    let pascal_name = to_pascal_case(&snake_name);
    let filename = format!("m{}_{}.rs", timestamp, snake_name);

    let content = format!(
        r#"//! Migration: {name}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Table and column identifiers
#[derive(Iden)]
enum {pascal_name} {{
    Table,
    Id,
}}

#[async_trait::async_trait]
impl MigrationTrait for Migration {{
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {{
        manager
            .create_table(
                Table::create()
                    .table({pascal_name}::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new({pascal_name}::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .to_owned(),
            )
            .await
    }}

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {{
        manager
            .drop_table(Table::drop().table({pascal_name}::Table).to_owned())
            .await
    }}
}}
"#
    );

    let path = format!("src/infra/db/migrations/{}", filename);
    write_file(&path, &content)?;

    Ok(path)
}

/// Write content to file
fn write_file(path: &str, content: &str) -> AppResult<()> {
    let path = Path::new(path);

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| AppError::internal(e.to_string()))?;
    }

    fs::write(path, content).map_err(|e| AppError::internal(e.to_string()))?;

    Ok(())
}

/// Convert to snake_case
fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_lowercase().next().unwrap());
        } else {
            result.push(c);
        }
    }
    result
}

/// Convert to PascalCase
fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_handles_mixed_input() {
        assert_eq!(to_snake_case("AddDepthColumn"), "add_depth_column");
        assert_eq!(to_snake_case("add_depth_column"), "add_depth_column");
    }

    #[test]
    fn pascal_case_joins_words() {
        assert_eq!(to_pascal_case("add_depth_column"), "AddDepthColumn");
    }
}
