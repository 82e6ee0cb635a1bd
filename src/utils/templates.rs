//! Code generation templates.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};

/// Write a new migration module into `dir` and return its path.
pub fn generate_migration(dir: &Path, name: &str) -> AppResult<PathBuf> {
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let snake_name = to_snake_case(name);
    if snake_name.is_empty() {
        return Err(AppError::config("migration name must not be empty"));
    }
    let pascal_name = to_pascal_case(&snake_name);
    let filename = format!("m{}_{}.rs", timestamp, snake_name);

    let content = format!(
        r#"//! Migration: {name}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Table and column identifiers for {pascal_name}
#[derive(Iden)]
enum {pascal_name} {{
    Table,
    Id,
    CreatedAt,
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
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new({pascal_name}::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
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

    let path = dir.join(filename);
    write_file(&path, &content)?;

    Ok(path)
}

/// Write content to file
fn write_file(path: &Path, content: &str) -> AppResult<()> {
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
    for (i, c) in s.trim().chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 && !result.ends_with('_') {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else if c == '-' || c.is_whitespace() {
            result.push('_');
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
