use crate::error::{AppError, AppResult, ConfigError, FileError};
use crate::models::question::{BookManifest, BookSpec};
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载题库清单
///
/// ```toml
/// [[books]]
/// id = "q1"
/// title = "儿科学（题库1）"
/// files = ["Q1.md"]
/// ```
pub async fn load_book_manifest(manifest_path: &Path) -> AppResult<Vec<BookSpec>> {
    let content = fs::read_to_string(manifest_path)
        .await
        .map_err(|e| AppError::file_read_failed(manifest_path, e))?;

    let manifest: BookManifest =
        toml::from_str(&content).map_err(|source| FileError::TomlParseFailed {
            path: manifest_path.to_path_buf(),
            source,
        })?;

    if manifest.books.is_empty() {
        return Err(ConfigError::EmptyBookList {
            source_name: manifest_path.display().to_string(),
        }
        .into());
    }

    tracing::info!(
        "题库清单 {} 共 {} 本",
        manifest_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy(),
        manifest.books.len()
    );

    Ok(manifest.books)
}
