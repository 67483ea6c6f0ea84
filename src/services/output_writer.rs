//! 输出写入服务 - 业务能力层
//!
//! 只负责把题库数据和静态元数据文件写入输出目录

use crate::error::{AppError, AppResult, FileError};
use crate::models::Book;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// 静态元数据文件名
pub const HEADERS_FILE: &str = "_headers";
/// 静态元数据内容
pub const HEADERS_CONTENT: &str = "/*\n  Cache-Control: no-cache\n  Access-Control-Allow-Origin: *";

/// 输出写入服务
pub struct OutputWriter {
    output_dir: PathBuf,
    output_file: String,
}

impl OutputWriter {
    pub fn new(output_dir: impl Into<PathBuf>, output_file: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            output_file: output_file.into(),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }

    /// 写入题库数据和元数据文件，返回题库数据文件路径
    pub async fn write(&self, books: &[Book]) -> AppResult<PathBuf> {
        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|source| FileError::CreateDirFailed {
                path: self.output_dir.clone(),
                source,
            })?;

        let json = serde_json::to_string_pretty(books)?;
        let output_path = self.output_path();
        write_file(&output_path, &json).await?;
        write_file(&self.output_dir.join(HEADERS_FILE), HEADERS_CONTENT).await?;

        info!("💾 已写入 {} ({} 字节)", output_path.display(), json.len());
        Ok(output_path)
    }
}

async fn write_file(path: &Path, content: &str) -> AppResult<()> {
    fs::write(path, content)
        .await
        .map_err(|e| AppError::file_write_failed(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Chapter, Question, QuestionType};

    #[tokio::test]
    async fn test_write_books_and_headers() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("dist");
        let writer = OutputWriter::new(&output_dir, "books.json");

        let mut chapter = Chapter::new("第一章 绪论");
        chapter
            .questions
            .push(Question::new(Some(1), "小儿年龄分期", QuestionType::Mix));
        let books = vec![Book {
            id: "q1".to_string(),
            title: "儿科学（题库1）".to_string(),
            chapters: vec![chapter],
        }];

        let path = writer.write(&books).await.unwrap();
        assert_eq!(path, output_dir.join("books.json"));

        let json = std::fs::read_to_string(&path).unwrap();
        // 中文不转义
        assert!(json.contains("儿科学（题库1）"));
        let back: Vec<Book> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, books);

        let headers = std::fs::read_to_string(output_dir.join(HEADERS_FILE)).unwrap();
        assert_eq!(headers, HEADERS_CONTENT);
    }
}
