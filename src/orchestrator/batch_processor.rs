//! 批量题库处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责所有题库的处理和输出。
//!
//! 1. **应用初始化**：确定题库清单（TOML 清单或内置清单）
//! 2. **逐本处理**：委托 book_processor 处理单个题库
//! 3. **输出**：写入题库数据和静态元数据文件
//! 4. **全局统计**：汇总章节、题目和跳过的文档

use crate::config::Config;
use crate::models::{load_book_manifest, Book, BookSpec};
use crate::orchestrator::book_processor;
use crate::services::{DocumentReader, OutputWriter};
use crate::utils::logging::{log_book_start, log_startup, print_final_stats};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::warn;

/// 一次运行的结果
#[derive(Debug)]
pub struct RunSummary {
    pub books: Vec<Book>,
    pub skipped: Vec<PathBuf>,
    pub output_path: PathBuf,
}

/// 应用主结构
pub struct App {
    config: Config,
    books: Vec<BookSpec>,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let books = match &config.manifest_file {
            Some(manifest) => load_book_manifest(Path::new(manifest))
                .await
                .with_context(|| format!("无法加载题库清单: {}", manifest))?,
            None => BookSpec::defaults(),
        };

        Ok(Self::with_books(config, books))
    }

    /// 使用指定的题库清单
    pub fn with_books(config: Config, books: Vec<BookSpec>) -> Self {
        Self { config, books }
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<RunSummary> {
        let reader = DocumentReader::new(&self.config.input_dir);
        let total_books = self.books.len();

        let mut books = Vec::with_capacity(total_books);
        let mut skipped = Vec::new();

        for (idx, spec) in self.books.iter().enumerate() {
            log_book_start(idx + 1, total_books, spec);

            let outcome = book_processor::process_book(spec, &reader).await?;
            if outcome.book.chapters.is_empty() {
                warn!("⚠️ {} 没有解析到任何题目", spec.title);
            }
            skipped.extend(outcome.skipped);
            books.push(outcome.book);
        }

        let writer = OutputWriter::new(&self.config.output_dir, &self.config.output_file);
        let output_path = writer
            .write(&books)
            .await
            .context("写入输出文件失败")?;

        print_final_stats(&books, skipped.len(), &output_path);

        Ok(RunSummary {
            books,
            skipped,
            output_path,
        })
    }
}
