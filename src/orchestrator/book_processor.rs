//! 单个题库处理器 - 编排层
//!
//! 按顺序读取题库的每篇源文档，各自独立解析，章节列表依次拼接。
//! 缺失的文档记录警告后跳过，其余 I/O 错误直接返回

use crate::models::{Book, BookSpec};
use crate::parser;
use crate::services::DocumentReader;
use crate::utils::logging::{log_book_complete, log_document_parsed, log_document_skipped};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// 单个题库的处理结果
#[derive(Debug)]
pub struct BookOutcome {
    pub book: Book,
    /// 不存在而被跳过的文档
    pub skipped: Vec<PathBuf>,
}

/// 处理单个题库
///
/// # 参数
/// - `spec`: 题库清单项
/// - `reader`: 源文档读取服务
pub async fn process_book(spec: &BookSpec, reader: &DocumentReader) -> Result<BookOutcome> {
    let mut chapters = Vec::new();
    let mut skipped = Vec::new();

    for name in &spec.files {
        let text = match reader.read(name).await {
            Ok(text) => text,
            Err(e) if e.is_not_found() => {
                let path = reader.path_for(name);
                log_document_skipped(&path);
                skipped.push(path);
                continue;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("无法读取文档: {}", name));
            }
        };

        let document_chapters = parser::parse_document(name, &text);
        let question_count: usize = document_chapters.iter().map(|c| c.questions.len()).sum();
        log_document_parsed(name, document_chapters.len(), question_count);
        chapters.extend(document_chapters);
    }

    let book = Book {
        id: spec.id.clone(),
        title: spec.title.clone(),
        chapters,
    };
    log_book_complete(&book);

    Ok(BookOutcome { book, skipped })
}
