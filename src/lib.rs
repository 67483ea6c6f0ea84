//! # QBank Builder
//!
//! 把手工整理的 Markdown 题库转换为结构化题库数据
//!
//! ## 架构设计
//!
//! ### ① 解析层（Parser）
//! - `parser/` - 逐行扫描单篇文档，输出章节和题目
//! - `LineScanner` - 解析模式状态机 + 行分类分派
//! - `finalizer` / `answer_key` - 题目定稿、参考答案回填
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `DocumentReader` - 读取源文档
//! - `OutputWriter` - 写出题库数据和元数据文件
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 全部题库，写出结果和统计
//! - `orchestrator/book_processor` - 单个题库，拼接各文档的章节
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod parser;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Book, BookSpec, Chapter, Question, QuestionOption, QuestionType};
pub use orchestrator::{process_book, App, RunSummary};
pub use parser::{parse_document, LineScanner};
