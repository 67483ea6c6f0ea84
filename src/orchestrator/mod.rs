//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量题库处理器
//! - 确定题库清单
//! - 逐本处理并写出结果
//! - 输出全局统计信息
//!
//! ### `book_processor` - 单个题库处理器
//! - 逐篇读取源文档（缺失的跳过）
//! - 每篇文档独立解析，章节依次拼接
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<BookSpec>)
//!     ↓
//! book_processor (处理一本书的 Vec<文档>)
//!     ↓
//! parser (处理单篇文档)
//!     ↓
//! services (能力层：读取文档 / 写出结果)
//! ```

pub mod batch_processor;
pub mod book_processor;

// 重新导出主要类型
pub use batch_processor::{App, RunSummary};
pub use book_processor::{process_book, BookOutcome};
