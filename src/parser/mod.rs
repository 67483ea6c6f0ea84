//! 题库文本解析
//!
//! 把手工整理的 Markdown 题库（章节标题、编号题目、字母选项、答案/解析、
//! 共用题组、名词解释和病例分析等自由文本段落）转换为结构化的章节和题目。
//!
//! - `hash_id` - 与位置无关的内容哈希 ID
//! - `patterns` - 行分类规则和关键词
//! - `state` - 解析模式、共用题组和扫描状态
//! - `scanner` - 逐行扫描
//! - `finalizer` - 题目定稿
//! - `answer_key` - 参考答案区回填

pub mod answer_key;
pub mod finalizer;
pub mod hash_id;
pub mod patterns;
pub mod scanner;
pub mod state;

pub use scanner::LineScanner;
pub use state::{GroupContext, GroupKind, Mode, ScannerState};

use crate::models::Chapter;

/// 解析一篇文档，返回有题目的章节
pub fn parse_document(document_name: &str, text: &str) -> Vec<Chapter> {
    LineScanner::scan(document_name, text)
}
