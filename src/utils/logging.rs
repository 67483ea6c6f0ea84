/// 日志工具模块
///
/// 提供日志初始化、格式化和输出的辅助函数
use crate::config::Config;
use crate::models::{Book, BookSpec};
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 设置了 `RUST_LOG` 时以其为准，否则为 `info`（详细模式为 `debug`）
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 题库转换");
    info!("📂 输入目录: {}", config.input_dir);
    info!("📦 输出目录: {}", config.output_dir);
    info!("{}", "=".repeat(60));
}

/// 记录题库开始处理
///
/// # 参数
/// - `book_num`: 题库编号（从1开始）
/// - `total_books`: 题库总数
/// - `spec`: 题库清单项
pub fn log_book_start(book_num: usize, total_books: usize, spec: &BookSpec) {
    info!("\n{}", "─".repeat(60));
    info!("📚 [{}/{}] {} ({})", book_num, total_books, spec.title, spec.id);
    info!("📄 源文件: {}", spec.files.join(", "));
}

/// 记录单个文档的解析结果
pub fn log_document_parsed(name: &str, chapters: usize, questions: usize) {
    info!("✓ {}: {} 个章节, {} 道题目", name, chapters, questions);
}

/// 记录被跳过的文档
pub fn log_document_skipped(path: &Path) {
    warn!("⚠️ 文件不存在，已跳过: {}", path.display());
}

/// 记录题库完成
pub fn log_book_complete(book: &Book) {
    info!(
        "✓ {} 完成: {} 个章节, {} 道题目",
        book.title,
        book.chapters.len(),
        book.question_count()
    );
}

/// 打印最终统计信息
///
/// # 参数
/// - `books`: 生成的题库
/// - `skipped`: 跳过的文档数量
/// - `output_path`: 输出文件路径
pub fn print_final_stats(books: &[Book], skipped: usize, output_path: &Path) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    for book in books {
        info!("📚 {}: {} 个章节", book.title, book.chapters.len());
    }
    info!(
        "✅ 题目总数: {}",
        books.iter().map(Book::question_count).sum::<usize>()
    );
    if skipped > 0 {
        info!("⚠️ 跳过文档: {}", skipped);
    }
    info!("{}", "=".repeat(60));
    info!("\n题库已保存至: {}", output_path.display());
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（字符数）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
