//! 源文档读取服务 - 业务能力层
//!
//! 只负责"按名称读取一篇文档"能力，缺失文件由调用方决定是否跳过

use crate::error::{AppError, AppResult};
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// 源文档读取服务
pub struct DocumentReader {
    input_dir: PathBuf,
}

impl DocumentReader {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
        }
    }

    /// 文档的完整路径
    pub fn path_for(&self, document_name: &str) -> PathBuf {
        self.input_dir.join(document_name)
    }

    /// 读取文档全文（UTF-8）
    ///
    /// 文件不存在时返回 `FileError::NotFound`，可用 [`AppError::is_not_found`] 判断
    pub async fn read(&self, document_name: &str) -> AppResult<String> {
        let path = self.path_for(document_name);
        let text = fs::read_to_string(&path)
            .await
            .map_err(|e| AppError::file_read_failed(&path, e))?;

        debug!("读取 {}: {} 字节", path.display(), text.len());
        Ok(text)
    }
}
