//! 内容哈希 ID
//!
//! ID 只依赖文本内容（去掉全部空白），与题目在文档中的位置无关

use sha2::{Digest, Sha256};

/// 题目 ID 长度
pub const QUESTION_ID_LEN: usize = 12;
/// 共用选项组 ID 长度
pub const GROUP_ID_LEN: usize = 8;

/// 生成截断为 `len` 个十六进制字符的内容哈希
pub fn hash_id(text: &str, len: usize) -> String {
    let clean: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let digest = Sha256::digest(clean.as_bytes());
    let mut hex = format!("{:x}", digest);
    hex.truncate(len);
    hex
}

/// 题目 ID
pub fn question_id(content: &str) -> String {
    hash_id(content, QUESTION_ID_LEN)
}

/// 共用选项组 ID
pub fn group_id(serialized_options: &str) -> String {
    hash_id(serialized_options, GROUP_ID_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_insensitive() {
        let a = question_id("新生儿期是指\n自出生后脐带结扎起");
        let b = question_id("新生儿期 是指 自出生后　脐带结扎起");
        assert_eq!(a, b);
        assert_eq!(a.len(), QUESTION_ID_LEN);
    }

    #[test]
    fn test_different_content_different_id() {
        assert_ne!(question_id("生后第1周"), question_id("生后第2周"));
    }

    #[test]
    fn test_group_id_length() {
        let id = group_id(r#"[{"label":"A","text":"维生素D"}]"#);
        assert_eq!(id.len(), GROUP_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
