use serde::{Deserialize, Serialize};

/// 题目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// 单选题
    Single,
    /// 多选题
    Multi,
    /// 名词解释
    Essay,
    /// 简答题
    Mix,
    /// 病例分析 / 问答题
    Case,
}

impl QuestionType {
    /// 是否为客观题（带选项）
    pub fn is_objective(self) -> bool {
        matches!(self, QuestionType::Single | QuestionType::Multi)
    }
}

/// 选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub label: String,
    pub text: String,
}

impl QuestionOption {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// 题目
///
/// `id` 只由题干和选项文本决定，题目顺序调整不影响历史记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    /// 原文中的题号，只用于共用题干/答案区的对照
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq: Option<u32>,
    pub title: String,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub analysis: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl Question {
    /// 创建一道尚未定稿的题目
    pub fn new(seq: Option<u32>, title: impl Into<String>, kind: QuestionType) -> Self {
        Self {
            id: String::new(),
            seq,
            title: title.into(),
            options: Vec::new(),
            answer: String::new(),
            analysis: String::new(),
            kind,
            group_id: None,
        }
    }

    /// 用于生成 ID 的内容：题干 + 全部选项文本
    pub fn content_for_id(&self) -> String {
        let mut content = self.title.clone();
        for option in &self.options {
            content.push_str(&option.text);
        }
        content
    }
}

/// 章节
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub desc: String,
}

impl Chapter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            questions: Vec::new(),
            desc: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// 题库（一本书）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub chapters: Vec<Chapter>,
}

impl Book {
    /// 题目总数
    pub fn question_count(&self) -> usize {
        self.chapters.iter().map(|c| c.questions.len()).sum()
    }
}

/// 题库清单中的一项：书的 ID、标题和按顺序合并的源文件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSpec {
    pub id: String,
    pub title: String,
    pub files: Vec<String>,
}

impl BookSpec {
    pub fn new(id: impl Into<String>, title: impl Into<String>, files: &[&str]) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            files: files.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// 内置的题库列表
    pub fn defaults() -> Vec<BookSpec> {
        vec![
            BookSpec::new("q1", "儿科学（题库1）", &["Q1.md"]),
            BookSpec::new("q2", "儿科学习题集（题库2）", &["Q2.md"]),
        ]
    }
}

/// 题库清单文件（TOML）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookManifest {
    #[serde(default)]
    pub books: Vec<BookSpec>,
}
