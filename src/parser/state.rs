//! 扫描状态
//!
//! 当前章节、当前题目、解析模式和共用题组全部放在 [`ScannerState`] 中，
//! 由扫描器独占并逐行修改

use tracing::debug;

use crate::models::{Chapter, Question, QuestionOption};
use crate::parser::finalizer;
use crate::parser::patterns::{contains_any, leading_number, CASE_KEYWORDS, TERM_KEYWORD};
use crate::utils::logging::truncate_text;

/// 解析模式，同一时刻只有一个生效
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// 普通选择题
    #[default]
    Normal,
    /// 名词解释
    TermDefinitions,
    /// 病例分析 / 问答题
    CaseAnalysis,
    /// 教学要求（写入章节描述）
    TeachingRequirements,
    /// 参考答案区
    AnswerKey,
}

impl Mode {
    /// 由章节标题决定的模式
    pub fn for_chapter_title(title: &str) -> Mode {
        if title.contains(TERM_KEYWORD) {
            Mode::TermDefinitions
        } else if contains_any(title, CASE_KEYWORDS) {
            Mode::CaseAnalysis
        } else {
            Mode::Normal
        }
    }
}

/// 共用题组类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// 共用备选答案（B 型题）
    SharedOptions,
    /// 共用题干（A3/A4 型题）
    SharedStem,
}

/// 共用题组上下文，只存在于解析过程中
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupContext {
    pub start: u32,
    pub end: u32,
    pub kind: GroupKind,
    pub options: Vec<QuestionOption>,
    pub stem_text: String,
}

impl GroupContext {
    pub fn new(start: u32, end: u32, kind: GroupKind, stem_text: String) -> Self {
        Self {
            start,
            end,
            kind,
            options: Vec::new(),
            stem_text,
        }
    }

    /// 题号是否落在题组范围内
    pub fn covers(&self, seq: Option<u32>) -> bool {
        seq.is_some_and(|seq| (self.start..=self.end).contains(&seq))
    }
}

/// 单个文档的扫描状态
#[derive(Debug)]
pub struct ScannerState {
    document_name: String,
    pub chapters: Vec<Chapter>,
    pub current: Option<Question>,
    pub mode: Mode,
    pub group: Option<GroupContext>,
}

impl ScannerState {
    pub fn new(document_name: impl Into<String>) -> Self {
        Self {
            document_name: document_name.into(),
            chapters: Vec::new(),
            current: None,
            mode: Mode::Normal,
            group: None,
        }
    }

    /// 当前章节；文档开头没有章节标题时建立默认章节
    pub fn chapter_mut(&mut self) -> &mut Chapter {
        if self.chapters.is_empty() {
            let title = format!("文档 {}", self.document_name);
            debug!("建立默认章节: {}", title);
            self.chapters.push(Chapter::new(title));
        }
        let last = self.chapters.len() - 1;
        &mut self.chapters[last]
    }

    pub fn last_chapter(&self) -> Option<&Chapter> {
        self.chapters.last()
    }

    pub fn open_chapter(&mut self, title: impl Into<String>) {
        self.chapters.push(Chapter::new(title));
    }

    /// 切换模式
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            debug!("解析模式: {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    /// 定稿当前题目并放入当前章节
    pub fn close_question(&mut self) {
        let Some(mut question) = self.current.take() else {
            return;
        };
        if question.seq.is_none() {
            question.seq = leading_number(&question.title);
        }
        finalizer::finalize(&mut question, self.group.as_ref());
        debug!(
            "定稿 {} [{:?}] {}",
            question.id,
            question.kind,
            truncate_text(&question.title, 30)
        );
        self.chapter_mut().questions.push(question);
    }

    /// 开始新题目（先定稿上一题）
    pub fn open_question(&mut self, question: Question) {
        self.close_question();
        self.current = Some(question);
    }

    pub fn install_group(&mut self, group: GroupContext) {
        debug!("共用题组: {}~{} {:?}", group.start, group.end, group.kind);
        self.group = Some(group);
    }

    pub fn reset_group(&mut self) {
        self.group = None;
    }

    /// 结束扫描，丢弃没有题目的章节
    pub fn finish(mut self) -> Vec<Chapter> {
        self.close_question();
        self.chapters.retain(|c| !c.is_empty());
        self.chapters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionType;

    #[test]
    fn test_mode_for_chapter_title() {
        assert_eq!(Mode::for_chapter_title("名词解释"), Mode::TermDefinitions);
        assert_eq!(Mode::for_chapter_title("病例分析题"), Mode::CaseAnalysis);
        assert_eq!(Mode::for_chapter_title("问答题"), Mode::CaseAnalysis);
        assert_eq!(Mode::for_chapter_title("第二章 生长发育"), Mode::Normal);
    }

    #[test]
    fn test_group_covers() {
        let group = GroupContext::new(5, 6, GroupKind::SharedOptions, String::new());
        assert!(group.covers(Some(5)));
        assert!(group.covers(Some(6)));
        assert!(!group.covers(Some(7)));
        assert!(!group.covers(None));
    }

    #[test]
    fn test_close_question_uses_default_chapter() {
        let mut state = ScannerState::new("Q1.md");
        state.open_question(Question::new(Some(1), "小儿年龄分期", QuestionType::Single));
        state.open_question(Question::new(Some(2), "新生儿期", QuestionType::Single));
        assert_eq!(state.current.as_ref().map(|q| q.seq), Some(Some(2)));

        let chapters = state.finish();
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title, "文档 Q1.md");
        assert_eq!(chapters[0].questions.len(), 2);
        assert!(chapters[0].questions.iter().all(|q| !q.id.is_empty()));
    }

    #[test]
    fn test_sequence_falls_back_to_title_number() {
        let mut state = ScannerState::new("Q1.md");
        state.open_question(Question::new(None, "21三体综合征", QuestionType::Essay));
        let chapters = state.finish();
        assert_eq!(chapters[0].questions[0].seq, Some(21));
    }

    #[test]
    fn test_finish_drops_empty_chapters() {
        let mut state = ScannerState::new("Q1.md");
        state.open_chapter("第一章 绪论");
        state.open_chapter("第二章 生长发育");
        state.open_question(Question::new(Some(1), "前囟闭合时间", QuestionType::Single));
        let chapters = state.finish();
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title, "第二章 生长发育");
    }
}
