//! 逐行扫描器
//!
//! 自由文本模式（教学要求 / 名词解释 / 病例分析 / 参考答案）先处理本行；
//! 标题行总是先检查是否退出当前模式，未被消费的行再按 [`classify`] 的优先级分派

use tracing::debug;

use crate::models::{Chapter, Question, QuestionOption, QuestionType};
use crate::parser::answer_key;
use crate::parser::patterns::{
    classify, contains_any, contains_within, header_title, is_boilerplate_title, is_header,
    is_numbered_chapter, resets_group, LineKind, ANSWER_KEY_KEYWORD, CASE_EXIT_KEYWORDS,
    OPTION_START, QUESTION_START, REQUIREMENTS_EXIT_KEYWORDS, REQUIREMENTS_INNER_MARKERS,
    REQUIREMENTS_KEYWORD, TERM_ANSWER, TERM_EXIT_KEYWORDS,
};
use crate::parser::state::{GroupContext, GroupKind, Mode, ScannerState};

/// 模式处理后本行是否已被消费
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Consumed,
    Continue,
}

/// 单个文档的扫描器
#[derive(Debug)]
pub struct LineScanner {
    state: ScannerState,
}

impl LineScanner {
    pub fn new(document_name: impl Into<String>) -> Self {
        Self {
            state: ScannerState::new(document_name),
        }
    }

    /// 扫描整篇文档，返回非空章节
    pub fn scan(document_name: &str, text: &str) -> Vec<Chapter> {
        let mut scanner = Self::new(document_name);
        for line in text.lines() {
            scanner.feed_line(line);
        }
        scanner.finish()
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn finish(self) -> Vec<Chapter> {
        self.state.finish()
    }

    pub fn feed_line(&mut self, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }

        if self.handle_mode_line(line) == Flow::Consumed {
            return;
        }

        match classify(line) {
            LineKind::GroupHeader(header) => {
                self.state.close_question();
                self.state.install_group(GroupContext::new(
                    header.start,
                    header.end,
                    header.kind,
                    header.stem_text,
                ));
            }
            LineKind::Header(title) => self.handle_header(title),
            LineKind::QuestionStart { seq, title } => {
                self.state
                    .open_question(Question::new(seq, title, QuestionType::Single));
            }
            LineKind::AnswerLine(answer) => {
                if let Some(question) = self.state.current.as_mut() {
                    if !answer.is_empty() {
                        question.answer = answer;
                    }
                }
            }
            LineKind::Options { options, answer } => self.add_options(options, answer),
            LineKind::Analysis(text) => {
                if let Some(question) = self.state.current.as_mut() {
                    append_line(&mut question.analysis, text);
                }
            }
            LineKind::Content { answer } => self.append_content(line, answer),
        }
    }

    // ========== 自由文本模式 ==========

    fn handle_mode_line(&mut self, line: &str) -> Flow {
        match self.state.mode {
            Mode::Normal => Flow::Continue,
            Mode::TeachingRequirements => self.requirements_line(line),
            Mode::TermDefinitions => self.term_line(line),
            Mode::CaseAnalysis => self.case_line(line),
            Mode::AnswerKey => self.answer_key_line(line),
        }
    }

    /// 教学要求：正文写入章节描述
    fn requirements_line(&mut self, line: &str) -> Flow {
        if let Some(title) = header_title(line) {
            if !contains_any(title, REQUIREMENTS_EXIT_KEYWORDS)
                && contains_any(title, REQUIREMENTS_INNER_MARKERS)
            {
                return Flow::Consumed;
            }
            self.state.set_mode(Mode::Normal);
            return Flow::Continue;
        }

        let chapter = self.state.chapter_mut();
        chapter.desc.push_str(line);
        chapter.desc.push('\n');
        Flow::Consumed
    }

    /// 名词解释：每个标题是一个名词，其余行是解释
    fn term_line(&mut self, line: &str) -> Flow {
        if let Some(title) = header_title(line) {
            if contains_any(title, TERM_EXIT_KEYWORDS) {
                self.state.set_mode(Mode::Normal);
                return Flow::Continue;
            }
            let mut term = Question::new(None, title, QuestionType::Essay);
            term.answer = TERM_ANSWER.to_string();
            self.state.open_question(term);
            return Flow::Consumed;
        }

        if let Some(question) = self.state.current.as_mut() {
            question.analysis.push_str(line);
            question.analysis.push('\n');
        }
        Flow::Consumed
    }

    /// 病例分析：编号行开始新题，答案里的编号列表不算新题
    fn case_line(&mut self, line: &str) -> Flow {
        if is_header(line) {
            if contains_any(line, CASE_EXIT_KEYWORDS) {
                self.state.set_mode(Mode::Normal);
            }
            return Flow::Continue;
        }

        if !line.starts_with('答') && !contains_within(line, "答案", 5) {
            if let Some(caps) = QUESTION_START.captures(line) {
                let seq = caps[1].parse().ok();
                if self.accepts_case_question(seq) {
                    let title = caps.get(2).map_or("", |m| m.as_str().trim());
                    self.state
                        .open_question(Question::new(seq, title, QuestionType::Case));
                    return Flow::Consumed;
                }
            }
        }

        if let Some(question) = self.state.current.as_mut() {
            if !question.analysis.is_empty()
                || line.starts_with('答')
                || contains_within(line, "答案", 8)
            {
                append_line(&mut question.analysis, line);
            } else {
                append_line(&mut question.title, line);
            }
        }
        Flow::Consumed
    }

    /// 新题号必须大于当前题号
    fn accepts_case_question(&self, seq: Option<u32>) -> bool {
        match (self.state.current.as_ref().and_then(|q| q.seq), seq) {
            (Some(current), Some(next)) => next > current,
            _ => true,
        }
    }

    /// 参考答案区：标题行交给章节逻辑，其余行回填答案
    fn answer_key_line(&mut self, line: &str) -> Flow {
        if is_header(line) {
            return Flow::Continue;
        }
        let filled = answer_key::reconcile_line(self.state.chapter_mut(), line);
        debug!("答案区回填 {} 题: {}", filled, line);
        Flow::Consumed
    }

    // ========== 普通模式 ==========

    fn handle_header(&mut self, title: &str) {
        if is_boilerplate_title(title) {
            if title.contains(REQUIREMENTS_KEYWORD) {
                self.state.set_mode(Mode::TeachingRequirements);
            }
            if title.contains(ANSWER_KEY_KEYWORD) {
                // 答案行形如 `1. C`，必须先结束当前题目
                self.state.close_question();
                self.state.set_mode(Mode::AnswerKey);
            }
            if resets_group(title) {
                self.state.reset_group();
            }
            return;
        }

        self.state.close_question();
        self.state.reset_group();
        if self.state.mode == Mode::AnswerKey {
            self.state.set_mode(Mode::Normal);
        }

        if let Some(last) = self.state.last_chapter() {
            if last.is_empty() && is_numbered_chapter(&last.title) && !is_numbered_chapter(title) {
                let chapter = self.state.chapter_mut();
                chapter.title.push(' ');
                chapter.title.push_str(title);
                debug!("合并副标题: {}", chapter.title);
                return;
            }
        }

        self.state.set_mode(Mode::for_chapter_title(title));
        self.state.open_chapter(title);
        debug!("新章节: {}", title);
    }

    fn add_options(&mut self, options: Vec<QuestionOption>, answer: Option<String>) {
        if let Some(question) = self.state.current.as_mut() {
            if let Some(answer) = answer.filter(|a| !a.is_empty()) {
                question.answer = answer;
            }
            question.options.extend(options.iter().cloned());
        }

        if let Some(group) = self.state.group.as_mut() {
            if group.kind == GroupKind::SharedOptions {
                group.options.extend(options);
            }
        }
    }

    /// 无法归类的行：续接解析、最后一个选项或题干
    fn append_content(&mut self, line: &str, answer: Option<String>) {
        let Some(question) = self.state.current.as_mut() else {
            // 共用题干的正文在第一道小题之前
            if let Some(group) = self.state.group.as_mut() {
                if group.kind == GroupKind::SharedStem {
                    append_line(&mut group.stem_text, line);
                }
            }
            return;
        };

        if let Some(answer) = answer.filter(|a| !a.is_empty()) {
            question.answer = answer;
        }

        if !question.analysis.is_empty() {
            append_line(&mut question.analysis, line);
        } else if let Some(last) = question.options.last_mut() {
            last.text.push(' ');
            last.text.push_str(line);
        } else if !OPTION_START.is_match(line) {
            append_line(&mut question.title, line);
        }
    }
}

fn append_line(buf: &mut String, line: &str) {
    if !buf.is_empty() {
        buf.push('\n');
    }
    buf.push_str(line);
}
