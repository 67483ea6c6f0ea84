//! 行分类规则
//!
//! 每一行按固定优先级依次尝试规则，第一个命中的规则决定行的类别

use std::sync::LazyLock;

use regex::Regex;

use crate::models::QuestionOption;
use crate::parser::state::GroupKind;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("无效的正则表达式 {}: {}", pattern, e))
}

/// `# 标题`
pub static HEADER: LazyLock<Regex> = LazyLock::new(|| compile(r"^#\s+(.*)"));

/// `12. 题干` / `12．题干`
pub static QUESTION_START: LazyLock<Regex> = LazyLock::new(|| compile(r"^(\d+)[.．]\s*(.*)"));

/// `5~6题共用备选答案` / `30～31题共用题干：……` / `$50\sim 54$题……`
pub static GROUP_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^\s*\$?(\d+)\s*(?:[~～-]|\\sim)\s*\$?(\d+)\s*.*(?:题)?(?:共用)?(备选答案|题干).*")
});

/// 单独成行的答案：`答案：A` / `参考答案：A, B` / `您的答案：B 正确答案是：A`
pub static FULL_ANSWER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)^\s*(?:您的答案.*)?(?:正确)?(?:参考)?答案(?:是)?[:：]\s*([A-Z, ]+)")
});

/// 选项行尾部的答案
pub static ANSWER_TAIL: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\s*(?:您的答案.*)?(?:正确)?答案(?:是)?[:：]\s*([A-Z]+)")
});

/// 选项标记 `A.` `B:` `C、`
pub static OPTION_MARKER: LazyLock<Regex> = LazyLock::new(|| compile(r"[A-G][:.、]"));

/// 以选项标记开头的行
pub static OPTION_START: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-G][:.]"));

/// `解析：……`
pub static ANALYSIS: LazyLock<Regex> = LazyLock::new(|| compile(r"^\s*解析[:：]\s*(.*)"));

/// 答案区条目 `1. C` / `2.AB`，一行可有多条
pub static ANSWER_KEY_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(\d+)[.．]\s*([A-Za-z]+)"));

/// `第三章` / `第12章`
pub static NUMBERED_CHAPTER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^第[一二三四五六七八九十0-9]+章"));

/// 目录、编者信息、小节编号等不构成章节的标题
pub static BOILERPLATE_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(目录|儿科学|学习指导|第.版|副?主编|编者|学术秘书|[一二三四五六七八九十]+、|【|（)")
});

/// `一、` `二、` 小节编号
pub static NUMERAL_SECTION: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[一二三四五六七八九十]+、"));

/// 简答题拆分：`问句。 答案文字`
///
/// 答案文字中必须含有汉字，纯英文的尾部不拆分
pub static SHORT_ANSWER_SPLIT: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(.*?[。？！?!])\s+(.*[\x{4e00}-\x{9fa5}].*)$")
});

/// 题干开头的数字
pub static LEADING_DIGITS: LazyLock<Regex> = LazyLock::new(|| compile(r"^(\d+)"));

// ========== 关键词 ==========

pub const TERM_KEYWORD: &str = "名词解释";
pub const CASE_KEYWORDS: &[&str] = &["病例分析", "问答题"];
pub const REQUIREMENTS_KEYWORD: &str = "教学要求";
pub const ANSWER_KEY_KEYWORD: &str = "参考答案";
pub const TERM_ANSWER: &str = "见解析";
pub const STEM_PREFIX: &str = "(题干)";

pub const TERM_EXIT_KEYWORDS: &[&str] = &["简答题", "病例分析", "问答题", "选择题", "复习题"];
pub const CASE_EXIT_KEYWORDS: &[&str] = &["选择题", "复习题"];
pub const REQUIREMENTS_EXIT_KEYWORDS: &[&str] = &["复习题", "选择题", "简答题"];
pub const REQUIREMENTS_INNER_MARKERS: &[&str] = &["教学要求", "【", "（"];

/// 简答题拆分：尾部文字包含这些标记时拆分
pub const SHORT_ANSWER_MARKERS: &[&str] = &["意识：", "分）", "分)"];
/// 简答题拆分：尾部文字超过该长度（字符数）时拆分
pub const SHORT_ANSWER_MIN_TAIL: usize = 10;

const OPTION_STOP_MARKERS: &[&str] = &["您的答案", "正确答案"];

pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// 取 `# 标题` 中的标题
pub fn header_title(line: &str) -> Option<&str> {
    HEADER
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

pub fn is_header(line: &str) -> bool {
    HEADER.is_match(line)
}

pub fn is_numbered_chapter(title: &str) -> bool {
    NUMBERED_CHAPTER.is_match(title)
}

pub fn is_boilerplate_title(title: &str) -> bool {
    BOILERPLATE_TITLE.is_match(title)
}

/// `【A1型题】` 或 `一、选择题` 这类标题会结束共用题组
pub fn resets_group(title: &str) -> bool {
    title.starts_with('【') || NUMERAL_SECTION.is_match(title)
}

/// 规范化答案：去掉空格和逗号，统一大写
pub fn normalize_answer(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && *c != '，')
        .flat_map(char::to_uppercase)
        .collect()
}

/// 题干开头的数字
pub fn leading_number(text: &str) -> Option<u32> {
    LEADING_DIGITS
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

/// 前 `n` 个字符内是否出现 `needle`
pub fn contains_within(text: &str, needle: &str, n: usize) -> bool {
    let head: String = text.chars().take(n).collect();
    head.contains(needle)
}

/// 提取行尾答案，返回（答案, 尾部起始位置）
pub fn answer_tail(line: &str) -> Option<(String, usize)> {
    if line.starts_with('答') || line.starts_with("解析") {
        return None;
    }
    let caps = ANSWER_TAIL.captures(line)?;
    let whole = caps.get(0)?;
    Some((normalize_answer(&caps[1]), whole.start()))
}

/// 提取一行中的全部选项
///
/// 每个选项的文本延伸到下一个选项标记，或 `您的答案` / `正确答案`，或行尾
pub fn extract_inline_options(content: &str) -> Vec<QuestionOption> {
    let markers: Vec<_> = OPTION_MARKER.find_iter(content).collect();
    let mut options = Vec::with_capacity(markers.len());

    for (i, marker) in markers.iter().enumerate() {
        let mut end = markers.get(i + 1).map_or(content.len(), |next| next.start());
        let body = &content[marker.end()..end];
        if let Some(stop) = OPTION_STOP_MARKERS.iter().filter_map(|m| body.find(m)).min() {
            end = marker.end() + stop;
        }

        let label = &content[marker.start()..marker.start() + 1];
        options.push(QuestionOption::new(label, content[marker.end()..end].trim()));
    }

    options
}

// ========== 行分类 ==========

/// 共用题组标题
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupHeader {
    pub start: u32,
    pub end: u32,
    pub kind: GroupKind,
    pub stem_text: String,
}

/// 普通模式下一行的类别
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// 共用题组标题
    GroupHeader(GroupHeader),
    /// `# 标题`
    Header(&'a str),
    /// 新题目
    QuestionStart { seq: Option<u32>, title: &'a str },
    /// 单独的答案行
    AnswerLine(String),
    /// 含选项的行，可能带行尾答案
    Options {
        options: Vec<QuestionOption>,
        answer: Option<String>,
    },
    /// `解析：……`
    Analysis(&'a str),
    /// 其他内容，可能带行尾答案
    Content { answer: Option<String> },
}

type Rule = fn(&str) -> Option<LineKind<'_>>;

/// 按优先级排列的分类规则
const RULES: &[Rule] = &[
    classify_group_header,
    classify_header,
    classify_question_start,
    classify_answer_line,
    classify_options,
    classify_analysis,
];

/// 对一行（已去掉首尾空白）分类
pub fn classify(line: &str) -> LineKind<'_> {
    RULES
        .iter()
        .find_map(|rule| rule(line))
        .unwrap_or_else(|| LineKind::Content {
            answer: answer_tail(line).map(|(answer, _)| answer),
        })
}

fn classify_group_header(line: &str) -> Option<LineKind<'_>> {
    let caps = GROUP_HEADER.captures(line)?;
    let start = caps[1].parse().ok()?;
    let end = caps[2].parse().ok()?;
    let kind = if caps[3].contains("备选答案") {
        GroupKind::SharedOptions
    } else {
        GroupKind::SharedStem
    };
    let stem_text = line
        .rsplit_once('：')
        .map(|(_, tail)| tail.trim().to_string())
        .unwrap_or_default();

    Some(LineKind::GroupHeader(GroupHeader {
        start,
        end,
        kind,
        stem_text,
    }))
}

fn classify_header(line: &str) -> Option<LineKind<'_>> {
    header_title(line).map(LineKind::Header)
}

fn classify_question_start(line: &str) -> Option<LineKind<'_>> {
    let caps = QUESTION_START.captures(line)?;
    let title = caps.get(2).map_or("", |m| m.as_str().trim());
    Some(LineKind::QuestionStart {
        seq: caps[1].parse().ok(),
        title,
    })
}

fn classify_answer_line(line: &str) -> Option<LineKind<'_>> {
    let caps = FULL_ANSWER_LINE.captures(line)?;
    Some(LineKind::AnswerLine(normalize_answer(&caps[1])))
}

fn classify_options(line: &str) -> Option<LineKind<'_>> {
    let (answer, content) = match answer_tail(line) {
        Some((answer, start)) => (Some(answer), &line[..start]),
        None => (None, line),
    };
    let options = extract_inline_options(content);
    if options.is_empty() {
        return None;
    }
    Some(LineKind::Options { options, answer })
}

fn classify_analysis(line: &str) -> Option<LineKind<'_>> {
    let caps = ANALYSIS.captures(line)?;
    Some(LineKind::Analysis(caps.get(1).map_or("", |m| m.as_str())))
}
