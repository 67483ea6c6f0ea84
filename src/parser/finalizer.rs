//! 题目定稿
//!
//! 一道题结束时依次执行：简答题拆分 → 共用题组 → 题型修正 → 生成 ID

use tracing::debug;

use crate::models::{Question, QuestionOption, QuestionType};
use crate::parser::hash_id;
use crate::parser::patterns::{
    contains_any, SHORT_ANSWER_MARKERS, SHORT_ANSWER_MIN_TAIL, SHORT_ANSWER_SPLIT, STEM_PREFIX,
};
use crate::parser::state::{GroupContext, GroupKind};

/// 定稿一道题
pub fn finalize(question: &mut Question, group: Option<&GroupContext>) {
    split_short_answer(question);

    if let Some(group) = group.filter(|g| g.covers(question.seq)) {
        apply_group(question, group);
    }

    normalize_type(question);

    question.id = hash_id::question_id(&question.content_for_id());
}

/// 没有选项、题干形如 `问句？ 答案文字` 时，把答案文字移到解析
fn split_short_answer(question: &mut Question) {
    if !question.options.is_empty() {
        return;
    }
    let Some(caps) = SHORT_ANSWER_SPLIT.captures(&question.title) else {
        return;
    };
    let lead = caps[1].to_string();
    let tail = caps[2].to_string();

    if !contains_any(&tail, SHORT_ANSWER_MARKERS) && tail.chars().count() <= SHORT_ANSWER_MIN_TAIL {
        return;
    }

    question.title = lead;
    question.analysis = if question.analysis.is_empty() {
        tail
    } else {
        format!("{}\n{}", tail, question.analysis)
    };
    question.kind = QuestionType::Mix;
}

fn apply_group(question: &mut Question, group: &GroupContext) {
    match group.kind {
        GroupKind::SharedOptions => {
            if !question.options.is_empty() || group.options.is_empty() {
                return;
            }
            question.options = group.options.clone();
            question.group_id = Some(hash_id::group_id(&options_key(&group.options)));
            debug!("题 {:?} 使用共用备选答案", question.seq);
        }
        GroupKind::SharedStem => {
            if group.stem_text.is_empty() {
                return;
            }
            question.title = format!("{} {}\n\n{}", STEM_PREFIX, group.stem_text, question.title);
            debug!("题 {:?} 使用共用题干", question.seq);
        }
    }
}

/// 共用选项组的哈希内容：每个选项一行 `标号.文本`
fn options_key(options: &[QuestionOption]) -> String {
    options
        .iter()
        .map(|o| format!("{}.{}", o.label, o.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 有选项的是单选/多选；没有选项的不可能是单选/多选
fn normalize_type(question: &mut Question) {
    if !question.options.is_empty() {
        question.kind = if question.answer.chars().count() > 1 {
            QuestionType::Multi
        } else {
            QuestionType::Single
        };
    } else if question.kind.is_objective() {
        question.kind = QuestionType::Mix;
    }
}
