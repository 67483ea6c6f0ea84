//! 参考答案区
//!
//! 形如 `1. C 2. AB 3. D` 的答案行按题号回填到当前章节已定稿的题目

use tracing::debug;

use crate::models::{Chapter, QuestionType};
use crate::parser::patterns::{normalize_answer, ANSWER_KEY_ENTRY};

/// 解析一行答案并回填，返回成功回填的数量
///
/// 按题号线性查找，章节内题号重复时取第一道
pub fn reconcile_line(chapter: &mut Chapter, line: &str) -> usize {
    let mut filled = 0;

    for caps in ANSWER_KEY_ENTRY.captures_iter(line) {
        let Ok(seq) = caps[1].parse::<u32>() else {
            continue;
        };
        let answer = normalize_answer(&caps[2]);

        let Some(question) = chapter.questions.iter_mut().find(|q| q.seq == Some(seq)) else {
            debug!("答案区: 第 {} 题未找到对应题目", seq);
            continue;
        };

        question.kind = if answer.chars().count() > 1 {
            QuestionType::Multi
        } else if !question.options.is_empty() {
            QuestionType::Single
        } else {
            question.kind
        };
        question.answer = answer;
        filled += 1;
    }

    filled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Question, QuestionOption};

    fn chapter_with(seqs: &[u32]) -> Chapter {
        let mut chapter = Chapter::new("第一章 绪论");
        for &seq in seqs {
            let mut q = Question::new(Some(seq), format!("第{}题", seq), QuestionType::Single);
            q.options = vec![
                QuestionOption::new("A", "甲"),
                QuestionOption::new("B", "乙"),
                QuestionOption::new("C", "丙"),
                QuestionOption::new("D", "丁"),
            ];
            chapter.questions.push(q);
        }
        chapter
    }

    #[test]
    fn test_backfill_multiple_entries_per_line() {
        let mut chapter = chapter_with(&[1, 2, 3]);
        assert_eq!(reconcile_line(&mut chapter, "1. C 2. AB 3. D"), 3);

        let q = &chapter.questions;
        assert_eq!((q[0].answer.as_str(), q[0].kind), ("C", QuestionType::Single));
        assert_eq!((q[1].answer.as_str(), q[1].kind), ("AB", QuestionType::Multi));
        assert_eq!((q[2].answer.as_str(), q[2].kind), ("D", QuestionType::Single));
    }

    #[test]
    fn test_unknown_sequence_is_ignored() {
        let mut chapter = chapter_with(&[1]);
        assert_eq!(reconcile_line(&mut chapter, "1．b 9.A"), 1);
        assert_eq!(chapter.questions[0].answer, "B");
    }

    #[test]
    fn test_question_without_sequence_never_matches() {
        let mut chapter = Chapter::new("名词解释");
        chapter
            .questions
            .push(Question::new(None, "生理性黄疸", QuestionType::Essay));
        assert_eq!(reconcile_line(&mut chapter, "1.A"), 0);
        assert_eq!(chapter.questions[0].answer, "");
    }
}
