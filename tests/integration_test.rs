use qbank_builder::config::Config;
use qbank_builder::models::load_book_manifest;
use qbank_builder::services::DocumentReader;
use qbank_builder::{process_book, App, Book, BookSpec, QuestionType};
use std::fs;
use std::path::Path;

const Q1: &str = "\
# 第一章 绪论
1. 小儿生长发育最快的时期是
A.新生儿期 B.婴儿期 C.幼儿期 D.学龄前期
答案：B
解析：婴儿期是生长发育最快的时期
# 第三章 营养
# 二、复习题
1. 维生素D缺乏性佝偻病最主要的病因是
A.日光照射不足 B.摄入不足 C.生长过快 D.疾病影响
2. 属于佝偻病初期表现的有
A.多汗 B.枕秃 C.方颅 D.肋串珠
# 三、参考答案
1. A 2. AB
";

const Q2: &str = "\
# 名词解释
# 新生儿
自出生后脐带结扎起至生后28天
";

fn config_for(dir: &Path) -> Config {
    Config {
        input_dir: dir.display().to_string(),
        output_dir: dir.join("dist").display().to_string(),
        ..Config::default()
    }
}

#[tokio::test]
async fn test_missing_document_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Q1.md"), Q1).unwrap();

    let spec = BookSpec::new("q1", "儿科学（题库1）", &["Q1.md", "Q2.md"]);
    let reader = DocumentReader::new(dir.path());
    let outcome = process_book(&spec, &reader).await.unwrap();

    assert_eq!(outcome.skipped, vec![dir.path().join("Q2.md")]);
    assert_eq!(outcome.book.chapters.len(), 2);
    assert_eq!(outcome.book.question_count(), 3);
}

#[tokio::test]
async fn test_answer_key_reaches_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Q1.md"), Q1).unwrap();

    let spec = BookSpec::new("q1", "儿科学（题库1）", &["Q1.md"]);
    let outcome = process_book(&spec, &DocumentReader::new(dir.path()))
        .await
        .unwrap();

    let nutrition = &outcome.book.chapters[1];
    assert_eq!(nutrition.title, "第三章 营养");
    assert_eq!(nutrition.questions[0].answer, "A");
    assert_eq!(nutrition.questions[0].kind, QuestionType::Single);
    assert_eq!(nutrition.questions[1].answer, "AB");
    assert_eq!(nutrition.questions[1].kind, QuestionType::Multi);
}

#[tokio::test]
async fn test_full_run_writes_outputs() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Q1.md"), Q1).unwrap();
    fs::write(dir.path().join("Q2.md"), Q2).unwrap();

    let books = vec![
        BookSpec::new("q1", "儿科学（题库1）", &["Q1.md"]),
        BookSpec::new("q2", "儿科学习题集（题库2）", &["Q2.md", "Q3.md"]),
    ];
    let summary = App::with_books(config_for(dir.path()), books)
        .run()
        .await
        .unwrap();

    assert_eq!(summary.books.len(), 2);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.output_path, dir.path().join("dist").join("books.json"));

    let json = fs::read_to_string(&summary.output_path).unwrap();
    let written: Vec<Book> = serde_json::from_str(&json).unwrap();
    assert_eq!(written, summary.books);
    assert_eq!(written[1].id, "q2");
    assert_eq!(written[1].chapters[0].questions[0].title, "新生儿");
    assert_eq!(written[1].chapters[0].questions[0].kind, QuestionType::Essay);

    let headers = fs::read_to_string(dir.path().join("dist").join("_headers")).unwrap();
    assert!(headers.contains("Cache-Control: no-cache"));
}

#[tokio::test]
async fn test_initialize_with_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("books.toml");
    fs::write(
        &manifest,
        r#"
[[books]]
id = "q2"
title = "儿科学习题集（题库2）"
files = ["Q2.md"]
"#,
    )
    .unwrap();
    fs::write(dir.path().join("Q2.md"), Q2).unwrap();

    let specs = load_book_manifest(&manifest).await.unwrap();
    assert_eq!(specs.len(), 1);

    let config = Config {
        manifest_file: Some(manifest.display().to_string()),
        ..config_for(dir.path())
    };
    let summary = App::initialize(config).await.unwrap().run().await.unwrap();
    assert_eq!(summary.books.len(), 1);
    assert_eq!(summary.books[0].title, "儿科学习题集（题库2）");
    assert!(summary.skipped.is_empty());
}
