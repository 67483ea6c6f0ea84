pub mod loaders;
pub mod question;

pub use loaders::load_book_manifest;
pub use question::{Book, BookManifest, BookSpec, Chapter, Question, QuestionOption, QuestionType};
