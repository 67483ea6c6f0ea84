pub mod toml_loader;

pub use toml_loader::load_book_manifest;
