pub mod document_reader;
pub mod output_writer;

pub use document_reader::DocumentReader;
pub use output_writer::OutputWriter;
