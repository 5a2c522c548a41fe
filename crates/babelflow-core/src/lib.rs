pub mod language;
pub mod preprocess;

pub use language::Language;
