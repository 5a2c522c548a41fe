pub mod types;

pub use types::{AppEvent, TextSource};
