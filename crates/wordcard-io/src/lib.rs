pub mod document;
pub mod error;
pub mod glossary;
pub mod slot;
pub mod wordlist;

pub use document::Document;
pub use error::SourceError;
pub use glossary::load_glossary;
pub use slot::JsonFileStore;
pub use wordlist::{Chapter, WordList, WordRow};
