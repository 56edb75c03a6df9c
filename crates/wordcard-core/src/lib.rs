pub mod candidates;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod language;
pub mod persistence;
pub mod resolver;
pub mod session;
pub mod speech;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use wordcard_types::WordRecord;
