//! Toy word-by-word translation
//!
//! Maps each recognized English word onto a Spanish substitute from a
//! fixed table. Words missing from the table get a deterministic
//! pseudo-translation instead.

pub mod dictionary;
pub mod table;

pub use table::TranslationTable;
