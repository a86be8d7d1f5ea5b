//! Word list layout
//!
//! - `word_list`: uniform scale and first line placement for the list
//! - `wrap`: greedy wrapping of the translated text to a column width

pub mod word_list;
pub mod wrap;

pub use word_list::{WordListLayout, WordListPlacement};
pub use wrap::GreedyLineWrapper;
