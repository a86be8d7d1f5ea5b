//! Live word tracking
//!
//! Applies the host's "word detected" and "word lost" notifications to a
//! sorted set of tracked words.

pub mod word;
pub mod ordering;
pub mod store;
pub mod error;

pub use word::{TrackedWord, Word, WordId, WordPose};
pub use ordering::{ReadingOrder, WordComparator};
pub use store::WordStore;
pub use error::TrackingError;
