//! Sorted set of currently tracked words

use std::cmp::Ordering;
use std::fmt;

use super::error::TrackingError;
use super::ordering::{ReadingOrder, WordComparator};
use super::word::{TrackedWord, WordId};

/// Currently tracked words, kept sorted by a pluggable comparator
///
/// At most one entry exists per [`WordId`]. Lookups are linear scans; the
/// host rarely tracks more than a few dozen words at once.
pub struct WordStore {
    words: Vec<TrackedWord>,
    comparator: Box<dyn WordComparator>,
}

impl WordStore {
    /// Create an empty store using [`ReadingOrder`]
    pub fn new() -> Self {
        Self::with_comparator(ReadingOrder::default())
    }

    /// Create an empty store using the given ordering strategy
    pub fn with_comparator(comparator: impl WordComparator + 'static) -> Self {
        Self {
            words: Vec::new(),
            comparator: Box::new(comparator),
        }
    }

    /// Insert a newly detected word at its sorted position
    ///
    /// The word goes in front of the first entry that does not compare less
    /// than it. Returns the index it was inserted at.
    pub fn insert(&mut self, word: TrackedWord) -> Result<usize, TrackingError> {
        if self.contains(word.id()) {
            return Err(TrackingError::DuplicateWord { id: word.id() });
        }

        let index = self
            .words
            .iter()
            .position(|existing| self.comparator.compare(existing, &word) != Ordering::Less)
            .unwrap_or(self.words.len());
        self.words.insert(index, word);
        Ok(index)
    }

    /// Remove the word with the given identity
    pub fn remove(&mut self, id: WordId) -> Result<TrackedWord, TrackingError> {
        let index = self
            .index_of(id)
            .ok_or(TrackingError::UnknownWord { id })?;
        Ok(self.words.remove(index))
    }

    /// Whether a word with this identity is tracked
    pub fn contains(&self, id: WordId) -> bool {
        self.index_of(id).is_some()
    }

    /// Get a tracked word by identity
    pub fn get(&self, id: WordId) -> Option<&TrackedWord> {
        self.words.iter().find(|w| w.id() == id)
    }

    /// Number of tracked words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no word is tracked
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Tracked words in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &TrackedWord> {
        self.words.iter()
    }

    /// Tracked words in sorted order, as a slice
    pub fn as_slice(&self) -> &[TrackedWord] {
        &self.words
    }

    /// Drop every tracked word
    pub fn clear(&mut self) {
        self.words.clear();
    }

    fn index_of(&self, id: WordId) -> Option<usize> {
        self.words.iter().position(|w| w.id() == id)
    }
}

impl Default for WordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordStore")
            .field("words", &self.words)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Quat, Vec2, Vec3};
    use crate::tracking::word::{Word, WordPose};

    fn word(id: u64, text: &str, x: f32, y: f32) -> TrackedWord {
        TrackedWord::new(
            Word::new(WordId(id), text, Vec2::new(1.0, 0.3)),
            WordPose::new(Vec3::new(x, y, 0.0), Quat::identity()),
        )
    }

    fn ids(store: &WordStore) -> Vec<u64> {
        store.iter().map(|w| w.id().0).collect()
    }

    #[test]
    fn test_insert_keeps_sorted_order() {
        let mut store = WordStore::with_comparator(ReadingOrder::new(0.1));
        store.insert(word(1, "world", 5.0, 0.0)).unwrap();
        store.insert(word(2, "hello", 1.0, 0.0)).unwrap();
        store.insert(word(3, "again", 0.0, 2.0)).unwrap();
        assert_eq!(ids(&store), vec![2, 1, 3]);
    }

    #[test]
    fn test_insert_returns_position() {
        let mut store = WordStore::new();
        assert_eq!(store.insert(word(1, "b", 2.0, 0.0)), Ok(0));
        assert_eq!(store.insert(word(2, "a", 1.0, 0.0)), Ok(0));
        assert_eq!(store.insert(word(3, "c", 3.0, 0.0)), Ok(2));
    }

    #[test]
    fn test_duplicate_insert_is_rejected() {
        let mut store = WordStore::new();
        store.insert(word(7, "cat", 0.0, 0.0)).unwrap();
        let result = store.insert(word(7, "dog", 9.0, 9.0));
        assert_eq!(result, Err(TrackingError::DuplicateWord { id: WordId(7) }));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(WordId(7)).unwrap().word.string_value, "cat");
    }

    #[test]
    fn test_remove_missing_leaves_store_unchanged() {
        let mut store = WordStore::new();
        store.insert(word(1, "a", 0.0, 0.0)).unwrap();
        let result = store.remove(WordId(99));
        assert_eq!(result, Err(TrackingError::UnknownWord { id: WordId(99) }));
        assert_eq!(ids(&store), vec![1]);
    }

    #[test]
    fn test_remove_returns_entry() {
        let mut store = WordStore::new();
        store.insert(word(1, "a", 0.0, 0.0)).unwrap();
        store.insert(word(2, "b", 1.0, 0.0)).unwrap();
        let removed = store.remove(WordId(1)).unwrap();
        assert_eq!(removed.word.string_value, "a");
        assert!(!store.contains(WordId(1)));
        assert!(store.contains(WordId(2)));
    }

    #[test]
    fn test_ties_go_before_equal_entries() {
        let mut store = WordStore::with_comparator(|_: &TrackedWord, _: &TrackedWord| {
            Ordering::Equal
        });
        store.insert(word(1, "a", 0.0, 0.0)).unwrap();
        store.insert(word(2, "b", 0.0, 0.0)).unwrap();
        store.insert(word(3, "c", 0.0, 0.0)).unwrap();
        assert_eq!(ids(&store), vec![3, 2, 1]);
    }

    #[test]
    fn test_contains_tracks_net_effect_in_any_interleaving() {
        let mut store = WordStore::new();
        let ops: [(bool, u64); 10] = [
            (true, 4),
            (true, 1),
            (false, 4),
            (true, 9),
            (true, 2),
            (false, 1),
            (true, 4),
            (false, 9),
            (true, 6),
            (false, 2),
        ];
        let mut expected = std::collections::BTreeSet::new();
        for (i, (is_insert, id)) in ops.iter().enumerate() {
            if *is_insert {
                store.insert(word(*id, "w", i as f32, 0.0)).unwrap();
                expected.insert(*id);
            } else {
                store.remove(WordId(*id)).unwrap();
                expected.remove(id);
            }
        }
        for id in 0..10 {
            assert_eq!(store.contains(WordId(id)), expected.contains(&id), "id {id}");
        }
        assert_eq!(store.len(), expected.len());
    }

    #[test]
    fn test_order_consistent_with_comparator_after_removals() {
        let order = ReadingOrder::new(0.0);
        let mut store = WordStore::with_comparator(order);
        for (id, x) in [(1, 3.0), (2, 1.0), (3, 4.0), (4, 1.5), (5, 9.0), (6, 2.6)] {
            store.insert(word(id, "w", x, 0.0)).unwrap();
        }
        store.remove(WordId(3)).unwrap();
        store.remove(WordId(2)).unwrap();
        let words = store.as_slice();
        for pair in words.windows(2) {
            assert_ne!(order.compare(&pair[0], &pair[1]), Ordering::Greater);
        }
        assert_eq!(ids(&store), vec![4, 6, 1, 5]);
    }
}
