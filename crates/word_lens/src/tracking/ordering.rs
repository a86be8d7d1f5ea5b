//! Ordering strategies for the tracked word list

use std::cmp::Ordering;

use super::word::TrackedWord;

/// Total order used to keep the word list sorted
///
/// Implemented for any `Fn(&TrackedWord, &TrackedWord) -> Ordering`, so a
/// closure can be passed where a strategy is expected.
pub trait WordComparator {
    /// Compare two tracked words
    fn compare(&self, a: &TrackedWord, b: &TrackedWord) -> Ordering;
}

impl<F> WordComparator for F
where
    F: Fn(&TrackedWord, &TrackedWord) -> Ordering,
{
    fn compare(&self, a: &TrackedWord, b: &TrackedWord) -> Ordering {
        self(a, b)
    }
}

/// Approximate reading order
///
/// Words whose vertical positions differ by at most `row_tolerance` are on
/// the same row and ordered left to right; rows are ordered top to bottom.
/// Uses the y-down screen convention: smaller `y` is higher up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingOrder {
    /// Maximum vertical distance between words on the same row
    pub row_tolerance: f32,
}

impl ReadingOrder {
    /// Create a reading order with the given row tolerance
    pub const fn new(row_tolerance: f32) -> Self {
        Self { row_tolerance }
    }
}

impl Default for ReadingOrder {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl WordComparator for ReadingOrder {
    fn compare(&self, a: &TrackedWord, b: &TrackedWord) -> Ordering {
        let (pa, pb) = (&a.pose.position, &b.pose.position);
        if (pa.y - pb.y).abs() > self.row_tolerance {
            pa.y.total_cmp(&pb.y)
        } else {
            pa.x.total_cmp(&pb.x)
        }
    }
}
