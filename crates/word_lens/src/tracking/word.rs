//! Words reported by the host tracker

use std::fmt;

use crate::foundation::math::{Quat, Transform, Vec2, Vec3};

/// Host-assigned identity of one tracked text instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(pub u64);

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A word as recognized by the host
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    /// Stable identity for as long as the host tracks the word
    pub id: WordId,

    /// Recognized text
    pub string_value: String,

    /// Physical size of the word on the target plane (width, height)
    pub size: Vec2,
}

impl Word {
    /// Create a word
    pub fn new(id: WordId, string_value: impl Into<String>, size: Vec2) -> Self {
        Self {
            id,
            string_value: string_value.into(),
            size,
        }
    }
}

/// Pose of a tracked word in camera space
#[derive(Debug, Clone, PartialEq)]
pub struct WordPose {
    /// Center of the word
    pub position: Vec3,

    /// Orientation of the word plane
    pub orientation: Quat,
}

impl Default for WordPose {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            orientation: Quat::identity(),
        }
    }
}

impl WordPose {
    /// Create a pose
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }
}

/// A word together with the pose it was detected at
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedWord {
    /// The host word
    pub word: Word,

    /// Pose at detection time
    pub pose: WordPose,
}

impl TrackedWord {
    /// Create a tracked word
    pub fn new(word: Word, pose: WordPose) -> Self {
        Self { word, pose }
    }

    /// Identity of the underlying word
    pub fn id(&self) -> WordId {
        self.word.id
    }

    /// Transform mapping the unit quad in the x/z plane onto the word
    pub fn quad_transform(&self) -> Transform {
        Transform::from_trs(
            self.pose.position,
            self.pose.orientation,
            Vec3::new(self.word.size.x, 1.0, self.word.size.y),
        )
    }
}
