//! AttributeSheet aggregate - the six attribute scores and their point budget
//!
//! # Invariants
//!
//! Enforced by [`AttributeSheet::adjust`], the only mutation path:
//! - every score stays within `[0, 20]`
//! - the sum of all six scores stays at or below [`ATTRIBUTE_MAX_POINT`]
//!
//! Sheets restored from a snapshot are taken as-is and may violate both.

use crate::rules::{modifier, MAX_SCORE, MIN_SCORE};
use crate::value_objects::{Attribute, Delta};

/// Maximum sum of all six attribute scores.
pub const ATTRIBUTE_MAX_POINT: i32 = 70;

/// Score every attribute starts at.
pub const DEFAULT_ATTRIBUTE_SCORE: i32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSheet {
    scores: [i32; Attribute::COUNT],
}

impl Default for AttributeSheet {
    fn default() -> Self {
        Self {
            scores: [DEFAULT_ATTRIBUTE_SCORE; Attribute::COUNT],
        }
    }
}

impl AttributeSheet {
    /// Create a sheet with every attribute at the default score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sheet from explicit scores in [`Attribute::ALL`] order.
    ///
    /// No validation is applied.
    pub fn from_scores(scores: [i32; Attribute::COUNT]) -> Self {
        Self { scores }
    }

    pub fn score(&self, attribute: Attribute) -> i32 {
        self.scores[attribute.index()]
    }

    pub fn modifier(&self, attribute: Attribute) -> i32 {
        modifier(self.score(attribute))
    }

    /// Sum of all six scores. Widened so restored sheets with extreme scores
    /// cannot overflow.
    pub fn total(&self) -> i64 {
        self.scores.iter().map(|&score| i64::from(score)).sum()
    }

    /// Points left before the sheet reaches [`ATTRIBUTE_MAX_POINT`].
    pub fn remaining_points(&self) -> i64 {
        (i64::from(ATTRIBUTE_MAX_POINT) - self.total()).max(0)
    }

    /// (attribute, score) pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::ALL
            .into_iter()
            .map(|attribute| (attribute, self.score(attribute)))
    }

    /// Move one attribute by one point.
    ///
    /// Returns `false` and leaves the sheet untouched when the new score would leave
    /// `[0, 20]` or the new total would exceed [`ATTRIBUTE_MAX_POINT`].
    pub fn adjust(&mut self, attribute: Attribute, delta: Delta) -> bool {
        let Some(value) = delta.apply(self.score(attribute)) else {
            return false;
        };
        if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
            return false;
        }

        let total = self.total() - i64::from(self.score(attribute)) + i64::from(value);
        if total > i64::from(ATTRIBUTE_MAX_POINT) {
            return false;
        }

        self.scores[attribute.index()] = value;
        tracing::debug!(attribute = %attribute, score = value, total, "Attribute adjusted");
        true
    }

    /// Overwrite one score without validation. Used when restoring snapshots.
    pub(crate) fn set_unchecked(&mut self, attribute: Attribute, score: i32) {
        self.scores[attribute.index()] = score;
    }
}
