//! SkillSheet aggregate - points allocated per skill
//!
//! # Invariants
//!
//! Checked by [`SkillSheet::adjust`] against the current [`AttributeSheet`]:
//! - no skill goes below zero
//! - the points spent on skills governed by one attribute stay within
//!   `skill_budget(score)` of that attribute
//!
//! The budget is only checked when skill points change. Lowering an attribute later
//! leaves existing allocations in place, even if they now exceed the smaller budget.

use super::AttributeSheet;
use crate::entities::Skill;
use crate::rules::skill_budget;
use crate::value_objects::{Attribute, Delta};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSheet {
    points: [i32; Skill::COUNT],
}

impl SkillSheet {
    /// Create a sheet with no points in any skill.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sheet from explicit points in [`Skill::ALL`] order.
    ///
    /// No validation is applied.
    pub fn from_points(points: [i32; Skill::COUNT]) -> Self {
        Self { points }
    }

    pub fn points(&self, skill: Skill) -> i32 {
        self.points[skill.index()]
    }

    /// (skill, points) pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Skill, i32)> + '_ {
        Skill::ALL
            .into_iter()
            .map(|skill| (skill, self.points(skill)))
    }

    /// Points spent on the skills governed by `attribute`.
    pub fn allocated_for(&self, attribute: Attribute) -> i64 {
        Skill::governed_by(attribute)
            .map(|skill| i64::from(self.points(skill)))
            .sum()
    }

    /// Budget left for `attribute`. Negative when a lowered attribute left the
    /// group over budget.
    pub fn remaining_for(&self, attribute: Attribute, attributes: &AttributeSheet) -> i64 {
        i64::from(skill_budget(attributes.score(attribute))) - self.allocated_for(attribute)
    }

    /// Points plus the governing attribute's modifier, saturating at the `i32` range.
    pub fn total(&self, skill: Skill, attributes: &AttributeSheet) -> i32 {
        self.points(skill)
            .saturating_add(attributes.modifier(skill.attribute()))
    }

    /// Move one skill by one point.
    ///
    /// Returns `false` and leaves the sheet untouched when the skill would drop below
    /// zero or its attribute group would end up over budget.
    pub fn adjust(&mut self, skill: Skill, delta: Delta, attributes: &AttributeSheet) -> bool {
        let Some(value) = delta.apply(self.points(skill)) else {
            return false;
        };
        if value < 0 {
            return false;
        }

        let attribute = skill.attribute();
        let allocated =
            self.allocated_for(attribute) - i64::from(self.points(skill)) + i64::from(value);
        let budget = skill_budget(attributes.score(attribute));
        if allocated > i64::from(budget) {
            return false;
        }

        self.points[skill.index()] = value;
        tracing::debug!(
            skill = %skill,
            points = value,
            allocated,
            budget,
            "Skill adjusted"
        );
        true
    }

    /// Overwrite one skill without validation. Used when restoring snapshots.
    pub(crate) fn set_unchecked(&mut self, skill: Skill, points: i32) {
        self.points[skill.index()] = points;
    }
}
