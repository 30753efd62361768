//! Attribute modifier and the skill budget derived from it.

/// Lowest score the modifier table covers.
pub const MIN_SCORE: i32 = 0;

/// Highest score the modifier table covers.
pub const MAX_SCORE: i32 = 20;

/// Skill points available to an attribute at modifier 0.
pub const BASE_SKILL_POINTS: i32 = 10;

/// Extra skill points per point of modifier.
pub const SKILL_POINTS_PER_MODIFIER: i32 = 4;

/// Modifier for an attribute score: `floor((score - 10) / 2)`.
///
/// Scores outside `[0, 20]` are clamped first, so the result is always in `[-5, 5]`.
///
/// - 0-1 → -5
/// - 10-11 → +0
/// - 18-19 → +4
/// - 20 and above → +5
pub fn modifier(score: i32) -> i32 {
    (score.clamp(MIN_SCORE, MAX_SCORE) - 10).div_euclid(2)
}

/// Skill points that may be spread across the skills an attribute governs.
pub fn skill_budget(score: i32) -> i32 {
    BASE_SKILL_POINTS + SKILL_POINTS_PER_MODIFIER * modifier(score)
}
