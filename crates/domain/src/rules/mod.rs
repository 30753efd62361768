//! Pure rule functions: modifiers, skill budgets and class eligibility.

mod eligibility;
mod modifier;

pub use eligibility::{
    eligible_classes, is_eligible, is_eligible_by_name, UnmetRequirement,
};
pub use modifier::{
    modifier, skill_budget, BASE_SKILL_POINTS, MAX_SCORE, MIN_SCORE, SKILL_POINTS_PER_MODIFIER,
};
