//! Charsheet Domain - character build rules.
//!
//! Attribute scores, modifiers, skill point budgets and class eligibility for a
//! single character sheet. Everything here is pure: no I/O, no global state.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod rules;
pub mod snapshot;
pub mod value_objects;

pub use aggregates::{
    AttributeSheet, CharacterBuild, SkillSheet, ATTRIBUTE_MAX_POINT, DEFAULT_ATTRIBUTE_SCORE,
};
pub use entities::{CharacterClass, ClassRequirement, Skill};
pub use error::DomainError;
pub use rules::{
    eligible_classes, is_eligible, is_eligible_by_name, modifier, skill_budget, UnmetRequirement,
};
pub use snapshot::CharacterSnapshot;
pub use value_objects::{Attribute, Delta};
