//! Entities - static definitions referenced by the sheets

mod character_class;
mod skill;

pub use character_class::{CharacterClass, ClassRequirement};
pub use skill::Skill;
