//! Aggregate roots - the mutable sheets and the build that owns them
//!
//! Each sheet guards its own invariants through a single `adjust` method. A rejected
//! adjustment returns `false` rather than an error; callers that care can check the
//! return value, everyone else can ignore it.

mod attribute_sheet;
mod character_build;
mod skill_sheet;

pub use attribute_sheet::{AttributeSheet, ATTRIBUTE_MAX_POINT, DEFAULT_ATTRIBUTE_SCORE};
pub use character_build::CharacterBuild;
pub use skill_sheet::SkillSheet;
