//! Character classes and their minimum attribute requirements.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::Attribute;

/// A character archetype gated by minimum attribute scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Barbarian,
    Fighter,
    Wizard,
    Bard,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [Self::Barbarian, Self::Fighter, Self::Wizard, Self::Bard];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Barbarian => "Barbarian",
            Self::Fighter => "Fighter",
            Self::Wizard => "Wizard",
            Self::Bard => "Bard",
        }
    }

    /// Minimum scores a sheet must meet to take this class.
    pub fn requirements(&self) -> ClassRequirement {
        match self {
            Self::Barbarian => ClassRequirement::new([14, 9, 9, 9, 9, 9]),
            Self::Fighter => ClassRequirement::new([13, 9, 13, 9, 9, 9]),
            Self::Wizard => ClassRequirement::new([9, 9, 9, 14, 9, 9]),
            Self::Bard => ClassRequirement::new([9, 9, 9, 9, 9, 14]),
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for CharacterClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|class| class.display_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::not_found("Class", wanted))
    }
}

/// Minimum score per attribute, in [`Attribute::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassRequirement {
    minimums: [i32; Attribute::COUNT],
}

impl ClassRequirement {
    pub const fn new(minimums: [i32; Attribute::COUNT]) -> Self {
        Self { minimums }
    }

    pub fn minimum(&self, attribute: Attribute) -> i32 {
        self.minimums[attribute.index()]
    }

    /// (attribute, minimum) pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::ALL
            .into_iter()
            .map(|attribute| (attribute, self.minimum(attribute)))
    }
}
