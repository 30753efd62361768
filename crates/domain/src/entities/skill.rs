//! Skill entity - the fixed skill list and the attribute that governs each skill
//!
//! Skills are static definitions. Points allocated to them live on a
//! [`SkillSheet`](crate::aggregates::SkillSheet).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::Attribute;

/// A skill that characters can put points into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Skill {
    Acrobatics,
    #[serde(rename = "Animal Handling")]
    AnimalHandling,
    Arcana,
    Athletics,
    Deception,
    History,
    Insight,
    Intimidation,
    Investigation,
    Medicine,
    Nature,
    Perception,
    Performance,
    Persuasion,
    Religion,
    #[serde(rename = "Sleight of Hand")]
    SleightOfHand,
    Stealth,
    Survival,
}

impl Skill {
    /// Number of skills on a sheet.
    pub const COUNT: usize = 18;

    /// All skills in sheet order.
    pub const ALL: [Skill; Self::COUNT] = [
        Self::Acrobatics,
        Self::AnimalHandling,
        Self::Arcana,
        Self::Athletics,
        Self::Deception,
        Self::History,
        Self::Insight,
        Self::Intimidation,
        Self::Investigation,
        Self::Medicine,
        Self::Nature,
        Self::Perception,
        Self::Performance,
        Self::Persuasion,
        Self::Religion,
        Self::SleightOfHand,
        Self::Stealth,
        Self::Survival,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Acrobatics => "Acrobatics",
            Self::AnimalHandling => "Animal Handling",
            Self::Arcana => "Arcana",
            Self::Athletics => "Athletics",
            Self::Deception => "Deception",
            Self::History => "History",
            Self::Insight => "Insight",
            Self::Intimidation => "Intimidation",
            Self::Investigation => "Investigation",
            Self::Medicine => "Medicine",
            Self::Nature => "Nature",
            Self::Perception => "Perception",
            Self::Performance => "Performance",
            Self::Persuasion => "Persuasion",
            Self::Religion => "Religion",
            Self::SleightOfHand => "Sleight of Hand",
            Self::Stealth => "Stealth",
            Self::Survival => "Survival",
        }
    }

    /// The attribute whose modifier sets this skill's point budget.
    pub fn attribute(&self) -> Attribute {
        match self {
            Self::Athletics => Attribute::Strength,
            Self::Acrobatics | Self::SleightOfHand | Self::Stealth => Attribute::Dexterity,
            Self::Arcana | Self::History | Self::Investigation | Self::Nature | Self::Religion => {
                Attribute::Intelligence
            }
            Self::AnimalHandling
            | Self::Insight
            | Self::Medicine
            | Self::Perception
            | Self::Survival => Attribute::Wisdom,
            Self::Deception | Self::Intimidation | Self::Performance | Self::Persuasion => {
                Attribute::Charisma
            }
        }
    }

    /// Skills governed by `attribute`, in sheet order.
    pub fn governed_by(attribute: Attribute) -> impl Iterator<Item = Skill> {
        Self::ALL
            .into_iter()
            .filter(move |skill| skill.attribute() == attribute)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Skill {
    type Err = DomainError;

    /// Matches display names case-insensitively, ignoring spaces
    /// ("sleight of hand", "SleightOfHand" and "animalhandling" all parse).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();

        Self::ALL
            .into_iter()
            .find(|skill| {
                skill
                    .display_name()
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .flat_map(char::to_lowercase)
                    .eq(wanted.chars())
            })
            .ok_or_else(|| DomainError::not_found("Skill", s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_attribute_but_constitution_governs_a_skill() {
        assert_eq!(Skill::governed_by(Attribute::Strength).count(), 1);
        assert_eq!(Skill::governed_by(Attribute::Dexterity).count(), 3);
        assert_eq!(Skill::governed_by(Attribute::Constitution).count(), 0);
        assert_eq!(Skill::governed_by(Attribute::Intelligence).count(), 5);
        assert_eq!(Skill::governed_by(Attribute::Wisdom).count(), 5);
        assert_eq!(Skill::governed_by(Attribute::Charisma).count(), 4);
    }

    #[test]
    fn index_matches_sheet_order() {
        for (i, skill) in Skill::ALL.iter().enumerate() {
            assert_eq!(skill.index(), i);
        }
    }

    #[test]
    fn parse_multi_word_names() {
        assert_eq!("Sleight of Hand".parse::<Skill>(), Ok(Skill::SleightOfHand));
        assert_eq!("animal handling".parse::<Skill>(), Ok(Skill::AnimalHandling));
        assert_eq!("SleightOfHand".parse::<Skill>(), Ok(Skill::SleightOfHand));
        assert_eq!("arcana".parse::<Skill>(), Ok(Skill::Arcana));
    }

    #[test]
    fn parse_unknown_skill_is_lookup_failure() {
        let err = "Cooking".parse::<Skill>().unwrap_err();
        assert_eq!(err, DomainError::not_found("Skill", "Cooking"));
    }

    #[test]
    fn serde_uses_display_names() {
        let json = serde_json::to_string(&Skill::SleightOfHand).unwrap();
        assert_eq!(json, "\"Sleight of Hand\"");
        for skill in Skill::ALL {
            let json = serde_json::to_string(&skill).unwrap();
            assert_eq!(json, format!("\"{}\"", skill.display_name()));
        }
    }
}
