//! CharacterBuild aggregate - one editing session's attribute and skill sheets
//!
//! The build is created explicitly (fresh or from a snapshot) and handed to whatever
//! drives it. All rule checks go through here so the skill sheet always sees the
//! current attribute scores.

use super::{AttributeSheet, SkillSheet};
use crate::entities::{CharacterClass, Skill};
use crate::error::DomainError;
use crate::rules;
use crate::snapshot::CharacterSnapshot;
use crate::value_objects::{Attribute, Delta};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterBuild {
    attributes: AttributeSheet,
    skills: SkillSheet,
}

impl CharacterBuild {
    /// A build with default scores and no skill points.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sheets(attributes: AttributeSheet, skills: SkillSheet) -> Self {
        Self { attributes, skills }
    }

    pub fn from_snapshot(snapshot: &CharacterSnapshot) -> Self {
        let (attributes, skills) = snapshot.restore();
        Self::from_sheets(attributes, skills)
    }

    pub fn snapshot(&self) -> CharacterSnapshot {
        CharacterSnapshot::capture(&self.attributes, &self.skills)
    }

    pub fn attributes(&self) -> &AttributeSheet {
        &self.attributes
    }

    pub fn skills(&self) -> &SkillSheet {
        &self.skills
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// See [`AttributeSheet::adjust`]. Skill points are never touched.
    pub fn adjust_attribute(&mut self, attribute: Attribute, delta: Delta) -> bool {
        self.attributes.adjust(attribute, delta)
    }

    /// See [`SkillSheet::adjust`].
    pub fn adjust_skill(&mut self, skill: Skill, delta: Delta) -> bool {
        self.skills.adjust(skill, delta, &self.attributes)
    }

    // =========================================================================
    // Derived reads
    // =========================================================================

    pub fn modifier(&self, attribute: Attribute) -> i32 {
        self.attributes.modifier(attribute)
    }

    pub fn skill_budget(&self, attribute: Attribute) -> i32 {
        rules::skill_budget(self.attributes.score(attribute))
    }

    pub fn skill_total(&self, skill: Skill) -> i32 {
        self.skills.total(skill, &self.attributes)
    }

    pub fn is_eligible(&self, class: CharacterClass) -> bool {
        rules::is_eligible(class, &self.attributes)
    }

    pub fn is_eligible_by_name(&self, class_name: &str) -> Result<bool, DomainError> {
        rules::is_eligible_by_name(class_name, &self.attributes)
    }

    pub fn eligible_classes(&self) -> Vec<CharacterClass> {
        rules::eligible_classes(&self.attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_budget_tracks_attribute_changes() {
        let mut build = CharacterBuild::new();
        assert_eq!(build.skill_budget(Attribute::Intelligence), 10);

        for _ in 0..8 {
            assert!(build.adjust_attribute(Attribute::Intelligence, Delta::Increment));
        }
        assert_eq!(build.modifier(Attribute::Intelligence), 4);
        assert_eq!(build.skill_budget(Attribute::Intelligence), 26);
    }

    #[test]
    fn lowering_attribute_does_not_clamp_skills() {
        let mut build = CharacterBuild::new();
        for _ in 0..4 {
            assert!(build.adjust_attribute(Attribute::Dexterity, Delta::Increment));
        }
        for _ in 0..18 {
            assert!(build.adjust_skill(Skill::Stealth, Delta::Increment));
        }
        let skills_before = build.skills().clone();

        for _ in 0..4 {
            assert!(build.adjust_attribute(Attribute::Dexterity, Delta::Decrement));
        }

        assert_eq!(build.skills(), &skills_before);
        assert_eq!(build.skills().points(Skill::Stealth), 18);
        assert!(!build.adjust_skill(Skill::Acrobatics, Delta::Increment));
    }

    #[test]
    fn eligibility_follows_attributes() {
        let mut build = CharacterBuild::new();
        assert!(!build.is_eligible(CharacterClass::Bard));

        for _ in 0..4 {
            assert!(build.adjust_attribute(Attribute::Charisma, Delta::Increment));
        }
        assert!(build.is_eligible(CharacterClass::Bard));
        assert_eq!(build.is_eligible_by_name("Bard"), Ok(true));
        assert_eq!(build.eligible_classes(), vec![CharacterClass::Bard]);
        assert!(build.is_eligible_by_name("Monk").is_err());
    }

    #[test]
    fn snapshot_round_trip_preserves_build() {
        let mut build = CharacterBuild::new();
        build.adjust_attribute(Attribute::Wisdom, Delta::Increment);
        build.adjust_attribute(Attribute::Wisdom, Delta::Increment);
        build.adjust_skill(Skill::Insight, Delta::Increment);
        build.adjust_skill(Skill::AnimalHandling, Delta::Increment);

        let json = serde_json::to_string(&build.snapshot()).unwrap();
        let snapshot: CharacterSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(CharacterBuild::from_snapshot(&snapshot), build);
    }

    #[test]
    fn from_sheets_checks_skills_against_given_attributes() {
        let attributes = AttributeSheet::from_scores([10, 10, 10, 10, 10, 8]);
        let mut build = CharacterBuild::from_sheets(attributes, SkillSheet::new());

        // modifier -1 → budget 6
        for _ in 0..6 {
            assert!(build.adjust_skill(Skill::Performance, Delta::Increment));
        }
        assert!(!build.adjust_skill(Skill::Intimidation, Delta::Increment));
        assert_eq!(build.skill_budget(Attribute::Charisma), 6);
    }

    #[test]
    fn skill_total_uses_current_modifier() {
        let mut build = CharacterBuild::new();
        build.adjust_skill(Skill::Athletics, Delta::Increment);
        assert_eq!(build.skill_total(Skill::Athletics), 1);

        build.adjust_attribute(Attribute::Strength, Delta::Increment);
        build.adjust_attribute(Attribute::Strength, Delta::Increment);
        assert_eq!(build.skill_total(Skill::Athletics), 2);
    }
}
