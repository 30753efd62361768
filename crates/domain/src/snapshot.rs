//! Serializable snapshot of a character's attribute scores and skill points.
//!
//! Wire shape:
//!
//! ```json
//! {
//!   "attributePoints": { "Strength": 10, "Dexterity": 10, ... },
//!   "skillPoints": { "Acrobatics": 0, "Animal Handling": 0, ... }
//! }
//! ```
//!
//! Restoring is lenient: a missing section falls back to the default sheet, values
//! are taken verbatim even when they break sheet invariants, and unrecognised keys
//! or entries that are not `i32` integers are skipped so they take their default.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::aggregates::{AttributeSheet, SkillSheet};
use crate::entities::Skill;
use crate::value_objects::Attribute;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSnapshot {
    #[serde(
        default,
        deserialize_with = "lenient_points",
        skip_serializing_if = "Option::is_none"
    )]
    pub attribute_points: Option<BTreeMap<String, i32>>,
    #[serde(
        default,
        deserialize_with = "lenient_points",
        skip_serializing_if = "Option::is_none"
    )]
    pub skill_points: Option<BTreeMap<String, i32>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PointEntry {
    Value(i32),
    Other(IgnoredAny),
}

/// Read one section, dropping entries whose value is not an `i32`.
fn lenient_points<'de, D>(deserializer: D) -> Result<Option<BTreeMap<String, i32>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(entries) = Option::<BTreeMap<String, PointEntry>>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let points = entries
        .into_iter()
        .filter_map(|(name, entry)| match entry {
            PointEntry::Value(value) => Some((name, value)),
            PointEntry::Other(_) => {
                tracing::warn!(key = %name, "Ignoring non-integer value in snapshot");
                None
            }
        })
        .collect();
    Ok(Some(points))
}

impl CharacterSnapshot {
    /// Serialize both sheets, keyed by display name.
    pub fn capture(attributes: &AttributeSheet, skills: &SkillSheet) -> Self {
        let attribute_points = attributes
            .iter()
            .map(|(attribute, score)| (attribute.display_name().to_string(), score))
            .collect();
        let skill_points = skills
            .iter()
            .map(|(skill, points)| (skill.display_name().to_string(), points))
            .collect();

        Self {
            attribute_points: Some(attribute_points),
            skill_points: Some(skill_points),
        }
    }

    /// Rebuild both sheets from this snapshot.
    pub fn restore(&self) -> (AttributeSheet, SkillSheet) {
        (self.restore_attributes(), self.restore_skills())
    }

    fn restore_attributes(&self) -> AttributeSheet {
        let mut sheet = AttributeSheet::new();
        let Some(points) = &self.attribute_points else {
            return sheet;
        };

        for (name, score) in points {
            match name.parse::<Attribute>() {
                Ok(attribute) => sheet.set_unchecked(attribute, *score),
                Err(e) => tracing::warn!(error = %e, "Ignoring unknown attribute in snapshot"),
            }
        }
        sheet
    }

    fn restore_skills(&self) -> SkillSheet {
        let mut sheet = SkillSheet::new();
        let Some(points) = &self.skill_points else {
            return sheet;
        };

        for (name, value) in points {
            match name.parse::<Skill>() {
                Ok(skill) => sheet.set_unchecked(skill, *value),
                Err(e) => tracing::warn!(error = %e, "Ignoring unknown skill in snapshot"),
            }
        }
        sheet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn restore_inverts_capture() {
        let attributes = AttributeSheet::from_scores([15, 12, 11, 9, 13, 10]);
        let mut points = [0; Skill::COUNT];
        points[Skill::Athletics.index()] = 4;
        points[Skill::SleightOfHand.index()] = 7;
        points[Skill::Survival.index()] = 2;
        let skills = SkillSheet::from_points(points);

        let snapshot = CharacterSnapshot::capture(&attributes, &skills);
        assert_eq!(snapshot.restore(), (attributes, skills));
    }

    #[test]
    fn capture_writes_display_name_keys() {
        let snapshot = CharacterSnapshot::capture(&AttributeSheet::new(), &SkillSheet::new());
        let value = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(value["attributePoints"]["Charisma"], json!(10));
        assert_eq!(value["skillPoints"]["Sleight of Hand"], json!(0));
        assert_eq!(value["attributePoints"].as_object().unwrap().len(), 6);
        assert_eq!(value["skillPoints"].as_object().unwrap().len(), 18);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let snapshot: CharacterSnapshot = serde_json::from_value(json!({})).unwrap();
        let (attributes, skills) = snapshot.restore();

        assert_eq!(attributes, AttributeSheet::new());
        assert_eq!(skills, SkillSheet::new());
        assert!(attributes.iter().all(|(_, score)| score == 10));
        assert!(skills.iter().all(|(_, points)| points == 0));
    }

    #[test]
    fn null_section_is_treated_as_missing() {
        let snapshot: CharacterSnapshot = serde_json::from_value(json!({
            "attributePoints": { "Strength": 12 },
            "skillPoints": null
        }))
        .unwrap();
        let (attributes, skills) = snapshot.restore();

        assert_eq!(attributes.score(Attribute::Strength), 12);
        assert_eq!(attributes.score(Attribute::Dexterity), 10);
        assert_eq!(skills, SkillSheet::new());
    }

    #[test]
    fn non_integer_entries_take_their_default() {
        let snapshot: CharacterSnapshot = serde_json::from_value(json!({
            "attributePoints": {
                "Strength": 14, "Dexterity": null, "Wisdom": 12.5,
                "Charisma": "high", "Intelligence": 4_000_000_000_i64
            },
            "skillPoints": { "Athletics": 3, "Stealth": [1], "Arcana": {} }
        }))
        .unwrap();
        let (attributes, skills) = snapshot.restore();

        assert_eq!(attributes.score(Attribute::Strength), 14);
        assert_eq!(attributes.score(Attribute::Dexterity), 10);
        assert_eq!(attributes.score(Attribute::Wisdom), 10);
        assert_eq!(attributes.score(Attribute::Charisma), 10);
        assert_eq!(attributes.score(Attribute::Intelligence), 10);
        assert_eq!(skills.points(Skill::Athletics), 3);
        assert_eq!(skills.points(Skill::Stealth), 0);
        assert_eq!(skills.points(Skill::Arcana), 0);
    }

    #[test]
    fn out_of_range_values_load_verbatim() {
        let snapshot: CharacterSnapshot = serde_json::from_value(json!({
            "attributePoints": {
                "Strength": 25, "Dexterity": 20, "Constitution": 20,
                "Intelligence": 20, "Wisdom": -3, "Charisma": 20
            },
            "skillPoints": { "Arcana": 40, "Stealth": -1, "Basket Weaving": 3 }
        }))
        .unwrap();
        let (attributes, skills) = snapshot.restore();

        assert_eq!(attributes.score(Attribute::Strength), 25);
        assert_eq!(attributes.score(Attribute::Wisdom), -3);
        assert_eq!(attributes.total(), 102);
        assert_eq!(skills.points(Skill::Arcana), 40);
        assert_eq!(skills.points(Skill::Stealth), -1);
    }
}
