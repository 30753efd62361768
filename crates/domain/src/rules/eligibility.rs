//! Class eligibility checks against an attribute sheet.

use crate::aggregates::AttributeSheet;
use crate::entities::{CharacterClass, ClassRequirement};
use crate::error::DomainError;
use crate::value_objects::Attribute;

/// An attribute that falls short of a class minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnmetRequirement {
    pub attribute: Attribute,
    pub required: i32,
    pub actual: i32,
}

impl ClassRequirement {
    /// True when every score on `sheet` meets its minimum.
    pub fn is_met_by(&self, sheet: &AttributeSheet) -> bool {
        self.iter()
            .all(|(attribute, minimum)| sheet.score(attribute) >= minimum)
    }

    /// Attributes that fall short, in sheet order.
    pub fn unmet(&self, sheet: &AttributeSheet) -> Vec<UnmetRequirement> {
        self.iter()
            .filter_map(|(attribute, required)| {
                let actual = sheet.score(attribute);
                (actual < required).then_some(UnmetRequirement {
                    attribute,
                    required,
                    actual,
                })
            })
            .collect()
    }
}

/// True when `sheet` meets every minimum of `class`.
pub fn is_eligible(class: CharacterClass, sheet: &AttributeSheet) -> bool {
    class.requirements().is_met_by(sheet)
}

/// Eligibility by class name. Unknown names are a lookup failure, not `false`.
pub fn is_eligible_by_name(class_name: &str, sheet: &AttributeSheet) -> Result<bool, DomainError> {
    let class: CharacterClass = class_name.parse()?;
    Ok(is_eligible(class, sheet))
}

/// Every class the sheet currently qualifies for.
pub fn eligible_classes(sheet: &AttributeSheet) -> Vec<CharacterClass> {
    CharacterClass::ALL
        .into_iter()
        .filter(|class| is_eligible(*class, sheet))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Delta;

    #[test]
    fn default_sheet_meets_no_class() {
        let sheet = AttributeSheet::new();
        assert!(eligible_classes(&sheet).is_empty());
    }

    #[test]
    fn fighter_needs_every_minimum() {
        let sheet = AttributeSheet::from_scores([13, 10, 13, 10, 10, 10]);
        assert!(is_eligible(CharacterClass::Fighter, &sheet));

        let mut short = sheet.clone();
        assert!(short.adjust(Attribute::Constitution, Delta::Decrement));
        assert!(!is_eligible(CharacterClass::Fighter, &short));
        assert_eq!(
            CharacterClass::Fighter.requirements().unmet(&short),
            vec![UnmetRequirement {
                attribute: Attribute::Constitution,
                required: 13,
                actual: 12,
            }]
        );
    }

    #[test]
    fn low_secondary_score_blocks_class() {
        // Wizard only asks for 9 in everything but Intelligence.
        let sheet = AttributeSheet::from_scores([10, 10, 8, 16, 10, 10]);
        assert!(!is_eligible(CharacterClass::Wizard, &sheet));

        let sheet = AttributeSheet::from_scores([9, 9, 9, 14, 9, 9]);
        assert!(is_eligible(CharacterClass::Wizard, &sheet));
    }

    #[test]
    fn eligible_classes_lists_all_matches() {
        let sheet = AttributeSheet::from_scores([14, 9, 13, 9, 9, 14]);
        assert_eq!(
            eligible_classes(&sheet),
            vec![
                CharacterClass::Barbarian,
                CharacterClass::Fighter,
                CharacterClass::Bard
            ]
        );
    }

    #[test]
    fn by_name_rejects_unknown_class() {
        let sheet = AttributeSheet::new();
        assert_eq!(is_eligible_by_name("barbarian", &sheet), Ok(false));
        assert_eq!(
            is_eligible_by_name("Necromancer", &sheet),
            Err(DomainError::not_found("Class", "Necromancer"))
        );
    }
}
