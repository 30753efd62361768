//! Plain-text views of a character build.

use std::fmt::Write;

use charsheet_domain::{
    Attribute, CharacterBuild, CharacterClass, Skill, ATTRIBUTE_MAX_POINT,
};

pub fn render_attributes(build: &CharacterBuild) -> String {
    let attributes = build.attributes();
    let mut out = format!(
        "Attributes ({}/{}, {} remaining):\n",
        attributes.total(),
        ATTRIBUTE_MAX_POINT,
        attributes.remaining_points()
    );
    for (attribute, score) in attributes.iter() {
        let _ = writeln!(
            out,
            "  {:<13} {:>3}  (Modifier: {:+})",
            attribute.display_name(),
            score,
            build.modifier(attribute)
        );
    }
    out
}

pub fn render_classes(build: &CharacterBuild) -> String {
    let mut out = String::from("Classes:\n");
    for class in CharacterClass::ALL {
        let mark = if build.is_eligible(class) { "x" } else { " " };
        let _ = writeln!(out, "  [{}] {}", mark, class.display_name());
    }
    out
}

/// Requirement table for one class, marking scores that fall short.
pub fn render_requirements(build: &CharacterBuild, class: CharacterClass) -> String {
    let requirements = class.requirements();
    let unmet = requirements.unmet(build.attributes());
    let mut out = format!("Requirements ({}):\n", class.display_name());
    for (attribute, required) in requirements.iter() {
        match unmet.iter().find(|u| u.attribute == attribute) {
            Some(shortfall) => {
                let _ = writeln!(
                    out,
                    "  {:<13} {:>3}  (have {}, short {})",
                    attribute.display_name(),
                    required,
                    shortfall.actual,
                    shortfall.required - shortfall.actual
                );
            }
            None => {
                let _ = writeln!(out, "  {:<13} {:>3}", attribute.display_name(), required);
            }
        }
    }
    out
}

pub fn render_skills(build: &CharacterBuild) -> String {
    let mut out = String::from("Skills:\n");
    for (skill, points) in build.skills().iter() {
        let attribute = skill.attribute();
        let _ = writeln!(
            out,
            "  {:<16} points: {:>2}  modifier ({}): {:+}  total: {}",
            skill.display_name(),
            points,
            attribute.abbreviation(),
            build.modifier(attribute),
            build.skill_total(skill)
        );
    }

    out.push_str("Skill budget:\n");
    for attribute in Attribute::ALL {
        if Skill::governed_by(attribute).next().is_none() {
            continue;
        }
        let _ = writeln!(
            out,
            "  {:<13} {}/{}",
            attribute.display_name(),
            build.skills().allocated_for(attribute),
            build.skill_budget(attribute)
        );
    }
    out
}

pub fn render_sheet(build: &CharacterBuild) -> String {
    [
        render_attributes(build),
        render_classes(build),
        render_skills(build),
    ]
    .join("\n")
}

pub fn render_help() -> &'static str {
    "Commands:
  show                      print the whole sheet
  attr <attribute> +|-      raise or lower an attribute
  skill <skill name> +|-    add or remove a skill point
  classes                   list classes and eligibility
  class <name>              show a class's requirements
  save                      store the sheet remotely
  quit                      leave
"
}

#[cfg(test)]
mod tests {
    use super::*;
    use charsheet_domain::Delta;

    #[test]
    fn attributes_show_scores_and_modifiers() {
        let mut build = CharacterBuild::new();
        for _ in 0..6 {
            build.adjust_attribute(Attribute::Strength, Delta::Increment);
        }
        let text = render_attributes(&build);

        assert!(text.starts_with("Attributes (66/70, 4 remaining):"));
        assert!(text.contains("Strength       16  (Modifier: +3)"));
        assert!(text.contains("Wisdom         10  (Modifier: +0)"));
    }

    #[test]
    fn classes_mark_eligibility() {
        let mut build = CharacterBuild::new();
        for _ in 0..4 {
            build.adjust_attribute(Attribute::Intelligence, Delta::Increment);
        }
        let text = render_classes(&build);

        assert!(text.contains("[x] Wizard"));
        assert!(text.contains("[ ] Barbarian"));
    }

    #[test]
    fn requirements_point_out_shortfalls() {
        let build = CharacterBuild::new();
        let text = render_requirements(&build, CharacterClass::Fighter);

        assert!(text.starts_with("Requirements (Fighter):"));
        assert!(text.contains("Strength       13  (have 10, short 3)"));
        assert!(text.contains("Dexterity       9\n"));
    }

    #[test]
    fn skills_show_points_modifier_and_total() {
        let mut build = CharacterBuild::new();
        build.adjust_attribute(Attribute::Wisdom, Delta::Increment);
        build.adjust_attribute(Attribute::Wisdom, Delta::Increment);
        build.adjust_skill(Skill::Perception, Delta::Increment);
        build.adjust_skill(Skill::Perception, Delta::Increment);
        let text = render_skills(&build);

        assert!(text.contains("Perception       points:  2  modifier (WIS): +1  total: 3"));
        assert!(text.contains("Wisdom        2/14"));
        assert!(!text.contains("Constitution  "));
    }
}
