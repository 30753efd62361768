//! Console command parsing.

use charsheet_domain::{Attribute, CharacterClass, Delta, DomainError, Skill};

/// A single line of user input, parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Show,
    AdjustAttribute(Attribute, Delta),
    AdjustSkill(Skill, Delta),
    Classes,
    Requirements(CharacterClass),
    Save,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

const ATTR_USAGE: &str = "attr <attribute> +|-";
const SKILL_USAGE: &str = "skill <skill name> +|-";
const CLASS_USAGE: &str = "class <class name>";

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let mut tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(None);
    }

    let verb = tokens.remove(0).to_ascii_lowercase();
    let command = match verb.as_str() {
        "show" | "sheet" => Command::Show,
        "classes" => Command::Classes,
        "save" => Command::Save,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "attr" | "attribute" => {
            let (name, delta) = split_adjustment(&tokens, ATTR_USAGE)?;
            Command::AdjustAttribute(name.parse()?, delta)
        }
        "skill" => {
            let (name, delta) = split_adjustment(&tokens, SKILL_USAGE)?;
            Command::AdjustSkill(name.parse()?, delta)
        }
        "class" => {
            if tokens.is_empty() {
                return Err(CommandError::Usage(CLASS_USAGE));
            }
            Command::Requirements(tokens.join(" ").parse()?)
        }
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

/// Split `<name words...> <delta>` into the joined name and the parsed delta.
fn split_adjustment(tokens: &[&str], usage: &'static str) -> Result<(String, Delta), CommandError> {
    let Some((last, name)) = tokens.split_last() else {
        return Err(CommandError::Usage(usage));
    };
    if name.is_empty() {
        return Err(CommandError::Usage(usage));
    }
    let delta: Delta = last.parse().map_err(|_| CommandError::Usage(usage))?;
    Ok((name.join(" "), delta))
}
