//! Line-oriented console editor.
//!
//! The console owns the session's `CharacterBuild` and turns each input line into a
//! rules call plus a text reply. It holds no rules of its own.

mod command;
mod render;

pub use command::{parse_command, Command, CommandError};
pub use render::{
    render_attributes, render_classes, render_help, render_requirements, render_sheet,
    render_skills,
};

use charsheet_domain::CharacterBuild;

use crate::application::SheetSessionService;

/// Text to print after a command, and whether the session should end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub quit: bool,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: false,
        }
    }

    fn quit() -> Self {
        Self {
            text: String::from("Bye."),
            quit: true,
        }
    }
}

pub struct ConsoleSession {
    build: CharacterBuild,
    service: SheetSessionService,
}

impl ConsoleSession {
    /// Load the stored build (or defaults) and open a session over it.
    pub async fn start(service: SheetSessionService) -> Self {
        let build = service.load().await;
        Self { build, service }
    }

    pub fn build(&self) -> &CharacterBuild {
        &self.build
    }

    pub async fn handle_line(&mut self, line: &str) -> Reply {
        match parse_command(line) {
            Ok(Some(command)) => self.execute(command).await,
            Ok(None) => Reply::text(""),
            Err(e) => Reply::text(e.to_string()),
        }
    }

    async fn execute(&mut self, command: Command) -> Reply {
        match command {
            Command::Show => Reply::text(render_sheet(&self.build)),
            Command::AdjustAttribute(attribute, delta) => {
                if self.build.adjust_attribute(attribute, delta) {
                    Reply::text(render_attributes(&self.build))
                } else {
                    Reply::text(format!("{} {}: rejected", attribute, delta))
                }
            }
            Command::AdjustSkill(skill, delta) => {
                if self.build.adjust_skill(skill, delta) {
                    Reply::text(format!(
                        "{}: {} (total {})",
                        skill,
                        self.build.skills().points(skill),
                        self.build.skill_total(skill)
                    ))
                } else {
                    Reply::text(format!("{} {}: rejected", skill, delta))
                }
            }
            Command::Classes => Reply::text(render_classes(&self.build)),
            Command::Requirements(class) => Reply::text(render_requirements(&self.build, class)),
            Command::Save => match self.service.save(&self.build).await {
                Ok(()) => Reply::text("Saved."),
                Err(e) => {
                    tracing::error!(error = %e, "Save failed");
                    Reply::text(format!("Save failed: {}", e))
                }
            },
            Command::Help => Reply::text(render_help()),
            Command::Quit => Reply::quit(),
        }
    }
}
