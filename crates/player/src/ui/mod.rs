//! Presentation layer. A thin text surface over the domain rules.

pub mod console;

pub use console::{ConsoleSession, Reply};
