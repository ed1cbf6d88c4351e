//! sv-cli library
//!
//! Exports the HTTP client and the command definitions used by the `sv` binary.

pub mod cli;
pub(crate) mod client;
pub mod commands;
pub mod question_commands;
pub mod response_commands;
pub mod survey_commands;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError};
pub use commands::Commands;
pub use question_commands::QuestionCommands;
pub use response_commands::ResponseCommands;
pub use survey_commands::SurveyCommands;
