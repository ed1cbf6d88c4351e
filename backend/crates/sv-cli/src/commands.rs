use crate::{
    question_commands::QuestionCommands, response_commands::ResponseCommands,
    survey_commands::SurveyCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Survey operations
    Survey {
        #[command(subcommand)]
        action: SurveyCommands,
    },

    /// Question operations
    Question {
        #[command(subcommand)]
        action: QuestionCommands,
    },

    /// Invitation and response counting
    Response {
        #[command(subcommand)]
        action: ResponseCommands,
    },

    /// Survey counts and overall completion rate
    Dashboard,
}
