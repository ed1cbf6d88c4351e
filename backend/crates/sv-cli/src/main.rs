//! sv - Survey Hub CLI
//!
//! # Examples
//!
//! ```bash
//! # Create a survey and add a question
//! sv survey create --title "Q3 Engagement" --category engagement --frequency quarterly
//! sv question add <survey-id> --type likert --text "I feel valued at work"
//!
//! # Collect responses
//! sv survey publish <survey-id>
//! sv response invite <survey-id> --count 120
//! sv response record <survey-id>
//!
//! # Another tenant, pretty output
//! sv --tenant-id acme survey list --pretty
//! ```

use sv_cli::{Cli, Client, Commands, QuestionCommands, ResponseCommands, SurveyCommands};
use sv_config::Config;

use std::process::ExitCode;

use clap::Parser;

const FALLBACK_SERVER_URL: &str = "http://127.0.0.1:8000";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Explicit flag > survey config > built-in default
    let server_url = match cli.server {
        Some(url) => url,
        None => discover_server_url(),
    };

    let client = Client::new(
        &server_url,
        cli.tenant_id.as_deref(),
        cli.user_id.as_deref(),
    );

    let result = match cli.command {
        Commands::Survey { action } => match action {
            SurveyCommands::List { status } => client.list_surveys(status.as_deref()).await,
            SurveyCommands::Get { id } => client.get_survey(&id).await,
            SurveyCommands::Create {
                title,
                description,
                category,
                frequency,
            } => {
                client
                    .create_survey(
                        &title,
                        description.as_deref(),
                        category.as_deref(),
                        frequency.as_deref(),
                    )
                    .await
            }
            SurveyCommands::Update {
                id,
                title,
                description,
                category,
                frequency,
                version,
            } => {
                client
                    .update_survey(
                        &id,
                        title.as_deref(),
                        description.as_deref(),
                        category.as_deref(),
                        frequency.as_deref(),
                        version,
                    )
                    .await
            }
            SurveyCommands::Archive { id } => client.archive_survey(&id).await,
            SurveyCommands::Publish { id } => client.publish_survey(&id).await,
            SurveyCommands::Duplicate { id } => client.duplicate_survey(&id).await,
            SurveyCommands::Delete { id } => client.delete_survey(&id).await,
        },

        Commands::Question { action } => match action {
            QuestionCommands::List { survey_id } => client.list_questions(&survey_id).await,
            QuestionCommands::Add {
                survey_id,
                r#type,
                text,
                required,
                position,
            } => {
                client
                    .add_question(&survey_id, &r#type, &text, required, position)
                    .await
            }
            QuestionCommands::Update {
                survey_id,
                question_id,
                r#type,
                text,
                required,
            } => {
                client
                    .update_question(
                        &survey_id,
                        &question_id,
                        r#type.as_deref(),
                        text.as_deref(),
                        required,
                    )
                    .await
            }
            QuestionCommands::Remove {
                survey_id,
                question_id,
            } => client.remove_question(&survey_id, &question_id).await,
            QuestionCommands::Reorder {
                survey_id,
                question_ids,
            } => client.reorder_questions(&survey_id, &question_ids).await,
        },

        Commands::Response { action } => match action {
            ResponseCommands::Invite { survey_id, count } => {
                client.record_invitations(&survey_id, count).await
            }
            ResponseCommands::Record { survey_id } => client.record_response(&survey_id).await,
        },

        Commands::Dashboard => client.dashboard().await,
    };

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Server URL from the survey config (`SV_CONFIG_DIR` or `./.survey/`)
fn discover_server_url() -> String {
    match Config::load() {
        Ok(config) => config.server_url(),
        Err(e) => {
            eprintln!(
                "Warning: could not read survey config ({}), using {}",
                e, FALLBACK_SERVER_URL
            );
            FALLBACK_SERVER_URL.to_string()
        }
    }
}
