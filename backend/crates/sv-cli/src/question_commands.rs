use clap::Subcommand;

const QUESTION_TYPES: [&str; 7] = [
    "likert",
    "text",
    "multiple_choice",
    "single_choice",
    "rating",
    "yes_no",
    "nps",
];

#[derive(Subcommand)]
pub enum QuestionCommands {
    /// List the questions of a survey in order
    List {
        /// Survey ID (UUID)
        survey_id: String,
    },

    /// Add a question to a survey
    Add {
        /// Survey ID (UUID)
        survey_id: String,

        #[arg(long, value_parser = QUESTION_TYPES)]
        r#type: String,

        #[arg(long)]
        text: String,

        /// Default: true
        #[arg(long)]
        required: Option<bool>,

        /// 0-based position; appended when omitted
        #[arg(long)]
        position: Option<i32>,
    },

    /// Update a question
    Update {
        /// Survey ID (UUID)
        survey_id: String,

        /// Question ID (UUID)
        question_id: String,

        #[arg(long, value_parser = QUESTION_TYPES)]
        r#type: Option<String>,

        #[arg(long)]
        text: Option<String>,

        #[arg(long)]
        required: Option<bool>,
    },

    /// Remove a question
    Remove {
        /// Survey ID (UUID)
        survey_id: String,

        /// Question ID (UUID)
        question_id: String,
    },

    /// Reorder questions
    Reorder {
        /// Survey ID (UUID)
        survey_id: String,

        /// Every question ID of the survey, in the new order
        #[arg(required = true, num_args = 1..)]
        question_ids: Vec<String>,
    },
}
