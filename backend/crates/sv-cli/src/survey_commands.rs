use clap::Subcommand;

pub const CATEGORIES: [&str; 7] = [
    "engagement",
    "culture",
    "leadership",
    "satisfaction",
    "wellbeing",
    "performance",
    "custom",
];

pub const FREQUENCIES: [&str; 6] = [
    "weekly",
    "monthly",
    "quarterly",
    "biannually",
    "annually",
    "onetime",
];

#[derive(Subcommand)]
pub enum SurveyCommands {
    /// List surveys, newest first
    List {
        /// Filter by status
        #[arg(long, value_parser = ["draft", "published", "archived"])]
        status: Option<String>,
    },

    /// Get a survey with its questions
    Get {
        /// Survey ID (UUID)
        id: String,
    },

    /// Create a draft survey
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: Option<String>,

        /// Default: engagement
        #[arg(long, value_parser = CATEGORIES)]
        category: Option<String>,

        /// Default: quarterly
        #[arg(long, value_parser = FREQUENCIES)]
        frequency: Option<String>,
    },

    /// Update survey fields
    Update {
        /// Survey ID (UUID)
        id: String,

        #[arg(long)]
        title: Option<String>,

        /// Pass an empty string to clear
        #[arg(long)]
        description: Option<String>,

        #[arg(long, value_parser = CATEGORIES)]
        category: Option<String>,

        #[arg(long, value_parser = FREQUENCIES)]
        frequency: Option<String>,

        /// Fail with CONFLICT unless the survey is still at this version
        #[arg(long)]
        version: Option<i32>,
    },

    /// Archive a survey (stops invitations and responses)
    Archive {
        /// Survey ID (UUID)
        id: String,
    },

    /// Publish a draft survey
    Publish {
        /// Survey ID (UUID)
        id: String,
    },

    /// Copy a survey and its questions into a new draft
    Duplicate {
        /// Survey ID (UUID)
        id: String,
    },

    /// Delete a survey and its questions
    Delete {
        /// Survey ID (UUID)
        id: String,
    },
}
