use clap::Subcommand;

#[derive(Subcommand)]
pub enum ResponseCommands {
    /// Record invited participants
    Invite {
        /// Survey ID (UUID)
        survey_id: String,

        #[arg(long)]
        count: i64,
    },

    /// Record one completed response
    Record {
        /// Survey ID (UUID)
        survey_id: String,
    },
}
