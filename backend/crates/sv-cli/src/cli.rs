use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "sv")]
#[command(about = "Survey Hub command-line client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (defaults to the host and port in the survey config)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Tenant (organization) to operate on; the server default applies when omitted
    #[arg(long, global = true)]
    pub tenant_id: Option<String>,

    /// User ID to act as (UUID); the server default applies when omitted
    #[arg(long, global = true)]
    pub user_id: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
