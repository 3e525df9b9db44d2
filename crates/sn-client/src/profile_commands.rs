use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ProfileCommands {
    /// Show your profile
    Show,

    /// Update profile fields. Omitted fields keep their value; an empty
    /// --email or --bio clears it
    Update {
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        position: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// YYYY-MM-DD
        #[arg(long)]
        birth_date: Option<String>,
        #[arg(long)]
        bio: Option<String>,
    },
}
