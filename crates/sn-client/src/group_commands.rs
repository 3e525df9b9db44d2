use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum GroupCommands {
    /// List groups you belong to
    List,

    /// Create a group
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
}
