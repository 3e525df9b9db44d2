use crate::{group_commands::GroupCommands, profile_commands::ProfileCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create an account and log in
    Register {
        #[arg(long)]
        phone: String,
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        password: String,
        /// Defaults to "Mentor"
        #[arg(long)]
        position: Option<String>,
    },

    /// Log in with phone and password
    Login {
        #[arg(long)]
        phone: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the current session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Show the post feed, newest first
    Feed,

    /// Publish a post
    Post { content: String },

    /// Show the chat, oldest first
    Messages,

    /// Send a chat message
    Send {
        content: String,
        /// Recipient user ID. Omit to post in the public chat
        #[arg(long)]
        to: Option<i64>,
    },

    /// Group operations
    Group {
        #[command(subcommand)]
        action: GroupCommands,
    },

    /// Profile operations
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Show notifications
    Notifications,

    /// Show friend IDs
    Friends,
}
