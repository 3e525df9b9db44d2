//! sn - social network client
//!
//! Register, log in, read the feed, chat, and manage groups from the terminal.
//!
//! # Examples
//!
//! ```bash
//! # Create an account (stays logged in)
//! sn register --phone +15550001 --full-name "Ada Lovelace" --password secret1
//!
//! # Publish a post and read the feed
//! sn post "Hello, world"
//! sn feed
//!
//! # Work entirely offline
//! sn --local feed --json --pretty
//! ```

mod cli;
mod commands;
mod group_commands;
mod handlers;
mod outcome;
mod profile_commands;

use crate::{
    cli::Cli,
    commands::Commands,
    group_commands::GroupCommands,
    handlers::{ProfileArgs, RegisterArgs},
    outcome::Outcome,
    profile_commands::ProfileCommands,
};

use sn_client::{ClientContext, ClientResult, logger};

use std::process::ExitCode;

use clap::Parser;
use serde_json::json;
use sn_config::{Config, StorageMode};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let as_json = cli.json || cli.pretty;

    let ctx = match setup(cli.local) {
        Ok(ctx) => ctx,
        Err(e) => {
            return Outcome::failure(
                format!("Error: {}", e.user_message()),
                json!({ "error": e.user_message() }),
            )
            .emit(as_json, cli.pretty);
        }
    };

    let outcome = match cli.command {
        Commands::Register {
            phone,
            full_name,
            password,
            position,
        } => {
            handlers::register(
                ctx,
                RegisterArgs {
                    phone,
                    full_name,
                    password,
                    position,
                },
            )
            .await
        }
        Commands::Login { phone, password } => handlers::login(ctx, phone, password).await,
        Commands::Logout => handlers::logout(ctx).await,
        Commands::Whoami => handlers::whoami(&ctx),

        Commands::Feed => handlers::feed(ctx).await,
        Commands::Post { content } => handlers::post(ctx, content).await,

        Commands::Messages => handlers::messages(ctx).await,
        Commands::Send { content, to } => handlers::send(ctx, content, to).await,

        Commands::Group { action } => match action {
            GroupCommands::List => handlers::groups(ctx).await,
            GroupCommands::Create { name, description } => {
                handlers::create_group(ctx, name, description).await
            }
        },

        Commands::Profile { action } => match action {
            ProfileCommands::Show => handlers::whoami(&ctx),
            ProfileCommands::Update {
                full_name,
                position,
                email,
                birth_date,
                bio,
            } => {
                handlers::update_profile(
                    ctx,
                    ProfileArgs {
                        full_name,
                        position,
                        email,
                        birth_date,
                        bio,
                    },
                )
                .await
            }
        },

        Commands::Notifications => handlers::notifications(ctx).await,
        Commands::Friends => handlers::friends(ctx).await,
    };

    outcome.emit(as_json, cli.pretty)
}

/// Loads configuration, starts logging and builds the client context.
fn setup(force_local: bool) -> ClientResult<ClientContext> {
    let mut config = Config::load()?;
    if force_local {
        config.storage.mode = StorageMode::Local;
    }
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    ClientContext::from_config(&config)
}
