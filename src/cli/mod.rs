//! CLI module for Switchyard
//!
//! Provides commands:
//! - rule management: `list`, `show`, `create`, `update`, `enable`, `disable`, `delete`
//! - `select`: resolve the model for a request context

use crate::bootstrap;
use crate::settings::AppConfig;
use clap::{Parser, Subcommand};
use serde::Serialize;
use uuid::Uuid;

pub mod rules;
pub mod select;

/// Switchyard CLI
#[derive(Parser, Debug)]
#[command(name = "switchyard")]
#[command(about = "Rule-based model routing")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List routing rules in evaluation order
    List,
    /// Show one routing rule
    Show {
        /// Rule ID
        id: Uuid,
    },
    /// Create a routing rule
    Create(rules::CreateArgs),
    /// Update fields of a routing rule
    Update(rules::UpdateArgs),
    /// Enable a routing rule
    Enable {
        /// Rule ID
        id: Uuid,
    },
    /// Disable a routing rule
    Disable {
        /// Rule ID
        id: Uuid,
    },
    /// Permanently delete a routing rule
    Delete {
        /// Rule ID
        id: Uuid,
    },
    /// Resolve the model for a request
    Select(select::SelectArgs),
}

/// Print a value as pretty JSON on stdout
pub(crate) fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Run the CLI command
pub async fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        cmd.print_help()?;
        println!();
        return Ok(());
    };

    let services = bootstrap::init(config).await?;
    match command {
        Commands::List => rules::list(&services.admin).await,
        Commands::Show { id } => rules::show(&services.admin, id).await,
        Commands::Create(args) => rules::create(&services.admin, args).await,
        Commands::Update(args) => rules::update(&services.admin, args).await,
        Commands::Enable { id } => rules::set_enabled(&services.admin, id, true).await,
        Commands::Disable { id } => rules::set_enabled(&services.admin, id, false).await,
        Commands::Delete { id } => rules::delete(&services.admin, id).await,
        Commands::Select(args) => select::run(&services.router, args).await,
    }
}
