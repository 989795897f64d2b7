//! productctl CLI - CRUD over the `products` table
//!
//! - `demo`: the full create/insert/update/select/delete sequence
//! - `init`, `add`, `get`, `list`, `update`, `delete`: one operation each
//!
//! The store is opened once before the command runs and closed once after,
//! whether the command succeeded or not.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use productctl_store::ProductStore;
use tracing::{debug, info};

mod commands;
mod config;
mod tracing_setup;

use commands::demo::DemoArgs;
use commands::products::{AddArgs, DeleteArgs, GetArgs, UpdateArgs};
use config::ConnectionArgs;
use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "productctl",
    author,
    version,
    about = "Create, read, update, and delete products in a relational table",
    long_about = "Single-table product store over MySQL or SQLite. Every operation is one \
                  parameterized statement; `demo` runs the whole CRUD sequence end to end."
)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Print products as JSON instead of plain lines
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(flatten)]
    Store(StoreCommand),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

/// Commands that run against an open store.
#[derive(Subcommand, Debug)]
enum StoreCommand {
    /// Create the products table if it does not exist
    Init,
    /// Run create, insert, update, select one, select all, delete in sequence
    Demo(DemoArgs),
    /// Create and insert a product, printing its new id
    Add(AddArgs),
    /// Fetch one product by id
    Get(GetArgs),
    /// Fetch every product
    List,
    /// Change name and/or price of an existing product
    Update(UpdateArgs),
    /// Delete a product by id
    Delete(DeleteArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing, so DATABASE_URL from .env reaches clap
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Completions(args) => run_completions(args),
        Commands::Store(command) => run_store_command(&cli.connection, command, cli.json).await,
    }
}

async fn run_store_command(
    connection: &ConnectionArgs,
    command: StoreCommand,
    json: bool,
) -> Result<()> {
    let store_config = config::resolve(connection)?;
    info!(url = %store_config.redacted_url(), "connecting");
    let store = ProductStore::connect(&store_config)
        .await
        .context("Failed to open product store")?;

    let result = match command {
        StoreCommand::Init => commands::run_init(&store).await,
        StoreCommand::Demo(args) => commands::run_demo(&store, args, json).await,
        StoreCommand::Add(args) => commands::run_add(&store, args).await,
        StoreCommand::Get(args) => commands::run_get(&store, args, json).await,
        StoreCommand::List => commands::run_list(&store, json).await,
        StoreCommand::Update(args) => commands::run_update(&store, args, json).await,
        StoreCommand::Delete(args) => commands::run_delete(&store, args).await,
    };

    store.close().await;
    debug!("connection closed");

    result
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
