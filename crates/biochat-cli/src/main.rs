//! BioChat command-line entry point.
//!
//! Parses the CLI arguments, loads the config, and dispatches to a
//! subcommand. Running with no subcommand starts the interactive chat.

mod fetch;
mod logging;
mod shell;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use biochat_core::BioChatConfig;

use crate::fetch::FetchArgs;
use crate::shell::ChatShell;

#[derive(Debug, Parser)]
#[command(name = "biochat")]
#[command(about = "Chat-style demo for nucleotide sequence analysis")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the interactive chat (the default when no subcommand is given).
    Chat(ChatArgs),
    /// Download the pretrained model files from the Hugging Face hub.
    FetchModel(FetchArgs),
}

#[derive(Debug, Default, Args)]
struct ChatArgs {
    /// Override the configured model directory.
    #[arg(long, value_name = "DIR")]
    model_dir: Option<String>,

    /// Override the configured encoder provider (`onnx` or `kmer`).
    #[arg(long, value_name = "NAME")]
    provider: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = BioChatConfig::load(cli.config.as_deref())?;
    logging::init(&config.log);

    match cli.command.unwrap_or(Commands::Chat(ChatArgs::default())) {
        Commands::Chat(args) => {
            if let Some(dir) = args.model_dir {
                config.model.model_dir = dir;
            }
            if let Some(provider) = args.provider {
                config.model.provider = provider;
            }
            let mut shell = ChatShell::new(config);
            shell.run()
        }
        Commands::FetchModel(args) => fetch::run(&config, &args),
    }
}
