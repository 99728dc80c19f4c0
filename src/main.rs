//! llm-commit - CLI entry point.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, error};

use llm_commit::{
    CommitGenArgs, CommitGenConfig, ConsoleTerminal, EnvSnapshot, HttpCompletionClient, Outcome,
    SystemGit, logging, run_commit_gen,
};

/// Generate git commit messages from staged changes using an LLM.
#[derive(Parser, Debug)]
#[command(name = "llm-commit")]
#[command(about = "Generate git commit messages from staged changes using an LLM")]
#[command(version)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a commit message for the staged changes and commit it
    #[command(name = "commit-gen")]
    CommitGen(CommitGenArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli).await {
        Ok(outcome) => {
            debug!("Finished: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            for cause in e.chain().skip(1) {
                error!("  Caused by: {cause}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<Outcome> {
    match cli.command {
        Commands::CommitGen(args) => commit_gen(&args).await,
    }
}

async fn commit_gen(args: &CommitGenArgs) -> Result<Outcome> {
    let env = EnvSnapshot::capture();

    // Usage errors must surface before git or the network is touched.
    let config = CommitGenConfig::resolve(args, &env)?;

    let git = SystemGit::locate()?;
    let llm = HttpCompletionClient::new(config.provider.clone())
        .context("Failed to set up the model client")?;
    let mut terminal = ConsoleTerminal;

    let outcome = run_commit_gen(&config, &env, &git, &llm, &mut terminal).await?;
    Ok(outcome)
}
