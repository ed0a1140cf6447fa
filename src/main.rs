use changelog_extract::cli::extract_block::ExtractBlockArgs;
use changelog_extract::cli::list_versions::ListVersionsArgs;
use changelog_extract::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "changelog-extract")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract release notes from Keep a Changelog files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file (default: ./.changelog-extract.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the changelog block for one version
    #[command(name = "extract-block", alias = "extract_changelog_block")]
    ExtractBlock(ExtractBlockArgs),

    /// List all versions with their release dates, newest first
    #[command(name = "list-versions", alias = "extract_changelog_version_date")]
    ListVersions(ListVersionsArgs),

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = changelog_extract::cli::logging::init_logging(cli.verbose) {
        eprintln!("{}", format!("Warning: logging disabled: {}", e).yellow());
    }

    match run(cli) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}", format!("Error: {:#}", e).red());
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::ExtractBlock(args) => changelog_extract::cli::extract_block::run(&args),

        Commands::ListVersions(args) => {
            let config = changelog_extract::cli::load_config(cli.config.as_deref())?;
            changelog_extract::cli::list_versions::run(&args, &config)?;
            Ok(0)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "changelog-extract", &mut io::stdout());
            Ok(0)
        }
    }
}
