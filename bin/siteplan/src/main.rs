//! Siteplan CLI
//!
//! Resolves a static site's deployment-aware build configuration and emits
//! it for the consuming build tool.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for Siteplan.
#[derive(Parser)]
#[command(
    name = "siteplan",
    version,
    about = "Deployment-aware build configuration for static sites"
)]
struct Cli {
    /// Path to manifest file
    #[arg(short, long, default_value = "siteplan.toml")]
    manifest: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Resolve the build configuration and print it
    Resolve {
        /// Force production resolution regardless of the environment
        #[arg(long)]
        production: bool,
        /// Override the environment signal (e.g., production)
        #[arg(long)]
        env: Option<String>,
        /// Output format (toml, json)
        #[arg(short, long, default_value = "toml")]
        format: String,
    },
    /// Validate the manifest and its resolutions
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Create a manifest scaffold
    Init {
        /// Path for the new manifest
        #[arg(default_value = "siteplan.toml")]
        path: std::path::PathBuf,
        /// Overwrite an existing manifest
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    siteplan::init_tracing(cli.verbose);

    match cli.command {
        Commands::Resolve {
            production,
            env,
            format,
        } => {
            siteplan::cmd::resolve::run(&cli.manifest, production, env.as_deref(), &format)?;
        }
        Commands::Check { strict } => {
            siteplan::cmd::check::run(&cli.manifest, strict)?;
        }
        Commands::Init { path, force } => {
            siteplan::cmd::init::run(&path, force)?;
        }
    }

    Ok(())
}
