//! profile-form CLI
//!
//! Command-line tool for driving the profile form from event scripts.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use form_session::profile::profile_schema;
use form_session_cli::replay::{describe_schema, replay, write_report};
use form_session_cli::script::{parse_script, read_script};

/// Replay form events against the personal profile form.
#[derive(Parser)]
#[command(name = "profile-form")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSON-lines event script.
    Replay {
        /// Script path, or `-` for stdin.
        #[arg(env = "PROFILE_FORM_SCRIPT", default_value = "-")]
        script: PathBuf,

        /// Print submitted payloads on a single line.
        #[arg(short, long)]
        compact: bool,
    },

    /// Describe the profile form's fields.
    Schema,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Replay { script, compact } => {
            info!("Replaying {}", script.display());
            let source = read_script(&script)?;
            let lines = parse_script(&source)?;
            let report = replay(&lines)?;
            write_report(&report, &mut out, compact)?;
        }

        Commands::Schema => {
            describe_schema(&profile_schema()?, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
