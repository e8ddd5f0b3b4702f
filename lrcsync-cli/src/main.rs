use anyhow::Result;
use clap::{Parser, Subcommand};
use lrcsync_cli::{commands, OutputFormat};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "lrcsync")]
#[command(about = "lrcsync - Parse, check and normalize LRC lyrics", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse lyrics and print the time-ordered cues
    Parse {
        /// Input LRC file, or - for stdin
        #[arg(short, long)]
        input: String,

        /// Output JSON file for parsed lyrics
        #[arg(short, long)]
        output: Option<String>,

        /// Format for stdout when no output file is given
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Report parse statistics and skipped directives
    Check {
        /// Input LRC file, or - for stdin
        #[arg(short, long)]
        input: String,
    },

    /// Rewrite lyrics sorted, with the offset applied
    Normalize {
        /// Input LRC file, or - for stdin
        #[arg(short, long)]
        input: String,

        /// Output LRC file, or - for stdout
        #[arg(short, long)]
        output: String,
    },

    /// Show the cue active at a playback position
    At {
        /// Input LRC file, or - for stdin
        #[arg(short, long)]
        input: String,

        /// Playback position as MM:SS.mmm
        #[arg(short, long)]
        time: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Parse {
            input,
            output,
            format,
        } => commands::parse::execute(&input, output.as_deref(), format),

        Commands::Check { input } => commands::check::execute(&input),

        Commands::Normalize { input, output } => commands::normalize::execute(&input, &output),

        Commands::At { input, time } => commands::at::execute(&input, &time),
    }
}
