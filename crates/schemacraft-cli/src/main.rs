use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use schemacraft_config::ExportFormat;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

mod commands;
mod utils;
use commands::{ExportArgs, SchemaKind, cmd_export, cmd_formats, cmd_init, cmd_json_schema};

/// schemacraft command-line interface.
#[derive(Parser, Debug)]
#[command(name = "schemacraft", author, version, about)]
struct Cli {
    /// Configuration file. Defaults apply when it does not exist.
    #[arg(long, global = true, default_value = utils::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Increase log output (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a schema file into one or all export formats.
    Export {
        /// Schema file (.json, .yaml or .yml).
        schema: PathBuf,
        /// Target format; falls back to `defaultFormat` from the config.
        #[arg(short, long, value_enum, conflicts_with = "all")]
        format: Option<ExportFormat>,
        /// Write the output to this file instead of stdout.
        #[arg(short, long, conflicts_with = "all")]
        out: Option<PathBuf>,
        /// Render every format into `--out-dir`.
        #[arg(long, requires = "out_dir")]
        all: bool,
        /// Directory for `--all` output.
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// List supported export formats.
    Formats,
    /// Initialize schemacraft.json with defaults.
    Init,
    /// Print the JSON Schema of the schema file format.
    JsonSchema {
        /// Which file format to describe.
        #[arg(value_enum, default_value_t = SchemaKind::Model)]
        kind: SchemaKind,
    },
}

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Export {
            schema,
            format,
            out,
            all,
            out_dir,
        } => cmd_export(
            &cli.config,
            ExportArgs {
                schema,
                format,
                out,
                all,
                out_dir,
            },
        ),
        Commands::Formats => cmd_formats(),
        Commands::Init => cmd_init(&cli.config),
        Commands::JsonSchema { kind } => cmd_json_schema(kind),
    }
}
