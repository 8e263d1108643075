use clap::{Parser, Subcommand};
use liftsheet::cli;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "liftsheet")]
#[command(about = "Import workout spreadsheets into structured program seed files.")]
#[command(long_about = "Liftsheet - workout spreadsheet importer

Reads a training workbook (one sheet per day) and produces a seed document:
one program, one workout per day sheet, ordered exercise records with
section, superset and circuit grouping inferred from the sheet layout.

COMMANDS:
  import    - Workbook (.xlsx) to seed file (.json or .yaml)
  inspect   - List workouts and exercises from a seed file or workbook
  sheets    - Show workbook sheets and the day each maps to
  template  - Write a starter workbook in the expected layout

EXAMPLES:
  liftsheet import Spartan_Elite.xlsx seed_data.json
  liftsheet inspect seed_data.json
  liftsheet sheets Spartan_Elite.xlsx --config program.yaml
  liftsheet template my_program.xlsx

Set RUST_LOG=liftsheet=debug for per-row tracing.")]
#[command(version)]
struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Import a workout workbook into a seed file.

SHEETS:
  Sheets are matched by exact name against the sheet table
  (default: 'DAY 1 - MON' ... 'DAY 7 - SUN'). Other sheets are ignored.

LAYOUT:
  A1             Workout title (falls back to the sheet name)
  Header row     First row mentioning 'Exercise'; Sets, Reps, Rest,
                 Notes and Focus columns are located by keyword
  Section rows   A name with empty Sets and Reps starts a new section
  Exercise rows  '1A. Name' prefixes group supersets

OUTPUT:
  .json (default) or .yaml, chosen by the output extension.")]
    /// Import a workbook into a seed file
    Import {
        /// Path to workbook (.xlsx, .xls, .ods)
        input: PathBuf,

        /// Output seed file (.json or .yaml)
        #[arg(default_value = "seed_data.json")]
        output: PathBuf,

        /// Import configuration (program details, sheet table)
        #[arg(short, long, env = "LIFTSHEET_CONFIG")]
        config: Option<PathBuf>,
    },

    /// List workouts and exercises from a seed file or workbook
    Inspect {
        /// Seed file (.json/.yaml) or workbook (.xlsx)
        input: PathBuf,

        /// Import configuration, used when the input is a workbook
        #[arg(short, long, env = "LIFTSHEET_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Show workbook sheets and the day each maps to
    Sheets {
        /// Path to workbook
        input: PathBuf,

        /// Import configuration (sheet table)
        #[arg(short, long, env = "LIFTSHEET_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Write a starter workbook
    Template {
        /// Output workbook path (.xlsx)
        output: PathBuf,

        /// Import configuration (sheet table)
        #[arg(short, long, env = "LIFTSHEET_CONFIG")]
        config: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_filter = if verbose { "liftsheet=debug" } else { "liftsheet=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Import {
            input,
            output,
            config,
        } => cli::import(input, output, config, cli.verbose)?,

        Commands::Inspect { input, config } => cli::inspect(input, config)?,

        Commands::Sheets { input, config } => cli::sheets(input, config)?,

        Commands::Template { output, config } => cli::template(output, config)?,
    }

    Ok(())
}
