use clap::{Parser, Subcommand};
use msw_core::UnitConversion;
use msw_project::{CaseModel, ProjectError, build_case};
use msw_restart::AggregateMswData;
use msw_topology::{discover, segment_order};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error(transparent)]
    Model(#[from] msw_core::MswError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "msw-cli")]
#[command(about = "Multi-segment well restart encoder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate case file syntax and structure
    Validate {
        /// Path to the case file (YAML or JSON)
        case_path: PathBuf,
    },
    /// Show branch discovery and segment ordering of one well
    Topology {
        /// Path to the case file (YAML or JSON)
        case_path: PathBuf,
        /// Report step index
        #[arg(long, default_value_t = 0)]
        step: usize,
        /// Well name
        #[arg(long)]
        well: String,
    },
    /// Encode the segment arrays of a report step
    Encode {
        /// Path to the case file (YAML or JSON)
        case_path: PathBuf,
        /// Report step index
        #[arg(long, default_value_t = 0)]
        step: usize,
        /// Output JSON file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Topology {
            case_path,
            step,
            well,
        } => cmd_topology(&case_path, step, &well),
        Commands::Encode {
            case_path,
            step,
            output,
        } => cmd_encode(&case_path, step, output.as_deref()),
    }
}

fn load_model(case_path: &Path) -> CliResult<CaseModel> {
    let case = msw_project::load(case_path)?;
    Ok(build_case(&case)?)
}

fn cmd_validate(case_path: &Path) -> CliResult<()> {
    println!("Validating case: {}", case_path.display());
    let model = load_model(case_path)?;
    println!("✓ Case is valid");
    println!("  Name: {}", model.name);
    println!("  Report steps: {}", model.num_steps());
    println!("  Unit convention: {}", model.units.convention());
    Ok(())
}

fn join<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn cmd_topology(case_path: &Path, step: usize, well_name: &str) -> CliResult<()> {
    let model = load_model(case_path)?;
    let well = model.well(step, well_name)?;
    let segments = well.segments()?;

    let found = discover(segments)?;
    let order = segment_order(segments)?;

    println!("Well {} at step {}: {} segments", well.name(), step, segments.len());
    println!("  Visiting order: {}", join(&found.visiting_order));
    if found.branches.is_empty() {
        println!("  No lateral branches");
    } else {
        println!("  Branches:");
        for kick_off in &found.branches {
            println!(
                "    {} kicks off at segment {} (outlet {})",
                kick_off.branch,
                kick_off.segment,
                msw_core::segment_or_zero(kick_off.outlet)
            );
        }
    }
    println!(
        "  Toe-to-heel order: {}",
        join(order.iter().map(|&i| segments.at(i).number))
    );
    Ok(())
}

#[derive(Serialize)]
struct EncodedArrays<'a> {
    case: &'a str,
    step: usize,
    iseg: &'a [i32],
    rseg: &'a [f64],
    ilbs: &'a [i32],
    ilbr: &'a [i32],
}

fn cmd_encode(case_path: &Path, step: usize, output: Option<&Path>) -> CliResult<()> {
    let model = load_model(case_path)?;
    let data: AggregateMswData = model.capture(step)?;

    let arrays = EncodedArrays {
        case: &model.name,
        step,
        iseg: data.iseg(),
        rseg: data.rseg(),
        ilbs: data.ilbs(),
        ilbr: data.ilbr(),
    };
    let json = serde_json::to_string_pretty(&arrays)?;

    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!(path = %path.display(), "wrote encoded arrays");
            println!("✓ Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(())
}
