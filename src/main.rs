//! Command-line entry point for csv-select.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

use csv_select::projection::MalformedRowPolicy;
use csv_select::selection::{select_from_path, select_from_reader, SelectOptions, SelectionRequest};

/// Select columns from comma-separated data and filter rows by simple comparisons.
#[derive(Parser, Debug)]
#[command(name = "csv-select")]
#[command(author, version, about)]
#[command(after_help = "EXAMPLES:\n  \
    # Keep col1 and col3 where col3 is not \"l3c3\"\n  \
    csv-select -c col1,col3 -f 'col3!=l3c3' data.csv\n\n  \
    # Several filters are ANDed together\n  \
    csv-select -c name,age -f 'age>=30' -f 'name!=bob' people.csv\n\n  \
    # Read the whole job from a JSON file\n  \
    csv-select --job job.json\n\n\
Comparisons are ordinal string comparisons: \"9\" > \"10\".")]
struct Cli {
    /// Input CSV file (stdin if omitted or '-')
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Comma-separated list of columns to keep, in output order
    #[arg(short, long, value_name = "LIST")]
    columns: Option<String>,

    /// Filter expression such as 'col3>1' (repeatable)
    #[arg(short, long = "filter", value_name = "EXPR")]
    filters: Vec<String>,

    /// File with one filter expression per line
    #[arg(long, value_name = "FILE")]
    filter_file: Option<PathBuf>,

    /// JSON job file with input, columns and filters; flags override its fields
    #[arg(long, value_name = "FILE")]
    job: Option<PathBuf>,

    /// What to do with data lines that are too short
    #[arg(long, value_enum)]
    on_malformed: Option<MalformedArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MalformedArg {
    Skip,
    Abort,
    FillEmpty,
}

impl From<MalformedArg> for MalformedRowPolicy {
    fn from(arg: MalformedArg) -> Self {
        match arg {
            MalformedArg::Skip => MalformedRowPolicy::Skip,
            MalformedArg::Abort => MalformedRowPolicy::Abort,
            MalformedArg::FillEmpty => MalformedRowPolicy::FillEmpty,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("csv-select: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let job = match &cli.job {
        Some(path) => Some(
            SelectionRequest::from_json_path(path)
                .with_context(|| format!("failed to load job file {}", path.display()))?,
        ),
        None => None,
    };

    let columns = match (&cli.columns, &job) {
        (Some(c), _) => c.clone(),
        (None, Some(job)) => job.columns_csv(),
        (None, None) => bail!("no columns selected (use --columns or --job)"),
    };

    let mut filter_lines: Vec<String> = Vec::new();
    if cli.filters.is_empty() && cli.filter_file.is_none() {
        if let Some(job) = &job {
            filter_lines.push(job.filter_block());
        }
    }
    filter_lines.extend(cli.filters.iter().cloned());
    if let Some(path) = &cli.filter_file {
        let block = fs::read_to_string(path)
            .with_context(|| format!("failed to read filter file {}", path.display()))?;
        filter_lines.push(block);
    }
    let filters = filter_lines.join("\n");

    let mut options = SelectOptions::default();
    if let Some(policy) = job.as_ref().and_then(|j| j.malformed_rows) {
        options.malformed_rows = policy;
    }
    if let Some(arg) = cli.on_malformed {
        options.malformed_rows = arg.into();
    }

    let input = cli.input.or_else(|| job.map(|j| j.input));
    let selection = match input {
        Some(path) if path.as_os_str() != "-" => select_from_path(&path, &columns, &filters, &options)
            .with_context(|| format!("failed to process {}", path.display()))?,
        _ => select_from_reader(io::stdin().lock(), "<stdin>", &columns, &filters, &options)
            .context("failed to process stdin")?,
    };

    selection.write_to(io::stdout().lock())?;
    Ok(())
}
