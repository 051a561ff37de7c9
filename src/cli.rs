//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::csv_report_adapter::CsvReportAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::batch::{run_batch, ResultTable};
use crate::domain::config_validation::{
    check_precision, resolve_settings, unknown_sections, RunSettings,
};
use crate::domain::error::PivotError;
use crate::domain::layout::Layout;
use crate::domain::record::NamingChoice;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(
    name = "pivotcalc",
    about = "Classic, Fibonacci, Camarilla, Woodie and DeMark pivot levels from OHLC data"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute pivot levels for every row of a CSV file
    Compute {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// auto, standard or exchange
        #[arg(long)]
        naming: Option<NamingChoice>,
        /// wide or split
        #[arg(long)]
        layout: Option<Layout>,
        #[arg(long)]
        precision: Option<usize>,
        /// Write CSV here instead of printing tables
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub naming: Option<NamingChoice>,
    pub layout: Option<Layout>,
    pub precision: Option<usize>,
    pub output: Option<PathBuf>,
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Compute {
            input,
            config,
            naming,
            layout,
            precision,
            output,
        } => {
            let overrides = Overrides {
                naming,
                layout,
                precision,
                output,
            };
            run_compute(&input, config.as_ref(), overrides)
        }
        Command::Validate { config } => run_validate(&config),
    }
}

/// Merge config-file settings (or defaults) with CLI overrides.
pub fn build_settings(
    config_path: Option<&PathBuf>,
    overrides: Overrides,
) -> Result<RunSettings, PivotError> {
    let mut settings = match config_path {
        Some(path) => {
            eprintln!("Loading config from {}", path.display());
            let adapter = FileConfigAdapter::from_file(path)?;
            resolve_settings(&adapter)?
        }
        None => RunSettings::default(),
    };

    if let Some(naming) = overrides.naming {
        settings.naming = naming;
    }
    if let Some(layout) = overrides.layout {
        settings.layout = layout;
    }
    if let Some(precision) = overrides.precision {
        settings.precision = Some(check_precision(precision)?);
    }
    if let Some(output) = overrides.output {
        settings.output_path = Some(output.display().to_string());
    }
    Ok(settings)
}

/// Read, compute, write. Row failures are reported but do not fail the run.
pub fn run_pipeline(
    data_port: &dyn DataPort,
    report_port: &dyn ReportPort,
    settings: &RunSettings,
) -> Result<ResultTable, PivotError> {
    let batch = data_port.fetch_records(settings.naming)?;
    eprintln!(
        "Read {} rows ({} column naming)",
        batch.records.len(),
        batch.naming
    );

    let results = run_batch(&batch.records);

    for (index, failure) in results.failed() {
        let symbol = if failure.symbol.is_empty() {
            "<no symbol>"
        } else {
            failure.symbol.as_str()
        };
        eprintln!("warning: row {} ({}): {}", index + 1, symbol, failure.error);
    }

    report_port.write_results(&results, settings.layout)?;

    let summary = results.summary();
    eprintln!(
        "{} rows: {} computed, {} failed",
        summary.rows, summary.computed, summary.failed
    );
    Ok(results)
}

fn run_compute(input: &PathBuf, config_path: Option<&PathBuf>, overrides: Overrides) -> ExitCode {
    let settings = match build_settings(config_path, overrides) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!("Reading prices from {}", input.display());
    let data_port = CsvAdapter::new(input.clone());

    let outcome = match &settings.output_path {
        Some(path) => {
            let report = CsvReportAdapter::new(PathBuf::from(path), settings.precision);
            run_pipeline(&data_port, &report, &settings)
        }
        None => {
            let report = TextReportAdapter::new(settings.precision);
            run_pipeline(&data_port, &report, &settings)
        }
    };

    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let adapter = match FileConfigAdapter::from_file(config_path) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    for section in unknown_sections(&adapter) {
        eprintln!("warning: ignoring unknown section [{}]", section);
    }

    let settings = match resolve_settings(&adapter) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let naming = match settings.naming {
        NamingChoice::Auto => "auto".to_string(),
        NamingChoice::Fixed(n) => n.to_string(),
    };
    eprintln!("  naming:    {}", naming);
    eprintln!("  layout:    {}", settings.layout);
    match settings.precision {
        Some(p) => eprintln!("  precision: {}", p),
        None => eprintln!("  precision: full"),
    }
    match &settings.output_path {
        Some(p) => eprintln!("  output:    {}", p),
        None => eprintln!("  output:    stdout"),
    }

    eprintln!("\nConfiguration is valid.");
    ExitCode::SUCCESS
}
