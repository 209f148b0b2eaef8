//! CLI entry point for shallow-explore.

use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use shallow_explore::analysis::DEFAULT_Z_THRESHOLD;
use shallow_explore::render::{self, PLOT_HEIGHT, PLOT_WIDTH};
use shallow_explore::{
    ColumnAnalysis, CorrelationResult, ExploreConfig, ExploreError, ExploreReport,
    FilterCondition, FilterSpec, ReportGenerator, ReportParams, RowFilter, Table, Theme, detect,
    export, io, render_histogram_with,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// CLI-compatible theme enum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliTheme {
    /// Grey text on a light background
    Light,
    /// Light text on a grey background
    Dark,
}

impl From<CliTheme> for Theme {
    fn from(cli: CliTheme) -> Self {
        match cli {
            CliTheme::Light => Theme::Light,
            CliTheme::Dark => Theme::Dark,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Shallow exploratory data analysis of CSV files",
    long_about = "Print a quick overview of every column in a CSV file: a line plot with \
                  summary statistics for numeric columns, a frequency histogram for the rest.\n\n\
                  EXAMPLES:\n  \
                  # Overview of every column\n  \
                  shallow-explore --csv data.csv\n\n  \
                  # Only rows where city is Oslo, dark theme\n  \
                  shallow-explore --csv data.csv --filter-column city --filter-condition equals \
                  --filter-value Oslo --style dark\n\n  \
                  # Correlation and outliers\n  \
                  shallow-explore --csv data.csv --correlate temp rain --anomalies --threshold 2.5\n\n  \
                  # Machine-readable report\n  \
                  shallow-explore --csv data.csv --json | jq .profile"
)]
struct Args {
    /// Path to the CSV file to explore
    #[arg(long)]
    csv: String,

    /// Panel colour theme
    #[arg(long, value_enum, default_value = "light")]
    style: CliTheme,

    /// Print the column profile (inferred type and completeness)
    #[arg(long)]
    profile: bool,

    /// Print the Pearson correlation between two columns
    #[arg(long, num_args = 2, value_names = ["COLUMN_A", "COLUMN_B"])]
    correlate: Option<Vec<String>>,

    /// Detect Z-score anomalies in numeric columns
    #[arg(long)]
    anomalies: bool,

    /// Z-score above which a value is reported as an anomaly
    #[arg(long, default_value_t = DEFAULT_Z_THRESHOLD)]
    threshold: f64,

    /// Column to filter rows on
    #[arg(long, requires = "filter_condition")]
    filter_column: Option<String>,

    /// Filter condition (equals, contains, starts_with, ends_with, greater_than, less_than)
    #[arg(long, requires = "filter_value")]
    filter_condition: Option<String>,

    /// Value the filter condition compares against
    #[arg(long, requires = "filter_column")]
    filter_value: Option<String>,

    /// Write the analysed rows as a JSON array to this path
    #[arg(long)]
    export: Option<PathBuf>,

    /// Output JSON to stdout instead of panels
    ///
    /// Disables all logs; only outputs the report.
    /// Useful for piping to other tools: `... --json | jq .columns`
    #[arg(long)]
    json: bool,

    /// Write a JSON report to the output directory
    ///
    /// The report will be saved as <input_name>_report.json
    #[arg(short = 'r', long)]
    emit_report: bool,

    /// Output directory for reports
    #[arg(short, long, default_value = "./outputs")]
    output: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Only show warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    // Load environment variables from .env file
    dotenv().ok();

    if !Path::new(&args.csv).exists() {
        return Err(anyhow!("Input file not found: {}", args.csv));
    }

    let config = ExploreConfig::builder()
        .anomaly_threshold(args.threshold)
        .theme(args.style.into())
        .build()?;

    info!("Loading dataset from: {}", args.csv);
    let table = io::load_table(&args.csv)?;

    let mut warnings = Vec::new();
    let (table, filter) = apply_filter(table, &args, &mut warnings);

    let correlation = match args.correlate.as_deref() {
        Some([column_a, column_b]) => {
            recover(CorrelationResult::compute(&table, column_a, column_b), &mut warnings)?
        }
        _ => None,
    };

    let anomalies = args
        .anomalies
        .then(|| detect(&table, config.anomaly_threshold));

    if let Some(ref path) = args.export {
        export::write_rows_json(&table, path)?;
    }

    let report = ReportGenerator::build_report(ReportParams {
        input_file: &args.csv,
        table: &table,
        config: &config,
        filter,
        correlation,
        anomalies,
        warnings,
    })?;

    if args.emit_report {
        let generator = ReportGenerator::new(PathBuf::from(&args.output));
        let report_path = generator.write_report_to_file(&report, &extract_file_stem(&args.csv))?;
        info!("Report written to: {}", report_path.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_panels(&report, &config, args.profile);

    Ok(())
}

/// Restrict the table to the rows selected by the filter flags, if given.
///
/// An unknown condition keeps no rows; it is recorded as a warning rather
/// than aborting the run.
fn apply_filter(
    table: Table,
    args: &Args,
    warnings: &mut Vec<String>,
) -> (Table, Option<FilterSpec>) {
    let (Some(column), Some(condition), Some(value)) = (
        args.filter_column.as_deref(),
        args.filter_condition.as_deref(),
        args.filter_value.as_deref(),
    ) else {
        return (table, None);
    };

    let filtered = RowFilter::apply(&table, column, condition, value);
    info!(
        "Filter {} {} '{}' kept {} of {} rows",
        column,
        condition,
        value,
        filtered.row_count(),
        table.row_count()
    );

    if table.column_index(column).is_none() {
        warnings.push(ExploreError::ColumnNotFound(column.to_string()).to_string());
    }

    match condition.parse::<FilterCondition>() {
        Ok(condition) => {
            let spec = FilterSpec {
                column: column.to_string(),
                condition,
                value: value.to_string(),
            };
            (filtered, Some(spec))
        }
        Err(e) => {
            warnings.push(e.to_string());
            (filtered, None)
        }
    }
}

/// Turn a recoverable analysis error into a logged warning.
fn recover<T>(
    result: shallow_explore::ExploreResult<T>,
    warnings: &mut Vec<String>,
) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_recoverable() => {
            warn!("Skipping analysis: {}", e);
            warnings.push(e.to_string());
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Extract the file stem (name without extension) from a path.
fn extract_file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output")
        .to_string()
}

/// Print the themed panels for a finished report.
///
/// Note: uses `println!` intentionally; this is the primary output and must
/// show regardless of the log level.
fn print_panels(report: &ExploreReport, config: &ExploreConfig, show_profile: bool) {
    let theme = config.theme;

    if show_profile {
        println!("{}", render::panel(&render::profile_table(&report.profile), theme));
    }

    for column in &report.columns {
        let body = match column {
            ColumnAnalysis::Numeric { stats, values, .. } => {
                render::plot(values, PLOT_HEIGHT, PLOT_WIDTH, &stats.caption())
            }
            ColumnAnalysis::Categorical { ranked, .. } => render_histogram_with(
                ranked,
                config.histogram_top_n,
                config.histogram_bar_width,
            ),
        };
        debug!("Rendering column '{}'", column.name());
        println!("{}", render::column_panel(column.name(), &body, theme));
    }

    if let Some(ref correlation) = report.correlation {
        println!("{}", render::panel(&render::correlation_summary(correlation), theme));
    }

    if let (Some(anomalies), Some(threshold)) = (&report.anomalies, report.anomaly_threshold) {
        println!("{}", render::panel(&render::anomaly_summary(anomalies, threshold), theme));
    }

    for warning in &report.warnings {
        println!("  ! {}", warning);
    }
}
