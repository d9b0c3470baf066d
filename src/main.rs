// OrderSift - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation (debug mode support)
// 3. Filter input validation, snapshot loading, and filtering
// 4. Table/summary output and optional export

use clap::Parser;
use ordersift::app::state::ViewState;
use ordersift::core::export::{export_to_file, ExportFormat};
use ordersift::core::filter::FilterCriteria;
use ordersift::core::input::{DateOrder, RawDateRange, RawFilterInput};
use ordersift::core::summary::status_counts;
use ordersift::platform::config::{load_config, AppConfig, PlatformPaths};
use ordersift::platform::fs::read_snapshot;
use ordersift::ui::{summary::render_summary, table::render_table};
use ordersift::util;
use std::path::PathBuf;

/// OrderSift - Sales order snapshot viewer.
///
/// Loads a snapshot of sales orders and shows the orders matching the given
/// filters. Filters given together are combined: an order must match all
/// of them.
#[derive(Parser, Debug)]
#[command(name = "OrderSift", version, about)]
struct Cli {
    /// Snapshot file: a JSON array of sales orders, or an API response
    /// with the array under "data".
    snapshot: PathBuf,

    /// Show only orders with this status (Created, Approved, Delivered, Canceled).
    #[arg(short = 's', long = "status")]
    status: Option<String>,

    /// Date range on a timestamp field, bounds inclusive. May be repeated
    /// once per field. Example: --range createdTime 2024-01-01 2024-01-31
    #[arg(
        short = 'r',
        long = "range",
        num_args = 3,
        value_names = ["FIELD", "FROM", "TO"]
    )]
    range: Vec<String>,

    /// Show only orders whose contact name is exactly this (case-sensitive).
    #[arg(short = 'c', long = "contact")]
    contact: Option<String>,

    /// Also print order counts per status for the filtered view.
    #[arg(long = "summary")]
    summary: bool,

    /// Write the filtered view to this file.
    #[arg(short = 'o', long = "export")]
    export: Option<PathBuf>,

    /// Export format: csv or json. Defaults to the export file's extension.
    #[arg(long = "export-format", requires = "export")]
    export_format: Option<String>,

    /// How to read slash dates such as 1/5/2024 (overrides config).
    #[arg(long = "date-order", value_parser = ["mdy", "dmy"])]
    date_order: Option<String>,

    /// Directory containing config.toml (defaults to the platform config dir).
    #[arg(long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

impl Cli {
    /// Collect the filter flags as the raw form values they stand for.
    fn raw_filter_input(&self) -> RawFilterInput {
        RawFilterInput {
            status: self.status.clone(),
            ranges: self
                .range
                .chunks(3)
                .map(|chunk| RawDateRange {
                    field: chunk.first().cloned().unwrap_or_default(),
                    from: chunk.get(1).cloned(),
                    to: chunk.get(2).cloned(),
                })
                .collect(),
            contact_name: self.contact.clone(),
        }
    }
}

fn run(cli: &Cli, config: &AppConfig) -> util::error::Result<()> {
    let date_order = cli
        .date_order
        .as_deref()
        .and_then(DateOrder::parse)
        .unwrap_or(config.date_order);

    // Validate every input before touching the snapshot.
    let criteria = FilterCriteria::from_raw(&cli.raw_filter_input(), date_order)?;
    let export_format = match (&cli.export, &cli.export_format) {
        (_, Some(raw)) => Some(ExportFormat::parse(raw)?),
        (Some(path), None) => Some(ExportFormat::from_path(path)),
        (None, None) => None,
    };

    let records = read_snapshot(&cli.snapshot, config.max_snapshot_bytes)?;

    let mut state = ViewState::new();
    state.load(records, None);
    state.apply_criteria(criteria);
    tracing::info!(
        visible = state.visible_count(),
        total = state.engine().len(),
        filtered = state.is_filtered(),
        "View ready"
    );

    let visible = state.visible();
    print!("{}", render_table(&visible, config.date_style));

    if cli.summary {
        println!();
        print!("{}", render_summary(&status_counts(visible.iter().copied())));
    }

    if let (Some(path), Some(format)) = (&cli.export, export_format) {
        let count = export_to_file(&visible, path, format)?;
        eprintln!("Exported {count} orders to {}", path.display());
    }

    println!();
    println!("{}", state.status_message);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // The config decides the log level, so nothing below logs until init;
    // both steps hand back their warnings instead.
    let (config_dir, mut startup_warnings) = match &cli.config_dir {
        Some(dir) => (dir.clone(), Vec::new()),
        None => {
            let (paths, warnings) = PlatformPaths::resolve();
            (paths.config_dir, warnings)
        }
    };
    let (config, config_warnings) = load_config(&config_dir);
    startup_warnings.extend(config_warnings);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config_dir = %config_dir.display(),
        "OrderSift starting"
    );
    tracing::debug!(?config, "Configuration in effect");
    for warning in &startup_warnings {
        tracing::warn!(warning = %warning, "Startup warning");
    }

    if let Err(e) = run(&cli, &config) {
        tracing::error!(error = %e, "OrderSift failed");
        eprintln!("Error: {e}");
        std::process::exit(if e.is_validation() { 2 } else { 1 });
    }
}
