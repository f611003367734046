//! # wagetable
//!
//! A CLI for searching, sorting and exporting labor-wage unit price tables.
//!
//! ## Overview
//!
//! wagetable is built on top of wagetablelib. It loads wage records from a
//! JSON file, shows them as a table sorted the way a table header click
//! would sort them, and exports exactly what is shown to CSV or
//! tab-delimited text.
//!
//! ## Usage
//!
//! ```bash
//! # Show every record, highest unit price first
//! wagetable --data wages.json
//!
//! # Search by job type fragment and year
//! wagetable --data wages.json --job 목공 --year 2024
//!
//! # Click the region header twice (ascending)
//! wagetable --data wages.json --sort region --sort region
//!
//! # Output as JSON
//! wagetable list --data wages.json --output json
//!
//! # Export the displayed view
//! wagetable export --data wages.json --format csv --out-dir exports/
//! ```

mod logging;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing::info;
use wagetablelib::{
    ExportFormat, ExportOptions, FilterCriteria, HeaderLabels, JsonFileProvider, QuoteStyle,
    SortDirection, ViewCoordinator, WageField, ALL_YEARS, DEFAULT_FILE_PREFIX,
};

use crate::logging::{init_logging, LogConfig, LogFormat};
use crate::render::render_table;

/// Message printed when the data source cannot be read.
const LOAD_FAILED: &str = "데이터를 불러오는 중 오류가 발생했습니다.";

/// Arguments shared by every command: where the data comes from and how it is searched and sorted
fn view_args() -> Vec<Arg> {
    vec![
        Arg::new("data")
            .short('d')
            .long("data")
            .env("WAGETABLE_DATA")
            .value_parser(value_parser!(PathBuf))
            .default_value("wages.json")
            .help("JSON file with wage records"),
        Arg::new("job")
            .short('j')
            .long("job")
            .help("Job type fragment to search for"),
        Arg::new("year")
            .short('y')
            .long("year")
            .help("Effective year (e.g. 2024); '전체' or 'all' for every year"),
        Arg::new("sort")
            .short('s')
            .long("sort")
            .action(ArgAction::Append)
            .value_parser([
                "jobType",
                "region",
                "unitPrice",
                "effectiveDate",
                "job-type",
                "unit-price",
                "effective-date",
                "price",
                "date",
            ])
            .help("Click a column header; repeat to toggle direction"),
        Arg::new("order")
            .short('o')
            .long("order")
            .value_parser(["asc", "desc"])
            .help("Force the sort direction"),
    ]
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("wagetable")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Search, sort and export labor-wage unit price tables")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)"),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .value_parser(["compact", "json"])
                .default_value("compact")
                .global(true)
                .help("Log output format"),
        )
        .args(view_args())
        .arg(output_arg())
        .subcommand(
            Command::new("list")
                .about("Show the wage table (default command)")
                .args(view_args())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("export")
                .about("Export the displayed table to a file")
                .args(view_args())
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .value_parser(["csv", "txt"])
                        .default_value("csv")
                        .help("Export layout: comma-separated or tab-delimited"),
                )
                .arg(
                    Arg::new("out-dir")
                        .long("out-dir")
                        .value_parser(value_parser!(PathBuf))
                        .default_value(".")
                        .help("Directory to write the export into"),
                )
                .arg(
                    Arg::new("prefix")
                        .long("prefix")
                        .default_value(DEFAULT_FILE_PREFIX)
                        .help("File name prefix"),
                )
                .arg(
                    Arg::new("korean-headers")
                        .long("korean-headers")
                        .action(ArgAction::SetTrue)
                        .help("Use 직종,지역,단가,기준일 as header labels"),
                )
                .arg(
                    Arg::new("escape-quotes")
                        .long("escape-quotes")
                        .action(ArgAction::SetTrue)
                        .help("Double embedded quotes in CSV fields"),
                ),
        )
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .value_parser(["table", "json"])
        .default_value("table")
        .help("Output format")
}

/// Build search criteria from matches, or `None` when no search flag was given
fn extract_criteria(matches: &ArgMatches) -> Option<FilterCriteria> {
    let job = matches.get_one::<String>("job");
    let year = matches.get_one::<String>("year");
    if job.is_none() && year.is_none() {
        return None;
    }
    Some(FilterCriteria::build(
        job.cloned().unwrap_or_default(),
        year.map(|s| s.as_str()).unwrap_or(ALL_YEARS),
    ))
}

/// Build export options from matches
fn extract_export_options(matches: &ArgMatches) -> ExportOptions {
    let mut options = ExportOptions::new();
    if let Some(prefix) = matches.get_one::<String>("prefix") {
        options = options.file_prefix(prefix);
    }
    if matches.get_flag("korean-headers") {
        options = options.headers(HeaderLabels::korean());
    }
    if matches.get_flag("escape-quotes") {
        options = options.quoting(QuoteStyle::Escaped);
    }
    options
}

/// Load data and apply search and sort flags
fn prepare_view(matches: &ArgMatches, export_options: ExportOptions) -> anyhow::Result<ViewCoordinator> {
    let data = matches
        .get_one::<PathBuf>("data")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("wages.json"));
    let provider = JsonFileProvider::new(data);
    let mut view = ViewCoordinator::new()?.with_export_options(export_options);

    let loaded = match extract_criteria(matches) {
        Some(criteria) => view.search(&provider, criteria),
        None => view.startup(&provider),
    };
    loaded.with_context(|| LOAD_FAILED.to_string())?;

    if let Some(clicks) = matches.get_many::<String>("sort") {
        for click in clicks {
            view.set_sort(click.parse::<WageField>()?);
        }
    }
    if let Some(order) = matches.get_one::<String>("order") {
        let direction: SortDirection = order.parse()?;
        let state = view.sort_state();
        view.set_sort_state(match direction {
            SortDirection::Ascending => state.ascending(),
            SortDirection::Descending => state.descending(),
        });
    }

    Ok(view)
}

/// Handler for list command
fn list_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let view = prepare_view(matches, ExportOptions::new())?;
    let table = view.table();

    let output = matches
        .get_one::<String>("output")
        .map(|s| s.as_str())
        .unwrap_or("table");
    if output == "json" {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&table)?));
    }
    Ok(render_table(&table))
}

/// Handler for export command
fn export_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let view = prepare_view(matches, extract_export_options(matches))?;

    let format: ExportFormat = matches
        .get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or("csv")
        .parse()?;
    let out_dir = matches
        .get_one::<PathBuf>("out-dir")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));

    let file = view.export_current_view(format)?;
    let path = file
        .write_to(&out_dir)
        .with_context(|| format!("failed to write export into '{}'", out_dir.display()))?;
    info!(rows = file.row_count, "exported {}", file.file_name);
    Ok(format!("{}\n", path.display()))
}

fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    match matches.subcommand() {
        Some(("list", sub)) => list_handler(sub),
        Some(("export", sub)) => export_handler(sub),
        // No subcommand: treat as list
        _ => list_handler(matches),
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    let verbosity = matches.get_count("verbose");
    let format = matches
        .get_one::<String>("log-format")
        .map(|s| LogFormat::from_arg(s))
        .unwrap_or_default();
    init_logging(
        &LogConfig::from_verbosity(verbosity)
            .with_format(format)
            .with_ansi(std::io::stderr().is_terminal()),
    );

    match run(&matches) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
