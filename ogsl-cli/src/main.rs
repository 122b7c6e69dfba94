//! Command-line interface for ogsl
//! This binary converts OGSL sign lists into a reading → glyph mapping and inspects their contents.
//!
//! Usage:
//!   ogsl convert `<path>` [-o `<file>`] [--pretty] [--skip-invalid]   - Write the reading map as JSON
//!   ogsl inspect `<path>` [--format summary|json|yaml]              - Report on or dump the parsed signs
//!
//! Both commands accept `--config <file>`; without it, `ogsl.toml` in the working directory is
//! used when present.

use clap::{Arg, ArgAction, ArgMatches, Command};
use ogsl_config::{Loader, OgslConfig};
use ogsl_parser::{DocumentLoader, SignList};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

const USER_CONFIG: &str = "ogsl.toml";

fn cli() -> Command {
    let path_arg = Arg::new("path")
        .help("Path to the sign-list (.asl) file")
        .required(true)
        .index(1);
    let config_arg = Arg::new("config")
        .long("config")
        .short('c')
        .help("Configuration file layered over the defaults");
    let skip_arg = Arg::new("skip-invalid")
        .long("skip-invalid")
        .help("Skip malformed sign blocks instead of aborting")
        .action(ArgAction::SetTrue);

    Command::new("ogsl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting and inspecting OGSL sign lists")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("convert")
                .about("Write the reading → glyph mapping as JSON")
                .arg(path_arg.clone())
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file, or '-' for stdout (default: convert.output)"),
                )
                .arg(
                    Arg::new("pretty")
                        .long("pretty")
                        .help("Pretty-print the JSON")
                        .action(ArgAction::SetTrue),
                )
                .arg(skip_arg.clone())
                .arg(config_arg.clone()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Report on the sign list, or dump the parsed signs")
                .arg(path_arg)
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["summary", "json", "yaml"])
                        .default_value("summary"),
                )
                .arg(skip_arg)
                .arg(config_arg),
        )
}

fn main() {
    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("convert", sub)) => handle_convert_command(sub),
        Some(("inspect", sub)) => handle_inspect_command(sub),
        _ => unreachable!("clap requires a subcommand"),
    }
}

/// Load configuration, applying the flags shared by every subcommand.
fn load_config(matches: &ArgMatches) -> OgslConfig {
    let loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(USER_CONFIG),
    };
    let loader = if matches.get_flag("skip-invalid") {
        loader.set_override("parse.on_block_error", "skip")
    } else {
        Ok(loader)
    };
    let config = loader.and_then(Loader::build).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    init_tracing(&config.logging.level);
    config
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse the document at `path`, exiting with a diagnostic on failure.
fn parse_or_exit(path: &str, config: &OgslConfig) -> SignList {
    let list = DocumentLoader::from_path(path)
        .and_then(|loader| loader.parse_with(config.parse.on_block_error))
        .unwrap_or_else(|e| {
            eprintln!("Parse error: {}", e);
            std::process::exit(1);
        });
    for skipped in &list.skipped {
        eprintln!("Skipped: {}", skipped);
    }
    list
}

/// Handle the convert command
fn handle_convert_command(matches: &ArgMatches) {
    let config = load_config(matches);
    let path = matches
        .get_one::<String>("path")
        .expect("path is required");
    let list = parse_or_exit(path, &config);
    let readings = list.project();

    let pretty = matches.get_flag("pretty") || config.convert.pretty;
    let serialized = if pretty {
        serde_json::to_string_pretty(&readings)
    } else {
        serde_json::to_string(&readings)
    }
    .unwrap_or_else(|e| {
        eprintln!("Error serializing readings: {}", e);
        std::process::exit(1);
    });

    let output = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| config.convert.output.clone());
    if output == Path::new("-") {
        println!("{}", serialized);
        return;
    }
    if let Err(e) = fs::write(&output, serialized) {
        eprintln!("Error writing {}: {}", output.display(), e);
        std::process::exit(1);
    }
    info!(
        readings = readings.len(),
        signs = list.signs.len(),
        "wrote {}",
        output.display()
    );
}

/// Handle the inspect command
fn handle_inspect_command(matches: &ArgMatches) {
    let config = load_config(matches);
    let path = matches
        .get_one::<String>("path")
        .expect("path is required");
    let list = parse_or_exit(path, &config);

    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("summary");
    let formatted = match format {
        "json" => serde_json::to_string_pretty(&list.signs).map_err(|e| e.to_string()),
        "yaml" => serde_yaml::to_string(&list.signs).map_err(|e| e.to_string()),
        _ => Ok(summary(&list)),
    }
    .unwrap_or_else(|e| {
        eprintln!("Error formatting signs: {}", e);
        std::process::exit(1);
    });

    print!("{}", formatted);
}

fn summary(list: &SignList) -> String {
    let report = &list.report;
    let stats = list.stats();
    let other_types = report
        .other_block_types
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::new();
    out.push_str(&format!(
        "sign blocks: {} of {} total\n",
        report.sign_blocks, report.total_blocks
    ));
    out.push_str(&format!("other block types: {}\n", other_types));
    out.push_str(&format!(
        "signs: {} ({} with cuneiform, {} without)\n",
        stats.signs, stats.with_cuneiform, stats.without_cuneiform
    ));
    out.push_str(&format!("discarded (@fake): {}\n", list.discarded));
    out.push_str(&format!("skipped (invalid): {}\n", list.skipped.len()));
    out.push_str(&format!("forms: {}\n", stats.forms));
    out.push_str(&format!("values: {}\n", stats.values));
    out
}
