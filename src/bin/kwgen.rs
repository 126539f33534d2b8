//! Command-line interface for kwgen
//! Regenerates the keyword list from a grammar definition.
//!
//! Usage:
//!   kwgen                                   - Use defaults (and `kwgen.toml` if present)
//!   kwgen --input `<path>` --output `<path>`  - Override paths
//!   kwgen --stdout                          - Print instead of writing the output file

use clap::{Arg, ArgAction, ArgMatches, Command};
use kwgen::config::{load, GeneratorConfig, Overrides};
use kwgen::generate::{generate, load_and_render};
use kwgen::rendering::OutputFormat;
use std::path::PathBuf;
use tracing::Level;

fn main() {
    let matches = Command::new("kwgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract grammar keywords into a generated source list")
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .help("Grammar file to scan (default: tree-sitter-sql/grammar.js)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("File to generate (default: src/sql.ts)"),
        )
        .arg(
            Arg::new("marker")
                .long("marker")
                .short('m')
                .help("Token preceding each keyword call (default: kw)"),
        )
        .arg(
            Arg::new("list-name")
                .long("list-name")
                .help("Name of the exported list (default: KEYWORDS)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["typescript", "ts", "json"]),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Additional configuration file layered over kwgen.toml"),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Print the generated list instead of writing the output file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log each step to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    let config = load(&overrides_from(&matches)).unwrap_or_else(|e| {
        eprintln!("Error: invalid configuration: {}", e);
        std::process::exit(1);
    });

    if matches.get_flag("stdout") {
        handle_print_command(&config);
    } else {
        handle_generate_command(&config);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Collect the flags that override config file values
fn overrides_from(matches: &ArgMatches) -> Overrides {
    let path = |name: &str| matches.get_one::<String>(name).map(PathBuf::from);
    let text = |name: &str| matches.get_one::<String>(name).cloned();

    Overrides {
        config_file: path("config"),
        input: path("input"),
        output: path("output"),
        marker: text("marker"),
        list_name: text("list-name"),
        format: matches
            .get_one::<String>("format")
            .and_then(|f| f.parse::<OutputFormat>().ok()),
    }
}

/// Handle the default command: regenerate the output file
fn handle_generate_command(config: &GeneratorConfig) {
    if let Err(e) = generate(config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Handle `--stdout`: print the rendering without touching the output file
fn handle_print_command(config: &GeneratorConfig) {
    let generated = load_and_render(config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    print!("{}", generated.rendered);
}
