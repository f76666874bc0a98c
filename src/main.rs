//! perf-timeline CLI Entry Point
//!
//! Times a child command on a performance timeline.
//!
//! # Usage
//!
//! ```bash
//! # Time a command and print a chart
//! perf-timeline sleep 1
//!
//! # Export the recorded entries as JSON with wall-clock timestamps
//! perf-timeline --json --timestamp -- cargo build
//!
//! # Load timeline options from a file
//! perf-timeline --config timeline.yaml make test
//! ```

use std::env;
use std::process::{Command, ExitCode};

use colored::Colorize;
use log::{debug, info};

use perf_timeline::report::{measure_durations, render_chart};
use perf_timeline::timeline::parse_offset;
use perf_timeline::{Timeline, TimelineOptions, APP_NAME, VERSION};

/// Command-line configuration parsed from arguments.
#[derive(Debug, Default)]
struct Config {
    config_path: Option<String>,
    offset: Option<f64>,
    timestamp: bool,
    json: bool,
    verbose: bool,
    command: Vec<String>,
}

/// Configures the logging system with appropriate formatting.
fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            use std::io::Write;

            match record.level() {
                log::Level::Warn | log::Level::Error => {
                    writeln!(buf, "[{}] {}", record.level(), record.args())
                }
                _ => writeln!(buf, "{}", record.args()),
            }
        })
        .init();
}

/// Prints the application banner with version information.
fn print_banner() {
    println!();
    println!("{} v{}", APP_NAME.bold(), VERSION);
    println!("In-process performance timeline");
    println!();
}

/// Prints usage information.
fn print_usage() {
    println!("Usage: perf-timeline [OPTIONS] [--] <COMMAND> [ARGS]...");
    println!();
    println!("Arguments:");
    println!("  <COMMAND> [ARGS]... Command to run and time");
    println!();
    println!("Options:");
    println!("  --config FILE       Load timeline options from a .json/.yaml file");
    println!("  --offset MS         Reference offset in milliseconds (overrides construction time)");
    println!("  --timestamp         Attach wall-clock timestamps to every entry");
    println!("  --json              Print entries as JSON instead of a chart");
    println!("  --verbose           Enable debug logging");
    println!("  --help              Show this help message");
    println!("  --version           Show version information");
    println!();
    println!("Examples:");
    println!("  perf-timeline sleep 1");
    println!("  perf-timeline --json --timestamp -- make test");
}

/// Parses command-line arguments into a Config struct.
///
/// Options are read until the first positional argument or `--`; everything
/// after that belongs to the timed command.
fn parse_arguments(args: &[String]) -> Result<Config, String> {
    let mut config = Config::default();
    let mut i = 1; // Skip program name

    while i < args.len() {
        let arg = &args[i];

        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            "--version" | "-V" => {
                println!("{} {}", APP_NAME, VERSION);
                std::process::exit(0);
            }
            "--timestamp" => {
                config.timestamp = true;
            }
            "--json" => {
                config.json = true;
            }
            "--verbose" | "-v" => {
                config.verbose = true;
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    return Err("--config requires a path argument".to_string());
                }
                config.config_path = Some(args[i].clone());
            }
            "--offset" => {
                i += 1;
                if i >= args.len() {
                    return Err("--offset requires a number argument".to_string());
                }
                config.offset = Some(parse_offset(&args[i]).map_err(|e| e.to_string())?);
            }
            "--" => {
                config.command = args[i + 1..].to_vec();
                break;
            }
            arg if arg.starts_with('-') => {
                return Err(format!("Unknown option: {}", arg));
            }
            _ => {
                config.command = args[i..].to_vec();
                break;
            }
        }
        i += 1;
    }

    if config.command.is_empty() {
        return Err("No command given".to_string());
    }

    Ok(config)
}

/// Builds timeline options from the config file and command-line overrides.
fn resolve_options(config: &Config) -> Result<TimelineOptions, Box<dyn std::error::Error>> {
    let mut options = match config.config_path {
        Some(ref path) => {
            info!("Loading options: {}", path);
            TimelineOptions::load(path)?
        }
        None => TimelineOptions::default(),
    };

    if config.offset.is_some() {
        options.offset = config.offset;
    }
    if config.timestamp {
        options.timestamp = true;
    }

    debug!("Timeline options: {:?}", options);
    Ok(options)
}

/// Main application entry point.
fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    // Parse arguments
    let config = parse_arguments(&args).map_err(|e| {
        eprintln!("Error: {}", e);
        eprintln!();
        print_usage();
        e
    })?;

    // Setup logging
    setup_logging(config.verbose);

    if !config.json {
        print_banner();
    }

    let options = resolve_options(&config)?;
    let mut timeline = Timeline::with_options(options);

    let (program, program_args) = config
        .command
        .split_first()
        .ok_or("No command given")?;

    info!("Running: {}", config.command.join(" "));

    timeline.mark("spawn");
    let status = Command::new(program)
        .args(program_args)
        .status()
        .map_err(|e| format!("Failed to run '{}': {}", program, e))?;
    timeline.mark("exit");

    timeline.measure("command", Some("spawn"), Some("exit"));
    timeline.measure("total", None, None);

    if config.json {
        println!("{}", timeline.to_json()?);
    } else {
        print!("{}", render_chart(timeline.entries()));
        if let Some(duration) = measure_durations(timeline.entries()).get("command") {
            println!();
            println!("{} {:.3} ms", "Command:".bold(), duration);
        }
    }

    if !status.success() {
        return Err(format!("Command exited with {}", status).into());
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!();
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
