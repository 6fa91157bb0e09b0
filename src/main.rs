mod debug_report;

use chrono::NaiveDate;
use geddate::{Context, EventDate};
use std::io::{self, BufRead, IsTerminal};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let ctx = config.today.map_or_else(Context::now, Context::on);
    for input in &config.inputs {
        let date = EventDate::with_context(input, config.event_type.as_deref(), &ctx);
        debug_report::print_date(&date, config.color);
    }
}

/// `GEDDATE_LOG` takes an `EnvFilter` directive; `GEDDATE_DEBUG=1` is
/// shorthand for `geddate=debug`.
fn init_tracing() {
    let filter = match std::env::var("GEDDATE_LOG") {
        Ok(directive) => EnvFilter::new(directive),
        Err(_) if std::env::var("GEDDATE_DEBUG").is_ok_and(|v| v == "1") => EnvFilter::new("geddate=debug"),
        Err(_) => EnvFilter::new("warn"),
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}

struct CliConfig {
    inputs: Vec<String>,
    event_type: Option<String>,
    today: Option<NaiveDate>,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut event_type: Option<String> = None;
    let mut today: Option<NaiveDate> = None;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("geddate {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--today" => {
                let value = args.next().ok_or_else(|| "error: --today expects a value".to_string())?;
                today = Some(parse_today(&value)?);
            }
            "--event-type" | "-t" => {
                let value = args.next().ok_or_else(|| "error: --event-type expects a value".to_string())?;
                event_type = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--today=") => {
                today = Some(parse_today(arg.trim_start_matches("--today="))?);
            }
            _ if arg.starts_with("--event-type=") => {
                event_type = Some(arg.trim_start_matches("--event-type=").to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                input = Some(std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" "));
                break;
            }
        }
    }

    let inputs = match input {
        Some(value) => vec![value],
        None => read_stdin_lines()?,
    };

    if inputs.is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { inputs, event_type, today, color })
}

/// One date per non-blank line.
fn read_stdin_lines() -> Result<Vec<String>, String> {
    let mut inputs = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.map_err(|err| format!("error: failed to read stdin: {err}"))?;
        if !line.trim().is_empty() {
            inputs.push(line);
        }
    }
    Ok(inputs)
}

fn parse_today(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("error: invalid --today '{value}' (expected YYYY-MM-DD)"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "geddate {version}

Parse, validate and normalize genealogical event dates.

Usage:
  geddate [OPTIONS] [--] <date...>
  geddate [OPTIONS] < dates.txt      (one date per line)

Options:
  -t, --event-type <type>    Event type, e.g. Birth. Instant-only events read
                             From/to ranges as Bet/and.
  --today <YYYY-MM-DD>       Reference date for the future-date check.
                             Default: today in {tz}
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  GEDDATE_LOG                tracing filter, e.g. geddate=trace
  GEDDATE_DEBUG=1            Shorthand for GEDDATE_LOG=geddate=debug

Exit codes:
  0  Success (invalid dates are reported, not fatal).
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        tz = geddate::REFERENCE_TZ.name(),
    )
}
