//! `clones` CLI: runs clone version system commands from a script or stdin.

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches};
use clones_forest::ForestConfig;
use clones_kernel::logging::{init_logging, LogConfig, LogFormat};
use clones_kernel::{Session, SessionConfig, SessionReport};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

fn build_cli() -> clap::Command {
    clap::Command::new("clones")
        .version(clones_kernel::VERSION)
        .about("Copy-on-write clone version system")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .default_value("warn")
                .help("Default log filter (RUST_LOG overrides)"),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .global(true)
                .default_value("compact")
                .value_parser(["compact", "json"])
                .help("Log output format"),
        )
        .subcommand(
            clap::Command::new("run")
                .about("Execute commands from a script or stdin")
                .arg(
                    Arg::new("script")
                        .long("script")
                        .value_parser(value_parser!(PathBuf))
                        .help("Command file; stdin if omitted"),
                )
                .arg(
                    Arg::new("max-clones")
                        .long("max-clones")
                        .value_parser(value_parser!(usize))
                        .help("Reject clone commands beyond this many clones"),
                )
                .arg(
                    Arg::new("stop-on-error")
                        .long("stop-on-error")
                        .action(ArgAction::SetTrue)
                        .help("Stop at the first rejected command"),
                )
                .arg(
                    Arg::new("quiet")
                        .long("quiet")
                        .action(ArgAction::SetTrue)
                        .help("Do not list rejected commands on stderr"),
                )
                .arg(
                    Arg::new("stats")
                        .long("stats")
                        .action(ArgAction::SetTrue)
                        .help("Print a JSON summary to stderr when done"),
                ),
        )
}

fn log_config(matches: &ArgMatches) -> Result<LogConfig> {
    let level = matches
        .get_one::<String>("log-level")
        .cloned()
        .unwrap_or_else(|| LogConfig::default().level);
    let format = matches
        .get_one::<String>("log-format")
        .map(|s| s.parse::<LogFormat>())
        .transpose()?
        .unwrap_or_default();
    Ok(LogConfig { level, format })
}

fn run(args: &ArgMatches) -> Result<SessionReport> {
    let mut forest = ForestConfig::new();
    if let Some(max) = args.get_one::<usize>("max-clones") {
        forest = forest.with_max_clones(*max);
    }
    let config = SessionConfig::new()
        .with_forest(forest)
        .with_stop_on_error(args.get_flag("stop-on-error"))
        .with_echo_errors(!args.get_flag("quiet"));

    let mut session = Session::new(config);
    let stdout = io::stdout().lock();
    let report = match args.get_one::<PathBuf>("script") {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            session.run(BufReader::new(file), stdout)?
        }
        None => session.run(io::stdin().lock(), stdout)?,
    };

    session.echo_rejections(&report, io::stderr().lock())?;

    if args.get_flag("stats") {
        let summary = serde_json::json!({
            "forest": session.system().forest().stats(),
            "session": &report,
        });
        eprintln!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(report)
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    init_logging(&log_config(&matches)?)?;

    let report = match matches.subcommand() {
        Some(("run", args)) => run(args)?,
        _ => unreachable!("clap should have caught this"),
    };

    std::process::exit(if report.passed() { 0 } else { 1 });
}
