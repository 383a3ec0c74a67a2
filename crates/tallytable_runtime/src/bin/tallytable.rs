//! Tallytable CLI entry point.

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use tallytable_runtime::Repl;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    batch_mode: bool,
    json_output: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

/// Installs the diagnostic subscriber.
///
/// Filtering comes from `TALLYTABLE_LOG` and defaults to warnings only.
/// Output goes to stderr so batch JSON on stdout stays clean.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TALLYTABLE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    for arg in args.into_iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-j" | "--json" => config.json_output = true,
            other if other.starts_with('-') => {
                return Err(format!("unknown option: {other}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("tallytable {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Create REPL
    let mut repl = Repl::new()?;

    // Feed any specified transcript files
    for file in &config.files {
        let stats = repl.session_mut().load_file(file)?;
        eprintln!(
            "{}: {} entries applied, {} mutations, {} stale",
            file.display(),
            stats.entries,
            stats.mutations,
            stats.stale
        );
    }

    // Emit the final state if requested
    if config.json_output {
        println!("{}", repl.session().snapshot_json()?);
    }

    // If batch mode, exit now
    if config.batch_mode {
        return Ok(());
    }

    // Run interactive REPL
    // If files were loaded, suppress banner since context is established
    if !config.files.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mTallytable\x1b[0m - Game-log classifier and hidden-resource ledger tracker

\x1b[1mUSAGE:\x1b[0m
    tallytable [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Transcript files to feed before starting the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help       Print help information
    -V, --version    Print version information
    -b, --batch      Feed files and exit (no REPL)
    -j, --json       Print the final snapshot as JSON

\x1b[1mEXAMPLES:\x1b[0m
    tallytable                       Start interactive REPL
    tallytable game.log              Feed game.log, then start REPL
    tallytable -b -j game.log        Feed game.log and print the snapshot
    tallytable setup.log main.log    Feed multiple transcripts in order

\x1b[1mREPL COMMANDS:\x1b[0m
    :table               Show the player ledger table
    :bank                Show the development piece bank
    :snapshot            Print the current snapshot as JSON
    :save PATH           Write the snapshot to a file
    :load PATH           Feed a transcript file
    :reset               Clear the game
    Ctrl+D               Exit REPL

Diagnostics are controlled by the TALLYTABLE_LOG environment variable,
e.g. TALLYTABLE_LOG=tallytable_engine=debug."
    );
}
