//! tv-sim CLI
//!
//! Interactive TUI remote by default; `run` replays a script of
//! remote-control actions and prints the resulting state.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use tv_sim::report::{format_snapshot, trace_line};
use tv_sim::script::{parse_script, replay};
use tv_sim::tui;
use tv_sim::types::OutputFormat;

#[derive(Parser)]
#[command(name = "tv-sim")]
#[command(about = "Simulated television with a TUI remote control")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI remote (the default)
    Tui,

    /// Replay a script of remote actions and print the final state
    Run {
        /// Script file (reads stdin when omitted)
        script: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,

        /// Print the state after every action
        #[arg(long)]
        trace: bool,
    },

    /// Print the TUI key bindings
    Keys,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None | Some(Commands::Tui) => cmd_tui(),
        Some(Commands::Run { script, format, trace }) => cmd_run(script, format.into(), trace),
        Some(Commands::Keys) => cmd_keys(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_tui() -> Result<(), String> {
    tui::run::run().map_err(|e| e.to_string())
}

fn cmd_run(script: Option<PathBuf>, format: OutputFormat, trace: bool) -> Result<(), String> {
    let text = read_script(script)?;
    let actions = parse_script(&text)?;

    if actions.is_empty() {
        eprintln!("Note: script contains no actions.");
    }

    // Trace goes to stderr so JSON stdout stays machine-readable
    let tv = replay(&actions, |action, tv| {
        if trace {
            eprintln!("{}", trace_line(action, tv));
        }
    });

    print!("{}", format_snapshot(&tv, format));
    if format == OutputFormat::Json {
        println!();
    }

    Ok(())
}

fn cmd_keys() -> Result<(), String> {
    for (key, meaning) in tui::run::bindings() {
        println!("  {:<14} {}", key, meaning);
    }
    Ok(())
}

// ============================================================================
// SCRIPT INPUT
// ============================================================================

/// Read the script text from a file, or stdin when no path is given.
fn read_script(path: Option<PathBuf>) -> Result<String, String> {
    match path {
        Some(p) => std::fs::read_to_string(&p)
            .map_err(|e| format!("cannot read {}: {}", p.display(), e)),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| e.to_string())?;
            Ok(text)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn read_script_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "power").unwrap();
        writeln!(file, "channel 5").unwrap();

        let text = read_script(Some(file.path().to_path_buf())).unwrap();
        let actions = parse_script(&text).unwrap();
        assert_eq!(actions.len(), 2);
    }

    #[test]
    fn missing_script_file_names_the_path() {
        let err = read_script(Some(PathBuf::from("/no/such/script.tv"))).unwrap_err();
        assert!(err.contains("/no/such/script.tv"));
    }
}
