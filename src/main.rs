use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use calc::evaluate_line;

mod config;
use config::Config;

const FAREWELL: &str = "Calculation completed.";

fn main() -> anyhow::Result<ExitCode> {
    let config = Config::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(config.log_level())
        .init();

    if config.is_interactive() {
        run_repl(&config)?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut all_ok = run_lines(config.expressions.iter().map(String::as_str));
    if let Some(path) = &config.file {
        all_ok &= run_script(path)?;
    }
    Ok(if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Prints the value of `line`, or its error report. Returns whether it
/// evaluated.
fn print_result(line: &str) -> bool {
    match evaluate_line(line) {
        Ok(value) => {
            println!("{value}");
            true
        }
        Err(err) => {
            println!("{}", err.report());
            false
        }
    }
}

fn run_lines<'a>(lines: impl Iterator<Item = &'a str>) -> bool {
    lines.fold(true, |all_ok, line| print_result(line) && all_ok)
}

fn run_script(path: &Path) -> anyhow::Result<bool> {
    let lines = read_lines(path).with_context(|| format!("{} not found", path.display()))?;
    let mut all_ok = true;
    for line in lines {
        let line = line.with_context(|| format!("reading {}", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        all_ok &= print_result(&line);
    }
    Ok(all_ok)
}

fn read_lines<P>(filename: P) -> io::Result<io::Lines<io::BufReader<File>>>
where
    P: AsRef<Path>,
{
    let file = File::open(filename)?;
    Ok(io::BufReader::new(file).lines())
}

fn run_repl(config: &Config) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;
    if let Some(path) = &config.history {
        if rl.load_history(path).is_err() {
            tracing::info!(path = %path.display(), "no previous history");
        }
    }
    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str())?;
                print_result(&line);
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("{FAREWELL}");
                break;
            }
            Err(err) => return Err(err).context("reading input"),
        }
    }
    if let Some(path) = &config.history {
        rl.save_history(path)
            .with_context(|| format!("saving history to {}", path.display()))?;
    }
    Ok(())
}
