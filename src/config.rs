use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

/// Evaluates call expressions such as `add(1, mul(2, 3))`.
///
/// Without expressions or `--file`, starts an interactive session.
#[derive(Parser, Debug)]
#[command(name = "calc", version, about, long_about = None)]
pub struct Config {
    /// Prompt shown before each line in interactive mode.
    #[arg(long, default_value = "calc> ")]
    pub prompt: String,

    /// File to load line history from and save it to.
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Evaluate every line of this file instead of reading interactively.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Expressions to evaluate in order.
    #[arg(allow_hyphen_values = true)]
    pub expressions: Vec<String>,
}

impl Config {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.file.is_none() && self.expressions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_interactive() {
        let config = Config::try_parse_from(["calc"]).unwrap();
        assert!(config.is_interactive());
        assert_eq!(config.prompt, "calc> ");
        assert_eq!(config.log_level(), Level::WARN);
    }

    #[test]
    fn batch_arguments() {
        let config = Config::try_parse_from(["calc", "-vv", "add(1, 2)", "5"]).unwrap();
        assert!(!config.is_interactive());
        assert_eq!(config.expressions, vec!["add(1, 2)", "5"]);
        assert_eq!(config.log_level(), Level::TRACE);

        let config = Config::try_parse_from(["calc", "--file", "lines.txt"]).unwrap();
        assert_eq!(config.file, Some(PathBuf::from("lines.txt")));
    }

    #[test]
    fn expressions_may_start_with_a_hyphen() {
        let config = Config::try_parse_from(["calc", "-5", "-(3, 1)"]).unwrap();
        assert_eq!(config.expressions, vec!["-5", "-(3, 1)"]);
        assert_eq!(config.verbose, 0);

        let config = Config::try_parse_from(["calc", "-v", "-(3, 1)"]).unwrap();
        assert_eq!(config.expressions, vec!["-(3, 1)"]);
        assert_eq!(config.log_level(), Level::DEBUG);
    }
}
