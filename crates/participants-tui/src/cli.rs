//! CLI argument parsing

use std::path::PathBuf;

use clap::Parser;

/// Terminal viewer for auto-dialer participant lists
#[derive(Parser, Debug)]
#[command(name = "participants")]
#[command(version)]
#[command(about = "Browse a call list's participant numbers, formatted for display")]
pub struct Cli {
    /// Call list to show
    ///
    /// Either a `.json` call list (`{"id", "name", "numbers", ...}` or a bare
    /// array of numbers) or a text file with one number per line.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Configuration file path
    #[arg(short, long, env = "PARTICIPANTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Start in live mode (reload when the file changes)
    #[arg(short, long)]
    pub live: bool,

    /// Print formatted numbers to stdout and exit
    #[arg(short, long)]
    pub print: bool,

    /// Print as JSON
    #[arg(long, requires = "print")]
    pub json: bool,

    /// Screenshot mode: render one frame and exit
    #[arg(long, conflicts_with = "print")]
    pub screenshot: bool,

    /// Screenshot width
    #[arg(long, default_value = "120")]
    pub width: u16,

    /// Screenshot height
    #[arg(long, default_value = "40")]
    pub height: u16,

    /// Write logs to this file (the interactive view never logs to the terminal)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Whether the run takes over the terminal
    pub fn is_interactive(&self) -> bool {
        !self.print && !self.screenshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_json_requires_print() {
        assert!(Cli::try_parse_from(["participants", "list.txt", "--json"]).is_err());
        let cli = Cli::try_parse_from(["participants", "list.txt", "--print", "--json"]).unwrap();
        assert!(cli.json);
        assert!(!cli.is_interactive());
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["participants", "list.txt"]).unwrap();
        assert!(cli.is_interactive());
        assert_eq!(cli.width, 120);
        assert_eq!(cli.height, 40);
    }
}
