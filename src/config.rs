//! Runtime configuration and the command-line arguments it is built from.

use crate::core::types::Region;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// How one-shot command output is printed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    /// Serialise translation results as JSON.
    Json,
}

/// Command-line interface for the slang guide.
#[derive(Parser, Debug)]
#[command(
    name = "slang_guide",
    version,
    about = "Kiro, the local Dada: explains Bengali slang with regional flavour"
)]
pub struct Cli {
    /// JSON lexicon file to use instead of the built-in table.
    #[arg(long, env = "SLANG_LEXICON", value_name = "FILE")]
    pub lexicon: Option<PathBuf>,
    /// Default region for bare terms typed at the prompt.
    #[arg(long, env = "SLANG_REGION", value_name = "REGION")]
    pub region: Option<String>,
    /// Seed for the flavour-text randomness.
    #[arg(long, env = "SLANG_SEED")]
    pub seed: Option<u64>,
    /// Reject queries longer than this many characters. Unlimited by default.
    #[arg(long, value_name = "CHARS")]
    pub max_input_len: Option<usize>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
    /// Repeat for more log output (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Run a single command (for example `translate lyadh kolkata`) and exit.
    #[arg(value_name = "COMMAND", num_args = 0.., trailing_var_arg = true)]
    pub command: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub lexicon_path: Option<PathBuf>,
    pub region: Option<Region>,
    pub seed: Option<u64>,
    pub max_input_len: Option<usize>,
    pub output: OutputFormat,
    pub verbose: u8,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        let region = cli.region.as_deref().and_then(|alias| {
            let region = Region::from_alias(alias);
            if region.is_none() {
                log::warn!("unknown region '{}', continuing without one", alias);
            }
            region
        });
        Self {
            lexicon_path: cli.lexicon.clone(),
            region,
            seed: cli.seed,
            max_input_len: cli.max_input_len,
            output: cli.output,
            verbose: cli.verbose,
        }
    }
}

impl Config {
    /// The default `env_logger` filter for this verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags_and_trailing_command() {
        let cli = Cli::try_parse_from([
            "slang_guide",
            "--region",
            "calcutta",
            "--seed",
            "7",
            "-vv",
            "--max-input-len",
            "64",
            "--output",
            "json",
            "translate",
            "lyadh",
            "kolkata",
        ])
        .unwrap();
        let config = Config::from(&cli);
        assert_eq!(config.region, Some(Region::Kolkata));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_input_len, Some(64));
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_filter(), "trace");
        assert_eq!(cli.command, vec!["translate", "lyadh", "kolkata"]);
    }

    #[test]
    fn unknown_region_alias_means_no_region() {
        let cli = Cli::try_parse_from(["slang_guide", "--region", "dhaka"]).unwrap();
        assert_eq!(Config::from(&cli).region, None);
    }

    #[test]
    fn defaults_match_config_default() {
        let cli = Cli::try_parse_from(["slang_guide"]).unwrap();
        let config = Config::from(&cli);
        assert_eq!(config.max_input_len, None);
        assert_eq!(config.log_filter(), "warn");
        assert!(cli.command.is_empty());
    }
}
