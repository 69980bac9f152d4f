//! fleet-quote configuration

use std::str::FromStr;

use clap::{Parser, ValueEnum};
use fleet_common::{FleetError, Result};
use serde::{Deserialize, Serialize};

/// How the breakdown is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Machine-readable breakdown
    Json,
    /// Human-readable pricing panel
    Summary,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "summary" | "text" => Ok(OutputFormat::Summary),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Command-line arguments
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "fleet-quote", version, about = "Price a Fleet Builder quote request")]
pub struct CliArgs {
    /// Read the JSON request from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<std::path::PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Single-line JSON output
    #[arg(long)]
    pub compact: bool,

    /// Print the reference catalogue instead of pricing a request
    #[arg(long, conflicts_with = "input")]
    pub catalog: bool,
}

/// fleet-quote configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteCliConfig {
    /// Output format
    pub format: OutputFormat,
    /// Log filter used when RUST_LOG is unset
    pub log_level: String,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for QuoteCliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            log_level: "info".to_string(),
            pretty: true,
        }
    }
}

impl QuoteCliConfig {
    /// Load configuration from `.env` and the process environment
    pub fn load() -> Result<Self> {
        // A missing .env is fine, a malformed one is not
        check_env_file(dotenvy::dotenv())?;

        Ok(Self::from_lookup(|name| std::env::var(name).ok()))
    }

    /// Build from an environment lookup. Unparsable values keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(val) = lookup("FLEET_QUOTE_FORMAT") {
            if let Ok(format) = val.parse() {
                cfg.format = format;
            }
        }
        if let Some(level) = lookup("FLEET_QUOTE_LOG") {
            if !level.trim().is_empty() {
                cfg.log_level = level;
            }
        }
        if let Some(val) = lookup("FLEET_QUOTE_PRETTY") {
            if let Some(pretty) = parse_flag(&val) {
                cfg.pretty = pretty;
            }
        }

        cfg
    }

    /// Command-line flags take priority over the environment
    pub fn apply_args(&mut self, args: &CliArgs) {
        if let Some(format) = args.format {
            self.format = format;
        }
        if args.compact {
            self.pretty = false;
        }
    }
}

fn check_env_file<T>(loaded: dotenvy::Result<T>) -> Result<()> {
    match loaded {
        Ok(_) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(FleetError::Config(format!("failed to load .env: {err}"))),
    }
}

fn parse_flag(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = QuoteCliConfig::from_lookup(env(&[]));
        assert_eq!(cfg, QuoteCliConfig::default());
        assert_eq!(cfg.format, OutputFormat::Json);
        assert!(cfg.pretty);
    }

    #[test]
    fn test_env_overrides() {
        let cfg = QuoteCliConfig::from_lookup(env(&[
            ("FLEET_QUOTE_FORMAT", "Summary"),
            ("FLEET_QUOTE_LOG", "debug"),
            ("FLEET_QUOTE_PRETTY", "0"),
        ]));

        assert_eq!(cfg.format, OutputFormat::Summary);
        assert_eq!(cfg.log_level, "debug");
        assert!(!cfg.pretty);
    }

    #[test]
    fn test_bad_env_values_keep_defaults() {
        let cfg = QuoteCliConfig::from_lookup(env(&[
            ("FLEET_QUOTE_FORMAT", "xml"),
            ("FLEET_QUOTE_LOG", "  "),
            ("FLEET_QUOTE_PRETTY", "maybe"),
        ]));

        assert_eq!(cfg, QuoteCliConfig::default());
    }

    #[test]
    fn test_args_override_env() {
        let mut cfg = QuoteCliConfig::from_lookup(env(&[("FLEET_QUOTE_FORMAT", "summary")]));
        let args = CliArgs::parse_from(["fleet-quote", "--format", "json", "--compact"]);
        cfg.apply_args(&args);

        assert_eq!(cfg.format, OutputFormat::Json);
        assert!(!cfg.pretty);
    }

    #[test]
    fn test_args_input_path() {
        let args = CliArgs::parse_from(["fleet-quote", "-i", "request.json"]);
        assert_eq!(args.input.as_deref(), Some(std::path::Path::new("request.json")));
        assert_eq!(args.format, None);
        assert!(!args.catalog);
    }

    #[test]
    fn test_missing_env_file_is_ignored() {
        let missing = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(check_env_file::<()>(Err(missing)).is_ok());
        assert!(check_env_file(Ok(())).is_ok());
    }

    #[test]
    fn test_malformed_env_file_is_config_error() {
        let malformed = dotenvy::Error::LineParse("FLEET_QUOTE_FORMAT json".to_string(), 18);
        let err = check_env_file::<()>(Err(malformed)).unwrap_err();
        assert!(matches!(err, FleetError::Config(ref msg) if msg.contains(".env")));
    }

    #[test]
    fn test_catalog_conflicts_with_input() {
        assert!(CliArgs::try_parse_from(["fleet-quote", "--catalog"]).is_ok());
        assert!(CliArgs::try_parse_from(["fleet-quote", "--catalog", "-i", "x.json"]).is_err());
    }
}
