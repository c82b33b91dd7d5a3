//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap, including
//! the environment variables the server requires at startup.

use clap::Parser;
use std::path::PathBuf;

/// Emowell - emotional-wellbeing survey backend
///
/// Collects student survey submissions, stores them in PostgreSQL,
/// generates empathetic feedback through the Groq API, and serves
/// per-day average scores for the dashboard chart.
///
/// Examples:
///   emowell
///   emowell --port 9000 --verbose
///   emowell --config ./emowell.toml
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Port to listen on
    ///
    /// Overrides the config file when provided.
    #[arg(short, long, value_name = "PORT", env = "PORT")]
    pub port: Option<u16>,

    /// Address to bind the listener to
    #[arg(long, default_value = "0.0.0.0", value_name = "ADDR")]
    pub bind: String,

    /// PostgreSQL connection string
    ///
    /// Required. The process refuses to start without it.
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Groq API key used for feedback generation
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub groq_api_key: String,

    /// Groq model to use for feedback generation
    ///
    /// Overrides the config file when provided.
    #[arg(short, long, value_name = "MODEL", env = "GROQ_MODEL")]
    pub model: Option<String>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .emowell.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (warnings and errors only)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("--verbose and --quiet cannot be combined".to_string());
        }

        if self.database_url.trim().is_empty() {
            return Err("DATABASE_URL must not be empty".to_string());
        }

        if self.groq_api_key.trim().is_empty() {
            return Err("GROQ_API_KEY must not be empty".to_string());
        }

        Ok(())
    }

    /// The tracing level implied by the verbosity flags.
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> Args {
        Args {
            port: None,
            bind: "0.0.0.0".to_string(),
            database_url: "postgres://localhost/emowell".to_string(),
            groq_api_key: "gsk_test".to_string(),
            model: None,
            config: None,
            verbose: false,
            quiet: false,
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(args().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_conflicting_verbosity() {
        let mut a = args();
        a.verbose = true;
        a.quiet = true;
        assert!(a.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_secrets() {
        let mut a = args();
        a.database_url = "  ".to_string();
        assert!(a.validate().is_err());

        let mut a = args();
        a.groq_api_key = String::new();
        assert!(a.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        assert_eq!(args().log_level(), tracing::Level::INFO);

        let mut a = args();
        a.verbose = true;
        assert_eq!(a.log_level(), tracing::Level::DEBUG);

        let mut a = args();
        a.quiet = true;
        assert_eq!(a.log_level(), tracing::Level::WARN);
    }
}
