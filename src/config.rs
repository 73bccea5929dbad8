use std::path::PathBuf;

use clap::ValueEnum;

use crate::cli::Cli;

pub const APP_NAME: &str = "FitNutri";
pub const APP_DESCRIPTION: &str = "Tu tienda de fitness y nutrición";

/// Where catalog, carts, orders and saved meals live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    /// Demo data in memory; nothing survives the process.
    Memory,
    /// A JSON document on disk.
    File,
}

/// Resolved runtime configuration, passed explicitly to whatever needs it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: StorageBackend,
    pub data_file: PathBuf,
    pub user_id: String,
    pub verbosity: u8,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            backend: cli.backend,
            data_file: cli.data_file.clone(),
            user_id: cli.user.trim().to_string(),
            verbosity: cli.verbose,
        }
    }

    /// Default log filter for the configured verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            data_file: PathBuf::from("fitnutri.json"),
            user_id: "guest".to_string(),
            verbosity: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_cli_flags() {
        let cli = Cli::parse_from([
            "fitnutri",
            "--backend",
            "memory",
            "--user",
            " ana ",
            "-vv",
            "foods",
        ]);
        let config = AppConfig::from_cli(&cli);
        assert_eq!(config.backend, StorageBackend::Memory);
        assert_eq!(config.user_id, "ana");
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_log_filter_levels() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_filter(), "warn");
        config.verbosity = 1;
        assert_eq!(config.log_filter(), "info");
    }
}
