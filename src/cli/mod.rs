//! Command line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::{
    climate::DatePolicy,
    config::{ServerConfig, DEFAULT_DATABASE, DEFAULT_HOST, DEFAULT_PORT},
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Serves Hawaii weather station climate data over HTTP
pub struct Cli {
    /// SQLite database holding the `station` and `measurement` tables
    #[arg(long, env = "CLIMATE_DATABASE", default_value = DEFAULT_DATABASE)]
    pub database: PathBuf,

    /// Host to bind to
    #[arg(long, env = "CLIMATE_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "CLIMATE_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Answer 400 to start/end dates that are not YYYY-MM-DD
    #[arg(long)]
    pub strict_dates: bool,
}

impl Cli {
    pub fn config(&self) -> ServerConfig {
        let date_policy = if self.strict_dates {
            DatePolicy::Strict
        } else {
            DatePolicy::Permissive
        };

        ServerConfig {
            host: self.host.clone(),
            database: self.database.clone(),
            date_policy,
            ..ServerConfig::with_port(self.port)
        }
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_use_defaults() {
        let cli = Cli::try_parse_from(["hawaii-climate"]).unwrap();
        let config = cli.config();

        assert_eq!(config.database, PathBuf::from(DEFAULT_DATABASE));
        assert_eq!(config.socket_addr(), "127.0.0.1:5000");
        assert_eq!(config.date_policy, DatePolicy::Permissive);
    }

    #[test]
    fn should_parse_flags() {
        let cli = Cli::try_parse_from([
            "hawaii-climate",
            "--database",
            "/tmp/climate.sqlite",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--strict-dates",
        ])
        .unwrap();
        let config = cli.config();

        assert_eq!(config.database, PathBuf::from("/tmp/climate.sqlite"));
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
        assert_eq!(config.date_policy, DatePolicy::Strict);
    }

    #[test]
    fn should_reject_bad_port() {
        assert!(Cli::try_parse_from(["hawaii-climate", "--port", "harbor"]).is_err());
    }
}
