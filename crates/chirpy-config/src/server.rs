//! Server configuration.
//!
//! # Environment Variables
//!
//! - `PLATFORM`: deployment platform; `dev` unlocks the admin reset endpoint (required)
//! - `PORT`: listen port (default: 8080)
//! - `FILEPATH`: directory served under `/app/` (default: `.`)
//! - `METRICS_PORT`: Prometheus exporter port (default: 9090)

use std::env;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Dev,
    Other,
}

impl Platform {
    pub fn parse(value: &str) -> Self {
        if value == "dev" {
            Platform::Dev
        } else {
            Platform::Other
        }
    }

    pub fn is_dev(self) -> bool {
        self == Platform::Dev
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub metrics_port: u16,
    pub filepath: PathBuf,
    pub platform: Platform,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let platform = Platform::parse(&crate::required("PLATFORM")?);

        Ok(Self {
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            metrics_port: env::var("METRICS_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(9090),
            filepath: env::var("FILEPATH")
                .ok()
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            platform,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_parse() {
        assert!(Platform::parse("dev").is_dev());
        assert!(!Platform::parse("prod").is_dev());
        assert!(!Platform::parse("DEV").is_dev());
        assert!(!Platform::parse("").is_dev());
    }
}
