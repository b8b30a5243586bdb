// src/config.rs
// =============================================================================
// Settings for one crawl run.
//
// The CLI (cli.rs) collects raw arguments; this module turns them into a
// CrawlConfig and rejects values the crawl cannot work with. Everything after
// this point can assume the config is valid.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::cli::Cli;
use crate::render::{BrowserOptions, WaitUntil};

/// Pages this many hops from the seed (seed = 1) are the deepest archived
pub const DEFAULT_MAX_DEPTH: usize = 3;

pub const DEFAULT_OUTPUT_DIR: &str = "output";

pub const DEFAULT_NAVIGATION_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid seed URL '{url}': {reason}")]
    InvalidSeed { url: String, reason: String },

    #[error("seed URL must use http or https, got '{0}'")]
    UnsupportedScheme(String),

    #[error("max depth must be at least 1 (the seed page itself)")]
    ZeroDepth,

    #[error("navigation timeout must be at least 1 second (use --no-timeout to disable it)")]
    ZeroTimeout,
}

/// Validated crawl settings
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Starting page; also the scope prefix, used verbatim
    pub seed_url: String,
    pub output_dir: PathBuf,
    pub max_depth: usize,
    /// None = wait for pages as long as they take
    pub navigation_timeout: Option<Duration>,
    /// When a page counts as loaded and ready to print
    pub wait_until: WaitUntil,
    pub browser: BrowserOptions,
}

impl CrawlConfig {
    /// Config with every setting at its default
    pub fn new(seed_url: impl Into<String>) -> Result<Self, ConfigError> {
        let config = Self {
            seed_url: seed_url.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            max_depth: DEFAULT_MAX_DEPTH,
            navigation_timeout: Some(Duration::from_secs(DEFAULT_NAVIGATION_TIMEOUT_SECS)),
            wait_until: WaitUntil::NetworkIdle,
            browser: BrowserOptions {
                navigation_timeout: Some(Duration::from_secs(DEFAULT_NAVIGATION_TIMEOUT_SECS)),
                ..BrowserOptions::default()
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let seed = Url::parse(&self.seed_url).map_err(|e| ConfigError::InvalidSeed {
            url: self.seed_url.clone(),
            reason: e.to_string(),
        })?;

        if seed.scheme() != "http" && seed.scheme() != "https" {
            return Err(ConfigError::UnsupportedScheme(seed.scheme().to_string()));
        }

        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }

        if self.navigation_timeout == Some(Duration::ZERO) {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(())
    }
}

impl TryFrom<&Cli> for CrawlConfig {
    type Error = ConfigError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        let mut config = Self::new(cli.seed_url.clone())?;

        config.output_dir = cli.output_dir.clone();
        config.max_depth = cli.max_depth;
        if cli.no_timeout {
            config.navigation_timeout = None;
        } else {
            config.navigation_timeout = Some(Duration::from_secs(cli.timeout_secs));
        }
        if cli.skip_idle_wait {
            config.wait_until = WaitUntil::Load;
        }
        config.browser = BrowserOptions {
            chrome_path: cli.chrome_path.clone(),
            headful: cli.headful,
            navigation_timeout: config.navigation_timeout,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let config = CrawlConfig::new("https://docs.example.com/docs/").unwrap();
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.navigation_timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.wait_until, WaitUntil::NetworkIdle);
        assert!(!config.browser.headful);
        assert_eq!(config.browser.navigation_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_seed_is_kept_verbatim() {
        // Url would serialize this as "https://docs.example.com/"
        let config = CrawlConfig::new("https://docs.example.com").unwrap();
        assert_eq!(config.seed_url, "https://docs.example.com");
    }

    #[test]
    fn test_rejects_relative_seed() {
        let err = CrawlConfig::new("/docs").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSeed { .. }));
    }

    #[test]
    fn test_rejects_non_http_seed() {
        let err = CrawlConfig::new("file:///tmp/index.html").unwrap_err();
        assert_eq!(err, ConfigError::UnsupportedScheme("file".to_string()));
    }

    #[test]
    fn test_from_cli() {
        let cli = Cli::try_parse_from([
            "site-archiver",
            "https://docs.example.com/",
            "--output-dir",
            "pdfs",
            "--max-depth",
            "2",
            "--timeout-secs",
            "10",
        ])
        .unwrap();
        let config = CrawlConfig::try_from(&cli).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("pdfs"));
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.navigation_timeout, Some(Duration::from_secs(10)));
        assert_eq!(config.browser.navigation_timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_long_timeout_reaches_the_browser() {
        let cli =
            Cli::try_parse_from(["site-archiver", "https://docs.example.com/", "--timeout-secs", "90"])
                .unwrap();
        let config = CrawlConfig::try_from(&cli).unwrap();
        assert_eq!(config.browser.navigation_timeout, Some(Duration::from_secs(90)));
    }

    #[test]
    fn test_no_timeout_flag() {
        let cli = Cli::try_parse_from(["site-archiver", "https://docs.example.com/", "--no-timeout"])
            .unwrap();
        let config = CrawlConfig::try_from(&cli).unwrap();
        assert_eq!(config.navigation_timeout, None);
        assert_eq!(config.browser.navigation_timeout, None);
    }

    #[test]
    fn test_skip_idle_wait_flag() {
        let cli = Cli::try_parse_from(["site-archiver", "https://docs.example.com/", "--skip-idle-wait"])
            .unwrap();
        let config = CrawlConfig::try_from(&cli).unwrap();
        assert_eq!(config.wait_until, WaitUntil::Load);
    }

    #[test]
    fn test_zero_depth_and_timeout_are_rejected() {
        let cli = Cli::try_parse_from(["site-archiver", "https://docs.example.com/", "--max-depth", "0"])
            .unwrap();
        assert_eq!(CrawlConfig::try_from(&cli).unwrap_err(), ConfigError::ZeroDepth);

        let cli =
            Cli::try_parse_from(["site-archiver", "https://docs.example.com/", "--timeout-secs", "0"])
                .unwrap();
        assert_eq!(CrawlConfig::try_from(&cli).unwrap_err(), ConfigError::ZeroTimeout);
    }
}
