pub mod cli;

use crate::core::fetcher::FetchOptions;
use crate::core::request::DEFAULT_API_BASE;
use crate::utils::error::{MetricsError, Result};
use crate::utils::validation::{is_blank, validate_positive_number, validate_url, Validate};
use clap::{CommandFactory, Parser};
use std::fmt;
use std::time::Duration;

#[derive(Clone, Parser)]
#[command(name = "seo-metrics")]
#[command(about = "Fetch Ahrefs domain metrics for a single domain")]
pub struct CliConfig {
    #[arg(long, allow_hyphen_values = true, help = "Ваш Ahrefs API токен (обязательно)")]
    pub token: Option<String>,

    #[arg(long, allow_hyphen_values = true, help = "Домен для проверки (обязательно)")]
    pub domain: Option<String>,

    #[arg(long, default_value = DEFAULT_API_BASE, help = "Batch-analysis endpoint")]
    pub api_base: String,

    #[arg(long, help = "Request timeout in seconds (no deadline when omitted)")]
    pub timeout: Option<u64>,

    #[arg(long, default_value = "0", help = "Extra attempts on transport errors")]
    pub retries: u32,

    #[arg(long, default_value = "500", help = "Base delay between attempts, in ms")]
    pub retry_delay_ms: u64,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Parses the process arguments, accepting `-token` style flags as well.
    pub fn from_env_args() -> Self {
        Self::parse_from(cli::normalize_args(std::env::args_os()))
    }

    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }

    pub fn token(&self) -> &str {
        self.token.as_deref().unwrap_or_default()
    }

    pub fn domain(&self) -> &str {
        self.domain.as_deref().unwrap_or_default()
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            timeout: self.timeout.map(Duration::from_secs),
            retries: self.retries,
            retry_delay: Duration::from_millis(self.retry_delay_ms),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if is_blank(self.token()) || is_blank(self.domain()) {
            return Err(MetricsError::UsageError {
                help: Self::usage(),
            });
        }

        validate_url("api_base", &self.api_base)?;

        if let Some(timeout) = self.timeout {
            validate_positive_number("timeout", timeout, 1)?;
        }

        Ok(())
    }
}

// Token stays out of verbose logs.
impl fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliConfig")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("domain", &self.domain)
            .field("api_base", &self.api_base)
            .field("timeout", &self.timeout)
            .field("retries", &self.retries)
            .field("retry_delay_ms", &self.retry_delay_ms)
            .field("verbose", &self.verbose)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::parse_from(cli::normalize_args(
            std::iter::once("seo-metrics").chain(args.iter().copied()),
        ))
    }

    #[test]
    fn test_single_dash_flags_parse() {
        let config = parse(&["-token", "abc", "-domain=example.com"]);
        assert_eq!(config.token(), "abc");
        assert_eq!(config.domain(), "example.com");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_values_may_start_with_hyphen() {
        let config = parse(&["-token", "-abc", "-domain", "example.com"]);
        assert_eq!(config.token(), "-abc");
        assert_eq!(config.domain(), "example.com");

        let config = parse(&["--token", "-domain", "--domain", "-verbose"]);
        assert_eq!(config.token(), "-domain");
        assert_eq!(config.domain(), "-verbose");
        assert!(!config.verbose);
    }

    #[test]
    fn test_missing_flags_are_usage_error() {
        for args in [
            vec![],
            vec!["-token", "abc"],
            vec!["-domain", "example.com"],
            vec!["-token", "", "-domain", "example.com"],
            vec!["-token", "abc", "-domain", "  "],
        ] {
            let err = parse(&args).validate().unwrap_err();
            match err {
                MetricsError::UsageError { help } => {
                    assert!(help.contains("--token"));
                    assert!(help.contains("--domain"));
                }
                other => panic!("expected usage error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_invalid_api_base_and_timeout() {
        let config = parse(&["--token", "abc", "--domain", "example.com", "--api-base", "ftp://x"]);
        assert!(matches!(
            config.validate(),
            Err(MetricsError::InvalidConfigValueError { .. })
        ));

        let config = parse(&["--token", "abc", "--domain", "example.com", "--timeout", "0"]);
        assert!(matches!(
            config.validate(),
            Err(MetricsError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_fetch_options_defaults() {
        let options = parse(&["-token", "abc", "-domain", "example.com"]).fetch_options();
        assert!(options.timeout.is_none());
        assert_eq!(options.retries, 0);
        assert_eq!(options.retry_delay, Duration::from_millis(500));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = parse(&["-token", "super-secret", "-domain", "example.com"]);
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
