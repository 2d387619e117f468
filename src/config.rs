//! Command line and environment configuration.
//!
//! Values are resolved in order: explicit flags, then `--query`, then the
//! `VLSM_NETWORK` / `VLSM_HOSTS` environment variables (a `.env` file is
//! loaded by `main`).

use crate::processing::QueryParams;
use crate::PlanOptions;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub const ENV_NETWORK: &str = "VLSM_NETWORK";
pub const ENV_HOSTS: &str = "VLSM_HOSTS";

/// VLSM subnet planner
///
/// Splits a base IPv4 network into contiguous, power-of-two sized subnets and
/// prints addressing plus OSPF network statements for each.
#[derive(Parser, Debug, Clone)]
#[command(name = "vlsm-planner", version, about, long_about = None)]
pub struct Args {
    /// Base network address, e.g. 15.0.0.0
    #[arg(short, long)]
    pub network: Option<String>,

    /// Comma separated host counts, e.g. "50, 20, 10"
    #[arg(short = 'H', long)]
    pub hosts: Option<String>,

    /// Query string holding network and hosts, e.g. "network=15.0.0.0&hosts=50%2C20"
    #[arg(short, long)]
    pub query: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Cards, env = "VLSM_FORMAT")]
    pub format: OutputFormat,

    /// Allocate in the order given instead of largest first
    #[arg(long)]
    pub keep_order: bool,

    /// Accept 0 hosts as a /31 point-to-point link
    #[arg(long, env = "VLSM_ALLOW_POINT_TO_POINT")]
    pub allow_point_to_point: bool,

    /// Print the shareable query string after the plan
    #[arg(long)]
    pub emit_query: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// log4rs configuration file
    #[arg(long, default_value = "log4rs.yml", env = "VLSM_LOG_CONFIG")]
    pub log_config: PathBuf,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Cards,
    Csv,
    Json,
}

/// Fully resolved run configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub params: QueryParams,
    pub options: PlanOptions,
    pub format: OutputFormat,
    pub emit_query: bool,
    pub color: bool,
    pub log_config: PathBuf,
}

impl Config {
    /// Resolve from parsed arguments and the process environment.
    pub fn from_args(args: Args) -> Self {
        Self::from_args_with_env(args, |key| std::env::var(key).ok())
    }

    /// Resolve from parsed arguments, reading fallbacks through `env`.
    pub fn from_args_with_env<F>(args: Args, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_query = args
            .query
            .as_deref()
            .map(QueryParams::from_query_string)
            .unwrap_or_default();
        if args.query.is_some() && !from_query.should_calculate() {
            log::warn!("--query does not carry both network and hosts");
        }

        let network = args
            .network
            .or(from_query.network)
            .or_else(|| env(ENV_NETWORK));
        let hosts = args.hosts.or(from_query.hosts).or_else(|| env(ENV_HOSTS));

        let config = Config {
            params: QueryParams::new(network.as_deref(), hosts.as_deref()),
            options: PlanOptions {
                sort_descending: !args.keep_order,
                allow_point_to_point: args.allow_point_to_point,
            },
            format: args.format,
            emit_query: args.emit_query,
            color: !args.no_color,
            log_config: args.log_config,
        };
        log::debug!("Resolved config: {config:?}");
        config
    }

    pub fn network_text(&self) -> &str {
        self.params.network.as_deref().unwrap_or_default()
    }

    pub fn hosts_text(&self) -> &str {
        self.params.hosts.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("vlsm-planner").chain(argv.iter().copied()))
            .expect("args should parse")
    }

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_flags() {
        let config = Config::from_args_with_env(
            parse(&["-n", "15.0.0.0", "-H", "50,20", "--format", "csv", "--keep-order"]),
            env_of(&[]),
        );
        assert_eq!(config.network_text(), "15.0.0.0");
        assert_eq!(config.hosts_text(), "50,20");
        assert_eq!(config.format, OutputFormat::Csv);
        assert!(!config.options.sort_descending);
        assert!(!config.options.allow_point_to_point);
        assert!(config.color);
        assert_eq!(config.log_config, PathBuf::from("log4rs.yml"));
    }

    #[test]
    fn test_flags_override_query_and_env() {
        let config = Config::from_args_with_env(
            parse(&["--query", "network=10.0.0.0&hosts=5", "--hosts", "7"]),
            env_of(&[(ENV_NETWORK, "192.168.0.0"), (ENV_HOSTS, "9")]),
        );
        assert_eq!(config.network_text(), "10.0.0.0");
        assert_eq!(config.hosts_text(), "7");
    }

    #[test]
    fn test_env_fills_gaps() {
        let config = Config::from_args_with_env(
            parse(&["--network", "10.0.0.0"]),
            env_of(&[(ENV_NETWORK, "192.168.0.0"), (ENV_HOSTS, "9, 3")]),
        );
        assert_eq!(config.network_text(), "10.0.0.0");
        assert_eq!(config.hosts_text(), "9, 3");
    }

    #[test]
    fn test_missing_values_are_empty() {
        let config = Config::from_args_with_env(parse(&[]), env_of(&[]));
        assert_eq!(config.params, QueryParams::default());
        assert_eq!(config.network_text(), "");
        assert_eq!(config.hosts_text(), "");
    }

    #[test]
    fn test_bad_format_rejected() {
        let result = Args::try_parse_from(["vlsm-planner", "--format", "xml"]);
        assert!(result.is_err());
    }
}
