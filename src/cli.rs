//! Command line arguments and the runtime [`Config`] built from them.

use crate::models::AddressInterface;
use crate::processing::HostStrategy;
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "ip-calc",
    version,
    about = "Simple tool to mimic the 'ipcalc' command on Linux. Works for both IPv4 and IPv6"
)]
pub struct Cli {
    /// The IP network to calculate, e.g. 192.168.1.10/24
    pub ip_address: AddressInterface,
    /// Display binary representation
    #[arg(short = 'b', long)]
    pub binary: bool,
    /// Search for the last host, instead of deriving from bcast (CPU heavy)
    #[arg(short = 'l', long = "last-search")]
    pub last_search: bool,
    /// Print the report as JSON
    #[arg(short = 'j', long)]
    pub json: bool,
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
    /// log4rs YAML config file, overrides --verbose
    #[arg(long, value_name = "FILE")]
    pub log_config: Option<PathBuf>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn config(&self) -> Config {
        Config {
            binary: self.binary,
            strategy: if self.last_search {
                HostStrategy::Exhaustive
            } else {
                HostStrategy::Fast
            },
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Table
            },
            verbosity: self.verbose,
            log_config: self.log_config.clone(),
        }
    }
}

/// Rewrite the historical two letter `-ls` flag, which clap would read as
/// `-l -s`, to `--last-search`.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            if arg == "-ls" {
                OsString::from("--last-search")
            } else {
                arg
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub binary: bool,
    pub strategy: HostStrategy,
    pub format: OutputFormat,
    pub verbosity: u8,
    pub log_config: Option<PathBuf>,
}
