// cargo watch -x 'fmt' -x 'run -- 192.168.1.10/24 -b'

pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

#[cfg(test)]
mod properties;

pub use cli::{Config, OutputFormat};
pub use error::{Result, SubnetError};
pub use models::AddressInterface;
pub use processing::{derive, HostStrategy, Report};

/// Parse `spec` and derive its report.
pub fn calculate(spec: &str, strategy: HostStrategy) -> Result<Report> {
    let interface = AddressInterface::parse(spec)?;
    derive(&interface, strategy)
}

/// Derive and format the report for `interface` as configured.
pub fn run(interface: &AddressInterface, config: &Config) -> Result<String> {
    let report = derive(interface, config.strategy)?;
    match config.format {
        OutputFormat::Table => Ok(output::render_report(&report, config.binary)),
        OutputFormat::Json => output::render_json(&report, config.binary),
    }
}
