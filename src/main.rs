use colored::Colorize;
use ip_calc::cli::{Cli, Config};
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse_args();
    let config = cli.config();

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &Config) -> ip_calc::Result<()> {
    ip_calc::logging::init_logging(config.verbosity, config.log_config.as_deref())?;
    log::info!("#Start main() for {}", cli.ip_address);

    let report = ip_calc::run(&cli.ip_address, config)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(report.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
