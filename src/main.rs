use clap::Parser;
use structify::config::{Cli, LogLevel};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.log_level);
    tracing::debug!("structify v{}", structify::VERSION);

    structify::commands::run(cli)?;
    Ok(())
}

fn setup_tracing(level: LogLevel) {
    if let Some(level) = level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}
