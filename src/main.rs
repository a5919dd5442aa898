use chitchat::cli::{parse_args, run_cli_command, version_line, CliCommand, USAGE};
use chitchat::config::ClientConfig;

use color_eyre::Result;
use tracing_subscriber::{fmt, EnvFilter};

/// Log to stderr, filtered by `CHITCHAT_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("CHITCHAT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    // No config, logging or runtime needed for these
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            return Ok(());
        }
        CliCommand::Help => {
            print!("{}", USAGE);
            return Ok(());
        }
        _ => {}
    }

    color_eyre::install()?;
    init_tracing();

    let config = ClientConfig::from_env()?;
    tracing::debug!(api_url = %config.api_url, dev = config.dev_mode, "configuration loaded");

    let runtime = tokio::runtime::Runtime::new()?;
    let output = runtime.block_on(run_cli_command(command, config))?;
    print!("{}", output);
    Ok(())
}
