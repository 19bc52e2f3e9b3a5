use clap::Parser;
use taskgrid::cli::commands::Cli;
use taskgrid::cli::handlers;
use tracing_subscriber::EnvFilter;

/// Log to stderr, filtered by `TASKGRID_LOG` (default: warn)
fn init_logging() {
    let filter = EnvFilter::try_from_env("TASKGRID_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand → launch TUI (it owns the terminal, so no log output)
            if let Err(e) = taskgrid::tui::run(cli.config.as_deref()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            init_logging();
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
