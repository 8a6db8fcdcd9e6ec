use clap::Parser as _;
use tracing::debug;
use tracing_subscriber::util::SubscriberInitExt as _;

use treepoll::{
    application::{Application, ApplicationError, diagnostics_subscriber},
    cli::Cli,
};

#[compio::main]
#[snafu::report]
async fn main() -> Result<(), ApplicationError> {
    let cli_args = Cli::parse();
    setup_tracing(&cli_args);
    debug!("Parsed CLI arguments: {cli_args:?}");

    Application::run(cli_args).await?;

    Ok(())
}

/// Diagnostics go to stderr, leaving stdout to the change report.
fn setup_tracing(cli_args: &Cli) {
    if let Some(subscriber) = diagnostics_subscriber(cli_args.log_level, std::io::stderr) {
        subscriber.init();
    }
}
