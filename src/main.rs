use clap::Parser;

use vault_quote_sync::adapter::inbound::cli::command::{Cli, Commands};
use vault_quote_sync::adapter::inbound::cli::output::{self, OutputConfig};
use vault_quote_sync::adapter::inbound::cli::{check, handle};
use vault_quote_sync::infrastructure::config::logging::LoggingConfig;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));
    let log_level = cli.log_level();

    let result = match &cli.command {
        Commands::Handle(args) => handle::execute(args, log_level).await,
        Commands::Check(args) => {
            LoggingConfig::default().init(Some(log_level.unwrap_or("warn")));
            check::execute_config(&args.config)
        }
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
