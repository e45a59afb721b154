use clap::Parser;
use quotidian::cli::{self, Cli, Commands};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Refresh(args) => cli::refresh::execute(args).await,
        Commands::Report(args) => cli::report::execute(args).await,
    };

    if let Err(e) = result {
        cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
