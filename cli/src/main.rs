use clap::Parser;
use infrastructure::config::Config;
use presentation::cli::{Cli, CliApp};
use shared::logging::init_tracing;
use shared::types::Result;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("artisan_chat=info,application=info,infrastructure=info");
    let cli = Cli::parse();
    let mut app = CliApp::new(Config::load());
    app.run(cli).await
}
