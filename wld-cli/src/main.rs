//! WLD CLI - Command line companion to the war losses dashboard.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wld-cli",
    version,
    about = "Reported war losses: recent losses, days without losses, statistics"
)]
struct Cli {
    #[command(subcommand)]
    command: wld_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    wld_cmd::run(cli.command).await
}
