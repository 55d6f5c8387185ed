//! webshot-desktop CLI entry point

use std::process::ExitCode;

use clap::Parser;

use webshot_desktop::cli::{self, logging, Cli, Presenter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let presenter = Presenter::new();
    cli::run(cli.command, &presenter).await
}
