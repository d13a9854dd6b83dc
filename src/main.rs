use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};

mod cli;
mod peek;
mod tmux;

use cli::Args;
use tmux::{SystemRunner, TmuxClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so captured output stays clean
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();
    let client = TmuxClient::with_runner(args.tmux_path.clone(), SystemRunner);
    let pane = tmux::current_pane();

    let mut out = io::stdout().lock();
    let mut diag = io::stderr().lock();
    peek::run(&client, &args.config(), pane.as_deref(), &mut out, &mut diag).await?;
    out.flush()?;
    Ok(())
}
