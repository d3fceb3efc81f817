// Deploy Help - help text renderer for the deployment CLI
use anyhow::Context;
use clap::Parser;
use deploy_help::cli::{execute_command, Args};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    execute_command(args).context("deploy-help failed")?;
    Ok(())
}
