use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use doomdeck::launch::{build_launch_command, launch, ObligeRequest};
use doomdeck::logging;
use doomdeck::store::Store;

/// Launch a saved package with its configured source port.
#[derive(Debug, Parser)]
#[command(name = "doomdeck", version, about)]
struct Cli {
    /// Package id (or name) to launch.
    package: String,

    /// Document store directory. Defaults to the per-user data dir.
    #[arg(long, value_name = "DIR")]
    store: Option<PathBuf>,

    /// Resume the most recent savegame.
    #[arg(long)]
    load_last: bool,

    /// Append a generated map archive. Bare `--oblige` uses the
    /// package's conventional generated.wad; `--oblige=PATH` names an
    /// explicit file.
    #[arg(long, value_name = "PATH", num_args = 0..=1, require_equals = true)]
    oblige: Option<Option<PathBuf>>,

    /// Compose and print the command instead of spawning it.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    let store = Store::open(cli.store.unwrap_or_else(Store::default_dir));
    let package = store
        .package(&cli.package)
        .with_context(|| format!("loading package '{}'", cli.package))?;

    let oblige = match cli.oblige {
        None => ObligeRequest::None,
        Some(None) => ObligeRequest::Generated,
        Some(Some(path)) => ObligeRequest::File(path),
    };

    if cli.dry_run {
        let command =
            build_launch_command(&store, &package, &package.selected, cli.load_last, &oblige)?;
        println!("{} {}", command.program, command.args.join(" "));
        return Ok(());
    }

    let launched = launch(&store, &package, &package.selected, cli.load_last, &oblige).await?;
    info!(package = %launched.name, "dispatched");
    Ok(())
}
