use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod export;
mod output;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("campus error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    let config = campus_config::CampusConfig::load_with_dotenv()
        .context("failed to load campus configuration")?;
    config.validate()?;
    context::warn_unconfigured(&config);

    if let cli::Commands::Init(args) = &cli.command {
        let root = init_root(flags.project.as_deref())?;
        return commands::init::handle(args, root, &config, &flags).await;
    }

    let project_root =
        resolve_project_root(flags.project.as_deref(), config.database.is_configured())?;
    let ctx = context::AppContext::init(project_root, config, flags.as_user.as_deref())
        .await
        .context("failed to initialize campus application context")?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CAMPUS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Directory `campus init` sets up: `--project` or the current directory.
fn init_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    match project_override {
        Some(path) => Ok(PathBuf::from(path)),
        None => std::env::current_dir().context("failed to read current directory"),
    }
}

/// Find the project directory. A remote database needs no local project, so
/// the current directory stands in when none is found.
fn resolve_project_root(project_override: Option<&str>, remote: bool) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        let explicit = PathBuf::from(path);

        if explicit
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name == campus_config::PROJECT_DIR)
        {
            return explicit
                .parent()
                .map(std::path::Path::to_path_buf)
                .context("invalid --project path: '.campus' directory has no parent");
        }

        if explicit.is_dir() {
            return Ok(explicit);
        }

        anyhow::bail!(
            "invalid --project '{}': directory does not exist",
            explicit.display()
        );
    }

    let start = std::env::current_dir().context("failed to read current directory")?;
    if remote {
        return Ok(context::find_project_root(&start).unwrap_or(start));
    }
    context::find_project_root(&start)
        .context("not a campus project (no .campus directory found). Run 'campus init' first.")
}
