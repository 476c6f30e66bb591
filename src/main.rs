use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

use everytip::cli::{self, Cli};
use everytip::config::{Config, ConfigStore};
use everytip::context::AppContext;
use everytip::logging::init_tracing;

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path: PathBuf = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    let store = ConfigStore::new(config);

    if let Some(url) = &cli.api_url {
        store
            .update(|config| config.api.base_url = url.clone())
            .context("invalid --api-url")?;
    }
    Ok(store.get())
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    let ctx = match load_config(&cli)
        .and_then(|config| AppContext::new(config).context("failed to initialize"))
    {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let result = cli::run(&ctx, cli.command, &mut stdin.lock(), &mut stdout).await;
    let _ = stdout.flush();

    if let Err(e) = result {
        tracing::debug!(error = ?e, "Command failed");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
