use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use kenic_handoff_lib::{discover_config_path, Catalog, ConfigManager};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "kenic-handoff")]
#[command(version)]
#[command(about = "Serve the .ke registrar catalog, landing page, and deep-link redirects", long_about = None)]
struct Args {
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED), help = "Address to bind")]
    host: IpAddr,

    #[arg(short, long, default_value_t = 10000, help = "Port to listen on")]
    port: u16,

    #[arg(
        short,
        long,
        help = "Catalog TOML file (falls back to ./kenic-handoff.toml, then the builtin catalog)"
    )]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let catalog = match args.config.or_else(discover_config_path) {
        Some(path) => {
            tracing::info!("loading catalog from {}", path.display());
            let config = ConfigManager::load_file(&path)
                .with_context(|| format!("failed to load catalog config {}", path.display()))?;
            Catalog::from_config(config).context("catalog config is invalid")?
        }
        None => Catalog::builtin(),
    };

    tracing::info!(
        tlds = catalog.tlds().len(),
        registrars = catalog.registrars(None).len(),
        "catalog ready"
    );

    let addr = SocketAddr::new(args.host, args.port);
    kenic_handoff::serve(addr, catalog).await
}
