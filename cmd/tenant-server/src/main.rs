use clap::Parser;
use pkg_api::server::{ServerConfig, start_server};
use pkg_constants::network::{DEFAULT_API_PORT, DEFAULT_BIND_ADDR};
use pkg_constants::paths::{DEFAULT_SERVER_CONFIG, DEFAULT_TENANTS_FILE};
use pkg_types::config::{ServerConfigFile, load_config_file};
use std::net::{IpAddr, SocketAddr};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tenant-server", about = "Tenant API serving lookups and workspace quota overrides")]
struct Cli {
    /// Path to YAML config file
    #[arg(long, short, default_value = DEFAULT_SERVER_CONFIG)]
    config: String,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Address to bind
    #[arg(long)]
    bind: Option<String>,

    /// YAML file the tenant registry is seeded from
    #[arg(long)]
    tenants_file: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cli = Cli::parse();

    // Load config file (returns defaults if file not found)
    let file_cfg: ServerConfigFile = load_config_file(&cli.config)?;
    info!("Config file: {}", cli.config);

    // Merge: CLI args > config file > defaults
    let port = cli.port.or(file_cfg.port).unwrap_or(DEFAULT_API_PORT);
    let bind = cli
        .bind
        .or(file_cfg.bind)
        .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
    let tenants_file = cli
        .tenants_file
        .or(file_cfg.tenants_file)
        .unwrap_or_else(|| DEFAULT_TENANTS_FILE.to_string());

    let ip: IpAddr = bind
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address {}: {}", bind, e))?;

    info!("Starting tenant-server");
    info!("  Bind:          {}", ip);
    info!("  Port:          {}", port);
    info!("  Tenants file:  {}", tenants_file);

    let config = ServerConfig {
        addr: SocketAddr::new(ip, port),
        tenants_file,
    };

    start_server(config).await?;

    Ok(())
}
