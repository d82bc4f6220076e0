// Standalone MCP server binary

use anyhow::Result;
use clap::Parser;
use harmonic_mcp::{ConfigOverrides, Dispatcher, McpConfig, McpServer};
use harmonic_sdk::{AuthScheme, CredentialStore};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "harmonic-mcp")]
#[command(version, about = "Harmonic company and people intelligence tools over MCP stdio", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "HARMONIC_MCP_CONFIG", default_value = "harmonic-mcp.toml")]
    config: PathBuf,

    /// API base URL
    #[arg(long, env = "HARMONIC_BASE_URL")]
    base_url: Option<String>,

    /// How the API key is sent: api_key_header, api_key_query or bearer
    #[arg(long, env = "HARMONIC_AUTH_SCHEME")]
    auth_scheme: Option<AuthScheme>,

    /// Outbound request timeout in seconds
    #[arg(long, env = "HARMONIC_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Page size for list tools when the caller omits one
    #[arg(long, env = "HARMONIC_PAGE_SIZE")]
    page_size: Option<u32>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.base_url.clone(),
            auth_scheme: self.auth_scheme,
            timeout_secs: self.timeout_secs,
            default_page_size: self.page_size,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "harmonic_mcp=info,harmonic_sdk=info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    tracing::info!("Harmonic MCP Server starting...");

    let mut config = McpConfig::load(&args.config)?;
    config.apply_overrides(&args.overrides());
    tracing::info!(
        base_url = %config.upstream.base_url,
        auth_scheme = %config.upstream.auth_scheme,
        "Upstream configured"
    );

    // The key arrives later through the set_api_key tool.
    let credentials = CredentialStore::shared();
    let client = config.build_client(credentials)?;
    let dispatcher = Dispatcher::new(client);

    tracing::info!("Registered {} tools", dispatcher.list_tools().tools.len());

    let server = McpServer::new(dispatcher);
    tokio::select! {
        result = server.start() => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupt received, shutting down");
            // A pending stdin read cannot be cancelled, so exit directly
            // instead of waiting for runtime shutdown.
            std::process::exit(0);
        }
    }

    Ok(())
}
