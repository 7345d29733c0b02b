//! MB Law site server
//!
//! Serves the marketing site:
//!
//! - Pages from the site route table, pre-rendered at startup
//! - A not-found page (HTTP 404) for every other path
//! - Static assets (`/assets`) and the browser module bundle (`/pkg`)
//! - `/health` for load balancer checks

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use site_core::SiteContent;

mod app;
mod handlers;
mod state;
#[cfg(test)]
mod tests;

use state::AppState;

/// Command-line arguments for the site server
#[derive(Parser, Debug)]
#[command(name = "site-server")]
#[command(about = "Serves the MB Law marketing site")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// TOML file overriding the embedded site content
    #[arg(long, env = "SITE_CONTENT")]
    content: Option<PathBuf>,

    /// Directory served under /assets
    #[arg(long, default_value = "public/assets")]
    assets_dir: PathBuf,

    /// wasm-pack output directory served under /pkg
    #[arg(long, default_value = "apps/site-web/wasm/pkg")]
    pkg_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::from_default_env()
                .add_directive(log_level.into())
                .add_directive("tower_http=debug".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let content = match &args.content {
        Some(path) => {
            info!("Loading site content from {}", path.display());
            SiteContent::from_file(path)?
        }
        None => SiteContent::default(),
    };

    let state = AppState::new(&content);
    info!("Rendered {} pages", state.page_count());

    let app = app::build_router(state, &args.assets_dir, &args.pkg_dir);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Site listening on http://{}", addr);
    info!("Assets: {}", args.assets_dir.display());
    info!("Browser module: {}", args.pkg_dir.display());
    if !args.pkg_dir.join("site_web.js").is_file() {
        warn!(
            "No site_web.js in {}; pages render without scroll behavior (run wasm-pack build --target web)",
            args.pkg_dir.display()
        );
    }

    axum::serve(listener, app).await?;

    Ok(())
}
