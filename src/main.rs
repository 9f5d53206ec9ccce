//! Service entry point: configuration, wiring and the HTTP listener.

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use whitecrop::config::AppConfig;
use whitecrop::fetch::HttpFetcher;
use whitecrop::image::{CropOpts, WhiteCropProcessor};
use whitecrop::service::CropService;
use whitecrop::store::LocalArtifactStore;
use whitecrop::sweep::RetentionSweeper;
use whitecrop::web::build_router;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cfg = AppConfig::from_env();
    std::fs::create_dir_all(&cfg.storage.root)
        .with_context(|| format!("create storage root {:?}", cfg.storage.root))?;

    let service = Arc::new(CropService::new(
        Arc::new(HttpFetcher::new(cfg.fetch.timeout)?),
        Arc::new(WhiteCropProcessor::default()),
        Arc::new(LocalArtifactStore::new(&cfg.storage.root)),
        CropOpts::new(cfg.crop.tolerance, cfg.crop.margin),
    ));

    let sweeper = RetentionSweeper::new(
        cfg.storage.root.clone(),
        cfg.retention.max_age,
        cfg.retention.interval,
    );
    tokio::spawn(sweeper.run());

    let app = build_router(service, cfg.http.clone(), cfg.storage.root.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.http.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    info!(%addr, "whitecrop listening");
    axum::serve(listener, app).await.context("serve")?;
    Ok(())
}
