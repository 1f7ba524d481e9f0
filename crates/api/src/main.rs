use std::sync::Arc;

use anyhow::Context;

use catalog_infra::{Config, SqliteProductStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let config = Config::from_env().context("invalid configuration")?;

    let store = SqliteProductStore::open(&config.database_path)
        .await
        .with_context(|| format!("failed to open {}", config.database_path.display()))?;
    tracing::info!(path = %config.database_path.display(), "connected to SQLite database");

    catalog_infra::initialize(&store)
        .await
        .context("failed to initialize products table")?;

    let app = catalog_api::app::build_app(Arc::new(store));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
