use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::info;

use crate::config::Config;
use crate::files::Resolver;
use crate::http::connection::{self, Connection};
use crate::http::response::StatusCode;
use crate::http::template::Templates;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", cfg.server.listen_addr))?;
    info!("Listening on {}", cfg.server.listen_addr);

    serve(listener, cfg).await
}

/// Accepts connections forever, one task per connection.
pub async fn serve(listener: TcpListener, cfg: &Config) -> anyhow::Result<()> {
    let templates = Arc::new(Templates::load(&cfg.static_files.templates_dir));
    let resolver = Arc::new(Resolver::new(
        cfg.static_files.root.clone(),
        Arc::clone(&templates),
    ));
    let permits = Arc::new(Semaphore::new(cfg.server.max_connections));
    let read_timeout = cfg.server.read_timeout();

    info!(
        root = %cfg.static_files.root.display(),
        max_connections = cfg.server.max_connections,
        "Serving static files"
    );

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let Ok(permit) = Arc::clone(&permits).try_acquire_owned() else {
            tracing::warn!(%peer, "Connection limit reached, rejecting");
            let templates = Arc::clone(&templates);
            tokio::spawn(async move {
                if let Err(e) =
                    connection::reject(socket, &templates, StatusCode::SERVICE_UNAVAILABLE).await
                {
                    tracing::error!("Rejecting {} failed: {}", peer, e);
                }
            });
            continue;
        };

        let resolver = Arc::clone(&resolver);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, resolver).with_read_timeout(read_timeout);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
            drop(permit);
        });
    }
}
