use askebs::http::{AppState, HttpServer};
use askebs::nlq::NlqPipeline;
use askebs::query::QueryStore;
use askebs::{Config, DataStore, Table};
use anyhow::Context;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => Config::load(&path).with_context(|| format!("loading {}", path.display()))?,
        None => Config::from_env().context("reading environment")?,
    };

    let data = Arc::new(DataStore::seeded());
    for table in Table::ALL {
        info!("seeded {} with {} rows", table, data.count(table));
    }

    let nlq = match config.nlq.clone() {
        Some(nlq_config) => Some(Arc::new(
            NlqPipeline::new(nlq_config).context("initializing NLQ pipeline")?,
        )),
        None => {
            warn!("no LLM provider configured; only direct SQL questions will execute");
            None
        }
    };

    let state = Arc::new(AppState {
        data,
        queries: Arc::new(QueryStore::new()),
        nlq,
        query_timeout: Duration::from_secs(config.query_timeout_secs),
    });

    let server = HttpServer::new(state, config.port);
    server
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("server error: {}", e))?;

    Ok(())
}
