//! Create the items table and seed example rows into an empty database.

use anyhow::Context;
use items_server::db::bootstrap;
use items_server::{init_db, init_tracing, Config, Repository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env().context("loading configuration")?;
    let pool = init_db(&config.database_path)
        .await
        .with_context(|| format!("opening database {}", config.database_path))?;

    let repo = Repository::new(pool);
    bootstrap::seed_if_empty(&repo)
        .await
        .context("seeding items table")?;

    repo.close().await;
    Ok(())
}
