//! Print every stored item as pretty JSON, ordered by id.

use anyhow::Context;
use items_server::{init_db, init_tracing, Config, Repository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env().context("loading configuration")?;
    let pool = init_db(&config.database_path)
        .await
        .with_context(|| format!("opening database {}", config.database_path))?;

    let repo = Repository::new(pool);
    let items = repo.list_items().await.context("listing items")?;
    println!("{}", serde_json::to_string_pretty(&items)?);

    repo.close().await;
    Ok(())
}
