//! Example rows for a fresh database.

use crate::db::Repository;
use crate::domain::ItemDraft;
use tracing::info;

const SEED_ITEMS: [(&str, &str); 3] = [
    ("Widget", "Basic example item"),
    ("Gadget", "Another example item"),
    ("Thingamajig", "Used for demos"),
];

/// The fixed seed rows, in insertion order.
pub fn seed_drafts() -> Vec<ItemDraft> {
    SEED_ITEMS
        .iter()
        .map(|(name, notes)| ItemDraft {
            name: name.to_string(),
            notes: notes.to_string(),
        })
        .collect()
}

/// Seed the example rows unless the table already holds items.
///
/// Returns the number of rows inserted.
pub async fn seed_if_empty(repo: &Repository) -> Result<usize, sqlx::Error> {
    let inserted = repo.seed_if_empty(&seed_drafts()).await?;
    if inserted > 0 {
        info!(inserted, "Seeded items table");
    } else {
        info!("Items table already populated");
    }
    Ok(inserted)
}
