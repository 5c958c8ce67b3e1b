//! Repository layer for the `items` table.

use crate::domain::{Item, ItemDraft, ItemId};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

/// Storage accessor for items. Each CRUD call is a single statement.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// All items, ascending by id.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_items(&self) -> Result<Vec<Item>, sqlx::Error> {
        let rows = sqlx::query("SELECT id, name, notes FROM items ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(row_to_item).collect())
    }

    /// The item with `id`, if any.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn get_item(&self, id: ItemId) -> Result<Option<Item>, sqlx::Error> {
        let row = sqlx::query("SELECT id, name, notes FROM items WHERE id = ?")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(row_to_item))
    }

    /// Insert a new item and return its storage-assigned id.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn create_item(&self, draft: &ItemDraft) -> Result<ItemId, sqlx::Error> {
        let result = sqlx::query("INSERT INTO items (name, notes) VALUES (?, ?)")
            .bind(draft.name.as_str())
            .bind(draft.notes.as_str())
            .execute(&self.pool)
            .await?;

        Ok(ItemId::new(result.last_insert_rowid()))
    }

    /// Overwrite name and notes of an existing item.
    ///
    /// Returns `false` when no row has that id; nothing is inserted in that case.
    ///
    /// # Errors
    /// Returns an error if the update fails.
    pub async fn update_item(&self, id: ItemId, draft: &ItemDraft) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE items SET name = ?, notes = ? WHERE id = ?")
            .bind(draft.name.as_str())
            .bind(draft.notes.as_str())
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Remove an item. Returns `false` when no row has that id.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub async fn delete_item(&self, id: ItemId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Number of stored items.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn count_items(&self) -> Result<i64, sqlx::Error> {
        let row = sqlx::query("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get(0))
    }

    /// Insert `drafts` in one transaction, but only if the table is empty.
    ///
    /// Returns the number of rows inserted (0 when items already existed).
    ///
    /// # Errors
    /// Returns an error if the transaction fails.
    pub async fn seed_if_empty(&self, drafts: &[ItemDraft]) -> Result<usize, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let existing: i64 = sqlx::query("SELECT COUNT(*) FROM items")
            .fetch_one(&mut *tx)
            .await?
            .get(0);
        if existing > 0 {
            return Ok(0);
        }

        for draft in drafts {
            sqlx::query("INSERT INTO items (name, notes) VALUES (?, ?)")
                .bind(draft.name.as_str())
                .bind(draft.notes.as_str())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(drafts.len())
    }

    /// Close the underlying pool. Pending connections are drained first.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn row_to_item(row: &SqliteRow) -> Item {
    Item {
        id: ItemId::new(row.get("id")),
        name: row.get("name"),
        notes: row.get("notes"),
    }
}
