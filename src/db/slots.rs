use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::PersistResult;
use crate::storage::SlotStore;
use chrono::Local;
use rusqlite::{OptionalExtension, params};

/// `SlotStore` backed by the `slots` table of a SQLite file.
pub struct SqliteSlotStore {
    pool: DbPool,
}

impl SqliteSlotStore {
    pub fn open(path: &str) -> PersistResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn from_pool(pool: DbPool) -> PersistResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }
}

impl SlotStore for SqliteSlotStore {
    fn get(&self, slot: &str) -> PersistResult<Option<String>> {
        let payload = self
            .pool
            .conn
            .query_row(
                "SELECT payload FROM slots WHERE name = ?1",
                params![slot],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(payload)
    }

    fn set(&self, slot: &str, value: &str) -> PersistResult<()> {
        self.pool.conn.execute(
            r#"
            INSERT INTO slots (name, payload, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(name) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at
            "#,
            params![slot, value, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove(&self, slot: &str) -> PersistResult<()> {
        self.pool
            .conn
            .execute("DELETE FROM slots WHERE name = ?1", params![slot])?;
        Ok(())
    }
}
