use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};
use tracing::info;

/// A string-keyed store of serialized values, backed by SQLite.
pub struct Catalog {
    conn: Connection,
}

impl Catalog {
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path).context("failed to open catalog database")?;
        let catalog = Self { conn };
        catalog.migrate()?;
        Ok(catalog)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let catalog = Self { conn };
        catalog.migrate()?;
        Ok(catalog)
    }

    fn migrate(&self) -> Result<()> {
        info!("running catalog migrations");
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS entries (
                key        TEXT PRIMARY KEY NOT NULL,
                value      TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            );
            ",
        )?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM entries WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .with_context(|| format!("failed to read entry {key}"))?;
        Ok(value)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO entries (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = datetime('now')",
                params![key, value],
            )
            .with_context(|| format!("failed to write entry {key}"))?;
        Ok(())
    }

    /// Delete an entry, returning whether it existed.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM entries WHERE key = ?1", params![key])
            .with_context(|| format!("failed to delete entry {key}"))?;
        Ok(changed > 0)
    }

    pub fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_count(catalog: &Catalog) -> i64 {
        catalog
            .conn
            .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn set_and_get() {
        let catalog = Catalog::open_in_memory().unwrap();
        catalog.set("greeting", "hello").unwrap();
        assert_eq!(catalog.get("greeting").unwrap().as_deref(), Some("hello"));
    }

    #[test]
    fn get_missing_key() {
        let catalog = Catalog::open_in_memory().unwrap();
        assert!(catalog.get("nope").unwrap().is_none());
        assert!(!catalog.contains("nope").unwrap());
    }

    #[test]
    fn set_overwrites_previous() {
        let catalog = Catalog::open_in_memory().unwrap();
        catalog.set("k", "v1").unwrap();
        catalog.set("k", "v2").unwrap();
        assert_eq!(catalog.get("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(entry_count(&catalog), 1);
    }

    #[test]
    fn remove_entry() {
        let catalog = Catalog::open_in_memory().unwrap();
        catalog.set("k", "v").unwrap();
        assert!(catalog.remove("k").unwrap());
        assert!(!catalog.remove("k").unwrap());
        assert_eq!(entry_count(&catalog), 0);
    }

    #[test]
    fn entry_count_empty() {
        let catalog = Catalog::open_in_memory().unwrap();
        assert_eq!(entry_count(&catalog), 0);
    }

    #[test]
    fn persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("catalog.db");
        let path_str = db_path.to_str().unwrap();

        let catalog = Catalog::open(path_str).unwrap();
        catalog.set("albums", "[]").unwrap();
        drop(catalog);

        let catalog = Catalog::open(path_str).unwrap();
        assert_eq!(catalog.get("albums").unwrap().as_deref(), Some("[]"));
    }
}
