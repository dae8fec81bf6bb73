// crates/service/src/store.rs
//! Relational record of uploaded filenames.

use std::path::Path;

use rusqlite::{Connection, params};

/// SQLite-backed `files(name)` table. One row per accepted upload.
#[derive(Debug)]
pub struct FileStore {
    conn: Connection,
}

impl FileStore {
    pub fn open(path: &Path) -> Result<Self, rusqlite::Error> {
        Self::with_connection(Connection::open(path)?)
    }

    /// In-memory store, used by tests.
    pub fn in_memory() -> Result<Self, rusqlite::Error> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, rusqlite::Error> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS files (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self { conn })
    }

    pub fn record(&self, name: &str) -> Result<(), rusqlite::Error> {
        self.conn
            .execute("INSERT INTO files (name) VALUES (?1)", params![name])?;
        Ok(())
    }

    pub fn names(&self) -> Result<Vec<String>, rusqlite::Error> {
        let mut stmt = self.conn.prepare("SELECT name FROM files ORDER BY id")?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        rows.collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_uploads_in_order() {
        let store = FileStore::in_memory().unwrap();
        store.record("a.cbl").unwrap();
        store.record("b.txt").unwrap();
        store.record("a.cbl").unwrap();
        assert_eq!(store.names().unwrap(), vec!["a.cbl", "b.txt", "a.cbl"]);
    }

    #[test]
    fn open_creates_the_table_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("files.db");
        {
            let store = FileStore::open(&db).unwrap();
            store.record("x.c").unwrap();
        }
        let reopened = FileStore::open(&db).unwrap();
        assert_eq!(reopened.names().unwrap(), vec!["x.c"]);
    }
}
