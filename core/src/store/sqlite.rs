use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension, Row};

use super::migrations::MIGRATIONS;
use super::{AddressStore, StoreError};
use crate::address::{AddressId, AddressPatch, AddressRecord, NewAddress};

const SELECT_COLUMNS: &str = "SELECT id, latitude, longitude, name FROM address_book";

/// SQLite-backed [`AddressStore`].
///
/// A single connection is shared behind a mutex; every write runs in its own
/// transaction.
#[derive(Debug)]
pub struct SqliteAddressStore {
    conn: Mutex<Connection>,
}

impl SqliteAddressStore {
    /// Open (or create) a database at the given path and apply migrations.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// Open an in-memory database. Contents are lost when the store is dropped.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        apply_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Unavailable("connection lock poisoned".to_string()))
    }
}

fn apply_migrations(conn: &Connection) -> Result<(), StoreError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        [],
    )?;

    let mut stmt = conn.prepare("SELECT version FROM schema_migrations ORDER BY version")?;
    let applied: Vec<u32> = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    for migration in MIGRATIONS {
        if applied.contains(&migration.version) {
            continue;
        }
        tracing::info!(
            version = migration.version,
            name = migration.name,
            "applying schema migration"
        );
        conn.execute_batch(migration.sql)?;
        conn.execute(
            "INSERT INTO schema_migrations (version, name) VALUES (?1, ?2)",
            params![migration.version, migration.name],
        )?;
    }

    Ok(())
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<AddressRecord> {
    Ok(AddressRecord {
        id: row.get(0)?,
        latitude: row.get(1)?,
        longitude: row.get(2)?,
        name: row.get(3)?,
    })
}

fn find_record(conn: &Connection, id: AddressId) -> Result<Option<AddressRecord>, StoreError> {
    let record = conn
        .query_row(
            &format!("{SELECT_COLUMNS} WHERE id = ?1"),
            params![id],
            row_to_record,
        )
        .optional()?;
    Ok(record)
}

impl AddressStore for SqliteAddressStore {
    fn create(&self, address: &NewAddress) -> Result<AddressRecord, StoreError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO address_book (latitude, longitude, name) VALUES (?1, ?2, ?3)",
            params![address.latitude, address.longitude, address.name],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(address.clone().into_record(id))
    }

    fn get(&self, id: AddressId) -> Result<AddressRecord, StoreError> {
        let conn = self.lock()?;
        find_record(&conn, id)?.ok_or(StoreError::NotFound { id })
    }

    fn update(&self, id: AddressId, patch: &AddressPatch) -> Result<AddressRecord, StoreError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let mut record = find_record(&tx, id)?.ok_or(StoreError::NotFound { id })?;
        patch.apply_to(&mut record);
        tx.execute(
            "UPDATE address_book SET latitude = ?2, longitude = ?3, name = ?4 WHERE id = ?1",
            params![record.id, record.latitude, record.longitude, record.name],
        )?;
        tx.commit()?;
        Ok(record)
    }

    fn delete(&self, id: AddressId) -> Result<(), StoreError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let removed = tx.execute("DELETE FROM address_book WHERE id = ?1", params![id])?;
        if removed == 0 {
            return Err(StoreError::NotFound { id });
        }
        tx.commit()?;
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<AddressRecord>, StoreError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY id"))?;
        let records = stmt
            .query_map([], row_to_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    fn ping(&self) -> Result<(), StoreError> {
        let conn = self.lock()?;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        Ok(())
    }
}
