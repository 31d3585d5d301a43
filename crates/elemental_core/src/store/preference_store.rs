//! Preference store contract and SQLite implementation.
//!
//! # Responsibility
//! - Expose get/put for named integers and named string sets.
//! - Apply batched edits in one transaction.
//!
//! # Invariants
//! - Values are scoped by namespace; namespaces never see each other's keys.
//! - `put_string_set` replaces the whole stored set for its key.
//! - An absent string set and an empty string set are distinguishable.

use crate::db::DbError;
use log::{debug, error};
use rusqlite::{params, Connection, OptionalExtension, Transaction, TransactionBehavior};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Namespace used when callers do not pick one.
pub const DEFAULT_NAMESPACE: &str = "elemental";

pub type StoreResult<T> = Result<T, StorageError>;

/// Storage failure: the store is unreachable or returned malformed data.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    InvalidData(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted preference data: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PreferenceValue {
    Int(i64),
    StringSet(BTreeSet<String>),
}

/// Batch of puts applied atomically by `PreferenceStore::apply`.
///
/// Later puts for the same key win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceEdit {
    puts: Vec<(String, PreferenceValue)>,
}

impl PreferenceEdit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an integer write.
    pub fn put_int(mut self, key: impl Into<String>, value: i64) -> Self {
        self.puts.push((key.into(), PreferenceValue::Int(value)));
        self
    }

    /// Queues a full replacement of a string set.
    pub fn put_string_set<I, V>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let set = values.into_iter().map(Into::into).collect();
        self.puts.push((key.into(), PreferenceValue::StringSet(set)));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.puts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.puts.len()
    }
}

/// Durable named-value storage injected into the ledger.
pub trait PreferenceStore {
    fn get_int(&self, key: &str) -> StoreResult<Option<i64>>;
    fn get_string_set(&self, key: &str) -> StoreResult<Option<BTreeSet<String>>>;
    fn apply(&self, edit: PreferenceEdit) -> StoreResult<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn get_int(&self, key: &str) -> StoreResult<Option<i64>> {
        (**self).get_int(key)
    }

    fn get_string_set(&self, key: &str) -> StoreResult<Option<BTreeSet<String>>> {
        (**self).get_string_set(key)
    }

    fn apply(&self, edit: PreferenceEdit) -> StoreResult<()> {
        (**self).apply(edit)
    }
}

/// SQLite-backed preference store over a migrated connection.
pub struct SqlitePreferenceStore<'conn> {
    conn: &'conn Connection,
    namespace: String,
}

impl<'conn> SqlitePreferenceStore<'conn> {
    /// Creates a store in `DEFAULT_NAMESPACE`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self::with_namespace(conn, DEFAULT_NAMESPACE)
    }

    /// Creates a store scoped to `namespace`.
    pub fn with_namespace(conn: &'conn Connection, namespace: impl Into<String>) -> Self {
        Self {
            conn,
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        self.namespace.as_str()
    }
}

impl PreferenceStore for SqlitePreferenceStore<'_> {
    fn get_int(&self, key: &str) -> StoreResult<Option<i64>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM pref_ints WHERE namespace = ?1 AND key = ?2;",
                params![self.namespace, key],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn get_string_set(&self, key: &str) -> StoreResult<Option<BTreeSet<String>>> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM pref_string_set_keys
                WHERE namespace = ?1 AND key = ?2
            );",
            params![self.namespace, key],
            |row| row.get(0),
        )?;
        if exists == 0 {
            return Ok(None);
        }

        let mut stmt = self.conn.prepare(
            "SELECT member
             FROM pref_string_sets
             WHERE namespace = ?1 AND key = ?2
             ORDER BY member ASC;",
        )?;
        let mut rows = stmt.query(params![self.namespace, key])?;
        let mut members = BTreeSet::new();
        while let Some(row) = rows.next()? {
            members.insert(row.get::<_, String>(0)?);
        }

        Ok(Some(members))
    }

    fn apply(&self, edit: PreferenceEdit) -> StoreResult<()> {
        if edit.is_empty() {
            return Ok(());
        }

        let put_count = edit.len();
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        for (key, value) in &edit.puts {
            if let Err(err) = write_value(&tx, &self.namespace, key, value) {
                error!(
                    "event=pref_apply module=store status=error namespace={} key={} error={}",
                    self.namespace, key, err
                );
                // Dropping `tx` rolls back every put of this edit.
                return Err(err);
            }
        }
        tx.commit()?;

        debug!(
            "event=pref_apply module=store status=ok namespace={} puts={}",
            self.namespace, put_count
        );
        Ok(())
    }
}

fn write_value(
    tx: &Transaction<'_>,
    namespace: &str,
    key: &str,
    value: &PreferenceValue,
) -> StoreResult<()> {
    match value {
        PreferenceValue::Int(value) => {
            tx.execute(
                "INSERT INTO pref_ints (namespace, key, value)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(namespace, key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = (strftime('%s', 'now') * 1000);",
                params![namespace, key, value],
            )?;
        }
        PreferenceValue::StringSet(members) => {
            tx.execute(
                "INSERT INTO pref_string_set_keys (namespace, key)
                 VALUES (?1, ?2)
                 ON CONFLICT(namespace, key) DO UPDATE SET
                    updated_at = (strftime('%s', 'now') * 1000);",
                params![namespace, key],
            )?;
            tx.execute(
                "DELETE FROM pref_string_sets WHERE namespace = ?1 AND key = ?2;",
                params![namespace, key],
            )?;
            for member in members {
                tx.execute(
                    "INSERT INTO pref_string_sets (namespace, key, member)
                     VALUES (?1, ?2, ?3);",
                    params![namespace, key, member],
                )?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{PreferenceEdit, PreferenceStore, SqlitePreferenceStore};
    use crate::db::open_db_in_memory;
    use std::collections::BTreeSet;

    #[test]
    fn absent_keys_read_as_none() {
        let conn = open_db_in_memory().unwrap();
        let store = SqlitePreferenceStore::new(&conn);

        assert_eq!(store.get_int("POINTS").unwrap(), None);
        assert_eq!(store.get_string_set("elements").unwrap(), None);
    }

    #[test]
    fn empty_set_is_distinct_from_absent_set() {
        let conn = open_db_in_memory().unwrap();
        let store = SqlitePreferenceStore::new(&conn);

        store
            .apply(PreferenceEdit::new().put_string_set("elements", Vec::<String>::new()))
            .unwrap();

        assert_eq!(store.get_string_set("elements").unwrap(), Some(BTreeSet::new()));
    }

    #[test]
    fn later_put_for_same_key_wins() {
        let conn = open_db_in_memory().unwrap();
        let store = SqlitePreferenceStore::new(&conn);

        store
            .apply(PreferenceEdit::new().put_int("POINTS", 3).put_int("POINTS", 7))
            .unwrap();

        assert_eq!(store.get_int("POINTS").unwrap(), Some(7));
    }
}
