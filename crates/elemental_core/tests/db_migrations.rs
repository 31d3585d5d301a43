use elemental_core::db::migrations::latest_version;
use elemental_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "pref_ints");
    assert_table_exists(&conn, "pref_string_sets");
    assert_table_exists(&conn, "pref_string_set_keys");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("elemental.db");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "pref_ints");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn preference_tables_are_keyed_by_namespace() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(primary_key(&conn, "pref_ints"), ["namespace", "key"]);
    assert_eq!(primary_key(&conn, "pref_string_set_keys"), ["namespace", "key"]);
    assert_eq!(
        primary_key(&conn, "pref_string_sets"),
        ["namespace", "key", "member"]
    );
}

#[test]
fn duplicate_set_member_violates_primary_key() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO pref_string_sets (namespace, key, member) VALUES ('elemental', 'elements', '26');",
        [],
    )
    .unwrap();

    let err = conn
        .execute(
            "INSERT INTO pref_string_sets (namespace, key, member) VALUES ('elemental', 'elements', '26');",
            [],
        )
        .unwrap_err();
    assert!(err.to_string().contains("UNIQUE constraint failed"), "{err}");

    conn.execute(
        "INSERT INTO pref_string_sets (namespace, key, member) VALUES ('player-b', 'elements', '26');",
        [],
    )
    .unwrap();
}

#[test]
fn fresh_database_has_no_preferences() {
    let conn = open_db_in_memory().unwrap();

    for table in ["pref_ints", "pref_string_sets", "pref_string_set_keys"] {
        let rows: i64 = conn
            .query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 0, "{table}");
    }
}

fn primary_key(conn: &Connection, table_name: &str) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM pragma_table_info(?1) WHERE pk > 0 ORDER BY pk;")
        .unwrap();
    stmt.query_map([table_name], |row| row.get::<_, String>(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap()
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
