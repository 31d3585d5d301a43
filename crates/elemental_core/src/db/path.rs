//! Database file location shared by the FFI and CLI entry points.
//!
//! # Invariants
//! - A blank `ELEMENTAL_DB_PATH` is treated as unset.
//! - Without an override the file lives in the OS temp directory.

use std::path::PathBuf;

/// Environment variable overriding the database file path.
pub const DB_PATH_ENV: &str = "ELEMENTAL_DB_PATH";
/// File name used when no override is configured.
pub const DEFAULT_DB_FILE_NAME: &str = "elemental.sqlite3";

/// Resolves the database path from `ELEMENTAL_DB_PATH`.
///
/// Reads the environment on every call; callers that need a stable path for
/// the process lifetime cache the result.
pub fn resolve_db_path() -> PathBuf {
    db_path_from(std::env::var(DB_PATH_ENV).ok().as_deref())
}

fn db_path_from(raw: Option<&str>) -> PathBuf {
    match raw.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => PathBuf::from(trimmed),
        _ => std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
    }
}
