//! Durable key/value preference storage.
//!
//! # Responsibility
//! - Define the injected storage contract used by the discovery ledger.
//! - Keep SQLite details inside the persistence boundary.
//!
//! # Invariants
//! - `PreferenceStore::apply` writes every put of an edit or none of them.
//! - Reads of absent keys return `None`, never a default.

pub mod preference_store;
