//! Element discovery ledger.
//!
//! # Responsibility
//! - Own the discovered-element set and the cumulative score.
//! - Award points exactly once per element.
//!
//! # Invariants
//! - The ledger is the only writer of `ELEMENTS_KEY` and `POINTS_KEY`.
//! - Score equals the sum of discovered atomic numbers.

pub mod discovery_ledger;
