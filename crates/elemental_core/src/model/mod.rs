//! Element discovery domain model.
//!
//! # Responsibility
//! - Define canonical element identity and display data.
//! - Define the typed detection input and ledger outcome shapes.
//!
//! # Invariants
//! - Every element is identified by a validated `ElementId` (1..=118).
//! - The "no element" sentinel never travels past `DetectionRequest::decode`.

pub mod detection;
pub mod element;
