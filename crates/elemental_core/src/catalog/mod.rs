//! Built-in element catalog and object-label mapping.
//!
//! # Responsibility
//! - Provide display data for the elements the app knows about.
//! - Map detected object labels to the elements they contain.
//! - Pick the collectable element from a set of recognitions.
//!
//! # Invariants
//! - Catalog entries are unique by atomic number and ordered ascending.
//! - Every element referenced by a label exists in the catalog.

mod elements;
mod recognition;

pub use elements::{
    all_elements, collectable_for_label, element_by_id, element_by_number, elements_for_label,
    known_labels,
};
pub use recognition::{select_collectable, Recognition, Selection, COLLECT_CONFIDENCE_THRESHOLD};
