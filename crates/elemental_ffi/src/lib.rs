//! Flutter-facing bindings for the element discovery core.

pub mod api;
