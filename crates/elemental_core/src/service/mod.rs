//! Core use-case services.
//!
//! # Responsibility
//! - Turn ledger state into screen-ready projections.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod discovery_service;
pub mod presentation;
