//! Core domain logic for element discovery.
//! This crate is the single source of truth for discovery and scoring rules.

pub mod catalog;
pub mod db;
pub mod ledger;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use catalog::{
    collectable_for_label, element_by_number, elements_for_label, select_collectable,
    Recognition, Selection, COLLECT_CONFIDENCE_THRESHOLD,
};
pub use ledger::discovery_ledger::{DiscoveryLedger, ELEMENTS_KEY, POINTS_KEY};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::detection::{
    DecodedDetection, DetectionEvent, DetectionRequest, Outcome, Score, NO_ELEMENT_SENTINEL,
};
pub use model::element::{
    Element, ElementId, ElementValidationError, MAX_ATOMIC_NUMBER, MIN_ATOMIC_NUMBER,
};
pub use service::discovery_service::{
    DetectionReport, DiscoveryService, ServiceError, ServiceResult, TableEntry,
};
pub use service::presentation::{render_detection, score_label, ElementDetails, ResultView};
pub use store::preference_store::{
    PreferenceEdit, PreferenceStore, SqlitePreferenceStore, StorageError, StoreResult,
    DEFAULT_NAMESPACE,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
