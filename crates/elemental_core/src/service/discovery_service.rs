//! Discovery use-case service.
//!
//! # Responsibility
//! - Decode detection screen input once and feed it to the ledger.
//! - Build home screen and periodic table projections from ledger state.
//!
//! # Invariants
//! - Validation failures never reach the ledger.
//! - Service layer remains storage-agnostic.

use crate::catalog;
use crate::ledger::discovery_ledger::DiscoveryLedger;
use crate::model::detection::{DecodedDetection, DetectionRequest, Outcome, Score};
use crate::model::element::{Element, ElementValidationError};
use crate::service::presentation::{render_detection, score_label, ResultView};
use crate::store::preference_store::{PreferenceStore, StorageError, StoreResult};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure of a detection use-case.
#[derive(Debug)]
pub enum ServiceError {
    /// Raw input could not be decoded; storage was not touched.
    Validation(ElementValidationError),
    Storage(StorageError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<ElementValidationError> for ServiceError {
    fn from(value: ElementValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for ServiceError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Result of one detection use-case call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionReport {
    pub detection: DecodedDetection,
    pub outcome: Outcome,
    pub view: ResultView,
}

/// One periodic table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableEntry {
    pub element: Element,
    pub discovered: bool,
}

/// Use-case wrapper around the discovery ledger.
pub struct DiscoveryService<S: PreferenceStore> {
    ledger: DiscoveryLedger<S>,
}

impl<S: PreferenceStore> DiscoveryService<S> {
    pub fn new(ledger: DiscoveryLedger<S>) -> Self {
        Self { ledger }
    }

    /// Creates a service whose ledger owns `store`.
    pub fn with_store(store: S) -> Self {
        Self::new(DiscoveryLedger::new(store))
    }

    pub fn ledger(&self) -> &DiscoveryLedger<S> {
        &self.ledger
    }

    /// Decodes raw detection input, records it and renders the result screen.
    ///
    /// # Errors
    /// - `Validation` when the atomic number or symbol is unusable.
    /// - `Storage` when the ledger cannot read or persist state.
    pub fn detect(&self, request: &DetectionRequest) -> ServiceResult<DetectionReport> {
        let detection = request.decode()?;
        let outcome = self.ledger.record_detection(detection.event)?;
        let view = render_detection(&detection, &outcome);
        Ok(DetectionReport {
            detection,
            outcome,
            view,
        })
    }

    /// Returns the current score.
    pub fn score(&self) -> StoreResult<Score> {
        self.ledger.current_score()
    }

    /// Returns the home screen score line.
    pub fn score_label(&self) -> StoreResult<String> {
        Ok(score_label(self.ledger.current_score()?))
    }

    /// Lists catalog elements with their discovered flags.
    pub fn periodic_table(&self) -> StoreResult<Vec<TableEntry>> {
        let discovered = self.ledger.discovered_ids()?;
        Ok(catalog::all_elements()
            .iter()
            .map(|element| TableEntry {
                element: element.clone(),
                discovered: discovered.contains(&element.number),
            })
            .collect())
    }
}
