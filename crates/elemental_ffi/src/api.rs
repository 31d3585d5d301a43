//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Translate raw screen input into core requests and core results into
//!   flat response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Failures are reported through `ok=false` envelopes, never by throwing.

use elemental_core::db::{open_db, resolve_db_path};
use elemental_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    score_label, DetectionRequest, DiscoveryService, Element, ElementId, Outcome,
    SqlitePreferenceStore,
};
use log::warn;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Element card fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementItem {
    pub symbol: String,
    pub number: u16,
    pub name: String,
    pub weight: String,
}

impl From<&Element> for ElementItem {
    fn from(element: &Element) -> Self {
        Self {
            symbol: element.symbol.clone(),
            number: element.number.get(),
            name: element.name.clone(),
            weight: element.weight.clone(),
        }
    }
}

/// Result screen envelope for one detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionResponse {
    /// Whether the detection was decoded and recorded.
    pub ok: bool,
    /// `newly_discovered|already_discovered|nothing`; empty when `ok=false`.
    pub outcome: String,
    /// Screen title, e.g. `Element found in Spoon!`.
    pub title: String,
    /// Element card; `None` hides the card.
    pub element: Option<ElementItem>,
    /// Points message, or the failure message when `ok=false`.
    pub message: String,
    /// Points awarded by this detection.
    pub points_awarded: u64,
    /// Score after the detection; `None` when not read.
    pub score: Option<u64>,
}

impl DetectionResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            outcome: String::new(),
            title: String::new(),
            element: None,
            message: message.into(),
            points_awarded: 0,
            score: None,
        }
    }
}

/// Home screen score envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResponse {
    pub ok: bool,
    pub score: u64,
    /// Display line, e.g. `You have 3 points!`.
    pub label: String,
    /// Empty on success.
    pub message: String,
}

/// One periodic table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableItem {
    pub element: ElementItem,
    pub discovered: bool,
}

/// Membership envelope for one atomic number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredResponse {
    pub ok: bool,
    /// Meaningful only when `ok=true`.
    pub discovered: bool,
    /// Empty on success.
    pub message: String,
}

/// Periodic table envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableResponse {
    pub ok: bool,
    pub items: Vec<TableItem>,
    pub message: String,
}

/// Records a detection from the result screen.
///
/// Input semantics:
/// - `number = -1` means no element was found in `object_found`.
/// - Missing `symbol|name|weight` fall back to the built-in catalog.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn record_detection(
    symbol: Option<String>,
    number: i32,
    name: Option<String>,
    weight: Option<String>,
    object_found: String,
) -> DetectionResponse {
    let request = DetectionRequest {
        symbol,
        number,
        name,
        weight,
        object_found,
    };

    let report = with_service(&db_path(), |service| {
        service.detect(&request).map_err(|err| err.to_string())
    });
    match report {
        Ok(report) => DetectionResponse {
            ok: true,
            outcome: outcome_label(&report.outcome).to_string(),
            title: report.view.title,
            element: report.detection.element.as_ref().map(ElementItem::from),
            message: report.view.message,
            points_awarded: report.outcome.points_awarded(),
            score: report.outcome.score(),
        },
        Err(err) => {
            warn!("event=ffi_call module=ffi status=error call=record_detection number={number}");
            DetectionResponse::failure(format!("record_detection failed: {err}"))
        }
    }
}

/// Reads the current score for the home screen.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; `score=0` with `ok=false` on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn current_score() -> ScoreResponse {
    match with_service(&db_path(), |service| {
        service.score().map_err(|err| err.to_string())
    }) {
        Ok(score) => ScoreResponse {
            ok: true,
            score,
            label: score_label(score),
            message: String::new(),
        },
        Err(err) => {
            warn!("event=ffi_call module=ffi status=error call=current_score");
            ScoreResponse {
                ok: false,
                score: 0,
                label: score_label(0),
                message: format!("current_score failed: {err}"),
            }
        }
    }
}

/// Returns whether an element was already discovered.
///
/// # FFI contract
/// - `ok=false` with a message for numbers outside `1..=118` and on storage
///   failure; `discovered` is `false` in both cases.
#[flutter_rust_bridge::frb(sync)]
pub fn is_discovered(number: i32) -> DiscoveredResponse {
    discovered_in(&db_path(), number)
}

/// Lists catalog elements with discovered flags.
#[flutter_rust_bridge::frb(sync)]
pub fn periodic_table() -> TableResponse {
    match with_service(&db_path(), |service| {
        service.periodic_table().map_err(|err| err.to_string())
    }) {
        Ok(entries) => TableResponse {
            ok: true,
            items: entries
                .iter()
                .map(|entry| TableItem {
                    element: ElementItem::from(&entry.element),
                    discovered: entry.discovered,
                })
                .collect(),
            message: String::new(),
        },
        Err(err) => {
            warn!("event=ffi_call module=ffi status=error call=periodic_table");
            TableResponse {
                ok: false,
                items: Vec::new(),
                message: format!("periodic_table failed: {err}"),
            }
        }
    }
}

/// Returns the element offered for a detected object label.
///
/// Pure catalog lookup; never touches storage.
#[flutter_rust_bridge::frb(sync)]
pub fn collectable_for_label(label: String) -> Option<ElementItem> {
    elemental_core::collectable_for_label(label.as_str()).map(ElementItem::from)
}

fn db_path() -> PathBuf {
    DB_PATH.get_or_init(resolve_db_path).clone()
}

fn discovered_in(db_path: &Path, number: i32) -> DiscoveredResponse {
    let result = ElementId::new(i64::from(number))
        .map_err(|err| err.to_string())
        .and_then(|id| {
            with_service(db_path, |service| {
                service
                    .ledger()
                    .is_discovered(id)
                    .map_err(|err| err.to_string())
            })
        });
    match result {
        Ok(discovered) => DiscoveredResponse {
            ok: true,
            discovered,
            message: String::new(),
        },
        Err(err) => {
            warn!("event=ffi_call module=ffi status=error call=is_discovered number={number}");
            DiscoveredResponse {
                ok: false,
                discovered: false,
                message: format!("is_discovered failed: {err}"),
            }
        }
    }
}

fn with_service<T>(
    db_path: &Path,
    f: impl FnOnce(&DiscoveryService<SqlitePreferenceStore<'_>>) -> Result<T, String>,
) -> Result<T, String> {
    let conn = open_db(db_path).map_err(|err| format!("DB open failed: {err}"))?;
    let service = DiscoveryService::with_store(SqlitePreferenceStore::new(&conn));
    f(&service)
}

fn outcome_label(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::NewlyDiscovered { .. } => "newly_discovered",
        Outcome::AlreadyDiscovered { .. } => "already_discovered",
        Outcome::Nothing => "nothing",
    }
}
