//! Detection input and ledger outcome types.
//!
//! # Responsibility
//! - Decode raw detection screen input into a typed `DetectionEvent`.
//! - Describe what the ledger did with an event (`Outcome`).
//!
//! # Invariants
//! - `NO_ELEMENT_SENTINEL` is only interpreted inside `DetectionRequest::decode`.
//! - `Outcome::NewlyDiscovered::points_awarded` always equals the id's number.

use crate::catalog;
use crate::model::element::{Element, ElementId, ElementValidationError};
use serde::{Deserialize, Serialize};

/// Raw atomic number used by the detection screen for "no element found".
pub const NO_ELEMENT_SENTINEL: i32 = -1;

/// Cumulative player score.
pub type Score = u64;

/// Whether an element was identified during one detection interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum DetectionEvent {
    Found(ElementId),
    NotFound,
}

/// Ledger result for one detection event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// First time this element was recorded; points were awarded.
    NewlyDiscovered {
        id: ElementId,
        points_awarded: Score,
        new_score: Score,
    },
    /// Element was recorded before; score is unchanged.
    AlreadyDiscovered { id: ElementId, score: Score },
    /// No element was identified.
    Nothing,
}

impl Outcome {
    /// Returns points awarded by this outcome (zero unless newly discovered).
    pub fn points_awarded(&self) -> Score {
        match self {
            Self::NewlyDiscovered { points_awarded, .. } => *points_awarded,
            Self::AlreadyDiscovered { .. } | Self::Nothing => 0,
        }
    }

    /// Returns the score after the event, when the ledger read it.
    ///
    /// `Nothing` never touches storage, so it carries no score.
    pub fn score(&self) -> Option<Score> {
        match self {
            Self::NewlyDiscovered { new_score, .. } => Some(*new_score),
            Self::AlreadyDiscovered { score, .. } => Some(*score),
            Self::Nothing => None,
        }
    }
}

/// Raw detection screen input as handed over by the UI.
///
/// `number` uses `NO_ELEMENT_SENTINEL` when nothing was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionRequest {
    pub symbol: Option<String>,
    pub number: i32,
    pub name: Option<String>,
    pub weight: Option<String>,
    /// Free-text label of the detected object, e.g. `spoon`.
    pub object_found: String,
}

/// Detection input after boundary decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedDetection {
    pub event: DetectionEvent,
    /// Display details; `Some` exactly when `event` is `Found`.
    pub element: Option<Element>,
    /// Trimmed object label.
    pub object_label: String,
}

impl DetectionRequest {
    /// Creates a request for an object in which no element was found.
    pub fn not_found(object_found: impl Into<String>) -> Self {
        Self {
            symbol: None,
            number: NO_ELEMENT_SENTINEL,
            name: None,
            weight: None,
            object_found: object_found.into(),
        }
    }

    /// Creates a request carrying a full element record.
    pub fn found(element: &Element, object_found: impl Into<String>) -> Self {
        Self {
            symbol: Some(element.symbol.clone()),
            number: i32::from(element.number.get()),
            name: Some(element.name.clone()),
            weight: Some(element.weight.clone()),
            object_found: object_found.into(),
        }
    }

    /// Decodes the raw request into a typed event plus display details.
    ///
    /// Missing or blank text fields fall back to the built-in catalog.
    ///
    /// # Errors
    /// - `OutOfRange` when `number` is neither the sentinel nor 1..=118.
    /// - `EmptySymbol` when no symbol is given and the catalog has none.
    pub fn decode(&self) -> Result<DecodedDetection, ElementValidationError> {
        let object_label = self.object_found.trim().to_string();

        if self.number == NO_ELEMENT_SENTINEL {
            return Ok(DecodedDetection {
                event: DetectionEvent::NotFound,
                element: None,
                object_label,
            });
        }

        let id = ElementId::new(i64::from(self.number))?;
        let known = catalog::element_by_id(id);
        let pick = |given: &Option<String>, fallback: Option<&str>| -> String {
            match given.as_deref().map(str::trim) {
                Some(value) if !value.is_empty() => value.to_string(),
                _ => fallback.unwrap_or_default().to_string(),
            }
        };

        let element = Element::new(
            pick(&self.symbol, known.map(|e| e.symbol.as_str())),
            id,
            pick(&self.name, known.map(|e| e.name.as_str())),
            pick(&self.weight, known.map(|e| e.weight.as_str())),
        )?;

        Ok(DecodedDetection {
            event: DetectionEvent::Found(id),
            element: Some(element),
            object_label,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{DetectionEvent, DetectionRequest, Outcome};
    use crate::model::element::{ElementId, ElementValidationError};

    #[test]
    fn sentinel_decodes_to_not_found() {
        let decoded = DetectionRequest::not_found(" banana ").decode().unwrap();
        assert_eq!(decoded.event, DetectionEvent::NotFound);
        assert!(decoded.element.is_none());
        assert_eq!(decoded.object_label, "banana");
    }

    #[test]
    fn missing_fields_fall_back_to_catalog() {
        let request = DetectionRequest {
            symbol: None,
            number: 26,
            name: Some("  ".to_string()),
            weight: None,
            object_found: "spoon".to_string(),
        };
        let decoded = request.decode().unwrap();
        let element = decoded.element.unwrap();
        assert_eq!(decoded.event, DetectionEvent::Found(ElementId::new(26).unwrap()));
        assert_eq!(element.symbol, "Fe");
        assert_eq!(element.name, "Iron");
        assert_eq!(element.weight, "55.845");
    }

    #[test]
    fn invalid_number_is_rejected() {
        let request = DetectionRequest {
            number: 0,
            ..DetectionRequest::not_found("spoon")
        };
        assert_eq!(
            request.decode().unwrap_err(),
            ElementValidationError::OutOfRange(0)
        );
    }

    #[test]
    fn unknown_element_without_symbol_is_rejected() {
        let request = DetectionRequest {
            number: 92,
            ..DetectionRequest::not_found("rock")
        };
        let id = ElementId::new(92).unwrap();
        assert_eq!(
            request.decode().unwrap_err(),
            ElementValidationError::EmptySymbol(id)
        );
    }

    #[test]
    fn outcome_accessors_report_points_and_score() {
        let id = ElementId::new(8).unwrap();
        let newly = Outcome::NewlyDiscovered {
            id,
            points_awarded: 8,
            new_score: 9,
        };
        assert_eq!(newly.points_awarded(), 8);
        assert_eq!(newly.score(), Some(9));

        let again = Outcome::AlreadyDiscovered { id, score: 9 };
        assert_eq!(again.points_awarded(), 0);
        assert_eq!(again.score(), Some(9));

        assert_eq!(Outcome::Nothing.score(), None);
    }
}
