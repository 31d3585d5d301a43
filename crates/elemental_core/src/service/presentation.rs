//! Display projections for the home and result screens.
//!
//! Pure formatting: nothing here reads or writes storage.

use crate::model::detection::{DecodedDetection, Outcome, Score};
use crate::model::element::Element;
use serde::Serialize;

/// Message shown when an element was found before.
pub const ALREADY_FOUND_MESSAGE: &str = "No points given. You have already found this element";

/// Home screen score line.
pub fn score_label(score: Score) -> String {
    format!("You have {score} points!")
}

/// Text fields of the element card on the result screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementDetails {
    pub symbol: String,
    pub number: String,
    pub name: String,
    pub weight: String,
}

impl From<&Element> for ElementDetails {
    fn from(element: &Element) -> Self {
        Self {
            symbol: element.symbol.clone(),
            number: element.number.to_string(),
            name: element.name.clone(),
            weight: element.weight.clone(),
        }
    }
}

/// Everything the result screen displays for one detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub title: String,
    /// `None` hides the element card.
    pub details: Option<ElementDetails>,
    pub message: String,
}

/// Projects a decoded detection and its ledger outcome onto the result screen.
pub fn render_detection(decoded: &DecodedDetection, outcome: &Outcome) -> ResultView {
    let label = capitalize_first(&decoded.object_label);
    let Some(element) = decoded.element.as_ref() else {
        return ResultView {
            title: format!("No element found in {label}"),
            details: None,
            message: String::new(),
        };
    };

    let message = match outcome {
        Outcome::NewlyDiscovered { points_awarded, .. } => {
            format!("You earned {points_awarded} points!")
        }
        Outcome::AlreadyDiscovered { .. } => ALREADY_FOUND_MESSAGE.to_string(),
        Outcome::Nothing => String::new(),
    };

    ResultView {
        title: format!("Element found in {label}!"),
        details: Some(ElementDetails::from(element)),
        message,
    }
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::capitalize_first;

    #[test]
    fn capitalize_first_handles_empty_and_multiword() {
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("wine glass"), "Wine glass");
        assert_eq!(capitalize_first("Éclair"), "Éclair");
    }
}
