//! Collectable selection from object detector output.

use super::elements::collectable_for_label;
use crate::model::element::Element;

/// Minimum confidence (exclusive) for a recognition to offer a collectable.
pub const COLLECT_CONFIDENCE_THRESHOLD: f32 = 0.6;

/// One labelled detector result.
#[derive(Debug, Clone, PartialEq)]
pub struct Recognition {
    pub label: String,
    pub confidence: f32,
}

impl Recognition {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// Best recognition of a frame and its collectable element, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Trimmed label of the chosen recognition.
    pub label: String,
    pub confidence: f32,
    /// `None` when the label is not in the catalog.
    pub element: Option<&'static Element>,
}

/// Picks the most confident recognition above the collect threshold.
///
/// Ties keep the later recognition. NaN confidences are ignored.
pub fn select_collectable(recognitions: &[Recognition]) -> Option<Selection> {
    let mut best: Option<&Recognition> = None;
    for recognition in recognitions {
        if recognition.confidence.is_nan() {
            continue;
        }
        match best {
            Some(current) if recognition.confidence < current.confidence => {}
            _ => best = Some(recognition),
        }
    }

    let best = best.filter(|r| r.confidence > COLLECT_CONFIDENCE_THRESHOLD)?;
    let label = best.label.trim().to_string();
    Some(Selection {
        element: collectable_for_label(&label),
        label,
        confidence: best.confidence,
    })
}

#[cfg(test)]
mod tests {
    use super::{select_collectable, Recognition};

    #[test]
    fn picks_most_confident_recognition() {
        let selection = select_collectable(&[
            Recognition::new("banana", 0.7),
            Recognition::new("spoon", 0.9),
            Recognition::new("fork", 0.65),
        ])
        .unwrap();
        assert_eq!(selection.label, "spoon");
        assert_eq!(selection.element.map(|e| e.symbol.as_str()), Some("Fe"));
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(select_collectable(&[Recognition::new("banana", 0.6)]).is_none());
        assert!(select_collectable(&[]).is_none());
    }

    #[test]
    fn unknown_label_still_selects_without_element() {
        let selection = select_collectable(&[Recognition::new("chair", 0.95)]).unwrap();
        assert_eq!(selection.label, "chair");
        assert!(selection.element.is_none());
    }

    #[test]
    fn nan_confidence_is_ignored() {
        let selection = select_collectable(&[
            Recognition::new("zebra", f32::NAN),
            Recognition::new("carrot", 0.8),
        ])
        .unwrap();
        assert_eq!(selection.label, "carrot");
    }
}
