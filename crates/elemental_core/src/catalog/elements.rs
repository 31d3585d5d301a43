//! Static element table and label lookup.

use crate::model::element::{Element, ElementId};
use once_cell::sync::Lazy;

/// `(symbol, atomic number, name, weight)`.
const ELEMENT_ROWS: &[(&str, u16, &str, &str)] = &[
    ("H", 1, "Hydrogen", "1"),
    ("He", 2, "Helium", "2"),
    ("C", 6, "Carbon", "12.011"),
    ("N", 7, "Nitrogen", "14"),
    ("O", 8, "Oxygen", "16"),
    ("Na", 11, "Sodium", "22.990"),
    ("Al", 13, "Aluminium", "26.982"),
    ("Si", 14, "Silicon", "28.085"),
    ("P", 15, "Phosphorus", "30.974"),
    ("S", 16, "Sulphur", "32.06"),
    ("K", 19, "Potassium", "39.098"),
    ("Cr", 24, "Chromium", "51.996"),
    ("Fe", 26, "Iron", "55.845"),
    ("Ni", 28, "Nickel", "58.693"),
    ("Ag", 47, "Silver", "107.87"),
];

/// Object label to atomic numbers, first entry is the collectable one.
const LABEL_ROWS: &[(&str, &[u16])] = &[
    ("spoon", &[26, 28, 24]),
    ("banana", &[19]),
    ("donut", &[6, 1, 8]),
    ("wine glass", &[14]),
    ("laptop", &[13]),
    ("broccoli", &[16, 6, 1, 8, 7]),
    ("carrot", &[8, 1]),
    ("person", &[1, 8, 6]),
    ("cake", &[11, 15, 6, 1, 8]),
    ("fork", &[47]),
    ("zebra", &[47]),
];

static CATALOG: Lazy<Vec<Element>> = Lazy::new(|| {
    ELEMENT_ROWS
        .iter()
        .filter_map(|(symbol, number, name, weight)| {
            let id = ElementId::new(i64::from(*number)).ok()?;
            Element::new(*symbol, id, *name, *weight).ok()
        })
        .collect()
});

static LABELS: Lazy<Vec<(&'static str, Vec<ElementId>)>> = Lazy::new(|| {
    LABEL_ROWS
        .iter()
        .map(|(label, numbers)| {
            let ids: Vec<ElementId> = numbers
                .iter()
                .filter_map(|number| ElementId::new(i64::from(*number)).ok())
                .collect();
            (*label, ids)
        })
        .collect()
});

/// Returns every catalog element ordered by atomic number.
pub fn all_elements() -> &'static [Element] {
    CATALOG.as_slice()
}

/// Looks up a catalog element by id.
pub fn element_by_id(id: ElementId) -> Option<&'static Element> {
    CATALOG
        .binary_search_by_key(&id, |element| element.number)
        .ok()
        .map(|index| &CATALOG[index])
}

/// Looks up a catalog element by raw atomic number.
pub fn element_by_number(number: i64) -> Option<&'static Element> {
    ElementId::new(number).ok().and_then(element_by_id)
}

/// Returns the labels the catalog can map, in declaration order.
pub fn known_labels() -> impl Iterator<Item = &'static str> {
    LABELS.iter().map(|(label, _)| *label)
}

/// Returns elements contained in a detected object.
///
/// Matching ignores surrounding whitespace and ASCII case. Unknown labels
/// yield an empty slice.
pub fn elements_for_label(label: &str) -> &'static [ElementId] {
    let wanted = label.trim();
    LABELS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(wanted))
        .map(|(_, ids)| ids.as_slice())
        .unwrap_or(&[])
}

/// Returns the element offered for collection when `label` is detected.
pub fn collectable_for_label(label: &str) -> Option<&'static Element> {
    elements_for_label(label)
        .first()
        .copied()
        .and_then(element_by_id)
}

#[cfg(test)]
mod tests {
    use super::{
        all_elements, collectable_for_label, element_by_id, element_by_number, known_labels,
        LABELS,
    };

    #[test]
    fn catalog_is_sorted_and_unique() {
        let numbers: Vec<u16> = all_elements().iter().map(|e| e.number.get()).collect();
        let mut sorted = numbers.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(numbers, sorted);
    }

    #[test]
    fn every_label_element_is_in_catalog() {
        for (label, ids) in LABELS.iter() {
            assert!(!ids.is_empty(), "label {label} has no elements");
            for id in ids {
                assert!(element_by_id(*id).is_some(), "label {label} references {id}");
            }
        }
        assert_eq!(known_labels().count(), 11);
    }

    #[test]
    fn collectable_weights_keep_display_text() {
        let weight = |label: &str| collectable_for_label(label).map(|e| e.weight.as_str());
        assert_eq!(weight("carrot"), Some("16"));
        assert_eq!(weight("person"), Some("1"));
        assert_eq!(weight("spoon"), Some("55.845"));

        let nitrogen = element_by_number(7).unwrap();
        assert_eq!(nitrogen.weight, "14");
        assert_eq!(element_by_number(2).unwrap().weight, "2");
    }
}
