//! Element identity and display record.
//!
//! # Responsibility
//! - Validate atomic numbers at construction time.
//! - Carry display fields (symbol, name, weight) for result screens.
//!
//! # Invariants
//! - `ElementId` is always within `MIN_ATOMIC_NUMBER..=MAX_ATOMIC_NUMBER`.
//! - `Element::symbol` is never blank.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lowest valid atomic number.
pub const MIN_ATOMIC_NUMBER: u16 = 1;
/// Highest valid atomic number.
pub const MAX_ATOMIC_NUMBER: u16 = 118;

/// Atomic number of a chemical element.
///
/// Also the number of points awarded when the element is discovered for
/// the first time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u16")]
pub struct ElementId(u16);

impl ElementId {
    /// Creates an id from an atomic number, rejecting values outside 1..=118.
    pub fn new(number: i64) -> Result<Self, ElementValidationError> {
        let min = i64::from(MIN_ATOMIC_NUMBER);
        let max = i64::from(MAX_ATOMIC_NUMBER);
        if !(min..=max).contains(&number) {
            return Err(ElementValidationError::OutOfRange(number));
        }
        // Range check above guarantees the value fits.
        Ok(Self(number as u16))
    }

    /// Returns the raw atomic number.
    pub fn get(self) -> u16 {
        self.0
    }

    /// Points awarded for discovering this element.
    pub fn points(self) -> u64 {
        u64::from(self.0)
    }
}

impl Display for ElementId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for ElementId {
    type Error = ElementValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ElementId> for u16 {
    fn from(value: ElementId) -> Self {
        value.0
    }
}

/// Validation failures for element data crossing the core boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementValidationError {
    /// Atomic number is neither the "none" sentinel nor within 1..=118.
    OutOfRange(i64),
    /// Symbol is missing and cannot be recovered from the catalog.
    EmptySymbol(ElementId),
}

impl Display for ElementValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(number) => write!(
                f,
                "atomic number {number} is outside {MIN_ATOMIC_NUMBER}..={MAX_ATOMIC_NUMBER}"
            ),
            Self::EmptySymbol(id) => write!(f, "element {id} has no symbol"),
        }
    }
}

impl Error for ElementValidationError {}

/// Display record for one chemical element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Chemical symbol, e.g. `Fe`.
    pub symbol: String,
    /// Atomic number.
    pub number: ElementId,
    /// English name, e.g. `Iron`.
    pub name: String,
    /// Standard atomic weight as display text, e.g. `55.845`.
    pub weight: String,
}

impl Element {
    /// Creates an element record, trimming text fields.
    ///
    /// # Errors
    /// - `EmptySymbol` when `symbol` is blank.
    pub fn new(
        symbol: impl Into<String>,
        number: ElementId,
        name: impl Into<String>,
        weight: impl Into<String>,
    ) -> Result<Self, ElementValidationError> {
        let symbol = symbol.into().trim().to_string();
        if symbol.is_empty() {
            return Err(ElementValidationError::EmptySymbol(number));
        }
        Ok(Self {
            symbol,
            number,
            name: name.into().trim().to_string(),
            weight: weight.into().trim().to_string(),
        })
    }
}
