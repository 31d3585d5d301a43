//! Discovery ledger over an injected preference store.
//!
//! # Responsibility
//! - Record detection events and decide whether points are awarded.
//! - Answer score and membership reads.
//!
//! # Invariants
//! - Membership is checked before any write.
//! - The discovered set and the score are written in one `PreferenceEdit`.
//! - `DetectionEvent::NotFound` never reads or writes storage.
//! - Malformed persisted values surface as `StorageError::InvalidData`.

use crate::model::detection::{DetectionEvent, Outcome, Score};
use crate::model::element::ElementId;
use crate::store::preference_store::{
    PreferenceEdit, PreferenceStore, StorageError, StoreResult,
};
use log::{error, info};
use std::collections::BTreeSet;

/// Preference key holding string-encoded discovered atomic numbers.
pub const ELEMENTS_KEY: &str = "elements";
/// Preference key holding the cumulative score.
pub const POINTS_KEY: &str = "POINTS";

const LEGACY_SENTINEL_MEMBER: &str = "-1";

/// Single source of truth for discovered elements and score.
pub struct DiscoveryLedger<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> DiscoveryLedger<S> {
    /// Creates a ledger owning the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Records one detection event.
    ///
    /// # Contract
    /// - `Found(id)` not yet discovered: adds `id`, adds `id` points, returns
    ///   `NewlyDiscovered`.
    /// - `Found(id)` already discovered: no writes, returns `AlreadyDiscovered`.
    /// - `NotFound`: no reads or writes, returns `Nothing`.
    ///
    /// # Errors
    /// - `StorageError` when loading or persisting fails. Nothing is written
    ///   in that case.
    pub fn record_detection(&self, event: DetectionEvent) -> StoreResult<Outcome> {
        let id = match event {
            DetectionEvent::Found(id) => id,
            DetectionEvent::NotFound => {
                info!("event=ledger_record module=ledger status=ok outcome=nothing");
                return Ok(Outcome::Nothing);
            }
        };

        let result = self.record_found(id);
        match &result {
            Ok(Outcome::NewlyDiscovered {
                points_awarded,
                new_score,
                ..
            }) => info!(
                "event=ledger_record module=ledger status=ok outcome=newly_discovered element={} points={} score={}",
                id, points_awarded, new_score
            ),
            Ok(Outcome::AlreadyDiscovered { score, .. }) => info!(
                "event=ledger_record module=ledger status=ok outcome=already_discovered element={} score={}",
                id, score
            ),
            Ok(Outcome::Nothing) => {}
            Err(err) => error!(
                "event=ledger_record module=ledger status=error element={} error={}",
                id, err
            ),
        }
        result
    }

    /// Returns the persisted score, or 0 when none was ever written.
    pub fn current_score(&self) -> StoreResult<Score> {
        self.load_score()
    }

    /// Returns whether `id` has been discovered.
    pub fn is_discovered(&self, id: ElementId) -> StoreResult<bool> {
        Ok(self.load_discovered()?.contains(&id))
    }

    /// Returns every discovered id in ascending order.
    pub fn discovered_ids(&self) -> StoreResult<BTreeSet<ElementId>> {
        self.load_discovered()
    }

    fn record_found(&self, id: ElementId) -> StoreResult<Outcome> {
        let mut discovered = self.load_discovered()?;
        let score = self.load_score()?;

        if discovered.contains(&id) {
            return Ok(Outcome::AlreadyDiscovered { id, score });
        }

        let points_awarded = id.points();
        let new_score = score.checked_add(points_awarded).ok_or_else(|| {
            StorageError::InvalidData(format!(
                "score {score} overflows when adding {points_awarded}"
            ))
        })?;
        let stored_score = i64::try_from(new_score).map_err(|_| {
            StorageError::InvalidData(format!("score {new_score} exceeds storable range"))
        })?;
        discovered.insert(id);

        self.store.apply(
            PreferenceEdit::new()
                .put_string_set(ELEMENTS_KEY, discovered.iter().map(ElementId::to_string))
                .put_int(POINTS_KEY, stored_score),
        )?;

        Ok(Outcome::NewlyDiscovered {
            id,
            points_awarded,
            new_score,
        })
    }

    fn load_score(&self) -> StoreResult<Score> {
        match self.store.get_int(POINTS_KEY)? {
            None => Ok(0),
            Some(value) => Score::try_from(value).map_err(|_| {
                StorageError::InvalidData(format!("negative score `{value}` in `{POINTS_KEY}`"))
            }),
        }
    }

    fn load_discovered(&self) -> StoreResult<BTreeSet<ElementId>> {
        let Some(members) = self.store.get_string_set(ELEMENTS_KEY)? else {
            return Ok(BTreeSet::new());
        };

        members
            .iter()
            .filter_map(|member| parse_element_member(member).transpose())
            .collect()
    }
}

/// Parses one stored set member.
///
/// Older installs wrote the raw "no element" sentinel into the set; that
/// member is skipped rather than treated as corruption.
fn parse_element_member(member: &str) -> StoreResult<Option<ElementId>> {
    let trimmed = member.trim();
    if trimmed == LEGACY_SENTINEL_MEMBER {
        return Ok(None);
    }

    trimmed
        .parse::<i64>()
        .ok()
        .and_then(|number| ElementId::new(number).ok())
        .map(Some)
        .ok_or_else(|| {
            StorageError::InvalidData(format!(
                "invalid element id `{member}` in `{ELEMENTS_KEY}`"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::parse_element_member;
    use crate::store::preference_store::StorageError;

    #[test]
    fn parse_element_member_accepts_padded_numbers() {
        assert_eq!(parse_element_member(" 26 ").unwrap().map(|id| id.get()), Some(26));
    }

    #[test]
    fn parse_element_member_skips_legacy_sentinel() {
        assert_eq!(parse_element_member("-1").unwrap(), None);
    }

    #[test]
    fn parse_element_member_rejects_garbage() {
        for member in ["0", "119", "Fe", "", "-2"] {
            let err = parse_element_member(member).unwrap_err();
            assert!(matches!(err, StorageError::InvalidData(_)), "{member}");
        }
    }
}
