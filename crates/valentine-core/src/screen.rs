//! Screens and the deck that holds their fade state.
//!
//! Five mutually exclusive full-page views. A transition first moves every
//! present screen to `Fading`, then settles: everything goes `Inactive`
//! and the target (if present) becomes `Active`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ShowError, ShowResult};

/// Number of screens in the show.
pub const SCREEN_COUNT: u8 = 5;

/// Screen ordinal, always in `1..=SCREEN_COUNT`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ScreenId(u8);

impl ScreenId {
    /// Unlock question
    pub const UNLOCK: ScreenId = ScreenId(1);
    /// "Unlocked" celebration, auto-advances by default
    pub const REVEAL: ScreenId = ScreenId(2);
    /// Heart layout of photos
    pub const MEMORIES: ScreenId = ScreenId(3);
    /// Song player
    pub const SONG: ScreenId = ScreenId(4);
    /// Scattered photo collage
    pub const FINALE: ScreenId = ScreenId(5);

    pub fn new(n: u8) -> ShowResult<Self> {
        if (1..=SCREEN_COUNT).contains(&n) {
            Ok(ScreenId(n))
        } else {
            Err(ShowError::InvalidScreen(n))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// All screens in ordinal order.
    pub fn all() -> impl Iterator<Item = ScreenId> {
        (1..=SCREEN_COUNT).map(ScreenId)
    }

    /// Round-robin bucket for the registry entry at `index`.
    pub fn for_index(index: usize) -> ScreenId {
        ScreenId((index % SCREEN_COUNT as usize) as u8 + 1)
    }

    /// DOM id of the screen container (`screen1`..`screen5`).
    pub fn dom_id(self) -> String {
        format!("screen{}", self.0)
    }
}

impl TryFrom<u8> for ScreenId {
    type Error = ShowError;

    fn try_from(n: u8) -> ShowResult<Self> {
        ScreenId::new(n)
    }
}

impl From<ScreenId> for u8 {
    fn from(id: ScreenId) -> u8 {
        id.0
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "screen {}", self.0)
    }
}

/// Visual phase of one screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ScreenPhase {
    Active,
    Fading,
    #[default]
    Inactive,
}

impl ScreenPhase {
    /// CSS class for this phase
    pub fn class(&self) -> &'static str {
        match self {
            ScreenPhase::Active => "screen active",
            ScreenPhase::Fading => "screen fade-out",
            ScreenPhase::Inactive => "screen",
        }
    }
}

/// The set of screens present on the page and their phases.
#[derive(Clone, Debug)]
pub struct ScreenDeck {
    phases: BTreeMap<ScreenId, ScreenPhase>,
}

impl ScreenDeck {
    /// Deck with the given screens present, all inactive.
    pub fn new(present: impl IntoIterator<Item = ScreenId>) -> Self {
        Self {
            phases: present
                .into_iter()
                .map(|id| (id, ScreenPhase::Inactive))
                .collect(),
        }
    }

    /// Deck with all five screens and screen 1 active, as the page loads.
    pub fn full() -> Self {
        let mut deck = Self::new(ScreenId::all());
        deck.phases.insert(ScreenId::UNLOCK, ScreenPhase::Active);
        deck
    }

    pub fn contains(&self, id: ScreenId) -> bool {
        self.phases.contains_key(&id)
    }

    pub fn phase(&self, id: ScreenId) -> Option<ScreenPhase> {
        self.phases.get(&id).copied()
    }

    /// The active screen, if any. `None` mid cross-fade.
    pub fn active(&self) -> Option<ScreenId> {
        self.phases
            .iter()
            .find(|(_, phase)| **phase == ScreenPhase::Active)
            .map(|(id, _)| *id)
    }

    pub fn active_count(&self) -> usize {
        self.phases
            .values()
            .filter(|phase| **phase == ScreenPhase::Active)
            .count()
    }

    /// Deactivate every screen and mark it fading.
    pub fn begin_transition(&mut self) {
        for phase in self.phases.values_mut() {
            *phase = ScreenPhase::Fading;
        }
    }

    /// Clear fade markers and activate `target`.
    ///
    /// Returns false when the target screen is not present; the deck is
    /// then left with no active screen.
    pub fn settle(&mut self, target: ScreenId) -> bool {
        for phase in self.phases.values_mut() {
            *phase = ScreenPhase::Inactive;
        }
        match self.phases.get_mut(&target) {
            Some(phase) => {
                *phase = ScreenPhase::Active;
                true
            }
            None => false,
        }
    }
}

impl Default for ScreenDeck {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_id_bounds() {
        assert!(ScreenId::new(0).is_err());
        assert!(ScreenId::new(6).is_err());
        for n in 1..=5 {
            assert_eq!(ScreenId::new(n).unwrap().get(), n);
        }
    }

    #[test]
    fn screen_id_round_robin() {
        let buckets: Vec<u8> = (0..11).map(|i| ScreenId::for_index(i).get()).collect();
        assert_eq!(buckets, vec![1, 2, 3, 4, 5, 1, 2, 3, 4, 5, 1]);
    }

    #[test]
    fn screen_id_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<ScreenId>("3").is_ok());
        assert!(serde_json::from_str::<ScreenId>("9").is_err());
    }

    #[test]
    fn full_deck_starts_on_unlock() {
        let deck = ScreenDeck::full();
        assert_eq!(deck.active(), Some(ScreenId::UNLOCK));
        assert_eq!(deck.active_count(), 1);
    }

    #[test]
    fn transition_fades_then_settles() {
        let mut deck = ScreenDeck::full();
        deck.begin_transition();
        assert_eq!(deck.active(), None);
        assert!(ScreenId::all().all(|id| deck.phase(id) == Some(ScreenPhase::Fading)));

        assert!(deck.settle(ScreenId::SONG));
        assert_eq!(deck.active(), Some(ScreenId::SONG));
        assert_eq!(deck.phase(ScreenId::UNLOCK), Some(ScreenPhase::Inactive));
    }

    #[test]
    fn settle_on_missing_screen_leaves_none_active() {
        let mut deck = ScreenDeck::new([ScreenId::UNLOCK, ScreenId::REVEAL]);
        deck.settle(ScreenId::UNLOCK);
        deck.begin_transition();
        assert!(!deck.settle(ScreenId::FINALE));
        assert_eq!(deck.active_count(), 0);
    }

    #[test]
    fn phase_classes() {
        assert_eq!(ScreenPhase::Active.class(), "screen active");
        assert_eq!(ScreenPhase::Fading.class(), "screen fade-out");
        assert_eq!(ScreenPhase::Inactive.class(), "screen");
    }
}
