//! Away/home selection with mutual exclusion
//!
//! `Selection` owns the two slots. A team held by one slot is reported as
//! excluded when listing options for the other slot, and the controller
//! refuses to place it there.

use std::fmt;
use tracing::debug;

use crate::teams::{self, Team};

/// One of the two selection positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Slot {
    #[default]
    Away,
    Home,
}

impl Slot {
    pub fn other(&self) -> Self {
        match self {
            Self::Away => Self::Home,
            Self::Home => Self::Away,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Away => "Away Team",
            Self::Home => "Home Team",
        }
    }

    /// Text shown for the empty choice
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Away => "Select Away Team",
            Self::Home => "Select Home Team",
        }
    }
}

/// A registry entry annotated for one picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamOption {
    pub team: &'static Team,
    /// Held by the other slot
    pub excluded: bool,
}

/// Both slots filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matchup {
    pub away: &'static Team,
    pub home: &'static Team,
}

impl fmt::Display for Matchup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.away.name, self.home.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    away: Option<&'static Team>,
    home: Option<&'static Team>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn away(&self) -> Option<&'static Team> {
        self.away
    }

    pub fn home(&self) -> Option<&'static Team> {
        self.home
    }

    pub fn get(&self, slot: Slot) -> Option<&'static Team> {
        match slot {
            Slot::Away => self.away,
            Slot::Home => self.home,
        }
    }

    pub fn set_away(&mut self, abbreviation: &str) {
        self.set(Slot::Away, abbreviation);
    }

    pub fn set_home(&mut self, abbreviation: &str) {
        self.set(Slot::Home, abbreviation);
    }

    /// Store the team for `abbreviation` in `slot`.
    ///
    /// Blank or unknown keys clear the slot. A team already held by the
    /// other slot is refused and the slot keeps its current value.
    pub fn set(&mut self, slot: Slot, abbreviation: &str) {
        let team = teams::find(abbreviation);
        if abbreviation.is_empty() {
            debug!("SELECTION: clearing {:?}", slot);
        } else if team.is_none() {
            debug!("SELECTION: unknown team '{}' for {:?}, clearing", abbreviation, slot);
        }

        if let Some(t) = team {
            if self.is_excluded(slot, t) {
                debug!(
                    "SELECTION: {} is held by {:?}, ignoring for {:?}",
                    t.abbreviation,
                    slot.other(),
                    slot
                );
                return;
            }
        }

        *self.slot_mut(slot) = team;
    }

    pub fn clear(&mut self, slot: Slot) {
        *self.slot_mut(slot) = None;
    }

    /// Whether `team` is unavailable to `slot`
    pub fn is_excluded(&self, slot: Slot, team: &Team) -> bool {
        self.get(slot.other())
            .is_some_and(|held| held.abbreviation == team.abbreviation)
    }

    /// The whole registry, flagging the entry held by the other slot
    pub fn available_for(&self, slot: Slot) -> Vec<TeamOption> {
        teams::all()
            .iter()
            .map(|team| TeamOption {
                team,
                excluded: self.is_excluded(slot, team),
            })
            .collect()
    }

    pub fn current_matchup(&self) -> Option<Matchup> {
        match (self.away, self.home) {
            (Some(away), Some(home)) => Some(Matchup { away, home }),
            _ => None,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<&'static Team> {
        match slot {
            Slot::Away => &mut self.away,
            Slot::Home => &mut self.home,
        }
    }
}
