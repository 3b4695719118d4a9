//! Snapshot - Serializable outside view of a fight

use crate::attributes::{Attributes, Build};
use crate::combat::{CombatState, CombatantState, Event};
use crate::types::{CombatStatus, Winner};
use serde::{Deserialize, Serialize};

/// What a caller sees of one combatant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantView {
    pub name: String,
    pub level: u32,
    pub build: Build,
    pub hp: i64,
    pub hp_max: i64,
    pub attrs: Attributes,
}

impl From<&CombatantState> for CombatantView {
    fn from(state: &CombatantState) -> Self {
        CombatantView {
            name: state.name.clone(),
            level: state.level,
            build: state.build,
            hp: state.current_hp,
            hp_max: state.max_hp(),
            attrs: state.attributes,
        }
    }
}

/// Point-in-time view of a fight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player: CombatantView,
    pub enemy: CombatantView,
    pub round: u32,
    pub status: CombatStatus,
    pub winner: Winner,
    /// Events delivered to the caller so far
    pub cursor: usize,
}

impl From<&CombatState> for Snapshot {
    fn from(state: &CombatState) -> Self {
        Snapshot {
            player: CombatantView::from(&state.player),
            enemy: CombatantView::from(&state.enemy),
            round: state.round,
            status: state.status,
            winner: state.winner,
            cursor: state.cursor(),
        }
    }
}

/// Result of one `step` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    pub snapshot: Snapshot,
    /// Only the events produced since the previous step
    pub new_events: Vec<Event>,
    pub status: CombatStatus,
    /// `None` until the fight is finished
    pub winner: Option<Winner>,
}

impl StepOutcome {
    pub fn is_finished(&self) -> bool {
        self.status == CombatStatus::Finished
    }

    /// New events rendered as log lines
    pub fn lines(&self) -> Vec<String> {
        self.new_events
            .iter()
            .map(|e| e.describe(&self.snapshot.player.name, &self.snapshot.enemy.name))
            .collect()
    }
}
