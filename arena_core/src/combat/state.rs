//! CombatState - The two combatants, the round counter and the event log

use super::event::Event;
use crate::attributes::{Attributes, Build, DerivedStats};
use crate::config::CombatConstants;
use crate::error::ArenaError;
use crate::types::{CombatStatus, Side, Winner};
use serde::{Deserialize, Serialize};

/// Input description of one side of a fight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantSpec {
    pub name: String,
    pub level: u32,
    pub build: Build,
    pub attributes: Attributes,
}

impl CombatantSpec {
    pub fn new(name: impl Into<String>, level: u32, build: Build, attributes: Attributes) -> Self {
        CombatantSpec {
            name: name.into(),
            level,
            build,
            attributes,
        }
    }

    /// Check this combatant can enter a fight
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        if self.level == 0 {
            return Err("level must be at least 1".to_string());
        }
        self.attributes.validate()
    }
}

/// One side of a running fight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantState {
    pub name: String,
    pub level: u32,
    pub build: Build,
    pub attributes: Attributes,
    /// Cached at fight start; attributes never change mid-fight
    pub stats: DerivedStats,
    pub current_hp: i64,
}

impl CombatantState {
    fn from_spec(spec: CombatantSpec, constants: &CombatConstants) -> Self {
        let stats = DerivedStats::derive_with(&spec.attributes, spec.level, spec.build, constants);
        CombatantState {
            current_hp: stats.max_hp,
            name: spec.name,
            level: spec.level,
            build: spec.build,
            attributes: spec.attributes,
            stats,
        }
    }

    pub fn max_hp(&self) -> i64 {
        self.stats.max_hp
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Subtract damage, never dropping below zero. Returns HP actually lost.
    pub fn take_damage(&mut self, amount: i64) -> i64 {
        let before = self.current_hp;
        self.current_hp = before.saturating_sub(amount.max(0)).max(0);
        before - self.current_hp
    }
}

/// Complete state of one fight
///
/// Created with both sides at full HP, advanced by the turn engine, and
/// frozen once `status` becomes `Finished`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatState {
    pub player: CombatantState,
    pub enemy: CombatantState,
    /// Rounds played so far
    pub round: u32,
    pub(crate) log: Vec<Event>,
    pub status: CombatStatus,
    pub winner: Winner,
    pub(crate) constants: CombatConstants,
    /// Number of events already handed to the caller
    pub(crate) delivered: usize,
}

impl CombatState {
    /// Start a fight under the standard rules
    pub fn new(player: CombatantSpec, enemy: CombatantSpec) -> Result<Self, ArenaError> {
        Self::with_constants(player, enemy, CombatConstants::default())
    }

    /// Start a fight under custom rules
    ///
    /// Both specs are validated before anything is built.
    pub fn with_constants(
        player: CombatantSpec,
        enemy: CombatantSpec,
        constants: CombatConstants,
    ) -> Result<Self, ArenaError> {
        constants.validate()?;
        for (side, spec) in [(Side::Player, &player), (Side::Enemy, &enemy)] {
            spec.validate()
                .map_err(|reason| ArenaError::InvalidAttributes { side, reason })?;
        }

        Ok(CombatState {
            player: CombatantState::from_spec(player, &constants),
            enemy: CombatantState::from_spec(enemy, &constants),
            round: 0,
            log: Vec::new(),
            status: CombatStatus::Active,
            winner: Winner::None,
            constants,
            delivered: 0,
        })
    }

    pub fn combatant(&self, side: Side) -> &CombatantState {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    pub fn combatant_mut(&mut self, side: Side) -> &mut CombatantState {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    pub fn constants(&self) -> &CombatConstants {
        &self.constants
    }

    pub fn is_finished(&self) -> bool {
        self.status == CombatStatus::Finished
    }

    /// Winner once finished, `None` while the fight runs
    pub fn final_winner(&self) -> Option<Winner> {
        self.is_finished().then_some(self.winner)
    }

    /// Full event log
    pub fn log(&self) -> &[Event] {
        &self.log
    }

    /// Events already handed to the caller
    pub fn cursor(&self) -> usize {
        self.delivered
    }

    /// Events produced since `cursor`
    pub fn events_since(&self, cursor: usize) -> &[Event] {
        self.log.get(cursor..).unwrap_or(&[])
    }

    /// Hand over every event not yet delivered and advance the cursor
    pub fn take_new_events(&mut self) -> Vec<Event> {
        let fresh = self.events_since(self.delivered).to_vec();
        self.delivered = self.log.len();
        fresh
    }

    /// Render an event with this fight's combatant names
    pub fn describe(&self, event: &Event) -> String {
        event.describe(&self.player.name, &self.enemy.name)
    }

    /// The whole log as plain text
    pub fn text_log(&self) -> Vec<String> {
        self.log.iter().map(|e| self.describe(e)).collect()
    }
}
