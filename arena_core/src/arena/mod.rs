//! Arena - Resumable start/step interface over the turn engine
//!
//! `start` validates both combatants and stores a fresh fight; `step` plays
//! some rounds and hands back only the events the caller has not seen yet.
//! A fight that finishes during a step is dropped from the store once the
//! step's outcome is built, so it can never be stepped again.

mod snapshot;
mod store;

pub use snapshot::{CombatantView, Snapshot, StepOutcome};
pub use store::{CombatStore, InMemoryStore, JsonStore};

use crate::attributes::{Attributes, Build};
use crate::combat::{CombatState, CombatantSpec};
use crate::config::CombatConstants;
use crate::dice::Dice;
use crate::error::ArenaError;
use crate::types::CombatId;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Everything needed to begin a fight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartRequest {
    pub player: CombatantSpec,
    pub enemy: CombatantSpec,
}

impl StartRequest {
    pub fn new(player: CombatantSpec, enemy: CombatantSpec) -> Self {
        StartRequest { player, enemy }
    }

    /// Request in the shape the character pages produce: the player keeps
    /// their own name, the enemy is named by the encounter
    #[allow(clippy::too_many_arguments)]
    pub fn versus(
        player_name: impl Into<String>,
        player_attrs: Attributes,
        player_level: u32,
        player_build: Build,
        enemy_attrs: Attributes,
        enemy_level: u32,
        enemy_build: Build,
        enemy_name: impl Into<String>,
    ) -> Self {
        StartRequest {
            player: CombatantSpec::new(player_name, player_level, player_build, player_attrs),
            enemy: CombatantSpec::new(enemy_name, enemy_level, enemy_build, enemy_attrs),
        }
    }
}

/// Create a fight and its initial snapshot without touching any store
pub fn start_state(
    request: StartRequest,
    constants: &CombatConstants,
) -> Result<(CombatState, Snapshot), ArenaError> {
    let state = CombatState::with_constants(request.player, request.enemy, constants.clone())?;
    let snapshot = Snapshot::from(&state);
    Ok((state, snapshot))
}

/// Advance an owned fight by up to `rounds` rounds
///
/// `rounds == 0` plays nothing; with nothing pending it returns no events
/// and an unchanged snapshot.
pub fn step_state(state: &mut CombatState, rounds: u32, dice: &mut impl Dice) -> StepOutcome {
    let played = state.advance(rounds, dice);
    let new_events = state.take_new_events();
    debug!(
        requested = rounds,
        played,
        new_events = new_events.len(),
        round = state.round,
        "combat stepped"
    );

    StepOutcome {
        snapshot: Snapshot::from(&*state),
        new_events,
        status: state.status,
        winner: state.final_winner(),
    }
}

/// Registry of running fights over a pluggable store
#[derive(Debug)]
pub struct Arena<S: CombatStore> {
    store: S,
    constants: CombatConstants,
    next_id: u64,
}

impl<S: CombatStore> Arena<S> {
    /// Arena using the standard rules
    pub fn new(store: S) -> Self {
        Arena {
            store,
            constants: CombatConstants::default(),
            next_id: 1,
        }
    }

    /// Arena using custom rules, rejected if they fail validation
    pub fn with_constants(store: S, constants: CombatConstants) -> Result<Self, ArenaError> {
        constants.validate()?;
        Ok(Arena {
            store,
            constants,
            next_id: 1,
        })
    }

    pub fn constants(&self) -> &CombatConstants {
        &self.constants
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Number of fights still running
    pub fn active_count(&self) -> usize {
        self.store.len()
    }

    /// Validate the request, store a fresh fight and return its id and
    /// initial snapshot. Nothing is stored when validation fails.
    pub fn start(&mut self, request: StartRequest) -> Result<(CombatId, Snapshot), ArenaError> {
        let (state, snapshot) = start_state(request, &self.constants)?;
        let id = CombatId(self.next_id);
        self.store.save(id, state)?;
        self.next_id += 1;

        info!(
            %id,
            player = %snapshot.player.name,
            enemy = %snapshot.enemy.name,
            "combat started"
        );
        Ok((id, snapshot))
    }

    /// Play up to `rounds` rounds of a stored fight
    ///
    /// The outcome is returned only once the advanced fight is persisted.
    /// If the save fails the stored fight keeps its pre-step state and
    /// cursor, so a retry replays those rounds with fresh rolls and still
    /// delivers every event exactly once.
    pub fn step(
        &mut self,
        id: CombatId,
        rounds: u32,
        dice: &mut impl Dice,
    ) -> Result<StepOutcome, ArenaError> {
        let mut state = self
            .store
            .load(id)?
            .ok_or(ArenaError::UnknownInstance(id))?;

        let outcome = step_state(&mut state, rounds, dice);

        if outcome.is_finished() {
            self.store.delete(id);
            info!(%id, winner = ?outcome.winner, "combat removed from store");
        } else {
            self.store.save(id, state)?;
        }
        Ok(outcome)
    }

    /// Current snapshot of a running fight
    pub fn snapshot(&self, id: CombatId) -> Result<Snapshot, ArenaError> {
        self.store
            .load(id)?
            .map(|state| Snapshot::from(&state))
            .ok_or(ArenaError::UnknownInstance(id))
    }

    /// Drop a running fight without finishing it
    pub fn abandon(&mut self, id: CombatId) -> Result<(), ArenaError> {
        if self.store.delete(id) {
            info!(%id, "combat abandoned");
            Ok(())
        } else {
            Err(ArenaError::UnknownInstance(id))
        }
    }
}
