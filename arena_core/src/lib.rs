//! arena_core - Deterministic turn-based combat for arena fights
//!
//! This library provides:
//! - Attributes and formulas: base attributes mapped to derived combat stats
//! - CombatState: two combatants advanced round by round with an event log
//! - Arena: resumable start/step interface over a pluggable combat store
//! - Dice: injectable random source, seeded or scripted for reproducibility

pub mod arena;
pub mod attributes;
pub mod combat;
pub mod config;
pub mod dice;
pub mod error;
pub mod prelude;
pub mod types;

// Re-export core types for convenience
pub use arena::{
    start_state, step_state, Arena, CombatStore, CombatantView, InMemoryStore, JsonStore,
    Snapshot, StartRequest, StepOutcome,
};
pub use attributes::{AttackStyle, Attributes, Build, DerivedStats, MainAttribute};
pub use combat::{AttackOutcome, CombatState, CombatantSpec, CombatantState, Event};
pub use config::{CombatConstants, ConfigError};
pub use dice::{Dice, RandomDice, ScriptedDice};
pub use error::ArenaError;
pub use types::{CombatId, CombatStatus, Side, Winner};
