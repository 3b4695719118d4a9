//! Combat - Combatant state, the event log and the per-round turn engine

mod engine;
mod event;
mod state;

pub use engine::{compute_damage, decide_winner, resolve_attack, AttackOutcome};
pub use event::Event;
pub use state::{CombatState, CombatantSpec, CombatantState};
