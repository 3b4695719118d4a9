//! Prelude module for convenient imports
//!
//! ```rust
//! use arena_core::prelude::*;
//! ```

// Core types
pub use crate::attributes::{Attributes, Build, DerivedStats};
pub use crate::types::{CombatId, CombatStatus, Side, Winner};

// Combat
pub use crate::combat::{CombatState, CombatantSpec, Event};

// Arena
pub use crate::arena::{Arena, CombatStore, InMemoryStore, Snapshot, StartRequest, StepOutcome};

// Dice
pub use crate::dice::{Dice, RandomDice, ScriptedDice};

// Errors and config
pub use crate::config::CombatConstants;
pub use crate::error::ArenaError;
