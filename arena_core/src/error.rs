//! Errors surfaced to callers of the arena

use crate::config::ConfigError;
use crate::types::{CombatId, Side};
use thiserror::Error;

/// Arena operation error
///
/// Unlucky rolls, round-cap draws and mutual defeats are normal outcomes and
/// never show up here.
#[derive(Error, Debug)]
pub enum ArenaError {
    /// Input rejected before any combat state was created
    #[error("Invalid attributes for {side}: {reason}")]
    InvalidAttributes { side: Side, reason: String },
    /// No running combat under this id (never started, or already finished)
    #[error("Unknown combat instance: {0}")]
    UnknownInstance(CombatId),
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The backing store failed to persist or restore a combat
    #[error("Combat store error: {0}")]
    Storage(String),
}
