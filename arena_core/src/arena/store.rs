//! CombatStore - Where running fights live between steps

use crate::combat::CombatState;
use crate::error::ArenaError;
use crate::types::CombatId;
use std::collections::HashMap;

/// Keyed storage for in-progress fights
///
/// The arena only ever touches one id per call; callers sharing a store
/// across threads are responsible for their own locking.
pub trait CombatStore {
    fn save(&mut self, id: CombatId, state: CombatState) -> Result<(), ArenaError>;
    fn load(&self, id: CombatId) -> Result<Option<CombatState>, ArenaError>;
    /// Remove a fight. Returns whether it existed.
    fn delete(&mut self, id: CombatId) -> bool;
    /// Number of fights currently held
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fights held as live values in a map
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    combats: HashMap<CombatId, CombatState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CombatStore for InMemoryStore {
    fn save(&mut self, id: CombatId, state: CombatState) -> Result<(), ArenaError> {
        self.combats.insert(id, state);
        Ok(())
    }

    fn load(&self, id: CombatId) -> Result<Option<CombatState>, ArenaError> {
        Ok(self.combats.get(&id).cloned())
    }

    fn delete(&mut self, id: CombatId) -> bool {
        self.combats.remove(&id).is_some()
    }

    fn len(&self) -> usize {
        self.combats.len()
    }
}

/// Fights held as serialized JSON documents
///
/// Mirrors a deployment where state goes to an external cache between
/// requests: every step re-hydrates the fight from its serialized form.
#[derive(Debug, Clone, Default)]
pub struct JsonStore {
    documents: HashMap<CombatId, String>,
}

impl JsonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored document, if any
    pub fn document(&self, id: CombatId) -> Option<&str> {
        self.documents.get(&id).map(String::as_str)
    }
}

impl CombatStore for JsonStore {
    fn save(&mut self, id: CombatId, state: CombatState) -> Result<(), ArenaError> {
        let document =
            serde_json::to_string(&state).map_err(|e| ArenaError::Storage(e.to_string()))?;
        self.documents.insert(id, document);
        Ok(())
    }

    fn load(&self, id: CombatId) -> Result<Option<CombatState>, ArenaError> {
        self.documents
            .get(&id)
            .map(|doc| serde_json::from_str(doc).map_err(|e| ArenaError::Storage(e.to_string())))
            .transpose()
    }

    fn delete(&mut self, id: CombatId) -> bool {
        self.documents.remove(&id).is_some()
    }

    fn len(&self) -> usize {
        self.documents.len()
    }
}
