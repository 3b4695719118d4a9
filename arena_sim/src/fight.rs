//! Fight descriptions loaded from TOML

use anyhow::{Context, Result};
use arena_core::{Attributes, Build, CombatantSpec, StartRequest};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One side of a fight file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FighterEntry {
    pub name: String,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default = "default_build")]
    pub build: Build,
    pub attributes: Attributes,
}

fn default_level() -> u32 {
    1
}

fn default_build() -> Build {
    Build::Warrior
}

impl From<FighterEntry> for CombatantSpec {
    fn from(entry: FighterEntry) -> Self {
        CombatantSpec::new(entry.name, entry.level, entry.build, entry.attributes)
    }
}

/// A `[player]` vs `[enemy]` fight file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FightFile {
    pub player: FighterEntry,
    pub enemy: FighterEntry,
}

impl FightFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading fight file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parsing fight file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(arena_core::config::parse_toml(content)?)
    }

    pub fn into_request(self) -> StartRequest {
        StartRequest::new(self.player.into(), self.enemy.into())
    }
}
