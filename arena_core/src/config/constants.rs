//! Combat tuning constants

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Tunable combat constants
///
/// Defaults reproduce the arena's standard rules; every field may be
/// omitted from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatConstants {
    /// Rounds after which a fight is forced to a draw
    #[serde(default = "default_round_cap")]
    pub round_cap: u32,
    /// Life and secondary resource at level 1 before attributes
    #[serde(default = "default_base_pool")]
    pub base_pool: i64,
    /// Life and secondary resource gained per level past the first
    #[serde(default = "default_pool_per_level")]
    pub pool_per_level: i64,
    /// Percent of incoming damage removed when damage reduction triggers
    #[serde(default = "default_damage_reduction_percent")]
    pub damage_reduction_percent: i64,
    /// Crit multiplier (percent) before charisma scaling
    #[serde(default = "default_base_crit_multiplier")]
    pub base_crit_multiplier: i64,
    #[serde(default = "default_accuracy_floor")]
    pub accuracy_floor: i64,
    #[serde(default = "default_accuracy_ceiling")]
    pub accuracy_ceiling: i64,
    /// Accuracy lost per level the defender has over the attacker
    #[serde(default = "default_level_gap_penalty")]
    pub level_gap_penalty: i64,
    /// Accuracy lost per point of max HP the defender has over the attacker
    #[serde(default = "default_hp_gap_penalty")]
    pub hp_gap_penalty: i64,
    /// Resolve both attacks of a round against start-of-round HP, so a
    /// combatant felled by the first strike still strikes back
    #[serde(default)]
    pub simultaneous_strikes: bool,
}

impl Default for CombatConstants {
    fn default() -> Self {
        CombatConstants::STANDARD
    }
}

impl CombatConstants {
    /// The arena's standard rule set
    pub const STANDARD: CombatConstants = CombatConstants {
        round_cap: 20,
        base_pool: 30,
        pool_per_level: 5,
        damage_reduction_percent: 80,
        base_crit_multiplier: 150,
        accuracy_floor: 5,
        accuracy_ceiling: 100,
        level_gap_penalty: 5,
        hp_gap_penalty: 2,
        simultaneous_strikes: false,
    };

    /// Check that the constants describe a fight that can terminate and
    /// whose percentages stay in range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.round_cap == 0 {
            return Err(ConfigError::ValidationError(
                "round_cap must be at least 1".to_string(),
            ));
        }
        if !(0..=100).contains(&self.damage_reduction_percent) {
            return Err(ConfigError::ValidationError(format!(
                "damage_reduction_percent must be within 0..=100, got {}",
                self.damage_reduction_percent
            )));
        }
        if self.accuracy_floor < 0
            || self.accuracy_floor > self.accuracy_ceiling
            || self.accuracy_ceiling > 100
        {
            return Err(ConfigError::ValidationError(format!(
                "accuracy bounds must satisfy 0 <= floor <= ceiling <= 100, got {}..{}",
                self.accuracy_floor, self.accuracy_ceiling
            )));
        }
        if self.base_pool < 1 || self.pool_per_level < 0 {
            return Err(ConfigError::ValidationError(
                "base_pool must be positive and pool_per_level non-negative".to_string(),
            ));
        }
        if self.base_crit_multiplier < 100 || self.level_gap_penalty < 0 || self.hp_gap_penalty < 0
        {
            return Err(ConfigError::ValidationError(
                "crit multiplier must be >= 100 and penalties non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_round_cap() -> u32 {
    CombatConstants::STANDARD.round_cap
}
fn default_base_pool() -> i64 {
    CombatConstants::STANDARD.base_pool
}
fn default_pool_per_level() -> i64 {
    CombatConstants::STANDARD.pool_per_level
}
fn default_damage_reduction_percent() -> i64 {
    CombatConstants::STANDARD.damage_reduction_percent
}
fn default_base_crit_multiplier() -> i64 {
    CombatConstants::STANDARD.base_crit_multiplier
}
fn default_accuracy_floor() -> i64 {
    CombatConstants::STANDARD.accuracy_floor
}
fn default_accuracy_ceiling() -> i64 {
    CombatConstants::STANDARD.accuracy_ceiling
}
fn default_level_gap_penalty() -> i64 {
    CombatConstants::STANDARD.level_gap_penalty
}
fn default_hp_gap_penalty() -> i64 {
    CombatConstants::STANDARD.hp_gap_penalty
}
