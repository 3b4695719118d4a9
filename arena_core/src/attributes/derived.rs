//! DerivedStats - Combat statistics computed once per combatant per fight

use super::formulas;
use super::{AttackStyle, Attributes, Build};
use crate::config::CombatConstants;
use serde::{Deserialize, Serialize};

/// Combat statistics derived from attributes, level and build
///
/// Percent fields are already clamped to their documented ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedStats {
    // === Resources ===
    pub max_hp: i64,
    pub max_secondary: i64,

    // === Offense ===
    pub melee_attack: i64,
    pub ranged_attack: i64,
    pub magic_attack: i64,
    pub attack_speed: i64,
    pub cast_speed: i64,

    // === Defense ===
    pub phys_resist_melee: i64,
    pub phys_resist_ranged: i64,
    pub magic_resist: i64,
    pub mental_resist: i64,
    pub crit_resist: i64,

    // === Chances (percent) ===
    /// 0..=60
    pub crit_chance: i64,
    /// At least 150
    pub crit_multiplier: i64,
    /// 0..=50
    pub true_damage_chance: i64,
    /// 0..=60
    pub damage_reduction_chance: i64,
    pub damage_reduction_percent: i64,
    /// 0..=95
    pub dodge_chance: i64,
}

impl DerivedStats {
    /// Derive stats using the standard constants
    pub fn derive(attrs: &Attributes, level: u32, build: Build) -> Self {
        Self::derive_with(attrs, level, build, &CombatConstants::STANDARD)
    }

    /// Derive stats using custom constants
    pub fn derive_with(
        attrs: &Attributes,
        level: u32,
        build: Build,
        constants: &CombatConstants,
    ) -> Self {
        DerivedStats {
            max_hp: formulas::max_hp_with(attrs, level, constants),
            max_secondary: formulas::max_secondary_with(
                attrs,
                level,
                build.main_attribute(),
                constants,
            ),
            melee_attack: formulas::melee_attack(attrs),
            ranged_attack: formulas::ranged_attack(attrs),
            magic_attack: formulas::magic_attack(attrs),
            attack_speed: formulas::attack_speed(attrs),
            cast_speed: formulas::cast_speed(attrs),
            phys_resist_melee: formulas::phys_resist_melee(attrs),
            phys_resist_ranged: formulas::phys_resist_ranged(attrs),
            magic_resist: formulas::magic_resist(attrs),
            mental_resist: formulas::mental_resist(attrs),
            crit_resist: formulas::crit_resist(attrs),
            crit_chance: formulas::crit_chance(attrs),
            crit_multiplier: formulas::crit_multiplier_with(attrs, constants),
            true_damage_chance: formulas::true_damage_chance(attrs),
            damage_reduction_chance: formulas::damage_reduction_chance(attrs),
            damage_reduction_percent: constants.damage_reduction_percent,
            dodge_chance: formulas::dodge_chance(attrs),
        }
    }

    /// Attack power for a style
    pub fn attack(&self, style: AttackStyle) -> i64 {
        match style {
            AttackStyle::Melee => self.melee_attack,
            AttackStyle::Ranged => self.ranged_attack,
            AttackStyle::Magic => self.magic_attack,
        }
    }

    /// Resistance against an incoming attack of a style
    pub fn resistance(&self, style: AttackStyle) -> i64 {
        match style {
            AttackStyle::Melee => self.phys_resist_melee,
            AttackStyle::Ranged => self.phys_resist_ranged,
            AttackStyle::Magic => self.magic_resist,
        }
    }
}
