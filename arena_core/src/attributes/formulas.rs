//! Attribute formulas - Pure mappings from attributes (and level) to combat stats
//!
//! All intermediate fractions are floored. Attribute boundaries are sensitive
//! to this: a dexterity of 7 contributes 3 (not 3.5) to melee attack.
//!
//! Percent chances are integers in [0, 100] and are compared against a draw
//! in [0, 100): a chance of X triggers when `draw < X`.
//!
//! Arithmetic saturates so that arbitrarily large attribute values still
//! produce clamped, in-range percentages.

use super::{Attributes, MainAttribute};
use crate::config::CombatConstants;

pub const CRIT_CHANCE_CAP: i64 = 60;
pub const TRUE_DAMAGE_CHANCE_CAP: i64 = 50;
pub const DAMAGE_REDUCTION_CHANCE_CAP: i64 = 60;
pub const DODGE_CHANCE_CAP: i64 = 95;

/// floor(x * 0.5)
fn half(x: i64) -> i64 {
    x.div_euclid(2)
}

/// Shared shape of the HP and secondary resource pools
fn pool(level: u32, constants: &CombatConstants) -> i64 {
    let levels_gained = i64::from(level.saturating_sub(1));
    constants
        .base_pool
        .saturating_add(levels_gained.saturating_mul(constants.pool_per_level))
}

// === Resource pools ===

pub fn max_hp(a: &Attributes, level: u32) -> i64 {
    max_hp_with(a, level, &CombatConstants::STANDARD)
}

pub fn max_hp_with(a: &Attributes, level: u32, constants: &CombatConstants) -> i64 {
    pool(level, constants).saturating_add(a.constitution)
}

/// Secondary resource (mana/stamina/focus), scaled by the build's main attribute
pub fn max_secondary(a: &Attributes, level: u32, main: MainAttribute) -> i64 {
    max_secondary_with(a, level, main, &CombatConstants::STANDARD)
}

pub fn max_secondary_with(
    a: &Attributes,
    level: u32,
    main: MainAttribute,
    constants: &CombatConstants,
) -> i64 {
    pool(level, constants)
        .saturating_add(a.main(main))
        .saturating_add(half(a.constitution))
}

// === Offense ===

pub fn melee_attack(a: &Attributes) -> i64 {
    a.strength.saturating_add(half(a.dexterity))
}

pub fn ranged_attack(a: &Attributes) -> i64 {
    a.dexterity.saturating_add(half(a.strength))
}

pub fn magic_attack(a: &Attributes) -> i64 {
    a.intelligence
}

pub fn attack_speed(a: &Attributes) -> i64 {
    a.dexterity
}

pub fn cast_speed(a: &Attributes) -> i64 {
    a.wisdom
}

// === Defense ===

pub fn phys_resist_melee(a: &Attributes) -> i64 {
    melee_attack(a).saturating_add(a.constitution)
}

pub fn phys_resist_ranged(a: &Attributes) -> i64 {
    ranged_attack(a).saturating_add(a.constitution)
}

pub fn magic_resist(a: &Attributes) -> i64 {
    a.intelligence.saturating_add(a.constitution)
}

pub fn mental_resist(a: &Attributes) -> i64 {
    a.wisdom.saturating_add(a.constitution)
}

pub fn crit_resist(a: &Attributes) -> i64 {
    a.charisma
}

// === Chances (percent) ===

pub fn crit_chance(a: &Attributes) -> i64 {
    a.dexterity.saturating_mul(2).clamp(0, CRIT_CHANCE_CAP)
}

/// Crit multiplier in percent, applied to base damage
pub fn crit_multiplier(a: &Attributes) -> i64 {
    crit_multiplier_with(a, &CombatConstants::STANDARD)
}

pub fn crit_multiplier_with(a: &Attributes, constants: &CombatConstants) -> i64 {
    // floor(cha * 1.5) == cha + floor(cha / 2)
    let bonus = a.charisma.saturating_add(half(a.charisma)).max(0);
    constants.base_crit_multiplier.saturating_add(bonus)
}

pub fn true_damage_chance(a: &Attributes) -> i64 {
    a.wisdom.saturating_mul(2).clamp(0, TRUE_DAMAGE_CHANCE_CAP)
}

pub fn damage_reduction_chance(a: &Attributes) -> i64 {
    a.charisma.saturating_mul(2).clamp(0, DAMAGE_REDUCTION_CHANCE_CAP)
}

/// Chance for the defender to avoid a hit entirely
pub fn dodge_chance(a: &Attributes) -> i64 {
    half(a.charisma)
        .saturating_add(half(a.dexterity))
        .clamp(0, DODGE_CHANCE_CAP)
}

/// Hit chance of an attacker against a defender
///
/// Only a defender that out-levels or out-lives the attacker lowers
/// accuracy; being the stronger side never raises it past the ceiling.
pub fn accuracy(atk_level: u32, def_level: u32, atk_max_hp: i64, def_max_hp: i64) -> i64 {
    accuracy_with(
        atk_level,
        def_level,
        atk_max_hp,
        def_max_hp,
        &CombatConstants::STANDARD,
    )
}

pub fn accuracy_with(
    atk_level: u32,
    def_level: u32,
    atk_max_hp: i64,
    def_max_hp: i64,
    constants: &CombatConstants,
) -> i64 {
    let level_gap = i64::from(def_level.saturating_sub(atk_level));
    let hp_gap = def_max_hp.saturating_sub(atk_max_hp).max(0);

    100i64
        .saturating_sub(level_gap.saturating_mul(constants.level_gap_penalty))
        .saturating_sub(hp_gap.saturating_mul(constants.hp_gap_penalty))
        .clamp(constants.accuracy_floor, constants.accuracy_ceiling)
}
