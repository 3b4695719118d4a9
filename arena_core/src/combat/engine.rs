//! Turn engine - Advance a fight one round at a time
//!
//! Per attack, in this order:
//! 1. Defender dodge roll (full miss)
//! 2. Attacker accuracy roll (full miss on failure)
//! 3. Crit, true damage and damage reduction rolls
//! 4. Damage: attack minus matching resistance (floored at 1), true damage
//!    skips the resistance, crit multiplies, reduction then scales down
//!
//! Once an attack reaches a stage, that stage's roll is always drawn, even
//! for a 0% chance, so the draw stream stays aligned across builds.

use super::event::Event;
use super::state::{CombatState, CombatantState};
use crate::attributes::formulas;
use crate::config::CombatConstants;
use crate::dice::Dice;
use crate::types::{CombatStatus, Side, Winner};
use tracing::{debug, info, warn};

/// Everything decided about a single attack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOutcome {
    pub attacker: Side,
    pub dodged: bool,
    pub landed: bool,
    pub critical: bool,
    pub true_damage: bool,
    pub reduced: bool,
    pub damage: i64,
}

impl AttackOutcome {
    fn missed(attacker: Side, dodged: bool) -> Self {
        AttackOutcome {
            attacker,
            dodged,
            landed: false,
            critical: false,
            true_damage: false,
            reduced: false,
            damage: 0,
        }
    }

    /// The log entry for this attack
    pub fn to_event(&self, round: u32) -> Event {
        let src = self.attacker;
        if !self.landed {
            Event::Miss {
                round,
                src,
                dodged: self.dodged,
            }
        } else if self.critical {
            Event::Crit {
                round,
                src,
                dmg: self.damage,
            }
        } else {
            Event::Hit {
                round,
                src,
                dmg: self.damage,
            }
        }
    }
}

/// Damage of a landed attack
///
/// `crit_multiplier` and `reduction_percent` are percentages; pass `None`
/// when the roll did not trigger. Every step floors, and a landed attack
/// always deals at least 1.
pub fn compute_damage(
    attack: i64,
    resistance: i64,
    crit_multiplier: Option<i64>,
    true_damage: bool,
    reduction_percent: Option<i64>,
) -> i64 {
    let base = if true_damage {
        attack
    } else {
        attack.saturating_sub(resistance)
    }
    .max(1);

    let after_crit = match crit_multiplier {
        Some(mult) => base.saturating_mul(mult) / 100,
        None => base,
    };

    let after_reduction = match reduction_percent {
        Some(pct) => after_crit.saturating_mul(100 - pct.clamp(0, 100)) / 100,
        None => after_crit,
    };

    after_reduction.max(1)
}

/// Roll one attack of `attacker` against `defender`
pub fn resolve_attack(
    side: Side,
    attacker: &CombatantState,
    defender: &CombatantState,
    constants: &CombatConstants,
    dice: &mut impl Dice,
) -> AttackOutcome {
    if dice.chance(defender.stats.dodge_chance) {
        return AttackOutcome::missed(side, true);
    }

    let accuracy = formulas::accuracy_with(
        attacker.level,
        defender.level,
        attacker.max_hp(),
        defender.max_hp(),
        constants,
    );
    if !dice.chance(accuracy) {
        return AttackOutcome::missed(side, false);
    }

    let critical = dice.chance(attacker.stats.crit_chance);
    let true_damage = dice.chance(attacker.stats.true_damage_chance);
    // True damage bypasses mitigation, but the roll is still drawn
    let reduced = dice.chance(defender.stats.damage_reduction_chance) && !true_damage;

    let style = attacker.build.attack_style();
    let damage = compute_damage(
        attacker.stats.attack(style),
        defender.stats.resistance(style),
        critical.then_some(attacker.stats.crit_multiplier),
        true_damage,
        reduced.then_some(defender.stats.damage_reduction_percent),
    );

    AttackOutcome {
        attacker: side,
        dodged: false,
        landed: true,
        critical,
        true_damage,
        reduced,
        damage,
    }
}

/// Winner given both sides' HP, or `None` while both stand
pub fn decide_winner(player_hp: i64, enemy_hp: i64) -> Option<Winner> {
    match (player_hp <= 0, enemy_hp <= 0) {
        (true, true) => Some(Winner::Draw),
        (false, true) => Some(Winner::Player),
        (true, false) => Some(Winner::Enemy),
        (false, false) => None,
    }
}

impl CombatState {
    /// Play one round. Returns the number of events appended; a finished
    /// fight is left untouched and yields 0.
    pub fn advance_round(&mut self, dice: &mut impl Dice) -> usize {
        if self.is_finished() {
            return 0;
        }

        let before = self.log.len();
        self.round += 1;
        let round = self.round;
        let simultaneous = self.constants.simultaneous_strikes;
        let alive_at_start = [self.player.is_alive(), self.enemy.is_alive()];

        for (index, &side) in Side::all().iter().enumerate() {
            let can_act = if simultaneous {
                alive_at_start[index]
            } else {
                self.player.is_alive() && self.enemy.is_alive()
            };
            if !can_act {
                continue;
            }

            let outcome = resolve_attack(
                side,
                self.combatant(side),
                self.combatant(side.opponent()),
                &self.constants,
                dice,
            );
            let defender = self.combatant_mut(side.opponent());
            defender.take_damage(outcome.damage);

            debug!(
                round,
                attacker = %side,
                landed = outcome.landed,
                critical = outcome.critical,
                true_damage = outcome.true_damage,
                reduced = outcome.reduced,
                damage = outcome.damage,
                defender_hp = defender.current_hp,
                "attack resolved"
            );
            self.log.push(outcome.to_event(round));
        }

        self.check_termination();
        self.log.len() - before
    }

    /// Play up to `rounds` rounds, stopping early once the fight ends.
    /// Returns the number of rounds actually played.
    pub fn advance(&mut self, rounds: u32, dice: &mut impl Dice) -> u32 {
        let mut played = 0;
        while played < rounds && !self.is_finished() {
            self.advance_round(dice);
            played += 1;
        }
        played
    }

    /// Play until the fight ends
    pub fn run_to_completion(&mut self, dice: &mut impl Dice) -> Winner {
        while !self.is_finished() {
            self.advance_round(dice);
        }
        self.winner
    }

    fn check_termination(&mut self) {
        let winner = match decide_winner(self.player.current_hp, self.enemy.current_hp) {
            Some(winner) => winner,
            None if self.round >= self.constants.round_cap => {
                warn!(
                    round = self.round,
                    player_hp = self.player.current_hp,
                    enemy_hp = self.enemy.current_hp,
                    "round cap reached, forcing a draw"
                );
                Winner::Draw
            }
            None => return,
        };

        self.finish(winner);
    }

    fn finish(&mut self, winner: Winner) {
        if self.is_finished() {
            return;
        }
        self.status = CombatStatus::Finished;
        self.winner = winner;
        self.log.push(Event::End { winner });
        info!(
            round = self.round,
            %winner,
            player = %self.player.name,
            enemy = %self.enemy.name,
            "combat finished"
        );
    }
}
