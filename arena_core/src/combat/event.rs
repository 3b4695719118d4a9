//! Event - The append-only record of what happened in a fight
//!
//! The event log is the only source of truth for replays. Plain-text lines
//! are rendered from events, never the other way around.

use crate::types::{Side, Winner};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single entry in the combat log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    /// A landed, non-critical attack
    Hit { round: u32, src: Side, dmg: i64 },
    /// A landed critical attack
    Crit { round: u32, src: Side, dmg: i64 },
    /// An attack that dealt nothing. `dodged` separates a defender dodge from
    /// a failed accuracy roll.
    Miss { round: u32, src: Side, dodged: bool },
    /// Terminal marker, appended exactly once
    End { winner: Winner },
}

impl Event {
    /// Side that produced the event, if any
    pub fn source(&self) -> Option<Side> {
        match self {
            Event::Hit { src, .. } | Event::Crit { src, .. } | Event::Miss { src, .. } => {
                Some(*src)
            }
            Event::End { .. } => None,
        }
    }

    /// Damage dealt by the event (0 for misses and the end marker)
    pub fn damage(&self) -> i64 {
        match self {
            Event::Hit { dmg, .. } | Event::Crit { dmg, .. } => *dmg,
            Event::Miss { .. } | Event::End { .. } => 0,
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Event::End { .. })
    }

    /// Render the event as a log line using combatant names
    pub fn describe(&self, player_name: &str, enemy_name: &str) -> String {
        let name = |side: Side| match side {
            Side::Player => player_name,
            Side::Enemy => enemy_name,
        };

        match *self {
            Event::Hit { round, src, dmg } => {
                format!("Round {round}: {} dealt {dmg} damage.", name(src))
            }
            Event::Crit { round, src, dmg } => format!(
                "Round {round}: {} landed a critical hit for {dmg} damage!",
                name(src)
            ),
            Event::Miss {
                round,
                src,
                dodged: true,
            } => format!(
                "Round {round}: {} dodged {}'s attack.",
                name(src.opponent()),
                name(src)
            ),
            Event::Miss {
                round,
                src,
                dodged: false,
            } => format!("Round {round}: {} missed.", name(src)),
            Event::End { winner } => match winner {
                Winner::Player => format!("{} wins!", player_name),
                Winner::Enemy => format!("{} wins!", enemy_name),
                Winner::Draw => "The fight ends in a draw.".to_string(),
                Winner::None => "The fight ended without a winner.".to_string(),
            },
        }
    }
}

/// Name-free rendering, using "player"/"enemy" as the combatant names
impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe("player", "enemy"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_hit() {
        let event = Event::Hit {
            round: 3,
            src: Side::Player,
            dmg: 12,
        };
        assert_eq!(
            event.describe("Hero", "Goblin"),
            "Round 3: Hero dealt 12 damage."
        );
        assert_eq!(event.to_string(), "Round 3: player dealt 12 damage.");
    }

    #[test]
    fn test_describe_dodge_names_defender() {
        let event = Event::Miss {
            round: 1,
            src: Side::Enemy,
            dodged: true,
        };
        assert_eq!(
            event.describe("Hero", "Goblin"),
            "Round 1: Hero dodged Goblin's attack."
        );
    }

    #[test]
    fn test_describe_end() {
        let draw = Event::End {
            winner: Winner::Draw,
        };
        assert_eq!(draw.describe("Hero", "Goblin"), "The fight ends in a draw.");

        let won = Event::End {
            winner: Winner::Enemy,
        };
        assert_eq!(won.describe("Hero", "Goblin"), "Goblin wins!");
    }

    #[test]
    fn test_event_json_shape() {
        let event = Event::Crit {
            round: 2,
            src: Side::Enemy,
            dmg: 18,
        };
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(json["kind"], "crit");
        assert_eq!(json["src"], "enemy");
        assert_eq!(json["dmg"], 18);

        let end = serde_json::to_value(Event::End {
            winner: Winner::Draw,
        })
        .unwrap();
        assert_eq!(end["kind"], "end");
        assert_eq!(end["winner"], "draw");
    }

    #[test]
    fn test_accessors() {
        let miss = Event::Miss {
            round: 4,
            src: Side::Player,
            dodged: false,
        };
        assert_eq!(miss.source(), Some(Side::Player));
        assert_eq!(miss.damage(), 0);
        assert!(!miss.is_end());
        assert!(Event::End {
            winner: Winner::Player
        }
        .is_end());
    }
}
