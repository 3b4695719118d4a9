//! Attributes - The seven base attributes and the build that selects how they are used

mod derived;
pub mod formulas;

pub use derived::DerivedStats;

use serde::{Deserialize, Serialize};

/// Base attributes of a combatant
///
/// Fields are signed so that negative input can be represented and rejected
/// by [`Attributes::validate`]. Every field is required when deserializing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attributes {
    pub strength: i64,
    pub dexterity: i64,
    pub intelligence: i64,
    pub wisdom: i64,
    pub charisma: i64,
    pub constitution: i64,
    pub luck: i64,
}

impl Attributes {
    /// Create a set with every attribute at the same value
    pub fn uniform(value: i64) -> Self {
        Attributes {
            strength: value,
            dexterity: value,
            intelligence: value,
            wisdom: value,
            charisma: value,
            constitution: value,
            luck: value,
        }
    }

    /// All attributes paired with their names, in canonical order
    pub fn named(&self) -> [(&'static str, i64); 7] {
        [
            ("strength", self.strength),
            ("dexterity", self.dexterity),
            ("intelligence", self.intelligence),
            ("wisdom", self.wisdom),
            ("charisma", self.charisma),
            ("constitution", self.constitution),
            ("luck", self.luck),
        ]
    }

    /// Reject any negative attribute, naming the first offender
    pub fn validate(&self) -> Result<(), String> {
        match self.named().iter().find(|(_, value)| *value < 0) {
            Some((name, value)) => Err(format!("{name} must be non-negative, got {value}")),
            None => Ok(()),
        }
    }

    /// Value of the attribute a build scales its secondary resource with
    pub fn main(&self, attribute: MainAttribute) -> i64 {
        match attribute {
            MainAttribute::Strength => self.strength,
            MainAttribute::Dexterity => self.dexterity,
            MainAttribute::Intelligence => self.intelligence,
        }
    }
}

/// Attribute that feeds a build's secondary resource pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MainAttribute {
    Strength,
    Dexterity,
    Intelligence,
}

/// Which attack stat a combatant fights with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackStyle {
    Melee,
    Ranged,
    Magic,
}

/// Character build, selecting the attack stat and main attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Build {
    Warrior,
    Ranger,
    Mage,
}

impl Build {
    pub fn attack_style(self) -> AttackStyle {
        match self {
            Build::Warrior => AttackStyle::Melee,
            Build::Ranger => AttackStyle::Ranged,
            Build::Mage => AttackStyle::Magic,
        }
    }

    pub fn main_attribute(self) -> MainAttribute {
        match self {
            Build::Warrior => MainAttribute::Strength,
            Build::Ranger => MainAttribute::Dexterity,
            Build::Mage => MainAttribute::Intelligence,
        }
    }
}
