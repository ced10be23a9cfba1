//! Combat stances
//!
//! A stance is declared during the current round and affects defense for the
//! round that follows. Declaring one never changes effective defense
//! immediately; it only records the modifier the next round advance applies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared combat posture - every combatant is always in exactly one stance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Stance {
    /// No bonus or penalty. Surprised combatants are assumed neutral.
    #[default]
    Neutral,
    /// Acting without regard to safety: defense sacrificed for attack
    /// effect. Next-round defense -2.
    Aggressive,
    /// Head down, staying out of the line of fire. Next-round defense +2.
    Defensive,
    /// Covering up completely; movement is the only action allowed.
    /// Next-round defense +4.
    FullDefense,
}

impl Stance {
    /// All stances in declaration-menu order
    pub const ALL: [Stance; 4] = [
        Stance::Neutral,
        Stance::Aggressive,
        Stance::Defensive,
        Stance::FullDefense,
    ];

    /// Defense modifier this stance grants for the round after it is declared
    pub fn pending_defense_modifier(&self) -> i32 {
        match self {
            Stance::Neutral => 0,
            Stance::Aggressive => -2,
            Stance::Defensive => 2,
            Stance::FullDefense => 4,
        }
    }
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stance::Neutral => "neutral",
            Stance::Aggressive => "aggressive",
            Stance::Defensive => "defensive",
            Stance::FullDefense => "total defense",
        };
        f.write_str(label)
    }
}
