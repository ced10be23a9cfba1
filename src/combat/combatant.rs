//! Combatant model
//!
//! One tracked participant: fixed traits, mutable vitals, declared stance,
//! and the per-round initiative value the turn order is built from.
//! `advance_round` is the sole authoritative mutation point for round
//! transitions.

use crate::combat::constants::{DIE_MAX, DIE_MIN};
use crate::combat::initiative::InitiativeSource;
use crate::combat::stance::Stance;
use crate::core::error::{EngineError, Result};
use crate::core::types::Initiative;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One tracked participant in the session
pub struct Combatant {
    name: String,
    dexterity: i32,
    wits: i32,
    hit_points: i32,
    base_hit_points: i32,
    base_defense: i32,
    persistent_defense_modifier: i32,
    round_defense_modifier: i32,
    pending_round_modifier: i32,
    stance: Stance,
    base_initiative: Initiative,
    current_initiative: Initiative,
    source: Box<dyn InitiativeSource>,
}

impl Combatant {
    /// Create a combatant with fixed traits and its lifetime initiative
    /// source.
    ///
    /// Dexterity, wits and starting hit points must be positive. The initial
    /// initiative is rolled through `source` immediately, so a manual source
    /// returning an off-die value fails construction with the same range
    /// error as a failed round advance.
    pub fn new(
        name: impl Into<String>,
        dexterity: i32,
        wits: i32,
        hit_points: i32,
        base_defense: i32,
        mut source: Box<dyn InitiativeSource>,
    ) -> Result<Self> {
        let name = name.into();

        check_positive(&name, "dexterity", dexterity)?;
        check_positive(&name, "wits", wits)?;
        check_positive(&name, "hit points", hit_points)?;

        let base_initiative = dexterity + wits;
        let roll = source.roll_die(&name);
        check_roll(&name, roll)?;

        Ok(Self {
            name,
            dexterity,
            wits,
            hit_points,
            base_hit_points: hit_points,
            base_defense,
            persistent_defense_modifier: 0,
            round_defense_modifier: 0,
            pending_round_modifier: 0,
            stance: Stance::default(),
            base_initiative,
            current_initiative: base_initiative + roll,
            source,
        })
    }

    /// Set the starting persistent defense modifier (wards or conditions
    /// already in force when the session begins). Defaults to 0 when not
    /// called.
    pub fn with_persistent_modifier(mut self, value: i32) -> Self {
        self.persistent_defense_modifier = value;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dexterity(&self) -> i32 {
        self.dexterity
    }

    pub fn wits(&self) -> i32 {
        self.wits
    }

    pub fn stance(&self) -> Stance {
        self.stance
    }

    pub fn hit_points(&self) -> i32 {
        self.hit_points
    }

    pub fn base_hit_points(&self) -> i32 {
        self.base_hit_points
    }

    pub fn base_initiative(&self) -> Initiative {
        self.base_initiative
    }

    pub fn current_initiative(&self) -> Initiative {
        self.current_initiative
    }

    pub fn round_defense_modifier(&self) -> i32 {
        self.round_defense_modifier
    }

    pub fn persistent_defense_modifier(&self) -> i32 {
        self.persistent_defense_modifier
    }

    /// Base defense plus persistent and round-scoped modifiers, computed on
    /// demand
    pub fn effective_defense(&self) -> i32 {
        self.base_defense + self.persistent_defense_modifier + self.round_defense_modifier
    }

    /// Declare a stance. Takes effect as a defense modifier at the next
    /// round advance, never immediately.
    pub fn set_stance(&mut self, stance: Stance) {
        self.stance = stance;
        self.pending_round_modifier = stance.pending_defense_modifier();
    }

    /// Unconditional hit-point adjustment. No floor and no ceiling: damage
    /// may drive the total negative and healing may exceed the base.
    pub fn adjust_hit_points(&mut self, delta: i32) {
        self.hit_points += delta;
    }

    /// Nudge the round-scoped defense modifier (cover, knockdown, similar
    /// one-round effects). Overwritten by the declared stance at the next
    /// round advance.
    pub fn adjust_temporary_defense(&mut self, delta: i32) {
        self.round_defense_modifier += delta;
    }

    /// Set the persistent modifier outright: PSI, theurgy, GM decision.
    /// Unbounded; UIs conventionally keep it above -30 but the engine does
    /// not.
    pub fn set_persistent_modifier(&mut self, value: i32) {
        self.persistent_defense_modifier = value;
    }

    /// Advance this combatant into the next round: roll initiative through
    /// the bound source and apply the stance modifier declared last round.
    ///
    /// An off-die roll fails with a range error and leaves every field
    /// untouched, including the current initiative.
    pub fn advance_round(&mut self) -> Result<Initiative> {
        let roll = self.roll_initiative()?;
        Ok(self.commit_round(roll))
    }

    /// Obtain and validate a roll without committing it. Split from
    /// `commit_round` so a multi-combatant reshuffle can reject the whole
    /// round before anything mutates.
    pub(crate) fn roll_initiative(&mut self) -> Result<i32> {
        let roll = self.source.roll_die(&self.name);
        check_roll(&self.name, roll)?;
        tracing::debug!(combatant = %self.name, roll, "initiative rolled");
        Ok(roll)
    }

    /// Apply a validated roll: the pending stance modifier becomes active
    /// and the initiative is recomputed.
    pub(crate) fn commit_round(&mut self, roll: i32) -> Initiative {
        self.round_defense_modifier = self.pending_round_modifier;
        self.current_initiative = self.base_initiative + roll;
        self.current_initiative
    }

    /// Read-only view for presentation
    pub fn snapshot(&self) -> CombatantSnapshot {
        CombatantSnapshot {
            name: self.name.clone(),
            initiative: self.current_initiative,
            effective_defense: self.effective_defense(),
            hit_points: self.hit_points,
            base_hit_points: self.base_hit_points,
        }
    }
}

impl fmt::Debug for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combatant")
            .field("name", &self.name)
            .field("stance", &self.stance)
            .field("hit_points", &self.hit_points)
            .field("effective_defense", &self.effective_defense())
            .field("current_initiative", &self.current_initiative)
            .finish_non_exhaustive()
    }
}

fn check_positive(name: &str, trait_name: &'static str, value: i32) -> Result<()> {
    if value <= 0 {
        return Err(EngineError::InvalidTrait {
            name: name.to_owned(),
            trait_name,
            value,
        });
    }
    Ok(())
}

fn check_roll(name: &str, roll: i32) -> Result<()> {
    if !(DIE_MIN..=DIE_MAX).contains(&roll) {
        return Err(EngineError::RollOutOfRange {
            name: name.to_owned(),
            roll,
        });
    }
    Ok(())
}

/// Read-only combatant view handed to presentation layers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantSnapshot {
    pub name: String,
    pub initiative: Initiative,
    pub effective_defense: i32,
    pub hit_points: i32,
    pub base_hit_points: i32,
}

impl CombatantSnapshot {
    /// Current over base hit points; may be negative or above 1.0 since the
    /// engine never clamps
    pub fn hit_point_fraction(&self) -> f32 {
        self.hit_points as f32 / self.base_hit_points as f32
    }

    /// Slot display of the health state: one "o" per current hit point,
    /// padded with "_" up to the base. A negative total renders all-empty,
    /// an over-base total extends the track.
    pub fn health_track(&self) -> String {
        let filled = self.hit_points.max(0) as usize;
        let total = (self.base_hit_points.max(0) as usize).max(filled);
        let mut track = "o".repeat(filled);
        track.push_str(&"_".repeat(total - filled));
        track
    }
}
