//! Encounter round controller
//!
//! Session facade driving the round cycle: narrative actions mutate vitals
//! through name-addressed calls, then `advance_round` rerolls initiative and
//! rebuilds the turn order. Presentation reads snapshots only.

use crate::combat::combatant::{Combatant, CombatantSnapshot};
use crate::combat::stance::Stance;
use crate::combat::turn_order::TurnOrder;
use crate::core::error::{EngineError, Result};
use crate::core::types::Round;

/// One running combat session
pub struct Encounter {
    order: TurnOrder,
    round: Round,
}

impl Encounter {
    pub fn new(combatants: Vec<Combatant>) -> Self {
        Self {
            order: TurnOrder::new(combatants),
            round: 0,
        }
    }

    /// Rounds completed so far
    pub fn round(&self) -> Round {
        self.round
    }

    pub fn order(&self) -> &TurnOrder {
        &self.order
    }

    /// Advance the whole session one round: reroll every initiative, apply
    /// declared stances, rebuild the order. A rejected roll leaves the
    /// session in the previous round.
    pub fn advance_round(&mut self) -> Result<Round> {
        self.order.reshuffle()?;
        self.round += 1;
        tracing::info!(
            round = self.round,
            combatants = self.order.len(),
            "round advanced"
        );
        Ok(self.round)
    }

    /// Declare a stance for the named combatant's next round
    pub fn set_stance(&mut self, name: &str, stance: Stance) -> Result<()> {
        self.combatant_mut(name)?.set_stance(stance);
        Ok(())
    }

    /// Apply damage or healing; the total is never clamped
    pub fn adjust_hit_points(&mut self, name: &str, delta: i32) -> Result<()> {
        let combatant = self.combatant_mut(name)?;
        combatant.adjust_hit_points(delta);
        tracing::debug!(
            combatant = name,
            delta,
            hit_points = combatant.hit_points(),
            "hit points adjusted"
        );
        Ok(())
    }

    /// Nudge the named combatant's round-scoped defense
    pub fn adjust_temporary_defense(&mut self, name: &str, delta: i32) -> Result<()> {
        self.combatant_mut(name)?.adjust_temporary_defense(delta);
        Ok(())
    }

    /// GM override of the persistent defense modifier
    pub fn set_persistent_modifier(&mut self, name: &str, value: i32) -> Result<()> {
        self.combatant_mut(name)?.set_persistent_modifier(value);
        Ok(())
    }

    /// Read-only views in current turn order
    pub fn snapshots(&self) -> Vec<CombatantSnapshot> {
        self.order.snapshots()
    }

    fn combatant_mut(&mut self, name: &str) -> Result<&mut Combatant> {
        self.order
            .combatant_mut(name)
            .ok_or_else(|| EngineError::UnknownCombatant(name.to_owned()))
    }
}
