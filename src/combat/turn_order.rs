//! Turn order
//!
//! An ordered sequence of combatants, descending by current initiative.
//! Rebuilt by bucketing on the initiative value and concatenating buckets
//! highest-first; each bucket keeps insertion order, so ties retain their
//! relative position from the previous round. Bucket bounds derive from the
//! live combatant set, never from a fixed range.

use crate::combat::combatant::{Combatant, CombatantSnapshot};
use crate::core::error::Result;

/// The active turn order for one session
pub struct TurnOrder {
    combatants: Vec<Combatant>,
}

impl TurnOrder {
    /// Build the order from a roster whose initiatives are already rolled
    pub fn new(combatants: Vec<Combatant>) -> Self {
        let mut order = Self { combatants };
        order.rebuild();
        order
    }

    /// Advance every combatant into the next round and rebuild the order.
    ///
    /// Two-phase: all rolls are obtained and validated first, then committed
    /// together. A rejected roll (manual operator off the die) aborts before
    /// any combatant mutates, leaving the previous round's order standing.
    pub fn reshuffle(&mut self) -> Result<()> {
        let mut rolls = Vec::with_capacity(self.combatants.len());
        for combatant in &mut self.combatants {
            rolls.push(combatant.roll_initiative()?);
        }
        for (combatant, roll) in self.combatants.iter_mut().zip(rolls) {
            combatant.commit_round(roll);
        }
        self.rebuild();
        tracing::debug!(combatants = self.combatants.len(), "turn order rebuilt");
        Ok(())
    }

    /// Bucketed stable sort, descending by current initiative
    fn rebuild(&mut self) {
        let initiatives = self.combatants.iter().map(Combatant::current_initiative);
        let (Some(min), Some(max)) = (initiatives.clone().min(), initiatives.max()) else {
            return;
        };

        let span = (max - min) as usize + 1;
        let mut buckets: Vec<Vec<Combatant>> =
            std::iter::repeat_with(Vec::new).take(span).collect();
        for combatant in self.combatants.drain(..) {
            let idx = (combatant.current_initiative() - min) as usize;
            buckets[idx].push(combatant);
        }
        for bucket in buckets.into_iter().rev() {
            self.combatants.extend(bucket);
        }
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Combatant> {
        self.combatants.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.combatants.iter()
    }

    /// Mutable access to one combatant's vitals, resolved to the first
    /// match in current order. Cannot reorder; only `reshuffle` does that.
    pub fn combatant_mut(&mut self, name: &str) -> Option<&mut Combatant> {
        self.combatants.iter_mut().find(|c| c.name() == name)
    }

    /// Read-only views in current turn order
    pub fn snapshots(&self) -> Vec<CombatantSnapshot> {
        self.combatants.iter().map(Combatant::snapshot).collect()
    }
}
