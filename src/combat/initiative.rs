//! Initiative die sources
//!
//! Each combatant is bound to exactly one source for its lifetime: an
//! autonomous one draws from the engine's rng, a manual one blocks on an
//! external operator. Sources only produce a roll; range validation belongs
//! to the combatant so a misbehaving operator rejects the round advance
//! instead of corrupting the order.

use crate::combat::constants::{DIE_MAX, DIE_MIN};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Supplies the die-roll component of a combatant's initiative each round
pub trait InitiativeSource {
    /// Produce one roll for the named combatant. Expected to lie in 1..=6;
    /// the combatant rejects anything else.
    fn roll_die(&mut self, combatant: &str) -> i32;
}

/// Rolls on an owned rng, for combatants the engine drives itself
pub struct AutonomousSource<R: Rng> {
    rng: R,
}

impl<R: Rng> AutonomousSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl AutonomousSource<ChaCha8Rng> {
    /// Deterministic source for tests and reproducible sessions
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Entropy-seeded source for live sessions
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> InitiativeSource for AutonomousSource<R> {
    fn roll_die(&mut self, _combatant: &str) -> i32 {
        self.rng.gen_range(DIE_MIN..=DIE_MAX)
    }
}

/// Defers each roll to a synchronous operator callback
///
/// The callback receives the combatant's name and the previous roll as a
/// suggested default, and blocks the round advance until it returns. The
/// returned value is passed through unvalidated.
pub struct ManualSource<F> {
    prompt: F,
    last_roll: i32,
}

impl<F: FnMut(&str, i32) -> i32> ManualSource<F> {
    pub fn new(prompt: F) -> Self {
        Self {
            prompt,
            last_roll: DIE_MIN,
        }
    }
}

impl<F: FnMut(&str, i32) -> i32> InitiativeSource for ManualSource<F> {
    fn roll_die(&mut self, combatant: &str) -> i32 {
        let roll = (self.prompt)(combatant, self.last_roll);
        self.last_roll = roll;
        roll
    }
}
