//! Fraymaster - Combat-Turn Assistant Engine
//!
//! Tracks combatants' vitals (hit points, defense, stance) and rebuilds the
//! initiative order each round. Presentation layers consume the read-only
//! snapshot surface; all mutation goes through explicit engine calls.

pub mod combat;
pub mod core;
