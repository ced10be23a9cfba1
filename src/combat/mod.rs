pub mod combatant;
pub mod constants;
pub mod encounter;
pub mod initiative;
pub mod stance;
pub mod turn_order;

pub use combatant::{Combatant, CombatantSnapshot};
pub use encounter::Encounter;
pub use initiative::{AutonomousSource, InitiativeSource, ManualSource};
pub use stance::Stance;
pub use turn_order::TurnOrder;
