use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid {trait_name} for {name}: must be positive, got {value}")]
    InvalidTrait {
        name: String,
        trait_name: &'static str,
        value: i32,
    },

    #[error("initiative roll for {name} out of range: got {roll}, expected 1-6")]
    RollOutOfRange { name: String, roll: i32 },

    #[error("no combatant named {0:?}")]
    UnknownCombatant(String),

    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
