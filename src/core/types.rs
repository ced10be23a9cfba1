//! Core type definitions used throughout the codebase

/// Initiative score for one round (trait sum plus die roll)
pub type Initiative = i32;

/// Round counter within a session
pub type Round = u32;
