//! Rules constants collected in one place

/// Lowest face of the initiative die
pub const DIE_MIN: i32 = 1;

/// Highest face of the initiative die
pub const DIE_MAX: i32 = 6;
