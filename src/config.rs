/// Type of the integers stored in the sequence.
pub type Value = i32;

/// Type representing a 1-based source line number.
pub type LineNumber = u32;

/// Type used to address a node slot within the sequence arena.
pub type NodeIndex = u32;

/// Number of node slots reserved when a sequence is created.
pub const INITIAL_CAPACITY: usize = 64;

/// Highest value `pchar` and `pstr` interpret as a character.
pub const ASCII_MAX: Value = 127;
