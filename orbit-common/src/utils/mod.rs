//! Small helpers shared by every OrbitChain crate: clock access and
//! randomness for identifiers.

pub mod security;
pub mod time;
