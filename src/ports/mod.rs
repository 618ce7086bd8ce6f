//! Ports (trait boundaries) between the game core and the code that drives it.
//!
//! Agents choose moves; observers watch matches. The match pipeline only
//! talks to these traits, so the engine, the random baseline and the console
//! human are interchangeable.

pub mod agent;
pub mod observer;

pub use agent::Agent;
pub use observer::Observer;
