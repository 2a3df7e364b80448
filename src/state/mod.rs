//! Pure view-state values.
//!
//! DESIGN
//! ======
//! State is split by component (`theme`, `scroll`, `badge`) so each handler
//! depends on a small focused model with no browser types in it.

pub mod badge;
pub mod scroll;
pub mod theme;
