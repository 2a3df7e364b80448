//! The three view-state components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component owns a disjoint set of element handles and reacts to its
//! own events. None reads another's state, so they can fail independently.

pub mod notification_badge;
pub mod scroll_view;
pub mod theme_toggle;
