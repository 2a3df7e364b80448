//! Scheduling helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Timers and task spawning are injected so component logic runs under a
//! manual clock in tests and under `gloo-timers`/`wasm-bindgen-futures` in the browser.

#[cfg(test)]
pub mod manual_clock;
pub mod task;
pub mod timer;
