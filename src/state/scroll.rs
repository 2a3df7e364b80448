//! Scroll-derived chrome state and per-element reveal flags.
//!
//! Neither value is persisted. `ScrollState` is recomputed from the live
//! offset on every scroll; a `RevealFlag` flips once and stays flipped.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Navbar chrome state derived from the vertical scroll offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub is_scrolled: bool,
}

impl ScrollState {
    /// Strictly above `threshold` counts as scrolled.
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        Self { is_scrolled: offset > threshold }
    }
}

/// One visibility report for an observed element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    /// Visible fraction of the element, `0.0..=1.0`.
    pub ratio: f64,
}

impl IntersectionSample {
    pub fn is_visible(self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

/// Inline style applied to an element when it is revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
}

impl RevealStyle {
    pub const SHOWN: Self = Self { opacity: "1", transform: "translateY(0)" };
}

/// Result of feeding a sample to a reveal flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The element became visible for the first time.
    Revealed,
    /// Already revealed; nothing changes.
    AlreadyRevealed,
    /// Not visible enough yet.
    Hidden,
}

/// One-way visibility flag for a single animated element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealFlag {
    revealed: bool,
}

impl RevealFlag {
    pub fn is_revealed(self) -> bool {
        self.revealed
    }

    /// Record a sample. Only the first visible sample returns `Revealed`.
    pub fn observe(&mut self, sample: IntersectionSample, threshold: f64) -> RevealOutcome {
        if self.revealed {
            return RevealOutcome::AlreadyRevealed;
        }
        if !sample.is_visible(threshold) {
            return RevealOutcome::Hidden;
        }
        self.revealed = true;
        RevealOutcome::Revealed
    }
}
