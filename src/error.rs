//! Error type shared by every component handler.
//!
//! ERROR HANDLING
//! ==============
//! Failures stay local to the handler that raised them. `Page::dispatch`
//! logs and drops them so one broken element never disables the rest of
//! the page.

/// Errors produced by view-state handlers and their collaborators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// A required page element could not be found.
    #[error("required element not found: {0}")]
    MissingElement(String),
    /// The network request could not be sent or completed.
    #[error("request failed: {0}")]
    Request(String),
    /// The server answered with a non-success status.
    #[error("unexpected status: {0}")]
    Status(u16),
    /// The response body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// A configuration value is out of range or empty.
    #[error("invalid config: {0}")]
    Config(String),
}

