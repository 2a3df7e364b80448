//! Networking for the unread-count endpoint.

pub mod api;
