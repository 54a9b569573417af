//! Platform assistant server.
//!
//! Tells a suburban commuter which coach to board so they step off right
//! at the exit they need, and adds a short "live status" advisory for the
//! line, either from a chat model or from an offline heuristic.

pub mod advisory;
pub mod directory;
pub mod domain;
pub mod web;
