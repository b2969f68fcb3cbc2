//! Domains module containing business logic organized by bounded contexts.
//!
//! The server exposes a single context today: the GHL tools.

pub mod tools;
