//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Every tool maps onto one GoHighLevel REST operation.
//!
//! ## Architecture
//!
//! - `definitions/` - Endpoint tables, one file per functional group
//! - `endpoint.rs` - Endpoint description, input schema and request building
//! - `group.rs` - The `ToolGroup` contract and its endpoint-backed implementation
//! - `registry.rs` - Aggregate listing, collision checks and dispatch
//! - `error.rs` - Tool, registry and dispatch error types
//!
//! ## Adding a New Tool
//!
//! 1. Add an `Endpoint` to the table of its group in `definitions/`
//! 2. For a new group, add the module and an entry in `definitions::GROUPS`
//!
//! Names are checked for collisions when the registry is built, so a
//! duplicate fails startup rather than shadowing another tool.

pub mod definitions;
pub mod endpoint;
mod error;
mod group;
mod registry;

pub use definitions::{build_groups, build_registry};
pub use endpoint::{Endpoint, ParamKind, ParamLocation};
pub use error::{DispatchError, ErrorKind, RegistryError, ToolError};
pub use group::{EndpointGroup, ToolGroup};
pub use registry::{DispatchResult, ToolRegistry};

#[cfg(test)]
pub(crate) use group::testing;
