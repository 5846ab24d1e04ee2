//! # Brain Registry
//!
//! The data layer of the agent brain. This crate owns every registered
//! language, module, knowledge item and command, and enforces the ownership
//! rules between them. It contains no ranking or response logic.
//!
//! ## Core Components
//!
//! - **entities**: Identifiers and record types (languages, modules, knowledge, commands)
//! - **graph**: The `EntityGraph` repository and its read-only snapshot
//! - **error**: Conditions raised by lookups and mutations

pub mod entities;
pub mod error;
pub mod graph;

pub use entities::*;
pub use error::*;
pub use graph::*;
