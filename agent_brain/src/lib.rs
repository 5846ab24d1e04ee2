//! # Agent Brain
//!
//! The decision logic of the assistant. This crate reads the `brain_registry`
//! graph, ranks knowledge and commands against free-text prompts, diagnoses
//! whether a module is ready to build stake games, and drafts a game
//! configuration from a spoken request.
//!
//! ## Core Components
//!
//! - **ranking**: Keyword scoring of knowledge items and command suggestions
//! - **readiness**: Rule-based build readiness diagnostics
//! - **designer**: Heuristic extraction of a stake game design from a sentence
//! - **brain**: The façade composing the above into prompt responses
//!
//! ## Design Philosophy
//!
//! - **Deterministic**: The same graph and prompt always produce the same output
//! - **Pure**: Ranking, readiness and design never mutate the graph
//! - **Owned State**: The brain owns its graph; no ambient globals

pub mod brain;
pub mod designer;
pub mod error;
pub mod ranking;
pub mod readiness;

pub use brain::*;
pub use designer::*;
pub use error::*;
pub use ranking::*;
pub use readiness::*;
