//! # cdg - Class Dependency Graph
//!
//! Builds a directed graph of class dependencies from a declaration file and
//! computes the order in which a class and its transitive dependencies must
//! be recompiled, reporting a cycle when no valid order exists.

pub mod cli;
pub mod cli_handlers;
pub mod error;
pub mod graph;
pub mod parse;

pub use error::{GraphError, Result};
pub use graph::DependencyGraph;
