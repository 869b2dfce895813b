//! In-memory graph operations: the core data structure and its algorithms.

pub mod builder;
pub mod matching;
pub mod store;
pub mod traversal;

pub use builder::GraphBuilder;
pub use matching::{maximum_matching, Matching};
pub use store::GraphStore;
pub use traversal::{bfs, dfs, Traversal, TraversalOrder};
