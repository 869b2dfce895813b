//! High-level operations: the editing session, its commands, and inspection.

pub mod command;
pub mod inspect;
pub mod session;

pub use command::{Command, Outcome, COMMANDS};
pub use inspect::{
    Description, EdgeElement, Elements, GraphInspector, GraphStats, VertexElement,
};
pub use session::Workbench;
