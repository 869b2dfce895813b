//! Edge-list text I/O: one `source,target[,weight]` line per edge.

pub mod reader;
pub mod writer;

pub use reader::{side_for_id, EdgeListReader, LoadOptions};
pub use writer::EdgeListWriter;
