//! All data types for the graph workbench.

pub mod edge;
pub mod error;
pub mod vertex;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use vertex::{next_letter_id, Side};

/// Identifier of a vertex. Opaque to the engine beyond equality and ordering.
pub type VertexId = String;

/// Edge weight. The edge-list format only carries integers.
pub type Weight = i64;

/// Weight given to an edge that enters weighted mode without a value of its own.
pub const DEFAULT_WEIGHT: Weight = 1;

/// First identifier handed out by automatic vertex generation.
pub const FIRST_VERTEX_ID: char = 'A';

/// Last identifier automatic letter generation can produce.
pub const LAST_VERTEX_ID: char = 'Z';
