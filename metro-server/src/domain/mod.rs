//! Domain types for the metro route planner.
//!
//! These are the small value types shared by the graph, the planner and the
//! web layer. Each enforces its invariants at construction time.

mod error;
mod line;
mod vertex;

pub use error::{EvaluationError, GraphError};
pub use line::{InvalidLineId, LineId};
pub use vertex::Vertex;
