//! Line activation: simulating line closures and restorations.
//!
//! Closing a line only flips the `active` flag of its edges. Travel time and
//! distance are left as built, so reopening the line restores it exactly and
//! repeated edits compose.

use std::collections::BTreeSet;

use tracing::debug;

use super::Graph;
use crate::domain::LineId;

/// Set the `active` flag of every edge on `line`.
///
/// Returns the number of edges on the line. An unknown line matches nothing
/// and is not an error.
pub fn set_line_active(graph: &mut Graph, line: &LineId, active: bool) -> usize {
    let mut matched = 0;
    for edge in graph.edges_mut().filter(|e| e.is_on(line)) {
        edge.active = active;
        matched += 1;
    }

    debug!(line = %line, active, edges = matched, "set line state");
    matched
}

/// Take `line` out of service.
pub fn deactivate_line(graph: &mut Graph, line: &LineId) -> usize {
    set_line_active(graph, line, false)
}

/// Put `line` back into service.
pub fn activate_line(graph: &mut Graph, line: &LineId) -> usize {
    set_line_active(graph, line, true)
}

/// Every distinct line that has at least one edge in the graph.
pub fn line_ids(graph: &Graph) -> BTreeSet<LineId> {
    graph.edges().filter_map(|e| e.line.clone()).collect()
}
