//! Unit tests for the k-path search.

use super::*;
use crate::domain::LineId;
use crate::graph::{activate_line, deactivate_line};

const A: Vertex = Vertex(0);
const B: Vertex = Vertex(1);
const C: Vertex = Vertex(2);
const D: Vertex = Vertex(3);
const E: Vertex = Vertex(4);

fn line(s: &str) -> LineId {
    LineId::parse(s).unwrap()
}

/// Build a graph from one-way links `(from, to, time, distance, line)`.
fn make_graph(vertices: usize, links: &[(Vertex, Vertex, f64, f64, &str)]) -> Graph {
    let mut graph = Graph::with_vertices(vertices);
    for &(from, to, time, distance, l) in links {
        graph
            .add_edge(from, to, time, distance, line(l), true)
            .unwrap();
    }
    graph
}

/// A -> B -> C -> D, 60 s and 1000 m per hop, with B -> C on `middle`.
fn chain(middle: &str) -> Graph {
    make_graph(
        4,
        &[
            (A, B, 60.0, 1000.0, "L1"),
            (B, C, 60.0, 1000.0, middle),
            (C, D, 60.0, 1000.0, "L1"),
        ],
    )
}

/// A slow direct line (A-B-C-D on L1, 600 s per hop) and a fast route with
/// one change (A-E on L2, E-D on L3, 60 s each).
fn slow_line_or_fast_change() -> Graph {
    make_graph(
        5,
        &[
            (A, B, 600.0, 3000.0, "L1"),
            (B, C, 600.0, 3000.0, "L1"),
            (C, D, 600.0, 3000.0, "L1"),
            (A, E, 60.0, 2000.0, "L2"),
            (E, D, 60.0, 2000.0, "L3"),
        ],
    )
}

/// Add both directions of each link.
fn make_two_way(vertices: usize, links: &[(Vertex, Vertex, f64, f64, &str)]) -> Graph {
    let mut graph = Graph::with_vertices(vertices);
    for &(from, to, time, distance, l) in links {
        graph.add_edge(from, to, time, distance, line(l), true).unwrap();
        graph.add_edge(to, from, time, distance, line(l), true).unwrap();
    }
    graph
}

#[test]
fn single_line_time_first() {
    let graph = chain("L1");
    let paths = find_time_optimal_paths(&graph, A, D, 20, 40).unwrap();

    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].path(), &[A, B, C, D]);
    assert_eq!(paths[0].time(), 180.0);
    assert_eq!(paths[0].distance(), 3000.0);
    assert_eq!(paths[0].transfers(), 0);
}

#[test]
fn change_of_line_adds_transfer_and_penalty() {
    let graph = chain("L2");
    let paths = find_transfer_optimal_paths(&graph, A, D, 20, 40).unwrap();

    assert_eq!(paths.len(), 1);
    // L1 -> L2 -> L1 is two changes of line
    assert_eq!(paths[0].transfers(), 2);
    assert_eq!(paths[0].time(), 180.0 + 600.0);
}

#[test]
fn single_change_of_line() {
    // A -> B on L1, B -> C -> D on L2
    let graph = make_graph(
        4,
        &[
            (A, B, 60.0, 1000.0, "L1"),
            (B, C, 60.0, 1000.0, "L2"),
            (C, D, 60.0, 1000.0, "L2"),
        ],
    );
    let paths = find_transfer_optimal_paths(&graph, A, D, 20, 40).unwrap();

    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].transfers(), 1);
    assert_eq!(paths[0].time(), 480.0);
    assert_eq!(paths[0].distance(), 3000.0);
}

#[test]
fn closed_line_leaves_no_route() {
    let mut graph = chain("L1");
    deactivate_line(&mut graph, &line("L1"));

    assert!(find_time_optimal_paths(&graph, A, D, 20, 40).unwrap().is_empty());
    assert!(find_transfer_optimal_paths(&graph, A, D, 20, 40).unwrap().is_empty());
}

#[test]
fn reopened_line_restores_route() {
    let mut graph = chain("L1");
    deactivate_line(&mut graph, &line("L1"));
    activate_line(&mut graph, &line("L1"));

    let paths = find_time_optimal_paths(&graph, A, D, 20, 40).unwrap();
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].time(), 180.0);
}

#[test]
fn transfer_first_prefers_direct_line() {
    let graph = slow_line_or_fast_change();
    let paths = find_transfer_optimal_paths(&graph, A, D, 20, 40).unwrap();

    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0].path(), &[A, B, C, D]);
    assert_eq!(paths[0].transfers(), 0);
    assert_eq!(paths[1].path(), &[A, E, D]);
    assert_eq!(paths[1].transfers(), 1);
}

#[test]
fn time_first_prefers_fast_change() {
    let graph = slow_line_or_fast_change();
    let paths = find_time_optimal_paths(&graph, A, D, 20, 40).unwrap();

    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0].path(), &[A, E, D]);
    assert_eq!(paths[0].time(), 420.0);
    assert_eq!(paths[1].path(), &[A, B, C, D]);
    assert_eq!(paths[1].time(), 1800.0);
}

#[test]
fn inactive_edges_are_skipped() {
    let mut graph = slow_line_or_fast_change();
    deactivate_line(&mut graph, &line("L3"));

    let paths = find_time_optimal_paths(&graph, A, D, 20, 40).unwrap();
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].path(), &[A, B, C, D]);
}

#[test]
fn k_bounds_result_count() {
    let graph = make_two_way(
        4,
        &[
            (A, B, 60.0, 1000.0, "L1"),
            (B, C, 60.0, 1000.0, "L1"),
            (C, D, 60.0, 1000.0, "L1"),
        ],
    );

    let paths = find_time_optimal_paths(&graph, A, D, 3, 40).unwrap();
    assert_eq!(paths.len(), 3);
    assert_eq!(paths[0].path(), &[A, B, C, D]);
    assert_eq!(paths[0].time(), 180.0);

    assert!(find_time_optimal_paths(&graph, A, D, 0, 40).unwrap().is_empty());
}

#[test]
fn max_path_length_bounds_enumeration() {
    let graph = chain("L1");

    // Reaching D needs a prefix of three stations
    assert!(find_time_optimal_paths(&graph, A, D, 20, 2).unwrap().is_empty());
    assert_eq!(find_time_optimal_paths(&graph, A, D, 20, 3).unwrap().len(), 1);
}

#[test]
fn start_equals_end() {
    let graph = chain("L1");
    let paths = find_time_optimal_paths(&graph, B, B, 20, 40).unwrap();

    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].path(), &[B]);
    assert_eq!(paths[0].time(), 0.0);
    assert_eq!(paths[0].hops(), 0);
}

#[test]
fn unreachable_destination_is_empty() {
    let graph = chain("L1");
    let result = find_transfer_optimal_paths(&graph, D, A, 20, 40).unwrap();
    assert!(result.is_empty());
}

#[test]
fn invalid_vertices_are_rejected() {
    let graph = chain("L1");

    let err = find_time_optimal_paths(&graph, Vertex(9), A, 20, 40).unwrap_err();
    assert_eq!(
        err,
        GraphError::InvalidVertex {
            vertex: Vertex(9),
            vertex_count: 4
        }
    );
    assert!(find_transfer_optimal_paths(&graph, A, Vertex(4), 20, 40).is_err());
}

#[test]
fn find_dispatches_on_mode() {
    let graph = slow_line_or_fast_change();
    let config = SearchConfig::default();
    let search = PathSearch::new(&graph, &config);

    let fastest = search.find(RouteMode::Fastest, A, D).unwrap();
    assert_eq!(fastest.candidates[0].path(), &[A, E, D]);
    assert!(fastest.states_explored > 0);

    let fewest = search.find(RouteMode::FewestTransfers, A, D).unwrap();
    assert_eq!(fewest.candidates[0].path(), &[A, B, C, D]);
}

#[test]
fn transfer_penalty_comes_from_config() {
    let graph = chain("L2");
    let config = SearchConfig::new(20, 40, 120, 60);
    let result = PathSearch::new(&graph, &config).time_optimal(A, D).unwrap();

    assert_eq!(result.candidates[0].time(), 180.0 + 240.0);
}

#[test]
fn route_mode_serde() {
    let mode: RouteMode = serde_json::from_str("\"fewest-transfers\"").unwrap();
    assert_eq!(mode, RouteMode::FewestTransfers);
    assert_eq!(serde_json::to_string(&RouteMode::Fastest).unwrap(), "\"fastest\"");
    assert_eq!(RouteMode::default(), RouteMode::Fastest);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    const VERTICES: usize = 5;
    const LINES: [&str; 3] = ["L1", "L2", "L3"];

    /// Random one-way links: (from, to, time, distance, line index, active).
    fn links() -> impl Strategy<Value = Vec<(usize, usize, u16, u16, usize, bool)>> {
        prop::collection::vec(
            (
                0..VERTICES,
                0..VERTICES,
                1u16..600,
                1u16..5000,
                0..LINES.len(),
                prop::bool::weighted(0.8),
            ),
            0..16,
        )
    }

    fn build(links: &[(usize, usize, u16, u16, usize, bool)]) -> Graph {
        let mut graph = Graph::with_vertices(VERTICES);
        for &(from, to, time, distance, l, active) in links {
            graph
                .add_edge(
                    Vertex(from),
                    Vertex(to),
                    time as f64,
                    distance as f64,
                    line(LINES[l]),
                    active,
                )
                .unwrap();
        }
        graph
    }

    /// Check a candidate against the graph it came from.
    fn check_candidate(graph: &Graph, candidate: &PathCandidate) -> Result<(), TestCaseError> {
        let path = candidate.path();
        prop_assert_eq!(path.first(), Some(&A));
        prop_assert_eq!(path.last(), Some(&E));

        let mut lines = Vec::new();
        let mut time = 0.0;
        let mut distance = 0.0;
        for pair in path.windows(2) {
            let edge = graph.edge(pair[0], pair[1]).unwrap();
            prop_assert!(edge.active, "candidate uses inactive edge {:?}", pair);
            time += edge.time;
            distance += edge.distance;
            lines.push(edge.line);
        }

        let changes = lines.windows(2).filter(|l| l[0] != l[1]).count();
        prop_assert_eq!(candidate.transfers(), changes);
        prop_assert_eq!(candidate.time(), time + 300.0 * changes as f64);
        prop_assert_eq!(candidate.distance(), distance);
        Ok(())
    }

    proptest! {
        /// Transfer-first output is ordered by transfers and internally consistent
        #[test]
        fn transfer_first_invariants(links in links()) {
            let graph = build(&links);
            let paths = find_transfer_optimal_paths(&graph, A, E, 6, 6).unwrap();

            prop_assert!(paths.len() <= 6);
            for pair in paths.windows(2) {
                prop_assert!(pair[0].transfers() <= pair[1].transfers());
            }
            for candidate in &paths {
                check_candidate(&graph, candidate)?;
            }
        }

        /// Time-first output is ordered by time and internally consistent
        #[test]
        fn time_first_invariants(links in links()) {
            let graph = build(&links);
            let paths = find_time_optimal_paths(&graph, A, E, 6, 6).unwrap();

            prop_assert!(paths.len() <= 6);
            for pair in paths.windows(2) {
                prop_assert!(pair[0].time() <= pair[1].time());
            }
            for candidate in &paths {
                check_candidate(&graph, candidate)?;
            }
        }

        /// Both variants agree on whether any route exists
        #[test]
        fn variants_agree_on_reachability(links in links()) {
            let graph = build(&links);
            let by_time = find_time_optimal_paths(&graph, A, E, 6, 6).unwrap();
            let by_transfers = find_transfer_optimal_paths(&graph, A, E, 6, 6).unwrap();
            prop_assert_eq!(by_time.is_empty(), by_transfers.is_empty());
        }
    }
}
