//! Station name lookup and fuzzy matching of user-typed names.

use std::collections::HashMap;

use crate::domain::Vertex;

/// Minimum similarity for a name that neither contains nor is contained in
/// the query.
const MIN_SIMILARITY: f64 = 0.5;

/// Bidirectional station name <-> vertex mapping.
///
/// Built once when the graph is built; vertex `n` is the `n`th name.
#[derive(Debug, Clone, Default)]
pub struct StationIndex {
    names: Vec<String>,
    by_name: HashMap<String, Vertex>,
}

impl StationIndex {
    /// Build the index, assigning vertices in iteration order.
    ///
    /// A repeated name keeps its first vertex.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = Self::default();
        for name in names {
            let name = name.into();
            if index.by_name.contains_key(&name) {
                continue;
            }
            index.by_name.insert(name.clone(), Vertex(index.names.len()));
            index.names.push(name);
        }
        index
    }

    /// Vertex of a station, by exact name.
    pub fn vertex(&self, name: &str) -> Option<Vertex> {
        self.by_name.get(name).copied()
    }

    /// Name of the station at `vertex`.
    pub fn name(&self, vertex: Vertex) -> Option<&str> {
        self.names.get(vertex.0).map(String::as_str)
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if there are no stations.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All station names in vertex order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Resolve a typed station name: exact match first, then best fuzzy match.
    pub fn resolve(&self, query: &str) -> Option<Vertex> {
        self.vertex(query.trim())
            .or_else(|| best_match(query, self.names()).and_then(|name| self.vertex(name)))
    }

    /// Stations matching `query`, best first.
    pub fn search(&self, query: &str, limit: usize) -> Vec<(Vertex, &str)> {
        rank_matches(query, self.names())
            .into_iter()
            .take(limit)
            .filter_map(|name| self.vertex(name).map(|v| (v, name)))
            .collect()
    }
}

/// Lowercase and collapse whitespace.
fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Score `candidate` against an already-normalized query. Higher is better.
fn score(query: &str, candidate: &str) -> Option<f64> {
    let candidate = normalize(candidate);
    let similarity = strsim::normalized_levenshtein(query, &candidate);

    if candidate == query {
        Some(3.0)
    } else if candidate.starts_with(query) {
        Some(2.0 + similarity)
    } else if candidate.contains(query) || query.contains(candidate.as_str()) {
        Some(1.0 + similarity)
    } else if similarity >= MIN_SIMILARITY {
        Some(similarity)
    } else {
        None
    }
}

/// Every candidate matching `query`, best first.
///
/// Ties go to the shorter name, then to alphabetical order.
pub fn rank_matches<'a>(query: &str, candidates: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let query = normalize(query);
    if query.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &str)> = candidates
        .into_iter()
        .filter_map(|c| score(&query, c).map(|s| (s, c)))
        .collect();

    scored.sort_by(|(sa, a), (sb, b)| {
        sb.total_cmp(sa)
            .then_with(|| a.chars().count().cmp(&b.chars().count()))
            .then_with(|| a.cmp(b))
    });

    scored.into_iter().map(|(_, c)| c).collect()
}

/// The single best match for `query`, if any candidate is close enough.
pub fn best_match<'a>(query: &str, candidates: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    rank_matches(query, candidates).into_iter().next()
}
