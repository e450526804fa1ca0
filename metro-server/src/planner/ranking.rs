//! Ranking policies for the k-path search.
//!
//! Each search variant is a comparator type. The frontier orders labels with
//! [`Ranking::compare`]; the final candidate list is sorted with
//! [`Ranking::compare_candidates`], which looks at the primary field only.

use std::cmp::Ordering;
use std::marker::PhantomData;

use crate::domain::Vertex;

use super::search::PathCandidate;

/// A partial path on the search frontier.
#[derive(Debug, Clone)]
pub(crate) struct Label {
    /// Accumulated travel time, including transfer penalties (seconds).
    pub time: f64,

    /// Number of line changes so far.
    pub transfers: usize,

    /// Accumulated distance (meters).
    pub distance: f64,

    /// Vertex this label has reached.
    pub vertex: Vertex,

    /// Vertices visited before `vertex`, in order.
    pub prefix: Vec<Vertex>,
}

impl Label {
    /// The label a search starts from.
    pub fn origin(vertex: Vertex) -> Self {
        Self {
            time: 0.0,
            transfers: 0,
            distance: 0.0,
            vertex,
            prefix: Vec::new(),
        }
    }

    /// Turn a label that reached the destination into a candidate.
    pub fn into_candidate(self) -> PathCandidate {
        let mut path = self.prefix;
        path.push(self.vertex);
        PathCandidate::new(path, self.time, self.distance, self.transfers)
    }

    /// Ordering on the fields that are not ranking keys.
    fn compare_rest(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
            .then_with(|| self.prefix.cmp(&other.prefix))
    }
}

/// Ranking policy of one search variant.
pub(crate) trait Ranking {
    /// Value remembered per `(vertex, prefix length)` for pruning.
    type Score: PartialOrd + Copy;

    /// Short name for logs.
    const NAME: &'static str;

    /// The pruning score of a label. Lower is better.
    fn score(label: &Label) -> Self::Score;

    /// Total frontier order. `Less` means `a` is expanded first.
    fn compare(a: &Label, b: &Label) -> Ordering;

    /// Order of the returned candidates, by the primary field only.
    fn compare_candidates(a: &PathCandidate, b: &PathCandidate) -> Ordering;
}

/// Fewest transfers first, then least time.
pub(crate) struct TransferFirst;

impl Ranking for TransferFirst {
    type Score = usize;

    const NAME: &'static str = "transfer-first";

    fn score(label: &Label) -> usize {
        label.transfers
    }

    fn compare(a: &Label, b: &Label) -> Ordering {
        a.transfers
            .cmp(&b.transfers)
            .then_with(|| a.time.total_cmp(&b.time))
            .then_with(|| a.compare_rest(b))
    }

    fn compare_candidates(a: &PathCandidate, b: &PathCandidate) -> Ordering {
        a.transfers().cmp(&b.transfers())
    }
}

/// Least time first, then fewest transfers.
pub(crate) struct TimeFirst;

impl Ranking for TimeFirst {
    type Score = f64;

    const NAME: &'static str = "time-first";

    fn score(label: &Label) -> f64 {
        label.time
    }

    fn compare(a: &Label, b: &Label) -> Ordering {
        a.time
            .total_cmp(&b.time)
            .then_with(|| a.transfers.cmp(&b.transfers))
            .then_with(|| a.compare_rest(b))
    }

    fn compare_candidates(a: &PathCandidate, b: &PathCandidate) -> Ordering {
        a.time().total_cmp(&b.time())
    }
}

/// Heap entry ordered by `R`, reversed so `BinaryHeap` pops the best label.
pub(crate) struct Queued<R> {
    pub label: Label,
    ranking: PhantomData<R>,
}

impl<R: Ranking> Queued<R> {
    pub fn new(label: Label) -> Self {
        Self {
            label,
            ranking: PhantomData,
        }
    }
}

impl<R: Ranking> Ord for Queued<R> {
    fn cmp(&self, other: &Self) -> Ordering {
        R::compare(&other.label, &self.label)
    }
}

impl<R: Ranking> PartialOrd for Queued<R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: Ranking> PartialEq for Queued<R> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<R: Ranking> Eq for Queued<R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn label(time: f64, transfers: usize, distance: f64, vertex: usize) -> Label {
        Label {
            time,
            transfers,
            distance,
            vertex: Vertex(vertex),
            prefix: Vec::new(),
        }
    }

    #[test]
    fn transfer_first_prefers_fewer_transfers() {
        let slow_direct = label(900.0, 0, 5000.0, 1);
        let fast_change = label(300.0, 1, 2000.0, 1);
        assert_eq!(
            TransferFirst::compare(&slow_direct, &fast_change),
            Ordering::Less
        );
    }

    #[test]
    fn time_first_prefers_less_time() {
        let slow_direct = label(900.0, 0, 5000.0, 1);
        let fast_change = label(300.0, 1, 2000.0, 1);
        assert_eq!(TimeFirst::compare(&fast_change, &slow_direct), Ordering::Less);
    }

    #[test]
    fn secondary_key_breaks_ties() {
        let a = label(300.0, 1, 9000.0, 1);
        let b = label(240.0, 1, 1000.0, 1);
        assert_eq!(TransferFirst::compare(&b, &a), Ordering::Less);

        let c = label(300.0, 2, 1000.0, 1);
        let d = label(300.0, 1, 9000.0, 1);
        assert_eq!(TimeFirst::compare(&d, &c), Ordering::Less);
    }

    #[test]
    fn remaining_fields_break_full_ties() {
        let near = label(60.0, 0, 500.0, 7);
        let far = label(60.0, 0, 800.0, 2);
        assert_eq!(TimeFirst::compare(&near, &far), Ordering::Less);

        let low = label(60.0, 0, 500.0, 2);
        let high = label(60.0, 0, 500.0, 7);
        assert_eq!(TransferFirst::compare(&low, &high), Ordering::Less);
    }

    #[test]
    fn heap_pops_best_first() {
        let mut heap = BinaryHeap::new();
        heap.push(Queued::<TimeFirst>::new(label(500.0, 0, 0.0, 0)));
        heap.push(Queued::<TimeFirst>::new(label(100.0, 3, 0.0, 1)));
        heap.push(Queued::<TimeFirst>::new(label(300.0, 1, 0.0, 2)));

        let order: Vec<_> = std::iter::from_fn(|| heap.pop())
            .map(|q| q.label.vertex)
            .collect();
        assert_eq!(order, vec![Vertex(1), Vertex(2), Vertex(0)]);
    }

    #[test]
    fn candidate_order_uses_primary_field_only() {
        let a = PathCandidate::new(vec![Vertex(0), Vertex(1)], 600.0, 1.0, 0);
        let b = PathCandidate::new(vec![Vertex(0), Vertex(1)], 100.0, 1.0, 0);
        assert_eq!(TransferFirst::compare_candidates(&a, &b), Ordering::Equal);
        assert_eq!(TimeFirst::compare_candidates(&b, &a), Ordering::Less);
    }

    #[test]
    fn into_candidate_appends_vertex() {
        let mut l = label(120.0, 1, 2000.0, 2);
        l.prefix = vec![Vertex(0), Vertex(1)];
        let candidate = l.into_candidate();
        assert_eq!(candidate.path(), &[Vertex(0), Vertex(1), Vertex(2)]);
        assert_eq!(candidate.time(), 120.0);
        assert_eq!(candidate.distance(), 2000.0);
        assert_eq!(candidate.transfers(), 1);
    }
}
