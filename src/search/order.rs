//! Visitation-time ordering of vertices.
//!
//! A [`FinishTimeOrder`] turns the finish-time table of a prior search into
//! a strict total order over vertices, ascending or descending. Its ordered
//! vertex sequence is what drives the outer loop of a second search pass,
//! which is exactly how Kosaraju's algorithm consumes it.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::graph::VertexId;

/// Direction of a visitation-time ordering.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TimeDirection {
    /// Earliest finish time first
    Ascending,
    /// Latest finish time first
    Descending,
}

/// A strict total order over vertices by finish time from a prior search.
///
/// Vertices absent from the finish-time table (never visited, for instance
/// because a chooser excluded them) are not part of the ordered sequence.
/// Within one search run finish times are distinct, so ties cannot occur
/// between two recorded vertices; the comparator still breaks hypothetical
/// ties by vertex order to stay a strict total order over arbitrary input.
///
/// # Examples
///
/// ```rust,ignore
/// use sccgraph::{DepthFirstSearch, DirectedGraph, FinishTimeOrder, TimeDirection};
///
/// let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
/// let a = graph.add_vertex(());
/// let b = graph.add_vertex(());
/// graph.add_edge(a, b, ())?;
///
/// let outcome = DepthFirstSearch::new().search(&graph);
/// let order = FinishTimeOrder::new(outcome.finish_times(), TimeDirection::Descending);
///
/// // A finishes after B, so A leads the descending order.
/// let ordered: Vec<_> = order.vertices().collect();
/// assert_eq!(ordered, vec![a, b]);
/// # Ok::<(), sccgraph::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct FinishTimeOrder {
    direction: TimeDirection,
    times: HashMap<VertexId, u64>,
    ordered: Vec<VertexId>,
}

impl FinishTimeOrder {
    /// Builds the order from `(vertex, finish time)` pairs.
    ///
    /// # Arguments
    ///
    /// * `finish_times` - The table recorded by a prior search
    /// * `direction` - Whether earlier or later finishers come first
    #[must_use]
    pub fn new(
        finish_times: impl IntoIterator<Item = (VertexId, u64)>,
        direction: TimeDirection,
    ) -> Self {
        let times: HashMap<VertexId, u64> = finish_times.into_iter().collect();
        let mut ordered: Vec<VertexId> = times.keys().copied().collect();
        ordered.sort_by(|&a, &b| order_by_time(&times, direction, a, b));

        FinishTimeOrder {
            direction,
            times,
            ordered,
        }
    }

    /// Returns the direction of this order.
    #[must_use]
    pub fn direction(&self) -> TimeDirection {
        self.direction
    }

    /// Returns the ordered vertex sequence.
    ///
    /// Only vertices present in the finish-time table appear. Calling this
    /// again restarts from the beginning.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.ordered.iter().copied()
    }

    /// Returns the number of vertices in the order.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Returns `true` if no vertex was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Compares two vertices under this order.
    ///
    /// Vertices missing from the table sort after all recorded vertices;
    /// among themselves, and on (impossible within one run) equal times,
    /// the vertex total order decides.
    #[must_use]
    pub fn compare(&self, a: VertexId, b: VertexId) -> Ordering {
        order_by_time(&self.times, self.direction, a, b)
    }
}

fn order_by_time(
    times: &HashMap<VertexId, u64>,
    direction: TimeDirection,
    a: VertexId,
    b: VertexId,
) -> Ordering {
    match (times.get(&a), times.get(&b)) {
        (Some(ta), Some(tb)) => {
            let by_time = match direction {
                TimeDirection::Ascending => ta.cmp(tb),
                TimeDirection::Descending => tb.cmp(ta),
            };
            by_time.then_with(|| a.cmp(&b))
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(&b),
    }
}
