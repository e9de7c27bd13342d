// lib/src/engine/shortest_path.rs

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;

use log::{debug, trace};
use models::{ensure_in_range, GraphResult, NodeId, WeightedEdge};
use ordered_float::NotNan;
use rayon::prelude::*;

use crate::engine::graph::WeightedGraph;
use crate::engine::path::Path;

/// One hop of a partial path. Records extending the same prefix point at the
/// same link, so pushing a record never copies its path.
struct TrailLink<E> {
    edge: Arc<E>,
    prev: Option<usize>,
}

/// A partial path waiting in the queue: the frontier node, the cost to reach
/// it, and the last link of the path that got there.
struct Record {
    cost: NotNan<f64>,
    // push order; equal costs pop first-in first-out
    seq: usize,
    node: NodeId,
    trail: Option<usize>,
}

impl Ord for Record {
    // BinaryHeap is a max-heap; invert so the cheapest, oldest record is on top.
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Record {}

impl<E: WeightedEdge> WeightedGraph<E> {
    /// Finds a cheapest route from `from` to `to`.
    ///
    /// Returns `Ok(None)` when `to` is unreachable and an empty path when
    /// `from == to`. Among routes of equal cost, the one whose last record was
    /// queued first wins, so repeated queries return the same edges.
    ///
    /// Stale records are left in the queue and skipped when popped; the first
    /// time `to` is popped its cost is final because all weights are
    /// non-negative.
    ///
    /// # Errors
    /// Returns [`models::GraphError::NodeOutOfRange`] if either endpoint does
    /// not address a node.
    pub fn shortest_path(&self, from: NodeId, to: NodeId) -> GraphResult<Option<Path<E>>> {
        let node_count = self.node_count();
        ensure_in_range(from, node_count)?;
        ensure_in_range(to, node_count)?;
        debug!("Searching shortest path {} -> {}", from, to);

        let mut links: Vec<TrailLink<E>> = Vec::new();
        let mut visited = vec![false; node_count];
        let mut queue = BinaryHeap::new();
        let mut seq = 0;
        queue.push(Record { cost: NotNan::new(0.0)?, seq, node: from, trail: None });

        while let Some(record) = queue.pop() {
            if visited[record.node] {
                trace!("Discarding stale record for node {} at cost {}", record.node, record.cost);
                continue;
            }
            visited[record.node] = true;

            if record.node == to {
                let edges = unwind(&links, record.trail);
                debug!(
                    "Found path {} -> {} with {} edges, cost {}",
                    from,
                    to,
                    edges.len(),
                    record.cost
                );
                return Ok(Some(Path::new(from, edges, record.cost.into_inner())));
            }

            for edge in self.adjacency(record.node) {
                let Some(next) = edge.other_endpoint(record.node) else {
                    continue;
                };
                if visited[next] {
                    continue;
                }
                let cost = NotNan::new(record.cost.into_inner() + edge.weight())?;
                links.push(TrailLink { edge: Arc::clone(edge), prev: record.trail });
                seq += 1;
                trace!("Queueing node {} at cost {}", next, cost);
                queue.push(Record { cost, seq, node: next, trail: Some(links.len() - 1) });
            }
        }

        debug!("No path {} -> {}", from, to);
        Ok(None)
    }

    /// Answers many independent shortest path queries, in input order.
    ///
    /// Batches of at least `parallel_batch_threshold` pairs are spread over the
    /// rayon thread pool; the graph is only read.
    pub fn shortest_paths(&self, pairs: &[(NodeId, NodeId)]) -> Vec<GraphResult<Option<Path<E>>>>
    where
        E: Send + Sync,
    {
        if pairs.len() < self.config.parallel_batch_threshold {
            pairs.iter().map(|&(from, to)| self.shortest_path(from, to)).collect()
        } else {
            debug!("Running {} shortest path queries in parallel", pairs.len());
            pairs.par_iter().map(|&(from, to)| self.shortest_path(from, to)).collect()
        }
    }
}

/// Follows the links back from `last` and returns the edges start-first.
fn unwind<E>(links: &[TrailLink<E>], last: Option<usize>) -> Vec<Arc<E>> {
    let mut edges = Vec::new();
    let mut cursor = last;
    while let Some(index) = cursor {
        let link = &links[index];
        edges.push(Arc::clone(&link.edge));
        cursor = link.prev;
    }
    edges.reverse();
    edges
}
