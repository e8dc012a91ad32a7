use alloc::collections::BinaryHeap;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Reverse;
use core::iter::successors;

use crate::graph::{NodeId, ResidualGraph};
use crate::int::Int;

/// Reusable buffers for the reduced-cost shortest path search run once per augmentation.
#[derive(Clone, Debug)]
pub(crate) struct ShortestPaths<I> {
    dist: Vec<Option<I>>,
    // (tail, index into the tail's adjacency list) of the arc that reached each node
    parent: Vec<Option<(NodeId, usize)>>,
    heap: BinaryHeap<Reverse<(I, NodeId)>>,
}

impl<I: Int> ShortestPaths<I> {
    pub(crate) fn new(node_count: usize) -> Self {
        Self {
            dist: vec![None; node_count],
            parent: vec![None; node_count],
            heap: BinaryHeap::new(),
        }
    }

    /// Dijkstra from `source` over arcs with residual capacity, weighing each arc `u -> v` by its
    /// reduced cost `cost + potential[u] - potential[v]`.
    ///
    /// Reduced costs are non-negative as long as `potential` holds the distances of the previous
    /// search (or the initial relaxation pass).
    pub(crate) fn search(&mut self, graph: &ResidualGraph<I>, source: NodeId, potential: &[I]) {
        self.dist.fill(None);
        self.parent.fill(None);
        self.heap.clear();

        self.dist[source] = Some(I::zero());
        self.heap.push(Reverse((I::zero(), source)));

        while let Some(Reverse((d, u))) = self.heap.pop() {
            if self.dist[u].map_or(false, |du| d > du) {
                // stale entry
                continue;
            }

            for (index, e) in graph.edges(u).iter().enumerate() {
                if e.residual() <= I::zero() {
                    continue;
                }
                let v = e.to();
                let candidate = d + e.cost() + potential[u] - potential[v];
                if self.dist[v].map_or(true, |dv| candidate < dv) {
                    self.dist[v] = Some(candidate);
                    self.parent[v] = Some((u, index));
                    self.heap.push(Reverse((candidate, v)));
                }
            }
        }
    }

    pub(crate) fn distance(&self, node: NodeId) -> Option<I> {
        self.dist[node]
    }

    /// Folds the distances of the last search into `potential`. Unreached nodes keep theirs.
    pub(crate) fn update_potentials(&self, potential: &mut [I]) {
        potential
            .iter_mut()
            .zip(&self.dist)
            .filter_map(|(p, d)| d.map(|d| (p, d)))
            .for_each(|(p, d)| *p += d);
    }

    /// Arcs of the shortest path to `sink`, walked backwards from `sink` to `source`.
    pub(crate) fn path(&self, source: NodeId, sink: NodeId) -> Vec<(NodeId, usize)> {
        successors(self.parent[sink], |&(u, _)| {
            if u == source {
                None
            } else {
                self.parent[u]
            }
        })
        .take(self.parent.len())
        .collect()
    }
}
