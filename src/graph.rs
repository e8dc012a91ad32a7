//! The residual network the solver operates on.
//!
//! Every arc inserted by the caller is stored twice: once as a forward record in the adjacency
//! list of its tail, and once as a reverse record (zero capacity, negated cost) in the adjacency
//! list of its head. Each record knows the index of its twin in the other list, so pushing flow
//! along an arc and cancelling it along the reverse arc are both O(1).

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use petgraph::visit::{EdgeRef, IntoEdgeReferences, NodeIndexable};
use serde::{Deserialize, Serialize};

use crate::int::Int;

/// Nodes are dense indices in `[0, node_count)`.
pub type NodeId = usize;

/// Edge weight accepted when building a residual graph out of a petgraph graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeWeight<Cost, Capacity> {
    pub cost: Cost,         // c
    pub capacity: Capacity, // µ
}

/// One record of an adjacency list, either a forward arc or the reverse twin of one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<I> {
    to: NodeId,
    capacity: I,
    flow: I,
    cost: I,
    rev: usize,
}

impl<I: Int> Edge<I> {
    fn new(to: NodeId, capacity: I, cost: I, rev: usize) -> Self {
        Self {
            to,
            capacity,
            flow: I::zero(),
            cost,
            rev,
        }
    }

    pub fn to(&self) -> NodeId {
        self.to
    }

    pub fn capacity(&self) -> I {
        self.capacity
    }

    pub fn flow(&self) -> I {
        self.flow
    }

    pub fn cost(&self) -> I {
        self.cost
    }

    /// Index of the twin record in the adjacency list of `self.to()`.
    pub fn rev(&self) -> usize {
        self.rev
    }

    /// Remaining capacity, i.e. how much more flow this record can carry.
    pub fn residual(&self) -> I {
        self.capacity - self.flow
    }
}

/// Handle to a forward arc: its position in the adjacency list of its tail.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ArcId {
    pub from: NodeId,
    pub index: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidualGraph<I> {
    adj: Vec<Vec<Edge<I>>>,
    // forward arcs in insertion order
    arcs: Vec<ArcId>,
}

impl<I: Int> ResidualGraph<I> {
    pub fn new(node_count: usize) -> Self {
        Self {
            adj: (0..node_count).map(|_| Vec::new()).collect(),
            arcs: Vec::new(),
        }
    }

    /// Builds a residual graph out of any petgraph graph whose edges carry an [`EdgeWeight`].
    /// Node ids are the graph's node indices.
    pub fn from_graph<G>(g: G) -> Self
    where
        G: IntoEdgeReferences<EdgeWeight = EdgeWeight<I, I>> + NodeIndexable,
    {
        let mut graph = Self::new(g.node_bound());
        for e in g.edge_references() {
            let EdgeWeight { cost, capacity } = *e.weight();
            graph.insert_arc(g.to_index(e.source()), g.to_index(e.target()), capacity, cost);
        }
        graph
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of forward arcs inserted so far.
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    pub fn add_node(&mut self) -> NodeId {
        self.adj.push(Vec::new());
        self.adj.len() - 1
    }

    /// Inserts the arc `from -> to` together with its reverse residual arc and returns a handle to
    /// the forward arc.
    ///
    /// Parallel arcs are kept apart. Panics if either endpoint is not a node of the graph.
    pub fn insert_arc(&mut self, from: NodeId, to: NodeId, capacity: I, cost: I) -> ArcId {
        debug_assert!(capacity >= I::zero(), "arc capacity must be non-negative");

        let index = self.adj[from].len();
        // a self loop puts both records in the same list
        let rev_index = if from == to {
            index + 1
        } else {
            self.adj[to].len()
        };
        self.adj[from].push(Edge::new(to, capacity, cost, rev_index));
        self.adj[to].push(Edge::new(from, I::zero(), -cost, index));

        let id = ArcId { from, index };
        self.arcs.push(id);
        id
    }

    /// All records (forward and reverse) leaving `node`.
    pub fn edges(&self, node: NodeId) -> &[Edge<I>] {
        &self.adj[node]
    }

    pub fn edge(&self, id: ArcId) -> &Edge<I> {
        &self.adj[id.from][id.index]
    }

    pub fn flow(&self, id: ArcId) -> I {
        self.edge(id).flow
    }

    pub fn residual_capacity(&self, from: NodeId, index: usize) -> I {
        self.adj[from][index].residual()
    }

    /// The forward arcs in insertion order.
    pub fn arcs(&self) -> impl Iterator<Item = (ArcId, &Edge<I>)> + '_ {
        self.arcs.iter().map(move |&id| (id, self.edge(id)))
    }

    /// Positive flow aggregated per `(from, to)` pair over parallel arcs.
    pub fn flow_map(&self) -> BTreeMap<(NodeId, NodeId), I> {
        self.arcs()
            .filter(|(_, e)| e.flow > I::zero())
            .fold(BTreeMap::new(), |mut acc, (id, e)| {
                *acc.entry((id.from, e.to)).or_default() += e.flow;
                acc
            })
    }

    /// Inflow minus outflow at `node`.
    ///
    /// Reverse records carry the negated flow of the arc they pair with, so summing the flow of
    /// every record in the adjacency list yields outflow minus inflow.
    pub fn excess(&self, node: NodeId) -> I {
        -self.adj[node].iter().map(|e| e.flow).sum::<I>()
    }

    /// Clears all flow so the same network can be queried again.
    pub fn reset_flows(&mut self) {
        self.adj
            .iter_mut()
            .flat_map(|edges| edges.iter_mut())
            .for_each(|e| e.flow = I::zero());
    }

    /// Pushes `amount` units along the record `index` of `from` and cancels them on its twin.
    pub(crate) fn push(&mut self, from: NodeId, index: usize, amount: I) {
        let (to, rev) = {
            let e = &self.adj[from][index];
            debug_assert!(amount <= e.residual());
            (e.to, e.rev)
        };
        self.adj[from][index].flow += amount;
        self.adj[to][rev].flow -= amount;
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use petgraph::graph::DiGraph;

    use super::*;

    #[test]
    fn insert_arc_creates_reverse_twin() {
        let mut g = ResidualGraph::<i64>::new(3);
        let a = g.insert_arc(0, 1, 4, 7);
        let b = g.insert_arc(1, 2, 2, -3);

        assert_eq!(a, ArcId { from: 0, index: 0 });
        assert_eq!(b, ArcId { from: 1, index: 1 });

        let fwd = g.edge(a);
        assert_eq!((fwd.to(), fwd.capacity(), fwd.cost()), (1, 4, 7));
        let rev = &g.edges(1)[fwd.rev()];
        assert_eq!((rev.to(), rev.capacity(), rev.cost(), rev.rev()), (0, 0, -7, 0));

        let rev = &g.edges(2)[g.edge(b).rev()];
        assert_eq!((rev.to(), rev.cost()), (1, 3));
        assert_eq!(g.arc_count(), 2);
    }

    #[test]
    fn push_keeps_twins_antisymmetric() {
        let mut g = ResidualGraph::<i32>::new(2);
        let a = g.insert_arc(0, 1, 5, 1);
        g.push(0, 0, 3);

        let rev = g.edge(a).rev();
        assert_eq!(g.flow(a), 3);
        assert_eq!(g.edges(1)[rev].flow(), -3);
        assert_eq!(g.residual_capacity(0, 0), 2);
        assert_eq!(g.residual_capacity(1, rev), 3);
        assert_eq!(g.excess(1), 3);
        assert_eq!(g.excess(0), -3);

        g.reset_flows();
        assert_eq!(g.flow(a), 0);
        assert_eq!(g.excess(1), 0);
    }

    #[test]
    fn self_loop_points_at_its_own_list() {
        let mut g = ResidualGraph::<i64>::new(1);
        let a = g.insert_arc(0, 0, 1, 2);
        let fwd = g.edge(a);
        assert_eq!(fwd.rev(), 1);
        assert_eq!(g.edges(0)[1].rev(), 0);

        g.push(0, 0, 1);
        assert_eq!(g.edges(0)[1].flow(), -1);
        assert_eq!(g.excess(0), 0);
    }

    #[test]
    fn parallel_arcs_are_aggregated_in_flow_map() {
        let mut g = ResidualGraph::<i64>::new(3);
        g.insert_arc(0, 1, 1, 0);
        g.insert_arc(0, 1, 1, 5);
        g.insert_arc(1, 2, 2, 0);
        g.push(0, 0, 1);
        g.push(0, 1, 1);
        g.push(1, 2, 2);

        let flows: Vec<_> = g.flow_map().into_iter().collect();
        assert_eq!(flows, vec![((0, 1), 2), ((1, 2), 2)]);
    }

    #[test]
    fn from_petgraph() {
        let mut pg = DiGraph::new();
        let s = pg.add_node(());
        let t = pg.add_node(());
        let u = pg.add_node(());
        pg.add_edge(s, u, EdgeWeight { cost: 2, capacity: 3 });
        pg.add_edge(u, t, EdgeWeight { cost: -1, capacity: 1 });

        let g = ResidualGraph::<i64>::from_graph(&pg);
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.arc_count(), 2);
        let (_, e) = g.arcs().nth(1).unwrap();
        assert_eq!((e.to(), e.capacity(), e.cost()), (t.index(), 1, -1));
    }

    #[test]
    fn add_node_extends_the_graph() {
        let mut g = ResidualGraph::<i32>::new(0);
        assert_eq!(g.add_node(), 0);
        assert_eq!(g.add_node(), 1);
        g.insert_arc(0, 1, 1, 1);
        assert_eq!(g.node_count(), 2);
    }
}
