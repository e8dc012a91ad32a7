use core::marker::PhantomData;

use mcmf::{Capacity, Cost, GraphBuilder, Vertex};
use num_traits::NumCast;

use crate::algo::mcmf::{FlowReport, MinCostFlow};
use crate::error::Error;
use crate::graph::{NodeId, ResidualGraph};
use crate::int::Int;

/// Min-cost max-flow through LEMON's network simplex (via the `mcmf` crate).
///
/// Only reads the graph, the flows on it are left untouched. Capacities and costs have to fit in
/// an `i32`.
#[derive(Clone, Debug, Default)]
pub struct NetworkSimplex<I>(PhantomData<I>);

fn to_i32<I: Int>(value: I) -> Result<i32, Error> {
    value.to_i32().ok_or(Error::ArithmeticOverflow)
}

impl<I: Int> MinCostFlow for NetworkSimplex<I> {
    type Int = I;
    type Error = Error;

    fn min_cost_max_flow(
        &mut self,
        graph: &mut ResidualGraph<I>,
        source: NodeId,
        sink: NodeId,
    ) -> Result<FlowReport<I>, Error> {
        let vertex = |node: NodeId| -> Vertex<NodeId> {
            if node == source {
                Vertex::Source
            } else if node == sink {
                Vertex::Sink
            } else {
                Vertex::Node(node)
            }
        };

        let mut g = GraphBuilder::new();
        for (id, e) in graph.arcs().filter(|(_, e)| e.capacity() > I::zero()) {
            g.add_edge(
                vertex(id.from),
                vertex(e.to()),
                Capacity(to_i32(e.capacity())?),
                Cost(to_i32(e.cost())?),
            );
        }

        let (cost, paths) = g.mcmf();
        let flow = paths
            .iter()
            .filter_map(|path| path.flows.first())
            .map(|f| <I as NumCast>::from(f.amount).ok_or(Error::ArithmeticOverflow))
            .sum::<Result<I, Error>>()?;
        let cost = <I as NumCast>::from(cost).ok_or(Error::ArithmeticOverflow)?;

        log::debug!("network simplex moved {flow} units at cost {cost}");
        Ok(FlowReport { flow, cost })
    }
}
