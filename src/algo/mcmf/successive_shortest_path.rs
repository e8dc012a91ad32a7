use core::cmp::min;
use core::marker::PhantomData;

use alloc::vec::Vec;

use crate::algo::dijkstra::ShortestPaths;
use crate::algo::mcmf::{FlowReport, MinCostFlow};
use crate::algo::potential::initial_distances;
use crate::config::Config;
use crate::error::Error;
use crate::graph::{NodeId, ResidualGraph};
use crate::int::Int;

/// Successive shortest augmenting paths with Johnson potentials.
///
/// One query goes through these phases:
///
/// 1. *Init*: shortest distances from the source by repeated relaxation (negative costs allowed)
///    become the initial potentials. An unreachable sink ends the query right away.
/// 2. *Augment*: Dijkstra over residual arcs weighted by reduced cost. An unreachable sink ends
///    the query with whatever flow has been pushed so far.
/// 3. *Push*: the bottleneck of the path (capped by the flow still missing) is pushed along it and
///    charged at the arcs' original costs. The query ends once the requested flow is met,
///    otherwise it goes back to *Augment*.
///
/// The graph is mutated in place; flows left on it after a query describe the solution.
#[derive(Clone, Debug, Default)]
pub struct SuccessiveShortestPath<I> {
    config: Config,
    _phantom: PhantomData<I>,
}

impl<I: Int> SuccessiveShortestPath<I> {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            _phantom: Default::default(),
        }
    }

    /// Minimum cost of moving exactly `k` units from `source` to `sink`.
    ///
    /// Returns [`Error::Infeasible`] if the network cannot carry `k` units; the flow pushed before
    /// that was detected stays on the graph.
    pub fn min_cost_flow(
        &mut self,
        graph: &mut ResidualGraph<I>,
        source: NodeId,
        sink: NodeId,
        k: I,
    ) -> Result<I, Error> {
        let report = self.augment(graph, source, sink, k)?;
        if report.flow < k {
            log::debug!("only {} of {k} units reach the sink", report.flow);
            Err(Error::Infeasible)
        } else {
            Ok(report.cost)
        }
    }

    fn augment(
        &self,
        graph: &mut ResidualGraph<I>,
        source: NodeId,
        sink: NodeId,
        limit: I,
    ) -> Result<FlowReport<I>, Error> {
        let n = graph.node_count();
        if let Some(&node) = [source, sink].iter().find(|&&node| node >= n) {
            return Err(Error::InvalidNode(node));
        }

        let mut report = FlowReport::<I>::default();
        if limit <= I::zero() {
            return Ok(report);
        }

        log::debug!(
            "min cost flow {source} -> {sink}: {n} nodes, {} arcs, limit {limit}",
            graph.arc_count()
        );

        let rounds = self.config.relaxation_rounds.unwrap_or(n);
        let dist = initial_distances(graph, source, rounds);
        if dist[sink].is_none() {
            log::debug!("sink {sink} is unreachable from source {source}");
            return Ok(report);
        }
        let mut potential: Vec<I> = dist.into_iter().map(Option::unwrap_or_default).collect();

        let mut paths = ShortestPaths::new(n);
        while report.flow < limit {
            paths.search(graph, source, &potential);
            let Some(reduced) = paths.distance(sink) else {
                break;
            };
            paths.update_potentials(&mut potential);

            let path = paths.path(source, sink);
            let pushed = path
                .iter()
                .map(|&(u, index)| graph.residual_capacity(u, index))
                .fold(limit - report.flow, min);

            log::trace!(
                "pushing {pushed} units along {} arcs (reduced distance {reduced})",
                path.len()
            );

            // an overflow must not leave a partially pushed path behind
            let mut cost = report.cost;
            for &(u, index) in &path {
                let e = &graph.edges(u)[index];
                if self.config.trace_paths {
                    log::trace!("{} --> {} (cost {})", u, e.to(), e.cost());
                }
                cost = pushed
                    .checked_mul(&e.cost())
                    .and_then(|c| cost.checked_add(&c))
                    .ok_or(Error::ArithmeticOverflow)?;
            }

            for &(u, index) in &path {
                graph.push(u, index, pushed);
            }
            report.cost = cost;
            report.flow += pushed;
        }

        log::debug!("pushed {} units at cost {}", report.flow, report.cost);
        Ok(report)
    }
}

impl<I: Int> MinCostFlow for SuccessiveShortestPath<I> {
    type Int = I;
    type Error = Error;

    fn min_cost_max_flow(
        &mut self,
        graph: &mut ResidualGraph<I>,
        source: NodeId,
        sink: NodeId,
    ) -> Result<FlowReport<I>, Error> {
        // the empty path from a node to itself would otherwise carry unbounded flow
        let limit = if source == sink {
            I::zero()
        } else {
            I::max_value()
        };
        self.augment(graph, source, sink, limit)
    }
}
