use alloc::vec;
use alloc::vec::Vec;

use crate::graph::{NodeId, ResidualGraph};
use crate::int::Int;

/// Shortest distances from `source` over arcs with residual capacity, tolerating negative costs.
///
/// Runs rounds of relaxation over every residual arc until a round changes nothing, or until
/// `max_rounds` rounds have run. Unreached nodes are `None`. The residual graph must not contain
/// a negative cycle reachable from `source`; if one exists the result is meaningless and only a
/// warning is logged.
pub(crate) fn initial_distances<I: Int>(
    graph: &ResidualGraph<I>,
    source: NodeId,
    max_rounds: usize,
) -> Vec<Option<I>> {
    let mut dist = vec![None; graph.node_count()];
    dist[source] = Some(I::zero());

    for round in 0..max_rounds {
        let mut changed = false;
        for u in 0..graph.node_count() {
            let Some(du) = dist[u] else {
                continue;
            };
            for e in graph.edges(u).iter().filter(|e| e.residual() > I::zero()) {
                let candidate = du + e.cost();
                if dist[e.to()].map_or(true, |dv| candidate < dv) {
                    dist[e.to()] = Some(candidate);
                    changed = true;
                }
            }
        }

        if !changed {
            log::trace!("initial potentials settled after {} rounds", round + 1);
            return dist;
        }
    }

    log::warn!(
        "relaxation did not settle within {max_rounds} rounds, \
         the residual graph may contain a negative cycle"
    );
    dist
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_costs_on_a_dag() {
        let mut g = ResidualGraph::<i64>::new(4);
        g.insert_arc(0, 1, 1, 4);
        g.insert_arc(0, 2, 1, 1);
        g.insert_arc(1, 3, 1, -5);
        g.insert_arc(2, 3, 1, 0);

        let dist = initial_distances(&g, 0, g.node_count());
        assert_eq!(dist, vec![Some(0), Some(4), Some(1), Some(-1)]);
    }

    #[test]
    fn saturated_and_reverse_arcs_are_skipped() {
        let mut g = ResidualGraph::<i64>::new(3);
        g.insert_arc(0, 1, 0, 1);
        g.insert_arc(2, 0, 1, 1);

        // the reverse record 0 -> 2 has no residual capacity before any flow is pushed
        let dist = initial_distances(&g, 0, g.node_count());
        assert_eq!(dist, vec![Some(0), None, None]);
    }

    #[test]
    fn round_limit_is_respected() {
        let mut g = ResidualGraph::<i32>::new(4);
        g.insert_arc(0, 1, 1, 1);
        g.insert_arc(1, 2, 1, 1);
        g.insert_arc(2, 3, 1, 1);

        // adjacency order lets a single sweep reach the end of the chain
        let dist = initial_distances(&g, 0, 1);
        assert_eq!(dist[3], Some(3));

        let dist = initial_distances(&g, 0, 0);
        assert_eq!(dist, vec![Some(0), None, None, None]);
    }
}
