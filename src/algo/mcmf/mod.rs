#[cfg(feature = "lemon-cpp")]
pub mod network_simplex;

pub mod successive_shortest_path;

use core::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::graph::{NodeId, ResidualGraph};

/// Amount of flow moved from source to sink and what it cost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowReport<Int> {
    pub flow: Int,
    pub cost: Int,
}

/// The minimum cost max flow algorithm.
pub trait MinCostFlow {
    type Int;
    type Error: Debug;

    /// Send as much flow as possible from `source` to `sink` at minimum cost and return the
    /// amount of flow along with its cost.
    fn min_cost_max_flow(
        &mut self,
        graph: &mut ResidualGraph<Self::Int>,
        source: NodeId,
        sink: NodeId,
    ) -> Result<FlowReport<Self::Int>, Self::Error>;
}
