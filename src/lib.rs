//! Minimum-cost flow over a residual network.
//!
//! Build a [`ResidualGraph`] with [`ResidualGraph::insert_arc`], then ask for the cheapest way to
//! route `k` units from a source to a sink with [`min_cost_flow`], or for the cheapest maximum
//! flow with [`min_cost_max_flow`]. Arc costs may be negative as long as the initial network has
//! no negative cycle reachable from the source.
//!
//! ```
//! use mcflow::{min_cost_flow, Error, ResidualGraph};
//!
//! let mut g = ResidualGraph::<i64>::new(3);
//! g.insert_arc(0, 1, 2, 1);
//! g.insert_arc(1, 2, 1, 4);
//! g.insert_arc(1, 2, 1, -2);
//!
//! assert_eq!(min_cost_flow(&mut g, 0, 2, 2), Ok(4));
//!
//! let mut g = ResidualGraph::<i64>::new(2);
//! g.insert_arc(0, 1, 1, 1);
//! assert_eq!(min_cost_flow(&mut g, 0, 1, 2), Err(Error::Infeasible));
//! ```
#![no_std]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    rust_2018_idioms
)]
#![warn(unused_qualifications)]
#![forbid(unsafe_code)]

extern crate alloc;

mod algo;
mod bias;
mod config;
mod error;
mod graph;
mod int;

pub use crate::algo::mcmf::successive_shortest_path::SuccessiveShortestPath;
pub use crate::algo::mcmf::{FlowReport, MinCostFlow};
pub use crate::bias::PriorityBias;
pub use crate::config::Config;
pub use crate::error::Error;
pub use crate::graph::{ArcId, Edge, EdgeWeight, NodeId, ResidualGraph};
pub use crate::int::Int;

#[cfg(feature = "lemon-cpp")]
pub use crate::algo::mcmf::network_simplex::NetworkSimplex;

/// Minimum cost of routing exactly `k` units from `source` to `sink`, using the default [`Config`].
///
/// The graph is left holding the optimal flow. If fewer than `k` units fit, [`Error::Infeasible`]
/// is returned and the graph holds the flow pushed up to that point.
pub fn min_cost_flow<I: Int>(
    graph: &mut ResidualGraph<I>,
    source: NodeId,
    sink: NodeId,
    k: I,
) -> Result<I, Error> {
    SuccessiveShortestPath::default().min_cost_flow(graph, source, sink, k)
}

/// Maximum flow from `source` to `sink` together with its minimum cost, using the default
/// [`Config`].
pub fn min_cost_max_flow<I: Int>(
    graph: &mut ResidualGraph<I>,
    source: NodeId,
    sink: NodeId,
) -> Result<FlowReport<I>, Error> {
    SuccessiveShortestPath::default().min_cost_max_flow(graph, source, sink)
}
