use displaydoc::Display;

use crate::graph::NodeId;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Error {
    /// Requested flow exceeds the maximum flow between source and sink
    Infeasible,
    /// Arithmetic overflow while accumulating flow cost
    ArithmeticOverflow,
    /// Node {0} is not part of the graph
    InvalidNode(NodeId),
}
