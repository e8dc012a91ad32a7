use serde::{Deserialize, Serialize};

/// Knobs of the successive shortest path solver.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Upper bound on relaxation rounds when computing the initial potentials. Defaults to the
    /// node count, which is enough for any graph without negative cycles.
    ///
    /// A lower cap only stays exact when the distances settle within it (e.g. arcs inserted in
    /// topological order). Otherwise the potentials are left unsettled, reduced costs can go
    /// negative and the reported cost may not be minimal; a warning is logged in that case.
    pub relaxation_rounds: Option<usize>,
    /// Log every arc of every augmenting path at `trace` level.
    pub trace_paths: bool,
}
