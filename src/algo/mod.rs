pub(crate) mod dijkstra;
pub mod mcmf;
pub(crate) mod potential;
