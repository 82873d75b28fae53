//! Overlap structure analysis: separation options and the conflict graph.
//!
//! Two layers, both pure:
//! - [`separation`] answers "how far would the owner of this overlap have to
//!   move, in each cardinal direction, to clear it" — four costed options.
//! - [`graph`] groups overlap defects into connected components and decorates
//!   each with per-edge separation options and per-node free-space envelopes,
//!   so an external planner can reason about entangled elements jointly
//!   instead of chasing pairwise fixes.
//!
//! Nothing here chooses a fix. The graph is context, not a plan.

pub mod graph;
pub mod separation;

pub use graph::build_conflict_graph;
pub use separation::separation_options;
