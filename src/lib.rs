//! This crate is a research workbench for the dynamic edge-orientation problem on graphs of
//! bounded arboricity. Given a sequence of edge insertions and deletions on an undirected graph
//! whose arboricity stays below a bound α, it computes orientations of the evolving graph that
//! keep the maximum vertex out-degree low, and compares several strategies against each other:
//!
//! - the **Adaptive Minimise Collisions** greedy ([solver::solve_instance]), which reformulates
//!   the operation sequence as a set of edge-lifetime intervals ([intervals::convert_instance])
//!   and assigns each interval to one of its endpoints, guided by clash counts;
//! - **Kowalik's offline strategy** ([strategies::orient_by_kowalik]), flip-free with a
//!   logarithmic out-degree bound;
//! - **Brodal and Fagerberg's online strategy** ([strategies::orient_by_brodal]), which keeps the
//!   out-degree below a fixed bound at the cost of a logarithmic number of flips per operation.
//!
//! ## Usage
//!
//! ```
//! use dynamic_orientation::generator::{EndpointSampler, Generator};
//! use dynamic_orientation::intervals::convert_instance;
//! use dynamic_orientation::solver::solve_instance;
//! use dynamic_orientation::strategies::orient_by_kowalik;
//!
//! let mut gen = Generator::from_seed(10, 1, 0.5, 0.0, EndpointSampler::Uniform, 2012);
//! let opi = gen.generate_instance(50);
//! let mut ipi = convert_instance(&opi);
//! let amc_peak = solve_instance(&mut ipi);
//! let kowalik_peak = orient_by_kowalik(&opi);
//! assert!(amc_peak >= 1 && kowalik_peak >= 1);
//! ```
//!
//! You can see a full comparison run in `src/bin/workbench.rs` and run it with `cargo run`.
//!
//! ## Implementation
//!
//! The solver is backed by a battery of augmented trees, each usable on its own:
//! - an order-statistic AVL tree with rank queries, see [avl_tree::AvlTree];
//! - an interval tree for stabbing and overlap queries, see [interval_tree::IntervalTree];
//! - a lazy-propagation segment tree over per-vertex timelines, see [segment_tree::SegmentTree];
//! - a splay-based link/cut forest for online acyclicity tests, see [link_cut::LinkCutForest].
//!
//! Instances are produced by the stochastic [generator::Generator] driving a
//! [graphs::BoundedArbGraph], an array of α edge-disjoint forests. Small instances can be
//! cross-checked against a SAT reduction solved by Davis-Putnam, see [logic::convert_to_sat].
//!
//! ## Testing
//!
//! Run the tests using:
//!
//! ```text
//! cargo test
//! ```
//!
//! Add `-- --ignored` to run the stress tests (which run indefinitely with random data until
//! they fail). And use `cargo bench` to compare the strategies on generated instances.

pub mod avl_tree;
pub mod generator;
pub mod graphs;
pub mod interval_tree;
pub mod intervals;
pub mod link_cut;
pub mod logic;
pub mod orientation;
pub mod segment_tree;
pub mod solver;
pub mod strategies;

use thiserror::Error;

/// Recoverable domain errors raised at the public tree surfaces. Violated logical invariants
/// are asserted instead, since they indicate bugs rather than bad queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Minimum or maximum was requested from an empty structure.
    #[error("the structure is empty")]
    EmptyStructure,
    /// Rank-select index outside `[0, len)`.
    #[error("index {index} out of range for {len} elements")]
    OutOfRange { index: usize, len: usize },
}
