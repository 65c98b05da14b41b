//! Stochastic generator of orientation problem instances. Each step inserts a fresh edge with
//! a density-dependent probability and otherwise deletes a uniformly chosen existing edge.
//! To exercise strategies on shrinking graphs, a purge phase (a forced run of deletions) may
//! be triggered between steps.

use std::fmt::{Display, Formatter};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Geometric};

use crate::graphs::{BoundedArbGraph, Edge};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OpKind {
    Insert,
    Delete,
}

/// A single graph operation on a canonical edge.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Command {
    pub op: OpKind,
    pub edge: Edge,
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let kind = match self.op {
            OpKind::Insert => "INSERT",
            OpKind::Delete => "DELETE",
        };
        write!(f, "{kind} {} -- {}", self.edge.0, self.edge.1)
    }
}

/// A dynamic graph orientation problem: a command sequence valid on an initially empty graph
/// of `v_count` vertices and arboricity at most `alpha`.
#[derive(Clone, Debug)]
pub struct OperationInstance {
    pub v_count: usize,
    pub alpha: usize,
    pub sequence: Vec<Command>,
}

impl Display for OperationInstance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "|V| = {}, alpha = {}", self.v_count, self.alpha)?;
        for cmd in &self.sequence {
            writeln!(f, "{cmd}")?;
        }
        Ok(())
    }
}

/// How the endpoints of a fresh edge are drawn. The geometric variant biases the degree
/// distribution towards a few hub vertices.
#[derive(Clone, Copy, Debug)]
pub enum EndpointSampler {
    /// Both endpoints uniform in `[0, V)`.
    Uniform,
    /// One endpoint uniform, the other geometric on `{0, 1, ...}` clamped to `V - 1`.
    Geometric(Geometric),
}

impl EndpointSampler {
    /// Geometric sampler with the given success probability.
    pub fn geometric(succ_prob: f64) -> Self {
        Self::Geometric(Geometric::new(succ_prob).expect("success probability within (0, 1]"))
    }
}

/// Produces random [OperationInstance]s by driving a [BoundedArbGraph], so that every emitted
/// command is guaranteed to succeed on replay.
pub struct Generator {
    v_count: usize,
    alpha: usize,
    /// Expected fraction of possible edges present in the graph.
    edge_density: f64,
    /// Probability of entering a purge phase after a step.
    purge_prob: f64,
    sampler: EndpointSampler,
    rng: StdRng,
}

impl Generator {
    pub fn from_seed(
        v_count: usize,
        alpha: usize,
        edge_density: f64,
        purge_prob: f64,
        sampler: EndpointSampler,
        seed: u64,
    ) -> Self {
        assert!(v_count >= 2, "graphs on fewer than two vertices have no edges");
        assert!(alpha >= 1);
        assert!((0.0..=1.0).contains(&edge_density) && edge_density > 0.0);
        assert!((0.0..=1.0).contains(&purge_prob));
        Self {
            v_count,
            alpha,
            edge_density,
            purge_prob,
            sampler,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy(
        v_count: usize,
        alpha: usize,
        edge_density: f64,
        purge_prob: f64,
        sampler: EndpointSampler,
    ) -> Self {
        let mut seeder = rand::thread_rng();
        Self::from_seed(v_count, alpha, edge_density, purge_prob, sampler, seeder.gen())
    }

    /// Generates a valid instance with `sequence_len` operations.
    pub fn generate_instance(&mut self, sequence_len: usize) -> OperationInstance {
        let mut graph = BoundedArbGraph::new(self.v_count, self.alpha);
        let mut sequence = Vec::with_capacity(sequence_len);
        // A purge phase is active iff the countdown is positive.
        let mut purge_countdown = 0usize;

        for _time in 0..sequence_len {
            let mut op = if self.rng.gen::<f64>() < self.insert_probability(&graph) {
                OpKind::Insert
            } else {
                OpKind::Delete
            };

            // Special cases where the operation kind is enforced.
            if graph.edge_count() == 0 {
                op = OpKind::Insert;
            } else if graph.edge_count() == (self.v_count - 1) * self.alpha {
                op = OpKind::Delete;
            } else if purge_countdown > 0 {
                op = OpKind::Delete;
            }

            let edge = match op {
                OpKind::Insert => self.insert_random_edge(&mut graph),
                OpKind::Delete => self.delete_random_edge(&mut graph),
            };
            sequence.push(Command { op, edge });

            if purge_countdown == 0 && self.rng.gen::<f64>() < self.purge_prob {
                purge_countdown = self.rng.gen_range(0..=graph.edge_count() / 2);
                log::debug!("starting a purge of {purge_countdown} deletions");
            } else if purge_countdown > 0 {
                purge_countdown -= 1;
            }
        }

        OperationInstance {
            v_count: self.v_count,
            alpha: self.alpha,
            sequence,
        }
    }

    /// Insert probability as a function of the current density `d`: falls linearly from 1 to
    /// 1/2 while `d <= edge_density`, then from 1/2 to 0 at `d = 1`.
    fn insert_probability(&self, graph: &BoundedArbGraph) -> f64 {
        let density = graph.edge_count() as f64 / (self.alpha * (self.v_count - 1)) as f64;
        if density <= self.edge_density {
            1.0 - density / (2.0 * self.edge_density)
        } else {
            (1.0 - density) / (2.0 - 2.0 * self.edge_density)
        }
    }

    /// Samples `(forest, a, b)` triples until one inserts cleanly. Rejection is bounded by
    /// graph geometry: a free spot exists whenever the graph is below its edge capacity.
    fn insert_random_edge(&mut self, graph: &mut BoundedArbGraph) -> Edge {
        loop {
            let forest_index = self.rng.gen_range(0..self.alpha);
            let (a, b) = self.sample_endpoints();
            if graph.insert_edge(forest_index, a, b) {
                return Edge::new(a, b);
            }
        }
    }

    fn delete_random_edge(&mut self, graph: &mut BoundedArbGraph) -> Edge {
        let removed_index = self.rng.gen_range(0..graph.edge_count());
        let edge = graph.get_edge(removed_index);
        graph.delete_edge(edge.0, edge.1);
        edge
    }

    fn sample_endpoints(&mut self) -> (usize, usize) {
        match self.sampler {
            EndpointSampler::Uniform => (
                self.rng.gen_range(0..self.v_count),
                self.rng.gen_range(0..self.v_count),
            ),
            EndpointSampler::Geometric(distr) => {
                let first = self.rng.gen_range(0..self.v_count);
                // The entire distribution tail corresponds to the last vertex.
                let second = (distr.sample(&mut self.rng) as usize).min(self.v_count - 1);
                (first, second)
            }
        }
    }
}
