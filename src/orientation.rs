//! Orientation bookkeeping for a dynamic forest: which direction each edge currently holds,
//! per-vertex out-degrees, and a reverse index for in-neighbour lookups. Used by both the
//! Brodal-Fagerberg and the Kowalik strategies.

use std::collections::BTreeSet;
use std::fmt::Write as _;

/// An assignment of directions to the edges of a graph. The pair `(u, v)` in the direction
/// set denotes an edge oriented from `u` to `v`.
#[derive(Clone)]
pub struct Orientation {
    outdegs: Vec<usize>,
    directions: BTreeSet<(usize, usize)>,
    rev_directions: Vec<BTreeSet<usize>>,
}

impl Orientation {
    pub fn new(v_count: usize) -> Self {
        Self {
            outdegs: vec![0; v_count],
            directions: BTreeSet::new(),
            rev_directions: vec![BTreeSet::new(); v_count],
        }
    }

    pub fn v_count(&self) -> usize {
        self.outdegs.len()
    }

    /// Number of edges oriented away from `v`.
    pub fn outdegree(&self, v: usize) -> usize {
        self.outdegs[v]
    }

    pub fn max_outdegree(&self) -> usize {
        self.outdegs.iter().copied().max().unwrap_or(0)
    }

    /// Is the edge `{u, v}` oriented from `u` to `v`?
    pub fn is_oriented(&self, u: usize, v: usize) -> bool {
        self.directions.contains(&(u, v))
    }

    /// Does the edge `{u, v}` exist in the orientation, in either direction?
    pub fn contains(&self, u: usize, v: usize) -> bool {
        self.is_oriented(u, v) || self.is_oriented(v, u)
    }

    /// Inserts a new edge oriented from `from` to `to`. The edge must not already exist in
    /// either direction.
    pub fn orient_edge(&mut self, from: usize, to: usize) {
        assert!(!self.contains(from, to), "{from} -> {to} already oriented");

        self.outdegs[from] += 1;
        self.directions.insert((from, to));
        self.rev_directions[to].insert(from);
    }

    /// Removes an edge oriented from `from` to `to`. The edge must hold that exact direction.
    pub fn remove_edge(&mut self, from: usize, to: usize) {
        assert!(self.is_oriented(from, to), "{from} -> {to} not oriented");

        self.outdegs[from] -= 1;
        self.directions.remove(&(from, to));
        self.rev_directions[to].remove(&from);
    }

    /// Reverses the direction of the edge currently oriented from `from` to `to`.
    pub fn flip_edge(&mut self, from: usize, to: usize) {
        self.remove_edge(from, to);
        self.orient_edge(to, from);
    }

    /// Neighbours reachable along edges oriented away from `v`. The direction set orders
    /// pairs by source first, so the outgoing edges of `v` form one contiguous range.
    pub fn out_neighbours(&self, v: usize) -> Vec<usize> {
        assert!(v < self.v_count());
        self.directions
            .range((v, 0)..(v + 1, 0))
            .map(|&(_, to)| to)
            .collect()
    }

    /// Neighbours with an edge oriented towards `v`.
    pub fn in_neighbours(&self, v: usize) -> Vec<usize> {
        assert!(v < self.v_count());
        self.rev_directions[v].iter().copied().collect()
    }

    /// All edges with their current orientations.
    pub fn all_edges(&self) -> Vec<(usize, usize)> {
        self.directions.iter().copied().collect()
    }

    /// DOT digraph description, one `u -> v` line per directed edge.
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        out.push_str("digraph {\n");
        out.push_str("  node [margin=0 shape=circle style=filled]\n");
        for &(from, to) in &self.directions {
            let _ = writeln!(out, "  {from} -> {to}");
        }
        out.push_str("}\n");
        out
    }
}
