//! Undirected graph structures: [Forest], a graph of arboricity one, and [BoundedArbGraph],
//! a graph of arboricity at most α represented as α edge-disjoint forests. Acyclicity per
//! forest is enforced online through a link/cut forest.

use std::fmt::Write as _;

use crate::avl_tree::AvlTree;
use crate::link_cut::LinkCutForest;

/// Unordered vertex pair, canonicalised so that the smaller endpoint comes first.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Edge(pub usize, pub usize);

impl Edge {
    pub fn new(u: usize, v: usize) -> Self {
        if u <= v {
            Self(u, v)
        } else {
            Self(v, u)
        }
    }
}

/// Undirected graph of arboricity one. Edge insertions that would close a cycle are rejected.
pub struct Forest {
    v_count: usize,
    edges: AvlTree<Edge>,
    links: LinkCutForest,
}

impl Forest {
    pub fn new(v_count: usize) -> Self {
        Self {
            v_count,
            edges: AvlTree::new(),
            links: LinkCutForest::new(v_count),
        }
    }

    pub fn v_count(&self) -> usize {
        self.v_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_adjacent(&self, u: usize, v: usize) -> bool {
        assert!(u < self.v_count && v < self.v_count);
        self.edges.contains(&Edge::new(u, v))
    }

    /// Inserts the edge `{u, v}`. Returns false when the edge is a self-loop, is already
    /// present, or would close a cycle.
    pub fn insert_edge(&mut self, u: usize, v: usize) -> bool {
        assert!(u < self.v_count && v < self.v_count);
        let edge = Edge::new(u, v);

        if u == v || self.links.connected(edge.0, edge.1) {
            return false;
        }

        self.edges.insert(edge);
        self.links.link(edge.0, edge.1);
        true
    }

    /// Removes the edge `{u, v}` if present. Returns whether it was removed.
    pub fn delete_edge(&mut self, u: usize, v: usize) -> bool {
        assert!(u < self.v_count && v < self.v_count);
        let edge = Edge::new(u, v);

        if !self.edges.contains(&edge) {
            return false;
        }
        self.edges.remove(&edge);
        self.links.cut(edge.0, edge.1);
        true
    }

    /// The i-th edge in canonical order, 0-indexed.
    pub fn get_edge(&self, index: usize) -> Edge {
        assert!(index < self.edge_count());
        *self.edges.nth(index).expect("index within edge count")
    }

    pub fn all_edges(&self) -> Vec<Edge> {
        self.edges.iter().copied().collect()
    }

    /// Graphviz-friendly DOT description, one `u -- v` line per edge.
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        out.push_str("graph {\n");
        out.push_str("  node [margin=0 shape=circle style=filled]\n");
        for Edge(u, v) in self.edges.iter() {
            let _ = writeln!(out, "  {u} -- {v}");
        }
        out.push_str("}\n");
        out
    }
}

/// Fixed edge palette used when rendering multi-forest graphs.
const PALETTE: [&str; 7] = [
    "navy",
    "red",
    "darkgreen",
    "chocolate",
    "purple",
    "dimgray",
    "black",
];

/// Bounded-arboricity graph: a collection of α forests, where every edge belongs to exactly
/// one forest.
pub struct BoundedArbGraph {
    v_count: usize,
    alpha: usize,
    forests: Vec<Forest>,
}

impl BoundedArbGraph {
    pub fn new(v_count: usize, alpha: usize) -> Self {
        assert!(alpha > 0);
        Self {
            v_count,
            alpha,
            forests: (0..alpha).map(|_| Forest::new(v_count)).collect(),
        }
    }

    pub fn v_count(&self) -> usize {
        self.v_count
    }

    pub fn alpha(&self) -> usize {
        self.alpha
    }

    pub fn edge_count(&self) -> usize {
        self.forests.iter().map(Forest::edge_count).sum()
    }

    /// Is the edge `{u, v}` present in any forest?
    pub fn is_adjacent(&self, u: usize, v: usize) -> bool {
        self.forests.iter().any(|f| f.is_adjacent(u, v))
    }

    /// Inserts the edge `{u, v}` into the chosen forest. Rejected when the edge already exists
    /// anywhere in the graph, or when the forest rejects it.
    pub fn insert_edge(&mut self, forest_index: usize, u: usize, v: usize) -> bool {
        if self.is_adjacent(u, v) {
            return false;
        }
        self.forests[forest_index].insert_edge(u, v)
    }

    /// Removes the edge `{u, v}` from whichever forest holds it. Returns whether it existed.
    pub fn delete_edge(&mut self, u: usize, v: usize) -> bool {
        // At most one forest holds the edge.
        self.forests.iter_mut().any(|f| f.delete_edge(u, v))
    }

    /// The i-th edge of the whole graph, indexing forests in order.
    pub fn get_edge(&self, index: usize) -> Edge {
        assert!(index < self.edge_count());
        let mut index = index;
        for forest in &self.forests {
            if index >= forest.edge_count() {
                index -= forest.edge_count();
            } else {
                return forest.get_edge(index);
            }
        }
        unreachable!("asserted index within total edge count");
    }

    /// DOT description where each forest is drawn in its own colour.
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        out.push_str("graph {\n");
        out.push_str("  node [margin=0 shape=circle style=filled]\n");
        out.push_str("  edge [penwidth=5]\n");
        for (i, forest) in self.forests.iter().enumerate() {
            let _ = writeln!(out, "  edge [color={}]", PALETTE[i % PALETTE.len()]);
            for Edge(u, v) in forest.all_edges() {
                let _ = writeln!(out, "  {u} -- {v}");
            }
        }
        out.push_str("}\n");
        out
    }
}
