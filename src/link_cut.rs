//! Link/cut forest: maintains a dynamic forest under `link`, `cut` and `connected` in
//! amortised O(log n). Classical splay-tree representation of preferred paths: every splay
//! tree holds one preferred path ordered by depth, and the path root's parent pointer (which
//! does not mark a child in the parent) attaches the path to the rest of the tree. Each node
//! carries a pending-reverse flag so that rerooting can lazily flip left and right subtrees.

use std::fmt::{Debug, Formatter};

use debug_tree::TreeBuilder;
use derivative::Derivative;

pub type Idx = usize;

/// Returned when the node doesn't exist.
const EMPTY: Idx = usize::MAX;

fn node_fmt(u: &Idx, f: &mut Formatter) -> std::fmt::Result {
    if *u == EMPTY {
        write!(f, "∅")
    } else {
        write!(f, "{u}")
    }
}

fn node2_fmt([u, v]: &[Idx; 2], f: &mut Formatter) -> std::fmt::Result {
    write!(f, "[")?;
    node_fmt(u, f)?;
    write!(f, ", ")?;
    node_fmt(v, f)?;
    write!(f, "]")
}

#[derive(Derivative)]
#[derivative(Debug)]
struct Node {
    #[derivative(Debug(format_with = "node_fmt"))]
    parent: Idx,
    /// Left and right child
    #[derivative(Debug(format_with = "node2_fmt"))]
    child: [Idx; 2],
    /// This node's children should be swapped, and so should its descendants'.
    reversed: bool,
}

impl Node {
    fn new() -> Self {
        Self {
            parent: EMPTY,
            child: [EMPTY, EMPTY],
            reversed: false,
        }
    }
}

/// A forest on vertices `0..n` supporting dynamic edge insertion and removal with
/// connectivity queries. All operations are amortised O(log n).
pub struct LinkCutForest {
    nodes: Vec<Node>,
}

impl LinkCutForest {
    /// New forest with `n` vertices and no edges.
    pub fn new(n: usize) -> Self {
        Self {
            nodes: (0..n).map(|_| Node::new()).collect(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    /// Applies and propagates a pending reverse. Must be called before inspecting children.
    fn push(&mut self, u: Idx) {
        if self.nodes[u].reversed {
            self.nodes[u].reversed = false;
            self.nodes[u].child.swap(0, 1);
            for c in self.nodes[u].child {
                if c != EMPTY {
                    self.nodes[c].reversed ^= true;
                }
            }
        }
    }

    /// Is `u` the root of its splay tree? True also when the parent pointer is a path-parent
    /// pointer, which does not mark a child in the parent.
    fn is_splay_root(&self, u: Idx) -> bool {
        let p = self.nodes[u].parent;
        p == EMPTY || (self.nodes[p].child[0] != u && self.nodes[p].child[1] != u)
    }

    fn rotate(&mut self, u: Idx) {
        let p = self.nodes[u].parent;
        let g = self.nodes[p].parent;

        if !self.is_splay_root(p) {
            if self.nodes[g].child[1] == p {
                self.nodes[g].child[1] = u;
            } else {
                self.nodes[g].child[0] = u;
            }
        }

        self.push(p);
        self.push(u);

        if self.nodes[p].child[0] == u {
            let mid = self.nodes[u].child[1];
            self.nodes[p].child[0] = mid;
            self.nodes[u].child[1] = p;
            if mid != EMPTY {
                self.nodes[mid].parent = p;
            }
        } else {
            let mid = self.nodes[u].child[0];
            self.nodes[p].child[1] = mid;
            self.nodes[u].child[0] = p;
            if mid != EMPTY {
                self.nodes[mid].parent = p;
            }
        }

        self.nodes[p].parent = u;
        self.nodes[u].parent = g;
    }

    fn splay(&mut self, u: Idx) {
        while !self.is_splay_root(u) {
            let p = self.nodes[u].parent;
            let g = self.nodes[p].parent;
            if !self.is_splay_root(p) {
                let zig_zig = (self.nodes[g].child[1] == p) == (self.nodes[p].child[1] == u);
                self.rotate(if zig_zig { p } else { u });
            }
            self.rotate(u);
        }
        self.push(u);
    }

    /// Makes the path from `u` to the root of its tree preferred and splays `u` to the top of
    /// its splay tree. Returns the last path top encountered, i.e. the point where the
    /// accessed path entered the topmost preferred path.
    fn access(&mut self, u: Idx) -> Idx {
        let mut last = EMPTY;
        let mut current = u;
        while current != EMPTY {
            self.splay(current);
            self.nodes[current].child[1] = last;
            last = current;
            current = self.nodes[current].parent;
        }
        self.splay(u);
        last
    }

    /// Makes `u` the root of its represented tree by reversing the accessed path.
    fn make_root(&mut self, u: Idx) {
        self.access(u);
        let below = self.nodes[u].child[0];
        if below != EMPTY {
            self.nodes[below].reversed ^= true;
            self.nodes[u].child[0] = EMPTY;
        }
    }

    /// Joins the trees containing `u` and `v` with an edge. The two trees must be disjoint.
    pub fn link(&mut self, u: Idx, v: Idx) {
        #[cfg(debug_assertions)]
        {
            assert!(!self.connected(u, v), "link({u}, {v}) within one tree");
        }
        self.make_root(v);
        self.nodes[v].parent = u;
    }

    /// Removes the edge between `u` and `v`. The edge must exist in the forest.
    pub fn cut(&mut self, u: Idx, v: Idx) {
        self.make_root(u);
        self.access(v);
        let below = self.nodes[v].child[0];
        assert!(below != EMPTY, "cut({u}, {v}) of a missing edge");
        self.nodes[below].parent = EMPTY;
        self.nodes[v].child[0] = EMPTY;
    }

    /// Are `u` and `v` in the same tree?
    pub fn connected(&mut self, u: Idx, v: Idx) -> bool {
        if u == v {
            return true;
        }
        self.access(u);
        self.access(v);
        // If the second access reattached u below some splay tree, both share a tree.
        self.nodes[u].parent != EMPTY
    }
}

impl Debug for LinkCutForest {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let mut builder = TreeBuilder::new();
        let _b = builder.add_branch("LinkCutForest");
        for (u, node) in self.nodes.iter().enumerate() {
            if node.parent == EMPTY {
                self.tree_dbg(u, &mut builder);
            }
        }
        writeln!(f, "{}", builder.string())
    }
}

impl LinkCutForest {
    fn tree_dbg(&self, u: Idx, tree: &mut TreeBuilder) {
        let _b = tree.add_branch(&format!("{u}: {:?}", self.nodes[u]));
        if self.nodes[u].child == [EMPTY, EMPTY] {
            return;
        }
        for c in self.nodes[u].child {
            if c != EMPTY {
                self.tree_dbg(c, tree);
            } else {
                tree.add_leaf("<no child>");
            }
        }
    }
}
