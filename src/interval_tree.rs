//! Interval tree: an AVL tree keyed lexicographically by `[low, high]` interval bounds and
//! augmented with the largest `high` per subtree, which prunes overlap searches down to
//! O(k + log n) for k reported intervals. Both bounds are inclusive. Follows the augmented
//! red-black scheme of CLRS, chapter 14, on top of AVL balancing.

use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};

/// A stored `[low, high]` interval.
pub type Bounds = (usize, usize);

struct Node {
    low: usize,
    high: usize,
    /// Maximum `high` value in the subtree.
    highest: usize,
    /// Node count on the longest root-leaf path.
    height: usize,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(low: usize, high: usize) -> Self {
        Self {
            low,
            high,
            highest: high,
            height: 1,
            left: None,
            right: None,
        }
    }

    fn bounds(&self) -> Bounds {
        (self.low, self.high)
    }

    /// Recomputes the auxiliary values, assuming both children are up to date.
    fn update(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
        self.highest = self
            .high
            .max(highest(&self.left))
            .max(highest(&self.right));
    }
}

fn height(node: &Option<Box<Node>>) -> usize {
    node.as_ref().map_or(0, |n| n.height)
}

fn highest(node: &Option<Box<Node>>) -> usize {
    node.as_ref().map_or(0, |n| n.highest)
}

fn balance_factor(node: &Node) -> i64 {
    height(&node.left) as i64 - height(&node.right) as i64
}

fn rotate_right(mut node: Box<Node>) -> Box<Node> {
    let mut root = node.left.take().expect("left rotation partner exists");
    node.left = root.right.take();
    node.update();
    root.right = Some(node);
    root.update();
    root
}

fn rotate_left(mut node: Box<Node>) -> Box<Node> {
    let mut root = node.right.take().expect("right rotation partner exists");
    node.right = root.left.take();
    node.update();
    root.left = Some(node);
    root.update();
    root
}

fn rebalance(mut node: Box<Node>) -> Box<Node> {
    let balance = balance_factor(&node);
    assert!(balance.abs() <= 2);

    if balance == 2 {
        let left = node.left.take().expect("left-leaning node has a left child");
        node.left = Some(if balance_factor(&left) < 0 {
            rotate_left(left)
        } else {
            left
        });
        rotate_right(node)
    } else if balance == -2 {
        let right = node.right.take().expect("right-leaning node has a right child");
        node.right = Some(if balance_factor(&right) > 0 {
            rotate_right(right)
        } else {
            right
        });
        rotate_left(node)
    } else {
        node
    }
}

fn insert_node(node: Option<Box<Node>>, addend: Bounds) -> Box<Node> {
    let Some(mut node) = node else {
        return Box::new(Node::new(addend.0, addend.1));
    };
    if addend <= node.bounds() {
        node.left = Some(insert_node(node.left.take(), addend));
    } else {
        node.right = Some(insert_node(node.right.take(), addend));
    }
    node.update();
    rebalance(node)
}

fn remove_node(node: Option<Box<Node>>, target: Bounds) -> (Option<Box<Node>>, bool) {
    let Some(mut node) = node else {
        return (None, false);
    };
    match target.cmp(&node.bounds()) {
        Ordering::Less => {
            let (left, removed) = remove_node(node.left.take(), target);
            node.left = left;
            node.update();
            (Some(rebalance(node)), removed)
        }
        Ordering::Greater => {
            let (right, removed) = remove_node(node.right.take(), target);
            node.right = right;
            node.update();
            (Some(rebalance(node)), removed)
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, child) | (child, None) => (child, true),
            (left, Some(right)) => {
                let (rest, mut successor) = drop_min(right);
                successor.left = left;
                successor.right = rest;
                successor.update();
                (Some(rebalance(successor)), true)
            }
        },
    }
}

fn drop_min(mut node: Box<Node>) -> (Option<Box<Node>>, Box<Node>) {
    match node.left.take() {
        None => {
            let rest = node.right.take();
            (rest, node)
        }
        Some(left) => {
            let (rest, successor) = drop_min(left);
            node.left = rest;
            node.update();
            (Some(rebalance(node)), successor)
        }
    }
}

/// Do the two inclusive intervals have a nonempty overlap?
fn clashing(a: Bounds, b: Bounds) -> bool {
    a.0 <= b.1 && b.0 <= a.1
}

/// Interval dictionary with overlap queries. Multiple intervals with identical endpoints can
/// be stored.
pub struct IntervalTree {
    root: Option<Box<Node>>,
    interval_count: usize,
}

impl Default for IntervalTree {
    fn default() -> Self {
        Self::new()
    }
}

impl IntervalTree {
    pub fn new() -> Self {
        Self {
            root: None,
            interval_count: 0,
        }
    }

    /// Number of intervals stored, counting duplicates.
    pub fn len(&self) -> usize {
        self.interval_count
    }

    pub fn is_empty(&self) -> bool {
        self.interval_count == 0
    }

    /// Inserts a new `[low, high]` interval.
    pub fn insert(&mut self, low: usize, high: usize) {
        assert!(low <= high);
        self.root = Some(insert_node(self.root.take(), (low, high)));
        self.interval_count += 1;
    }

    /// Removes one occurrence of the specified interval. Returns whether one was present.
    pub fn remove(&mut self, low: usize, high: usize) -> bool {
        assert!(low <= high);
        let (root, removed) = remove_node(self.root.take(), (low, high));
        self.root = root;
        if removed {
            self.interval_count -= 1;
        }
        removed
    }

    /// Searches for the exact interval in the tree.
    pub fn contains(&self, low: usize, high: usize) -> bool {
        assert!(low <= high);
        let target = (low, high);
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            match target.cmp(&n.bounds()) {
                Ordering::Equal => return true,
                Ordering::Less => node = n.left.as_deref(),
                Ordering::Greater => node = n.right.as_deref(),
            }
        }
        false
    }

    /// Returns all stored intervals that overlap the query interval, in key order.
    pub fn overlaps(&self, low: usize, high: usize) -> Vec<Bounds> {
        assert!(low <= high);
        let mut result = Vec::new();
        Self::collect_clashes(&self.root, (low, high), &mut result);
        result
    }

    /// Number of stored intervals that overlap the query interval.
    pub fn count_overlaps(&self, low: usize, high: usize) -> usize {
        assert!(low <= high);
        Self::count_clashes(&self.root, (low, high))
    }

    fn collect_clashes(node: &Option<Box<Node>>, query: Bounds, result: &mut Vec<Bounds>) {
        let Some(node) = node else { return };
        // Skip the whole subtree if no interval in it can reach the query.
        if node.highest < query.0 {
            return;
        }

        Self::collect_clashes(&node.left, query, result);
        if clashing(node.bounds(), query) {
            result.push(node.bounds());
        }
        // The right subtree only holds larger lows; prune using the BST property.
        if node.low <= query.1 {
            Self::collect_clashes(&node.right, query, result);
        }
    }

    fn count_clashes(node: &Option<Box<Node>>, query: Bounds) -> usize {
        let Some(node) = node else { return 0 };
        if node.highest < query.0 {
            return 0;
        }

        let mut total = Self::count_clashes(&node.left, query);
        if clashing(node.bounds(), query) {
            total += 1;
        }
        if node.low <= query.1 {
            total += Self::count_clashes(&node.right, query);
        }
        total
    }
}

impl Debug for IntervalTree {
    /// Bracket representation: `(left,[low,high],h=height,hs=highest,right)`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        fn rec(node: &Option<Box<Node>>, f: &mut Formatter<'_>) -> std::fmt::Result {
            let Some(node) = node else {
                return write!(f, "n");
            };
            write!(f, "(")?;
            rec(&node.left, f)?;
            write!(
                f,
                ",[{},{}],h={},hs={},",
                node.low, node.high, node.height, node.highest
            )?;
            rec(&node.right, f)?;
            write!(f, ")")
        }
        rec(&self.root, f)
    }
}
