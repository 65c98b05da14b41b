//! Segment tree with lazy propagation over a fixed index domain, parameterised by the pair of
//! associative operations applied on update and on query. The tree is dynamic: node memory is
//! allocated only along accessed paths, so a tree over a large timeframe stays proportional to
//! the touched ranges.

use std::fmt::Debug;
use std::marker::PhantomData;

/// Operation pair of a lazy segment tree. `update` is applied on range-update and when folding
/// a pending lazy delta into a value; `accumulate` is applied on range-query.
/// `multi_accumulate(k, v)` must equal `accumulate` folded over `k` copies of `v`.
pub trait LazyOps {
    type Value: Copy + Debug;

    /// Initial value of every position and of a cleared lazy slot.
    fn zero() -> Self::Value;
    /// Value of an empty query segment.
    fn neutral() -> Self::Value;
    fn update(a: Self::Value, b: Self::Value) -> Self::Value;
    fn accumulate(a: Self::Value, b: Self::Value) -> Self::Value;
    fn multi_accumulate(times: usize, value: Self::Value) -> Self::Value;
}

/// Range-add / range-sum specialisation.
pub struct AddSum;

impl LazyOps for AddSum {
    type Value = i64;

    fn zero() -> i64 {
        0
    }
    fn neutral() -> i64 {
        0
    }
    fn update(a: i64, b: i64) -> i64 {
        a + b
    }
    fn accumulate(a: i64, b: i64) -> i64 {
        a + b
    }
    fn multi_accumulate(times: usize, value: i64) -> i64 {
        times as i64 * value
    }
}

/// Range-add / range-max specialisation. The max of any number of copies of `v` is `v`.
pub struct AddMax;

impl LazyOps for AddMax {
    type Value = i64;

    fn zero() -> i64 {
        0
    }
    fn neutral() -> i64 {
        i64::MIN
    }
    fn update(a: i64, b: i64) -> i64 {
        a + b
    }
    fn accumulate(a: i64, b: i64) -> i64 {
        a.max(b)
    }
    fn multi_accumulate(_times: usize, value: i64) -> i64 {
        value
    }
}

struct Node<V> {
    /// Cumulative value of the whole segment.
    value: V,
    /// Pending update, already folded into `value` but not yet pushed to the children.
    lazy: V,
    /// Inclusive segment endpoints.
    lo: usize,
    hi: usize,
    left: Option<Box<Node<V>>>,
    right: Option<Box<Node<V>>>,
}

impl<V: Copy> Node<V> {
    fn new(zero: V, lo: usize, hi: usize) -> Self {
        Self {
            value: zero,
            lazy: zero,
            lo,
            hi,
            left: None,
            right: None,
        }
    }

    fn is_leaf(&self) -> bool {
        self.lo == self.hi
    }

    fn segment_len(&self) -> usize {
        self.hi - self.lo + 1
    }
}

/// Lazy segment tree over `[0, size)`, internally padded to `[0, p)` for the smallest power of
/// two `p >= size`.
pub struct SegmentTree<Ops: LazyOps> {
    size: usize,
    root: Box<Node<Ops::Value>>,
    _ops: PhantomData<Ops>,
}

impl<Ops: LazyOps> SegmentTree<Ops> {
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "segment tree over an empty domain");
        let padded = size.next_power_of_two();
        Self {
            size,
            root: Box::new(Node::new(Ops::zero(), 0, padded - 1)),
            _ops: PhantomData,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Applies the update operation with `value` to every position in `[left_bound, right_bound]`.
    pub fn range_update(&mut self, left_bound: usize, right_bound: usize, value: Ops::Value) {
        assert!(left_bound <= right_bound && right_bound < self.size);
        Self::update_rec(&mut self.root, (left_bound, right_bound), value);
    }

    /// Folds the accumulate operation over `[left_bound, right_bound]`.
    pub fn range_query(&mut self, left_bound: usize, right_bound: usize) -> Ops::Value {
        assert!(left_bound <= right_bound && right_bound < self.size);
        Self::query_rec(&mut self.root, (left_bound, right_bound))
    }

    fn update_rec(node: &mut Node<Ops::Value>, query: (usize, usize), value: Ops::Value) {
        if query.0 <= node.lo && node.hi <= query.1 {
            node.lazy = Ops::update(node.lazy, value);
            node.value = Ops::update(node.value, Ops::multi_accumulate(node.segment_len(), value));
        } else if query.0 <= node.hi && node.lo <= query.1 {
            Self::allocate_children(node);
            Self::propagate_down(node);
            // Continue further down the tree.
            let left = node.left.as_mut().expect("children allocated above");
            Self::update_rec(left, query, value);
            let right = node.right.as_mut().expect("children allocated above");
            Self::update_rec(right, query, value);
            node.value = Ops::accumulate(
                node.left.as_ref().expect("children allocated above").value,
                node.right.as_ref().expect("children allocated above").value,
            );
        }
    }

    fn query_rec(node: &mut Node<Ops::Value>, query: (usize, usize)) -> Ops::Value {
        if query.0 <= node.lo && node.hi <= query.1 {
            node.value
        } else if query.0 <= node.hi && node.lo <= query.1 {
            Self::allocate_children(node);
            Self::propagate_down(node);
            let left = node.left.as_mut().expect("children allocated above");
            let from_left = Self::query_rec(left, query);
            let right = node.right.as_mut().expect("children allocated above");
            let from_right = Self::query_rec(right, query);
            Ops::accumulate(from_left, from_right)
        } else {
            // Node doesn't contribute to the result.
            Ops::neutral()
        }
    }

    /// Allocates the child nodes on first descent. Leaves have no children.
    fn allocate_children(node: &mut Node<Ops::Value>) {
        if node.is_leaf() || (node.left.is_some() && node.right.is_some()) {
            return;
        }
        let half = (node.hi - node.lo) / 2;
        node.left = Some(Box::new(Node::new(Ops::zero(), node.lo, node.lo + half)));
        node.right = Some(Box::new(Node::new(Ops::zero(), node.lo + half + 1, node.hi)));
    }

    /// Pushes the pending lazy update to both children, then clears it.
    fn propagate_down(node: &mut Node<Ops::Value>) {
        let lazy = node.lazy;
        let child_len = node.segment_len() / 2;
        if let (Some(left), Some(right)) = (node.left.as_deref_mut(), node.right.as_deref_mut()) {
            left.lazy = Ops::update(left.lazy, lazy);
            right.lazy = Ops::update(right.lazy, lazy);
            left.value = Ops::update(left.value, Ops::multi_accumulate(child_len, lazy));
            right.value = Ops::update(right.value, Ops::multi_accumulate(child_len, lazy));
        }
        node.lazy = Ops::zero();
    }
}

impl<Ops: LazyOps> Debug for SegmentTree<Ops> {
    /// One line per allocated segment, indented by depth, breadth-first.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut pending = std::collections::VecDeque::new();
        pending.push_back((&self.root, 0usize));
        while let Some((node, depth)) = pending.pop_front() {
            writeln!(
                f,
                "{:indent$}[{}, {}] --> value = {:?}, lazy = {:?}",
                "",
                node.lo,
                node.hi,
                node.value,
                node.lazy,
                indent = depth * 2
            )?;
            if let Some(left) = &node.left {
                pending.push_back((left, depth + 1));
            }
            if let Some(right) = &node.right {
                pending.push_back((right, depth + 1));
            }
        }
        Ok(())
    }
}
