//! Adaptive Minimise Collisions: a score-driven greedy for the interval assignment problem.
//!
//! Every interval must pick one of its edge's endpoints to own it, adding one to the owner's
//! out-degree timeline over the interval's lifetime; the goal is a small peak over all
//! vertices and timestamps. An interval's score counts its clashes with already-assigned
//! intervals, so the intervals that will be hardest to place are decided first, while both
//! endpoints are still equally viable. The assignment itself breaks the tie towards the
//! endpoint with the lower existing load over the interval's timespan.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};

use crate::interval_tree::IntervalTree;
use crate::intervals::{IntervalInstance, IntervalStatus};
use crate::segment_tree::{AddMax, SegmentTree};

/// Queue entries order by score (highest first), then by time bounds. Time bounds are unique
/// across an instance, so the order is total.
type QueueKey = (Reverse<usize>, usize, usize);

/// Assigns every interval of the instance to one of its endpoints and returns the peak
/// out-degree incurred. On return, no interval is left [IntervalStatus::Unset].
pub fn solve_instance(ipi: &mut IntervalInstance) -> usize {
    // Intervals already owned by each vertex, and unassigned intervals incident to it.
    let mut assigned: Vec<IntervalTree> = (0..ipi.v_count).map(|_| IntervalTree::new()).collect();
    let mut unassigned: Vec<IntervalTree> = (0..ipi.v_count).map(|_| IntervalTree::new()).collect();
    for interval in &ipi.intervals {
        unassigned[interval.edge.0].insert(interval.start, interval.end);
        unassigned[interval.edge.1].insert(interval.start, interval.end);
    }

    // outdeg[v] is the out-degree timeline of v: range-add on assignment, range-max for peaks.
    let mut outdeg: Vec<SegmentTree<AddMax>> = (0..ipi.v_count)
        .map(|_| SegmentTree::new(ipi.timeframe))
        .collect();

    // Time bounds identify intervals, so the dictionary recovers an interval from the bounds
    // reported by an interval tree.
    let dict: BTreeMap<(usize, usize), usize> = ipi
        .intervals
        .iter()
        .enumerate()
        .map(|(index, interval)| (interval.time_bounds(), index))
        .collect();
    assert_eq!(dict.len(), ipi.intervals.len(), "duplicate time bounds");

    let mut queue: BTreeSet<QueueKey> = ipi
        .intervals
        .iter()
        .map(|interval| (Reverse(interval.score), interval.start, interval.end))
        .collect();

    let mut max_outdegree: i64 = 0;
    while let Some(&key) = queue.first() {
        // Select the unprocessed interval with the highest score.
        queue.remove(&key);
        let (Reverse(score), start, end) = key;
        let index = dict[&(start, end)];
        let edge = ipi.intervals[index].edge;
        assert_eq!(ipi.intervals[index].status, IntervalStatus::Unset);

        unassigned[edge.0].remove(start, end);
        unassigned[edge.1].remove(start, end);

        // Clashes the interval would incur at either candidate owner.
        let first_collisions = assigned[edge.0].count_overlaps(start, end);
        let second_collisions = assigned[edge.1].count_overlaps(start, end);
        ipi.intervals[index].status = if first_collisions > second_collisions {
            IntervalStatus::SecondChosen
        } else {
            IntervalStatus::FirstChosen
        };

        let owner = ipi.intervals[index].assigned_node();
        log::trace!(
            "assigning [{start}, {end}] (score {score}) to {owner}: \
             {first_collisions} vs {second_collisions} clashes"
        );

        outdeg[owner].range_update(start, end, 1);
        let peak = outdeg[owner].range_query(start, end);
        max_outdegree = max_outdegree.max(peak);

        assigned[owner].insert(start, end);

        // The owner gained load over [start, end]; every unassigned interval that clashes
        // with it there becomes harder to place. The score is the queue's sort key, so each
        // affected entry is erased and re-inserted under its new key.
        for (clash_start, clash_end) in unassigned[owner].overlaps(start, end) {
            let clash_index = dict[&(clash_start, clash_end)];
            let old_score = ipi.intervals[clash_index].score;
            let was_queued = queue.remove(&(Reverse(old_score), clash_start, clash_end));
            assert!(was_queued, "unassigned interval missing from the queue");
            ipi.intervals[clash_index].score = old_score + 1;
            queue.insert((Reverse(old_score + 1), clash_start, clash_end));
        }
    }

    max_outdegree as usize
}
