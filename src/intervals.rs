//! Interval reformulation of the dynamic orientation problem. Each maximal timespan during
//! which an edge is present in the graph becomes one interval; orienting the edge for its
//! whole lifetime then amounts to assigning the interval to one of its endpoints.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use crate::generator::OperationInstance;
use crate::graphs::Edge;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IntervalStatus {
    Unset,
    FirstChosen,
    SecondChosen,
}

/// A single edge occurrence: the edge was present over the inclusive timespan
/// `[start, end]`. No two intervals of an instance share the same time bounds, which makes
/// `(start, end)` a dictionary key for the solver.
#[derive(Clone, Debug)]
pub struct Interval {
    /// Timestamp of the insertion.
    pub start: usize,
    /// Timestamp of the deletion, or the synthetic cap when the edge outlives the sequence.
    pub end: usize,
    pub edge: Edge,
    pub status: IntervalStatus,
    /// Current solver score.
    pub score: usize,
}

impl Interval {
    pub fn time_bounds(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// The endpoint that owns this interval. The interval must have been assigned.
    pub fn assigned_node(&self) -> usize {
        match self.status {
            IntervalStatus::Unset => panic!("interval has no node assigned"),
            IntervalStatus::FirstChosen => self.edge.0,
            IntervalStatus::SecondChosen => self.edge.1,
        }
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{{}, {}}} FROM {} TO {}",
            self.edge.0, self.edge.1, self.start, self.end
        )?;
        match self.status {
            IntervalStatus::Unset => write!(f, " (NOT SET)"),
            IntervalStatus::FirstChosen => write!(f, " (SET {})", self.edge.0),
            IntervalStatus::SecondChosen => write!(f, " (SET {})", self.edge.1),
        }
    }
}

/// The interval rendering of an [OperationInstance].
#[derive(Clone, Debug)]
pub struct IntervalInstance {
    pub v_count: usize,
    pub alpha: usize,
    /// Largest timestamp + 1; intervals span sub-ranges of `[0, timeframe)`.
    pub timeframe: usize,
    pub intervals: Vec<Interval>,
}

impl Display for IntervalInstance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "|V| = {}, alpha = {}, timeframe = {}",
            self.v_count, self.alpha, self.timeframe
        )?;
        for interval in &self.intervals {
            writeln!(f, "{interval}")?;
        }
        Ok(())
    }
}

/// Translates the operation sequence into its interval rendering.
///
/// Per edge, insertions and deletions strictly alternate starting with an insertion, so the
/// edge's timestamps pair up as consecutive `[insert, delete]` couples. An unpaired trailing
/// insertion means the edge survives the whole stream; its interval is closed at the
/// synthetic cap `|sequence|`.
pub fn convert_instance(opi: &OperationInstance) -> IntervalInstance {
    // Timestamps at which each edge appears as an operation, in chronological order.
    let mut history: BTreeMap<Edge, Vec<usize>> = BTreeMap::new();
    for (time, cmd) in opi.sequence.iter().enumerate() {
        history.entry(cmd.edge).or_default().push(time);
    }

    let cap = opi.sequence.len();
    let mut intervals = Vec::new();
    for (edge, timestamps) in history {
        for pair in timestamps.chunks(2) {
            let (start, end) = match *pair {
                [start, end] => (start, end),
                [start] => (start, cap),
                _ => unreachable!("chunks of two"),
            };
            intervals.push(Interval {
                start,
                end,
                edge,
                status: IntervalStatus::Unset,
                score: 0,
            });
        }
    }

    IntervalInstance {
        v_count: opi.v_count,
        alpha: opi.alpha,
        timeframe: cap + 1,
        intervals,
    }
}
