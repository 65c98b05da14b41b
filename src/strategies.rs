//! Baseline orientation strategies for comparison with the interval solver: Kowalik's
//! offline flip-free construction and Brodal and Fagerberg's online bounded-out-degree
//! maintenance ("Dynamic Representations of Sparse Graphs", Lemma 3). Both are stated for
//! forests, i.e. instances with `alpha == 1`.

use crate::generator::{Command, OpKind, OperationInstance};
use crate::graphs::{Edge, Forest};
use crate::orientation::Orientation;

/// Result of the Brodal-Fagerberg strategy: the peak out-degree observed over the whole
/// sequence and the total number of edge re-orientations performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrodalOutcome {
    pub max_outdegree: usize,
    pub flips: usize,
}

/// Brodal and Fagerberg's strategy: processes the sequence in reverse chronological order,
/// maintaining one orientation with out-degrees below `outdeg_bound` and flipping along a
/// short path whenever an edge re-introduction would exceed it. Each operation contributes
/// at most `log V / log outdeg_bound` flips.
pub fn orient_by_brodal(opi: &OperationInstance, outdeg_bound: usize) -> BrodalOutcome {
    assert_eq!(opi.alpha, 1, "applicable to forests only");
    assert!(outdeg_bound > 1, "the flip-path argument needs a bound above one");

    if opi.sequence.is_empty() {
        return BrodalOutcome {
            max_outdegree: 0,
            flips: 0,
        };
    }

    let mut graphs: Vec<Forest> = (0..opi.sequence.len())
        .map(|_| Forest::new(opi.v_count))
        .collect();
    build_graphs_history(&opi.sequence, &mut graphs);

    // 1-orientation of the final snapshot, then walk the operations backwards.
    let mut orientation = Orientation::new(opi.v_count);
    construct_optimal_orientation(graphs.last().expect("nonempty sequence"), &mut orientation);

    let mut flips = 0;
    let mut max_outdegree = orientation.max_outdegree();
    for cmd in opi.sequence.iter().rev() {
        let Edge(u, v) = cmd.edge;
        match cmd.op {
            // In reverse, an insertion removes the edge, whichever direction it holds.
            OpKind::Insert => {
                if orientation.is_oriented(u, v) {
                    orientation.remove_edge(u, v);
                } else {
                    orientation.remove_edge(v, u);
                }
            }
            // In reverse, a deletion re-introduces the edge, oriented from u.
            OpKind::Delete => {
                if orientation.outdegree(u) >= outdeg_bound {
                    flips += flip_on_short_path(&mut orientation, u, outdeg_bound);
                }
                orientation.orient_edge(u, v);
            }
        }
        max_outdegree = max_outdegree.max(orientation.max_outdegree());
    }

    BrodalOutcome {
        max_outdegree,
        flips,
    }
}

/// Finds a path of length at most `ceil(log V / log outdeg_bound)` from `start` to some
/// vertex with spare out-degree capacity and flips every edge along it, freeing one outgoing
/// slot at `start`. Such a path exists by the arboricity bound. Returns the flip count.
fn flip_on_short_path(orientation: &mut Orientation, start: usize, outdeg_bound: usize) -> usize {
    let v_count = orientation.v_count();
    let limit = ((v_count as f64).log2() / (outdeg_bound as f64).log2()).ceil() as usize;

    let mut visited = vec![false; v_count];
    let mut current_path = vec![start];
    let mut found_path: Vec<usize> = Vec::new();
    seek_short_path(
        orientation,
        start,
        limit,
        outdeg_bound,
        &mut visited,
        &mut current_path,
        &mut found_path,
    );
    assert!(!found_path.is_empty(), "a short flip path must exist");
    log::trace!("flipping along {found_path:?}");

    for pair in found_path.windows(2) {
        orientation.flip_edge(pair[0], pair[1]);
    }
    found_path.len() - 1
}

/// DFS along outgoing edges, keeping the shortest goal path discovered.
fn seek_short_path(
    orientation: &Orientation,
    v: usize,
    distance_left: usize,
    outdeg_bound: usize,
    visited: &mut Vec<bool>,
    current_path: &mut Vec<usize>,
    found_path: &mut Vec<usize>,
) {
    visited[v] = true;

    if orientation.outdegree(v) < outdeg_bound
        && (found_path.is_empty() || current_path.len() < found_path.len())
    {
        *found_path = current_path.clone();
    }

    if distance_left > 0 {
        // Any longer path would overrun the limit.
        for neighbour in orientation.out_neighbours(v) {
            if !visited[neighbour] {
                current_path.push(neighbour);
                seek_short_path(
                    orientation,
                    neighbour,
                    distance_left - 1,
                    outdeg_bound,
                    visited,
                    current_path,
                    found_path,
                );
                current_path.pop();
            }
        }
    }
}

/// Kowalik's offline strategy: orients every snapshot of the dynamic forest without a single
/// inter-snapshot flip, at the cost of a logarithmic out-degree bound. Returns the largest
/// out-degree appearing over the whole sequence.
pub fn orient_by_kowalik(opi: &OperationInstance) -> usize {
    assert_eq!(opi.alpha, 1, "applicable to forests only");

    let timeframe = opi.sequence.len();
    if timeframe == 0 {
        return 0;
    }

    let mut graphs: Vec<Forest> = (0..timeframe).map(|_| Forest::new(opi.v_count)).collect();
    build_graphs_history(&opi.sequence, &mut graphs);

    let mut orientations: Vec<Orientation> = (0..timeframe)
        .map(|_| Orientation::new(opi.v_count))
        .collect();
    construct_orientations(&mut orientations, &graphs, 0, timeframe - 1);

    // The construction must not incur any flips between consecutive snapshots.
    assert_eq!(count_total_flips(&orientations), 0);

    let max_outdegree = max_outdegree_over(&orientations);
    assert!(
        max_outdegree <= timeframe.ilog2() as usize + 1,
        "out-degree above the theoretical bound"
    );
    max_outdegree
}

/// Populates `graphs[t]` with the graph state after the first `t + 1` operations.
fn build_graphs_history(sequence: &[Command], graphs: &mut [Forest]) {
    for t in 0..sequence.len() {
        if t > 0 {
            let previous_edges = graphs[t - 1].all_edges();
            for Edge(u, v) in previous_edges {
                graphs[t].insert_edge(u, v);
            }
        }
        let Edge(u, v) = sequence[t].edge;
        match sequence[t].op {
            OpKind::Insert => graphs[t].insert_edge(u, v),
            OpKind::Delete => graphs[t].delete_edge(u, v),
        };
    }
}

/// Recursively constructs a flip-free sequence of orientations over `[start_time, end_time]`:
/// both halves are solved around the midpoint snapshot, whose optimal 1-orientation then
/// overrides the disagreeing edge directions across the whole range.
fn construct_orientations(
    orientations: &mut [Orientation],
    graphs: &[Forest],
    start_time: usize,
    end_time: usize,
) {
    // Base case: any 1-orientation will do.
    if start_time == end_time {
        construct_optimal_orientation(&graphs[start_time], &mut orientations[start_time]);
        return;
    }

    let mid_time = start_time + (end_time - start_time + 1) / 2;
    construct_orientations(orientations, graphs, start_time, mid_time - 1);
    if mid_time + 1 <= end_time {
        construct_orientations(orientations, graphs, mid_time + 1, end_time);
    }

    // Combine both halves under the midpoint orientation.
    construct_optimal_orientation(&graphs[mid_time], &mut orientations[mid_time]);
    for (from, to) in orientations[mid_time].all_edges() {
        for time in start_time..=end_time {
            if orientations[time].is_oriented(to, from) {
                orientations[time].flip_edge(to, from);
            }
        }
    }
}

/// Optimal 1-orientation of a forest: every edge points towards the root of its tree, roots
/// being scanned upward from vertex 0.
fn construct_optimal_orientation(forest: &Forest, orientation: &mut Orientation) {
    let v_count = forest.v_count();
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); v_count];
    for Edge(u, v) in forest.all_edges() {
        adjacency[u].push(v);
        adjacency[v].push(u);
    }

    let mut visited = vec![false; v_count];
    for root in 0..v_count {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        let mut stack = vec![root];
        while let Some(v) = stack.pop() {
            for &neighbour in &adjacency[v] {
                if !visited[neighbour] {
                    visited[neighbour] = true;
                    orientation.orient_edge(neighbour, v);
                    stack.push(neighbour);
                }
            }
        }
    }
}

/// Number of edges whose direction differs between the two orientations.
pub fn count_flips_between(first: &Orientation, second: &Orientation) -> usize {
    first
        .all_edges()
        .into_iter()
        .filter(|&(from, to)| second.is_oriented(to, from))
        .count()
}

/// Total flips over a sequence of consecutive orientations.
pub fn count_total_flips(orientations: &[Orientation]) -> usize {
    orientations
        .windows(2)
        .map(|pair| count_flips_between(&pair[0], &pair[1]))
        .sum()
}

/// The largest out-degree appearing anywhere in the sequence of orientations.
pub fn max_outdegree_over(orientations: &[Orientation]) -> usize {
    orientations
        .iter()
        .map(Orientation::max_outdegree)
        .max()
        .unwrap_or(0)
}
