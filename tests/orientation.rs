use dynamic_orientation::orientation::Orientation;

mod common;

#[test]
fn test_orient_and_outdegrees() {
    let mut orientation = Orientation::new(4);
    orientation.orient_edge(0, 1);
    orientation.orient_edge(0, 2);
    orientation.orient_edge(3, 0);

    assert_eq!(orientation.outdegree(0), 2);
    assert_eq!(orientation.outdegree(3), 1);
    assert_eq!(orientation.outdegree(1), 0);
    assert_eq!(orientation.max_outdegree(), 2);

    assert!(orientation.is_oriented(0, 1));
    assert!(!orientation.is_oriented(1, 0));
    assert!(orientation.contains(1, 0));
    assert!(!orientation.contains(1, 2));
}

#[test]
fn test_flip() {
    let mut orientation = Orientation::new(3);
    orientation.orient_edge(1, 2);
    orientation.flip_edge(1, 2);

    assert!(orientation.is_oriented(2, 1));
    assert!(!orientation.is_oriented(1, 2));
    assert_eq!(orientation.outdegree(1), 0);
    assert_eq!(orientation.outdegree(2), 1);

    // Flipping back restores the original direction.
    orientation.flip_edge(2, 1);
    assert!(orientation.is_oriented(1, 2));
    assert_eq!(orientation.outdegree(2), 0);
}

#[test]
fn test_remove_frees_the_slot() {
    let mut orientation = Orientation::new(2);
    orientation.orient_edge(0, 1);
    orientation.remove_edge(0, 1);
    assert!(!orientation.contains(0, 1));
    assert_eq!(orientation.max_outdegree(), 0);

    // The edge can come back in the other direction.
    orientation.orient_edge(1, 0);
    assert!(orientation.is_oriented(1, 0));
}

#[test]
fn test_neighbour_lookups() {
    let mut orientation = Orientation::new(6);
    orientation.orient_edge(2, 5);
    orientation.orient_edge(2, 1);
    orientation.orient_edge(2, 4);
    orientation.orient_edge(0, 2);
    orientation.orient_edge(3, 2);

    // Out-neighbours come back in source-major order of the direction set.
    assert_eq!(orientation.out_neighbours(2), vec![1, 4, 5]);
    assert_eq!(orientation.in_neighbours(2), vec![0, 3]);
    assert_eq!(orientation.out_neighbours(5), vec![]);
    assert_eq!(
        orientation.all_edges(),
        vec![(0, 2), (2, 1), (2, 4), (2, 5), (3, 2)]
    );
}

#[test]
#[should_panic(expected = "already oriented")]
fn test_double_orientation_is_rejected() {
    let mut orientation = Orientation::new(2);
    orientation.orient_edge(0, 1);
    orientation.orient_edge(1, 0);
}

#[test]
#[should_panic(expected = "not oriented")]
fn test_removing_a_missing_direction_is_rejected() {
    let mut orientation = Orientation::new(2);
    orientation.orient_edge(0, 1);
    orientation.remove_edge(1, 0);
}

#[test]
fn test_dot_rendering() {
    let mut orientation = Orientation::new(3);
    orientation.orient_edge(1, 0);
    orientation.orient_edge(1, 2);
    let dot = orientation.to_dot();
    assert!(dot.starts_with("digraph {"));
    assert!(dot.contains("  1 -> 0\n"));
    assert!(dot.contains("  1 -> 2\n"));
}
