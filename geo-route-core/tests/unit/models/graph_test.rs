use super::*;
use crate::helpers::models::create_point;

fn get_coordinates(size: usize) -> Vec<Coordinate> {
    (0..size).map(|idx| Coordinate::new(idx as f64, idx as f64 / 2.)).collect()
}

#[test]
fn can_compute_each_pair_distance_once() {
    for size in [1, 2, 5, 12] {
        let mut calls = 0;

        let graph = DistanceGraph::from_coordinates(&get_coordinates(size), |from, to| {
            calls += 1;
            from.distance_to(to)
        })
        .expect("cannot create graph");

        assert_eq!(calls, size * (size - 1) / 2);
        assert_eq!(graph.size(), size);
    }
}

#[test]
fn can_create_symmetric_graph_with_zero_diagonal() {
    let start = create_point("start", 52.52, 13.40);
    let waypoints = vec![create_point("a", 52.53, 13.45), create_point("b", 52.50, 13.38), create_point("c", 52.52, 13.40)];

    let graph = DistanceGraph::new(&start, &waypoints).expect("cannot create graph");

    assert_eq!(graph.size(), 4);
    for from in 0..4 {
        assert_eq!(graph.weight(from, from), Some(0.));
        for to in 0..4 {
            assert_eq!(graph.weight(from, to), graph.weight(to, from));
            assert!(graph.weight(from, to).is_some_and(|weight| weight >= 0.));
        }
    }
    // start and the last waypoint are coincident
    assert_eq!(graph.weight(0, 3), Some(0.));
    assert!(graph.weight(0, 1).is_some_and(|weight| weight > 0.));
    assert_eq!(graph.weight(0, 4), None);
}

#[test]
fn can_keep_start_point_as_first_node() {
    let start = create_point("start", 0., 0.);
    let waypoints = vec![create_point("a", 0., 1.), create_point("b", 0., 2.)];

    let graph = DistanceGraph::new(&start, &waypoints).expect("cannot create graph");

    assert_eq!(graph.weight(0, 1).map(|weight| weight.round()), Some(111.));
    assert_eq!(graph.weight(0, 2).map(|weight| weight.round()), Some(223.));
}

#[test]
fn can_sort_neighbours_by_distance_then_index() {
    let start = create_point("start", 0., 0.);
    let waypoints = vec![
        create_point("far", 0., 3.),
        create_point("near", 0., 1.),
        create_point("near twin", 0., -1.),
        create_point("middle", 0., 2.),
    ];

    let graph = DistanceGraph::new(&start, &waypoints).expect("cannot create graph");

    assert_eq!(graph.neighbours(0), &[2, 3, 4, 1]);
    assert_eq!(graph.neighbours(2), &[0, 4, 1, 3]);
}

parameterized_test! {can_fail_on_invalid_coordinate, (lat, lng, index), {
    can_fail_on_invalid_coordinate_impl(lat, lng, index);
}}

can_fail_on_invalid_coordinate! {
    case01_start: (200., 0., 0),
    case02_first_waypoint: (0., 181., 1),
    case03_last_waypoint: (-91., 0., 2),
}

fn can_fail_on_invalid_coordinate_impl(lat: f64, lng: f64, index: usize) {
    let mut points = vec![create_point("start", 0., 0.), create_point("a", 1., 1.), create_point("b", 2., 2.)];
    points[index] = create_point("bad", lat, lng);

    let result = DistanceGraph::new(&points[0], &points[1..]);

    assert_eq!(result.err(), Some(RouteError::InvalidCoordinate { index, name: "bad".to_string(), lat, lng }));
}

#[test]
fn can_fail_on_invalid_weight() {
    let result = DistanceGraph::from_coordinates(&get_coordinates(3), |_, _| f64::NAN);

    assert!(matches!(result, Err(RouteError::InvalidGraph(_))));
}
