use super::*;
use crate::helpers::models::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::sync::Mutex;

fn create_optimizer(open_path: OpenPathPolicy) -> RouteOptimizer {
    RouteOptimizer::new(OptimizerConfig { open_path, ..OptimizerConfig::default() }, Arc::new(Environment::default()))
}

fn get_names(route: &OrderedRoute) -> Vec<&str> {
    route.points().iter().map(|point| point.name.as_str()).collect()
}

#[test]
fn can_return_start_only_when_no_waypoints() {
    let start = create_point("origin", 0., 0.);

    let route = optimize_route(&start, &[]).expect("cannot optimize route");

    assert_eq!(route.points(), &[start]);
}

#[test]
fn can_return_only_possible_order_for_one_waypoint() {
    let paris = create_point("Paris", 48.8566, 2.3522);
    let london = create_point("London", 51.5074, -0.1278);

    for policy in [OpenPathPolicy::FixedStart, OpenPathPolicy::DropLongestEdge] {
        let route = create_optimizer(policy).optimize(&paris, &[london.clone()]).expect("cannot optimize route");

        assert_eq!(route.points(), &[paris.clone(), london.clone()]);
        assert!((route.total_distance() - 343.923).abs() < 1E-3);
    }
}

#[test]
fn can_fail_on_invalid_single_waypoint() {
    let start = create_point("start", 0., 0.);

    let result = optimize_route(&start, &[create_point("a", 0., f64::NAN)]);

    assert!(matches!(result, Err(RouteError::InvalidCoordinate { index: 1, .. })));
}

#[test]
fn can_order_square_corners_optimally() {
    let start = create_point("start", 0., 0.);
    let waypoints = vec![create_point("a", 0., 1.), create_point("b", 1., 1.), create_point("c", 1., 0.)];
    let optimal = get_optimal_distance(&start, &waypoints);

    for policy in [OpenPathPolicy::FixedStart, OpenPathPolicy::DropLongestEdge] {
        let route = create_optimizer(policy).optimize(&start, &waypoints).expect("cannot optimize route");

        assert_eq!(get_names(&route), vec!["start", "c", "b", "a"]);
        assert!((route.total_distance() - optimal).abs() < 1E-9);
    }
}

#[test]
fn can_anchor_route_when_start_is_in_the_middle() {
    let start = create_point("start", 0., 2.);
    let waypoints =
        vec![create_point("w0", 0., 0.), create_point("w1", 0., 1.), create_point("w3", 0., 3.), create_point("w4", 0., 4.)];

    for policy in [OpenPathPolicy::FixedStart, OpenPathPolicy::DropLongestEdge] {
        let route = create_optimizer(policy).optimize(&start, &waypoints).expect("cannot optimize route");

        assert_eq!(get_names(&route), vec!["start", "w1", "w0", "w3", "w4"]);
    }
}

#[test]
fn can_order_points_on_line() {
    let start = create_point("start", 0., 0.);
    let waypoints =
        vec![create_point("4", 0., 4.), create_point("1", 0., 1.), create_point("3", 0., 3.), create_point("2", 0., 2.)];

    let route = optimize_route(&start, &waypoints).expect("cannot optimize route");

    assert_eq!(get_names(&route), vec!["start", "1", "2", "3", "4"]);
}

#[test]
fn can_fail_on_invalid_start() {
    let start = create_point("bad", 200., 0.);
    let waypoints = vec![create_point("a", 0., 1.)];

    for waypoints in [waypoints.as_slice(), &waypoints[..0]] {
        let result = optimize_route(&start, waypoints);

        assert_eq!(
            result,
            Err(RouteError::InvalidCoordinate { index: 0, name: "bad".to_string(), lat: 200., lng: 0. })
        );
    }
}

#[test]
fn can_fail_on_invalid_waypoint_without_dropping_it() {
    let start = create_point("start", 0., 0.);
    let waypoints = vec![create_point("a", 0., 1.), create_point("b", 10., -190.), create_point("c", 1., 1.)];

    let result = optimize_route(&start, &waypoints);

    assert_eq!(result, Err(RouteError::InvalidCoordinate { index: 2, name: "b".to_string(), lat: 10., lng: -190. }));
}

#[test]
fn can_handle_coincident_points() {
    let start = create_point("start", 45., 45.);
    let waypoints = (0..5).map(|idx| create_point(&format!("same{idx}"), 45., 45.)).collect::<Vec<_>>();

    let route = optimize_route(&start, &waypoints).expect("cannot optimize route");

    assert_eq!(route.len(), 6);
    assert_eq!(route.points()[0].name, "start");
    assert_eq!(route.total_distance(), 0.);
}

#[test]
fn can_keep_route_properties_for_random_inputs() {
    let mut rng = SmallRng::seed_from_u64(42);

    for policy in [OpenPathPolicy::FixedStart, OpenPathPolicy::DropLongestEdge] {
        let optimizer = create_optimizer(policy);

        for size in 1..=7 {
            let start = create_random_points(&mut rng, 1, (48., 49.), (2., 3.)).remove(0);
            let waypoints = create_random_points(&mut rng, size, (48., 49.), (2., 3.));

            let route = optimizer.optimize(&start, &waypoints).expect("cannot optimize route");
            let input = std::iter::once(start.clone()).chain(waypoints.iter().cloned()).collect::<Vec<_>>();

            assert_eq!(route.len(), size + 1);
            assert_eq!(route.points()[0], start);
            assert_eq!(get_sorted_coordinates(route.points()), get_sorted_coordinates(&input));

            let optimal = get_optimal_distance(&start, &waypoints);
            assert!(get_route_distance(route.points()) >= optimal - 1E-9);

            // double-tree bound holds only while the start stays a path end: rotation breaks another edge
            if policy == OpenPathPolicy::FixedStart {
                assert!(get_route_distance(route.points()) <= 2. * optimal + 1E-9);
            }
        }
    }
}

#[test]
fn can_produce_same_route_for_same_input() {
    let mut rng = SmallRng::seed_from_u64(7);
    let start = create_point("start", 48.5, 2.5);
    let waypoints = create_random_points(&mut rng, 40, (48., 49.), (2., 3.));

    for policy in [OpenPathPolicy::FixedStart, OpenPathPolicy::DropLongestEdge] {
        let optimizer = create_optimizer(policy);

        let first = optimizer.optimize(&start, &waypoints).expect("cannot optimize route");
        let second = optimizer.optimize(&start, &waypoints).expect("cannot optimize route");

        assert_eq!(first, second);
        assert_eq!(first.len(), 41);
        assert_eq!(first.points()[0], start);
    }
}

#[test]
fn can_improve_initial_spanning_tree_route() {
    let mut rng = SmallRng::seed_from_u64(11);
    let start = create_point("start", 52.5, 13.4);
    let waypoints = create_random_points(&mut rng, 25, (52.3, 52.7), (13.1, 13.7));

    let graph = DistanceGraph::new(&start, &waypoints).expect("cannot create graph");
    let initial = get_path_cost(&graph, &get_preorder_path(&graph, START_NODE));

    let route = optimize_route(&start, &waypoints).expect("cannot optimize route");

    assert!(route.total_distance() < initial);
}

#[test]
fn can_run_optimizer_from_multiple_threads() {
    let mut rng = SmallRng::seed_from_u64(3);
    let start = create_point("start", 40.7, -74.);
    let waypoints = create_random_points(&mut rng, 15, (40.5, 40.9), (-74.2, -73.8));
    let optimizer = RouteOptimizer::default();

    let routes = std::thread::scope(|scope| {
        let handles = (0..4).map(|_| scope.spawn(|| optimizer.optimize(&start, &waypoints))).collect::<Vec<_>>();
        handles.into_iter().map(|handle| handle.join().expect("thread panicked")).collect::<Vec<_>>()
    });

    let expected = optimizer.optimize(&start, &waypoints);
    assert!(routes.iter().all(|route| *route == expected));
}

#[test]
fn can_log_optimization_progress() {
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let logger_messages = messages.clone();
    let environment = Environment::new(Arc::new(move |msg: &str| {
        logger_messages.lock().expect("poisoned").push(msg.to_string());
    }));
    let optimizer = RouteOptimizer::new(OptimizerConfig::default(), Arc::new(environment));
    let start = create_point("start", 0., 0.);

    optimizer.optimize(&start, &[]).expect("cannot optimize route");
    optimizer.optimize(&start, &[create_point("a", 0., 1.), create_point("b", 1., 0.)]).expect("cannot optimize");

    let messages = messages.lock().expect("poisoned");
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0], "no waypoints: the route consists of the start point only");
    assert!(messages[1].starts_with("tour of 4 nodes improved by"));
    assert!(messages[2].starts_with("ordered 2 waypoints in"));
}
