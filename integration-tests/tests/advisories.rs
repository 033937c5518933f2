use engset::{Algorithm, Config, Error, Status, blocking_prob, n_servers, total_traffic};
use integration_tests::capture_logs;

const TRAFFIC_WARNING: &str = "total traffic exceeds the number of sources";

fn warnings(logs: &str) -> Vec<&str> {
    logs.lines().filter(|line| line.contains("WARN")).collect()
}

#[test]
fn ordinary_requests_are_quiet() {
    let (solution, logs) = capture_logs(|| blocking_prob(5, 20, 4.0, None, &Config::default()));

    assert_eq!(solution.expect("valid").status, Status::Converged);
    assert!(warnings(&logs).is_empty(), "{logs}");
}

#[test]
fn heavy_traffic_input_is_flagged() {
    let (solution, logs) = capture_logs(|| blocking_prob(1, 2, 3.0, None, &Config::default()));
    assert!(solution.is_ok());
    assert!(logs.contains(TRAFFIC_WARNING), "{logs}");

    let (solution, logs) = capture_logs(|| n_servers(0.1, 2, 3.0, None, &Config::default()));
    assert!(solution.is_ok());
    assert!(logs.contains(TRAFFIC_WARNING), "{logs}");
}

#[test]
fn heavy_traffic_result_is_flagged() {
    let (solution, logs) = capture_logs(|| total_traffic(0.9, 1, 2, None, &Config::default()));

    let solution = solution.expect("valid");
    assert_eq!(solution.status, Status::Converged);
    assert!(solution.value > 2.0);
    assert!(logs.contains(TRAFFIC_WARNING), "{logs}");
}

#[test]
fn unstable_algorithms_are_flagged() {
    let (_, logs) = capture_logs(|| {
        blocking_prob(5, 20, 4.0, Some(Algorithm::fixed_point()), &Config::default())
    });
    assert!(
        logs.contains("fixed-point iteration for the blocking probability can be unstable"),
        "{logs}"
    );

    let (_, logs) = capture_logs(|| {
        total_traffic(0.2, 5, 20, Some(Algorithm::newton()), &Config::default())
    });
    assert!(
        logs.contains("Newton's method for the total traffic can be unstable"),
        "{logs}"
    );

    let (_, logs) = capture_logs(|| {
        blocking_prob(5, 20, 4.0, Some(Algorithm::newton()), &Config::default())
    });
    assert!(warnings(&logs).is_empty(), "{logs}");
}

#[test]
fn usage_errors_come_before_advisories() {
    let bad_guess = Some(f64::NAN);

    let (solution, logs) = capture_logs(|| {
        blocking_prob(
            1,
            2,
            3.0,
            Some(Algorithm::FixedPoint {
                initial_guess: bad_guess,
            }),
            &Config::default(),
        )
    });
    assert!(matches!(solution, Err(Error::Solver(_))));
    assert!(warnings(&logs).is_empty(), "{logs}");

    let (solution, logs) = capture_logs(|| {
        total_traffic(
            0.2,
            5,
            20,
            Some(Algorithm::Newton {
                initial_guess: bad_guess,
            }),
            &Config::default(),
        )
    });
    assert!(matches!(solution, Err(Error::Solver(_))));
    assert!(warnings(&logs).is_empty(), "{logs}");

    let (solution, logs) = capture_logs(|| {
        n_servers(0.1, 2, 3.0, Some(Algorithm::newton()), &Config::default())
    });
    assert!(matches!(solution, Err(Error::UnsupportedAlgorithm { .. })));
    assert!(warnings(&logs).is_empty(), "{logs}");
}

#[test]
fn iterations_and_results_are_traced() {
    let (solution, logs) = capture_logs(|| {
        blocking_prob(5, 20, 4.0, Some(Algorithm::Bisection), &Config::default())
    });
    let solution = solution.expect("valid");

    let iterations = logs.lines().filter(|line| line.contains("iteration")).count();
    assert_eq!(iterations, solution.iters - 1);
    assert!(logs.contains("blocking_prob"));
    assert!(logs.contains("solved for blocking probability"), "{logs}");
}
