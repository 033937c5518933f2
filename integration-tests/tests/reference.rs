use approx::assert_abs_diff_eq;
use engset::{
    Algorithm, Config, Status, blocking_prob, count_from_f64, n_servers, n_sources, total_traffic,
};
use integration_tests::init_tracing;

const REFERENCE: [(u64, u64, f64, f64); 4] = [
    (5, 10, 2.0, 0.016_349_962),
    (5, 20, 4.0, 0.180_711_136),
    (5, 20, 8.0, 0.471_479_132),
    (5, 40, 20.0, 0.763_874_656),
];

#[test]
fn every_algorithm_matches_reference_values() {
    init_tracing();
    let config = Config::default();

    for (servers, sources, traffic, expected) in REFERENCE {
        for algorithm in [
            Algorithm::Bisection,
            Algorithm::fixed_point(),
            Algorithm::newton(),
        ] {
            let solution = blocking_prob(servers, sources, traffic, Some(algorithm), &config)
                .expect("valid parameters");

            assert_eq!(solution.status, Status::Converged, "{algorithm}");
            assert_abs_diff_eq!(solution.value, expected, epsilon = 1e-6);
        }
    }
}

#[test]
fn each_quantity_recovers_the_others() {
    init_tracing();
    let config = Config::default();
    let (servers, sources, traffic) = (5, 20, 4.0);

    let p = blocking_prob(servers, sources, traffic, None, &config).expect("valid parameters");
    assert_eq!(p.status, Status::Converged);

    let solved = total_traffic(p.value, servers, sources, None, &config).expect("valid");
    assert_abs_diff_eq!(solved.value, traffic, epsilon = 1e-6);

    // Nudging the target resolves ties at the exact blocking probability.
    let solved = n_servers(p.value * (1.0 + 1e-9), sources, traffic, None, &config).expect("valid");
    assert_eq!(solved.value, servers);

    let solved = n_sources(p.value * (1.0 + 1e-9), servers, traffic, None, &config).expect("valid");
    assert_eq!(solved.value, sources);
}

#[test]
fn counts_given_as_floats() {
    let config = Config::default();
    let servers = count_from_f64("n_servers", 5.0).expect("whole number");
    let sources = count_from_f64("n_sources", 20.0).expect("whole number");

    let solution = blocking_prob(servers, sources, 4.0, None, &config).expect("valid parameters");
    assert_abs_diff_eq!(solution.value, 0.180_711_136, epsilon = 1e-6);
}

#[test]
fn solver_budget_is_call_scoped() {
    let tight = Config::new(3, Config::default().tol()).expect("valid config");

    let limited = blocking_prob(5, 20, 4.0, Some(Algorithm::Bisection), &tight).expect("valid");
    assert_eq!(limited.status, Status::MaxIters);
    assert_eq!(limited.iters, 3);

    let full = blocking_prob(5, 20, 4.0, Some(Algorithm::Bisection), &Config::default())
        .expect("valid");
    assert_eq!(full.status, Status::Converged);
}

#[test]
fn unreachable_source_target_is_unbounded() {
    let solution = n_sources(0.5 + 1e-7, 1, 1.0, None, &Config::default()).expect("valid");

    assert_eq!(solution.status, Status::Unbounded);
    assert_eq!(solution.value, engset::UNBOUNDED_SOURCES);
}
