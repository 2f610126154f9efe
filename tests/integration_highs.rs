// tests/integration_highs.rs
//! End-to-end solves through the HiGHS backend.

use l321_core::batch::{self, label_graph};
use l321_core::config::Config;
use l321_core::graph::{DistanceMap, Graph};
use l321_core::model::BuildOptions;
use l321_core::solve::{HighsSolver, SolveOptions};
use l321_core::types::Status;
use l321_core::verify;
use std::fs;
use std::time::Duration;

fn cycle(n: u64) -> Graph {
    Graph::from_edges((0..n).map(|i| (i, (i + 1) % n)))
}

fn grid(side: u64) -> Graph {
    let mut edges = Vec::new();
    for r in 0..side {
        for c in 0..side {
            let v = r * side + c;
            if c + 1 < side {
                edges.push((v, v + 1));
            }
            if r + 1 < side {
                edges.push((v, v + side));
            }
        }
    }
    Graph::from_edges(edges)
}

fn solve(graph: &Graph, build: BuildOptions, limit: Duration) -> (i64, Status, Vec<i64>) {
    solve_with(graph, build, limit, true)
}

fn solve_with(
    graph: &Graph,
    build: BuildOptions,
    limit: Duration,
    greedy_fallback: bool,
) -> (i64, Status, Vec<i64>) {
    let solver = HighsSolver::new().unwrap();
    let opts = SolveOptions {
        time_limit: limit,
        greedy_fallback,
    };
    let (result, labeling) = label_graph("g", graph, &build, &solver, &opts).unwrap();
    assert_eq!(result.lambda, labeling.span);
    (labeling.span, labeling.status, labeling.labels)
}

#[test]
fn test_single_edge() {
    let g = Graph::from_edges([(0, 1)]);
    let (span, status, mut labels) = solve(&g, BuildOptions::default(), Duration::from_secs(60));
    assert_eq!(status, Status::Optimal);
    assert_eq!(span, 3);
    labels.sort_unstable();
    assert_eq!(labels, vec![0, 3]);
}

#[test]
fn test_single_vertex() {
    let g = Graph::with_vertices([5], []);
    let (span, status, labels) = solve(&g, BuildOptions::default(), Duration::from_secs(60));
    assert_eq!(status, Status::Optimal);
    assert_eq!(span, 0);
    assert_eq!(labels, vec![0]);
}

#[test]
fn test_known_optima() {
    let cases = [
        (Graph::from_edges([(0, 1), (1, 2)]), 5),
        (Graph::from_edges([(0, 1), (1, 2), (2, 0)]), 6),
        (Graph::from_edges([(0, 1), (0, 2), (0, 3)]), 7),
        (cycle(4), 7),
        (cycle(6), 7),
        (cycle(8), 7),
    ];
    for (g, lambda) in cases {
        for build in [BuildOptions::default(), BuildOptions { tighten_bounds: false }] {
            let (span, status, labels) = solve(&g, build, Duration::from_secs(60));
            assert_eq!(status, Status::Optimal);
            assert_eq!(span, lambda);
            assert!(verify::is_valid(&DistanceMap::compute(&g), &labels));
        }
    }
}

#[test]
fn test_tiny_time_limit_reports_best_found() {
    let g = grid(8);
    let (span, status, labels) = solve(&g, BuildOptions::default(), Duration::from_millis(1));
    assert_eq!(status, Status::BestFound);
    assert_eq!(labels.len(), 64);
    assert!(verify::is_valid(&DistanceMap::compute(&g), &labels));
    assert_eq!(span, labels.iter().copied().max().unwrap());
}

#[test]
fn test_tiny_time_limit_without_fallback_is_never_optimal() {
    // Only the solver's own incumbent can be reported here, if it has one.
    let g = grid(8);
    for build in [BuildOptions::default(), BuildOptions { tighten_bounds: false }] {
        let (span, status, labels) = solve_with(&g, build, Duration::from_millis(1), false);
        match status {
            Status::BestFound => {
                assert_eq!(labels.len(), 64);
                assert!(verify::is_valid(&DistanceMap::compute(&g), &labels));
                assert_eq!(span, labels.iter().copied().max().unwrap());
            }
            Status::Infeasible => {
                assert_eq!(span, -1);
                assert!(labels.is_empty());
            }
            Status::Optimal => panic!("1 ms is not enough to prove optimality"),
        }
    }
}

#[test]
fn test_batch_on_seven_cycle() {
    let d = tempfile::tempdir().unwrap();
    let input = d.path().join("graphs");
    fs::create_dir_all(&input).unwrap();
    fs::write(
        input.join("c7.txt"),
        "# seven cycle\n0 1\n1 2\n2 3\n3 4\n4 5\n5 6\n6 0\n",
    )
    .unwrap();
    let config = Config {
        input_dir: input,
        summary_dir: d.path().join("results"),
        labeling_dir: d.path().join("labelings"),
        ..Config::default()
    };

    let solver = HighsSolver::new().unwrap();
    let report = batch::run(&config, &solver, |_, _, _| {}).unwrap();
    assert_eq!(report.summary.optimal, 1);

    let result = report.outcomes[0].result().unwrap();
    assert_eq!(result.lambda, 9);
    assert_eq!(result.status, Status::Optimal);

    let mut rdr = csv::Reader::from_path(config.labeling_dir.join("c7.csv")).unwrap();
    let labels: Vec<i64> = rdr
        .records()
        .map(|r| r.unwrap()[1].parse().unwrap())
        .collect();
    assert_eq!(labels.len(), 7);
    assert_eq!(labels.iter().copied().max(), Some(9));
    assert!(verify::is_valid(&DistanceMap::compute(&cycle(7)), &labels));

    let summary = fs::read_to_string(config.summary_dir.join("c7.csv")).unwrap();
    assert!(summary.lines().nth(1).unwrap().ends_with(",9,OPTIMAL"));
}
