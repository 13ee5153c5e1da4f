//! End-to-end runs through the parser and the driver.

use std::path::Path;

use tsp_metaheur::aco::AcoConfig;
use tsp_metaheur::ga::GaConfig;
use tsp_metaheur::tabu::TabuConfig;
use tsp_metaheur::{
    Driver, DriverConfig, Instance, StopReason, StrategyConfig, TspError, TsplibParser,
};

const RECTANGLE: &str = "\
NAME: rectangle
COMMENT: four corners of a 10 x 10 box
TYPE: TSP
DIMENSION: 4
EDGE_WEIGHT_TYPE: EUC_2D
NODE_COORD_SECTION
1 0 0
2 10 10
3 0 10
4 10 0
EOF
";

fn unit_square() -> Instance {
    Instance::from_coords("square", &[(0.0, 0.0), (1.0, 1.0), (0.0, 1.0), (1.0, 0.0)]).unwrap()
}

fn strategies(seed: u64) -> Vec<StrategyConfig> {
    vec![
        GaConfig::default()
            .with_population_size(12)
            .with_max_generations(60)
            .with_seed(seed)
            .into(),
        AcoConfig::default()
            .with_num_ants(10)
            .with_max_iterations(40)
            .with_seed(seed)
            .into(),
        TabuConfig::default()
            .with_max_iterations(200)
            .with_neighborhood_size(20)
            .with_seed(seed)
            .into(),
    ]
}

#[test]
fn test_unit_square_all_strategies() {
    let instance = unit_square();
    for strategy in strategies(42) {
        let report = Driver::run(&instance, &DriverConfig::new(strategy)).unwrap();
        assert!(
            (report.cost - 4.0).abs() < 1e-9,
            "{} reached {} on the unit square",
            report.strategy,
            report.cost
        );
        assert!(report.tour.is_valid(4));
        assert_eq!(report.stop_reason, StopReason::StrategyFinished);
    }
}

#[test]
fn test_single_point_rejected() {
    let result = Instance::from_coords("dot", &[(3.0, 3.0)]);
    assert!(matches!(
        result,
        Err(TspError::DegenerateInstance { cities: 1 })
    ));

    let text = "NODE_COORD_SECTION\n1 3 3\nEOF\n";
    let parsed = TsplibParser::parse(text, Path::new("dot.tsp"));
    assert!(matches!(
        parsed,
        Err(TspError::DegenerateInstance { cities: 1 })
    ));
}

#[test]
fn test_rectangle_from_tsplib() {
    let instance = TsplibParser::parse(RECTANGLE, Path::new("rectangle.tsp")).unwrap();
    assert_eq!(instance.name(), "rectangle");
    assert_eq!(instance.len(), 4);

    for strategy in strategies(7) {
        let report = Driver::run(&instance, &DriverConfig::new(strategy)).unwrap();
        assert!(
            (report.cost - 40.0).abs() < 1e-9,
            "{} reached {} on the rectangle",
            report.strategy,
            report.cost
        );
        let mut cities = report.one_based_tour();
        cities.sort_unstable();
        assert_eq!(cities, vec![1, 2, 3, 4]);
    }
}

#[test]
fn test_missing_file_reports_io_error() {
    let result = TsplibParser::parse_file(Path::new("/nonexistent/instance.tsp"));
    assert!(matches!(result, Err(TspError::Io { .. })));
}

#[test]
fn test_same_seed_same_report() {
    let coords: Vec<(f64, f64)> = (0..12)
        .map(|i| ((i * 29 % 23) as f64, (i * 17 % 19) as f64))
        .collect();
    let instance = Instance::from_coords("grid", &coords).unwrap();

    for (a, b) in strategies(11).into_iter().zip(strategies(11)) {
        let first = Driver::run(&instance, &DriverConfig::new(a)).unwrap();
        let second = Driver::run(&instance, &DriverConfig::new(b)).unwrap();
        assert_eq!(first.tour, second.tour, "{} not reproducible", first.strategy);
        assert_eq!(first.cost_history, second.cost_history);
    }
}

#[test]
fn test_larger_instance_improves_on_start() {
    let coords: Vec<(f64, f64)> = (0..30)
        .map(|i| {
            let t = i as f64 * 0.7;
            (50.0 + 40.0 * t.cos() * (1.0 + 0.1 * (i % 3) as f64), 50.0 + 40.0 * t.sin())
        })
        .collect();
    let instance = Instance::from_coords("ring", &coords).unwrap();

    let config = DriverConfig::new(
        TabuConfig::default()
            .with_max_iterations(2_000)
            .with_neighborhood_size(30)
            .with_seed(5),
    );
    let report = Driver::run(&instance, &config).unwrap();
    let first = report.cost_history[0];
    assert!(
        report.cost < first,
        "expected improvement over {first}, got {}",
        report.cost
    );
}
