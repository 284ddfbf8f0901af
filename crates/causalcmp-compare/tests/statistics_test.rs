//! Statistic registry tests: T7-STAT-01 through T7-STAT-10.

use causalcmp_compare::statistics::builtins::structural_hamming_distance;
use causalcmp_compare::{
    DataModel, DataRequirement, Normalization, Statistic, StatisticRegistry,
};
use causalcmp_core::config::ComparisonConfig;
use causalcmp_core::constants;
use causalcmp_core::errors::{CausalCmpErrorCode, StatError};
use causalcmp_core::{ParamValue, Parameters};
use causalcmp_graph::{parse_graph, parse_graph_with_nodes, Graph, Node};

fn eval(registry: &StatisticRegistry, abbr: &str, truth: &Graph, estimate: &Graph) -> f64 {
    registry
        .evaluate(abbr, truth, estimate, None, &Parameters::new())
        .unwrap()
}

fn confounded_truth() -> Graph {
    let nodes = [Node::measured("X"), Node::latent("L"), Node::measured("Y")];
    parse_graph_with_nodes(&nodes, "L-->X, L-->Y").unwrap()
}

fn tabular() -> DataModel {
    DataModel::Tabular {
        variables: vec!["X".into(), "Y".into()],
        rows: vec![vec![0.0, 1.0], vec![1.0, 0.0]],
    }
}

fn sample_size_statistic() -> Statistic {
    Statistic::new("N", "Rows in the dataset", |ctx| {
        Ok(ctx.data.map(|d| d.sample_size()).unwrap_or(0) as f64)
    })
    .with_requirement(DataRequirement::Tabular)
}

// T7-STAT-01: every built-in is registered, in abbreviation order.
#[test]
fn t7_stat_01_builtins_registered() {
    let registry = StatisticRegistry::with_builtins();
    assert_eq!(registry.len(), 42);
    for abbr in [
        "AP", "AR", "AF1", "AMCC", "AHP", "AHR", "AHF1", "AHPC", "AHRC", "2CP", "2CR", "TailP",
        "TailR", "CircP", "CircR", "CollP", "CollR", "UncovErr", "DAncP", "DAncR", "NDAncP",
        "SHD", "NormSHD", "#EdgesT", "#EdgesE", "#DD", "#PD", "#NL", "#PL", "LegalPAG",
        "LegalMAG", "LegalCPDAG", "Cyclic", "AlmostCyclic", "MaxClique", "BidirLatentP",
        "AP_PAG", "AR_PAG", "AHP_PAG", "AHR_PAG", "AHP_CPDAG", "AHR_CPDAG",
    ] {
        assert!(registry.get(abbr).is_some(), "missing {abbr}");
    }
    let abbreviations = registry.abbreviations();
    let mut sorted = abbreviations.clone();
    sorted.sort_unstable();
    assert_eq!(abbreviations, sorted);
}

// T7-STAT-02: adjacency and distance statistics on the chain example.
#[test]
fn t7_stat_02_chain_example() {
    let registry = StatisticRegistry::with_builtins();
    let truth = parse_graph("X-->Y, Y-->Z").unwrap();
    let estimate = parse_graph("X-->Y, X---Z").unwrap();

    assert_eq!(eval(&registry, "AP", &truth, &estimate), 0.5);
    assert_eq!(eval(&registry, "AR", &truth, &estimate), 0.5);
    assert_eq!(eval(&registry, "AF1", &truth, &estimate), 0.5);
    assert_eq!(eval(&registry, "SHD", &truth, &estimate), 2.0);
    assert_eq!(structural_hamming_distance(&truth, &truth), 0);
    assert!((eval(&registry, "NormSHD", &truth, &estimate) - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(eval(&registry, "#EdgesT", &truth, &estimate), 2.0);
    assert_eq!(eval(&registry, "#EdgesE", &truth, &estimate), 2.0);
}

// T7-STAT-03: undefined ratios are NaN, not errors.
#[test]
fn t7_stat_03_undefined_ratio_is_nan() {
    let registry = StatisticRegistry::with_builtins();
    let g = parse_graph("X---Y").unwrap();
    assert!(eval(&registry, "AHP", &g, &g).is_nan());
    assert!(eval(&registry, "2CR", &g, &g).is_nan());
}

// T7-STAT-04: unknown abbreviations fail with a typed error.
#[test]
fn t7_stat_04_unknown_statistic() {
    let registry = StatisticRegistry::with_builtins();
    let g = parse_graph("X-->Y").unwrap();
    let err = registry
        .evaluate("NoSuchStat", &g, &g, None, &Parameters::new())
        .unwrap_err();
    assert_eq!(
        err,
        StatError::UnknownStatistic {
            abbreviation: "NoSuchStat".into()
        }
    );
    assert!(err.coded_string().starts_with('['));
}

// T7-STAT-05: data requirements are checked before the function runs.
#[test]
fn t7_stat_05_data_requirements() {
    let mut registry = StatisticRegistry::new();
    assert!(registry.register(sample_size_statistic()).is_none());
    assert!(registry.register(sample_size_statistic()).is_some());

    let g = parse_graph("X-->Y").unwrap();
    let params = Parameters::new();

    let missing = registry.evaluate("N", &g, &g, None, &params).unwrap_err();
    assert!(matches!(missing, StatError::MissingData { .. }));

    let covariance = DataModel::Covariance {
        variables: vec!["X".into(), "Y".into()],
        sample_size: 50,
        matrix: vec![vec![1.0, 0.2], vec![0.2, 1.0]],
    };
    let mismatch = registry
        .evaluate("N", &g, &g, Some(&covariance), &params)
        .unwrap_err();
    assert_eq!(
        mismatch,
        StatError::DataTypeMismatch {
            statistic: "N".into(),
            expected: "tabular",
            found: "covariance",
        }
    );

    let data = tabular();
    assert_eq!(registry.evaluate("N", &g, &g, Some(&data), &params), Ok(2.0));
}

// T7-STAT-06: transformed-truth variants see the CPDAG or PAG of the truth.
#[test]
fn t7_stat_06_against_transformed_truth() {
    let registry = StatisticRegistry::with_builtins();
    let chain = parse_graph("X-->Y, Y-->Z").unwrap();
    assert_eq!(eval(&registry, "AHR", &chain, &chain), 1.0);
    assert_eq!(eval(&registry, "AHP_CPDAG", &chain, &chain), 0.0);
    assert!(eval(&registry, "AHR_CPDAG", &chain, &chain).is_nan());

    let truth = confounded_truth();
    let estimate = parse_graph("X<->Y").unwrap();
    assert_eq!(eval(&registry, "AP", &truth, &estimate), 0.0);
    assert_eq!(eval(&registry, "AP_PAG", &truth, &estimate), 1.0);
    assert_eq!(eval(&registry, "AR_PAG", &truth, &estimate), 1.0);
    assert_eq!(eval(&registry, "AHP_PAG", &truth, &estimate), 0.0);

    let cyclic = parse_graph("A-->B, B-->A2, A2-->A").unwrap();
    let err = registry
        .evaluate("AP_PAG", &cyclic, &cyclic, None, &Parameters::new())
        .unwrap_err();
    assert!(matches!(err, StatError::Transform(_)));
}

// T7-STAT-07: bidirected edges are checked against latent treks, bounded
// by the max_trek_length parameter.
#[test]
fn t7_stat_07_bidirected_latent_precision() {
    let registry = StatisticRegistry::with_builtins();
    let estimate = parse_graph("X<->Y").unwrap();
    assert_eq!(eval(&registry, "BidirLatentP", &confounded_truth(), &estimate), 1.0);
    assert_eq!(
        eval(&registry, "BidirLatentP", &parse_graph("X-->Y").unwrap(), &estimate),
        0.0
    );

    let mut short = Parameters::new();
    short.set(constants::PARAM_MAX_TREK_LENGTH, ParamValue::Int(1));
    let value = registry
        .evaluate("BidirLatentP", &confounded_truth(), &estimate, None, &short)
        .unwrap();
    assert_eq!(value, 0.0);
}

// T7-STAT-08: flags, markup counts and cliques on the estimate.
#[test]
fn t7_stat_08_estimate_properties() {
    let registry = StatisticRegistry::with_builtins();
    let truth = parse_graph("X-->Y").unwrap();

    let directed = parse_graph("X-->Y").unwrap();
    assert_eq!(eval(&registry, "#DD", &truth, &directed), 1.0);
    assert_eq!(eval(&registry, "#PL", &truth, &directed), 1.0);
    assert_eq!(eval(&registry, "#NL", &truth, &directed), 0.0);
    assert_eq!(eval(&registry, "#PD", &truth, &directed), 0.0);

    assert_eq!(eval(&registry, "LegalPAG", &truth, &parse_graph("X o-o Y").unwrap()), 1.0);
    assert_eq!(eval(&registry, "LegalMAG", &truth, &parse_graph("X o-o Y").unwrap()), 0.0);
    assert_eq!(eval(&registry, "LegalCPDAG", &truth, &parse_graph("X---Y").unwrap()), 1.0);

    let cyclic = parse_graph("A-->B, B-->C, C-->A").unwrap();
    assert_eq!(eval(&registry, "Cyclic", &truth, &cyclic), 1.0);
    assert_eq!(eval(&registry, "AlmostCyclic", &truth, &cyclic), 0.0);
    let almost = parse_graph("A-->B, B-->C, A<->C").unwrap();
    assert_eq!(eval(&registry, "AlmostCyclic", &truth, &almost), 1.0);

    let cliques = parse_graph("A---B, B---C, A---C, C---D").unwrap();
    assert_eq!(eval(&registry, "MaxClique", &truth, &cliques), 3.0);
}

// T7-STAT-09: evaluate_all and configured selections.
#[test]
fn t7_stat_09_evaluate_all_and_configured() {
    let registry = StatisticRegistry::with_builtins();
    let truth = parse_graph("X-->Y, Y-->Z").unwrap();
    let estimate = parse_graph("X-->Y, X---Z").unwrap();
    let params = Parameters::new();

    let all = registry.evaluate_all(&truth, &estimate, None, &params);
    assert_eq!(all.len(), registry.len());
    assert!(all.values().all(|r| r.is_ok()));
    assert_eq!(all["AP"], Ok(0.5));

    let config = ComparisonConfig {
        statistics: vec!["AR".into(), "Bogus".into()],
        ..Default::default()
    };
    let selected = registry.evaluate_configured(&config, &truth, &estimate, None, &params);
    assert_eq!(selected.len(), 2);
    assert_eq!(selected["AR"], Ok(0.5));
    assert!(matches!(
        selected["Bogus"],
        Err(StatError::UnknownStatistic { .. })
    ));
}

// T7-STAT-10: normalizations map raw values onto [0, 1].
#[test]
fn t7_stat_10_normalizations() {
    let registry = StatisticRegistry::with_builtins();
    let shd = registry.get("SHD").unwrap();
    assert_eq!(shd.normalized(0.0), 1.0);
    assert!(shd.normalized(3.0) < 1.0);
    assert_eq!(
        registry.get("LegalPAG").unwrap().normalization(),
        Normalization::Indicator
    );
    assert_eq!(registry.get("AP").unwrap().normalized(0.25), 0.25);
    assert_eq!(Normalization::Indicator.apply(2.0), 1.0);
    assert!(Normalization::Indicator.apply(f64::NAN).is_nan());
}
