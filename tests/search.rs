use approx::assert_relative_eq;
use divider_calc::*;

use std::cmp::Ordering;

fn assert_ranked(res: &[Solution]) {
    for pair in res.windows(2) {
        assert_ne!(
            rank::compare(&pair[0], &pair[1]),
            Ordering::Greater,
            "{} ranked before {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn half_supply_e12() {
    let res = find_solutions(10.0, 5.0, 5.0, "E12", 100.0, 10_000.0).unwrap();
    assert!(!res.is_empty());
    assert!((res[0].vout() - 5.0).abs() <= 0.25);

    // Exact matches come first; among those the fewest parts, then the least power.
    let best = &res[0];
    assert_eq!(best.error_percent(), 0.0);
    assert_eq!(best.top().members(), &[10_000.0]);
    assert_eq!(best.bottom().members(), &[10_000.0]);
    assert_relative_eq!(best.power(), 0.005);
}

#[test]
fn third_supply_e6() {
    let res = find_solutions(12.0, 4.0, 10.0, "E6", 1000.0, 100_000.0).unwrap();
    assert!(!res.is_empty());
    assert!(res[0].vout() >= 3.6 && res[0].vout() <= 4.4);
}

#[test]
fn loose_tolerance_is_truncated() {
    let res = find_solutions(10.0, 5.0, 50.0, "E24", 100.0, 100_000.0).unwrap();
    assert_eq!(res.len(), RESULT_LIMIT);
    assert!(res.iter().all(|s| s.error_percent() <= 50.0));
    assert_ranked(&res);
}

#[test]
fn results_are_ordered_and_within_tolerance() {
    let res = find_solutions(12.0, 3.3, 15.0, "E12", 1000.0, 50_000.0).unwrap();
    assert!(!res.is_empty());
    assert!(res.len() <= RESULT_LIMIT);
    assert!(res.iter().all(|s| s.error_percent() <= 15.0));
    assert!(res.iter().all(|s| s.vout() > 0.0 && s.vout() < 12.0));
    assert!(res.iter().all(|s| s.power() > 0.0 && s.power().is_finite()));
    assert_ranked(&res);
}

#[test]
fn single_value_catalog() {
    let search = DividerSearch::new(SeriesName::E6).range(1000.0, 1000.0);
    assert_eq!(search.catalog(), vec![1000.0]);
    assert_eq!(search.combinations(), 1 + 4 + 3);

    let res = search.search(10.0, 5.0, 1.0).unwrap();
    let shapes: Vec<(Combination, Combination, usize)> = res
        .iter()
        .map(|s| (s.top().mode(), s.bottom().mode(), s.components()))
        .collect();
    assert_eq!(
        shapes,
        vec![
            (Combination::Series, Combination::Series, 2),
            (Combination::Series, Combination::Series, 4),
            (Combination::Parallel, Combination::Parallel, 4),
        ]
    );
    assert_relative_eq!(res[1].power(), 0.025);
    assert_relative_eq!(res[2].power(), 0.1);
}

#[test]
fn result_limit_is_configurable() {
    let limits = SearchLimits { results: 2, ..SearchLimits::default() };
    let res = DividerSearch::new(SeriesName::E6)
        .range(1000.0, 1000.0)
        .limits(limits)
        .search(10.0, 5.0, 1.0)
        .unwrap();
    assert_eq!(res.len(), 2);
    assert_eq!(res[1].components(), 4);
}

#[test]
fn sizes_can_be_restricted() {
    let res = DividerSearch::new(SeriesName::E12)
        .range(1000.0, 10_000.0)
        .sizes(&[NetworkSize::Four, NetworkSize::Three])
        .search(9.0, 3.0, 5.0)
        .unwrap();
    assert!(!res.is_empty());
    assert!(res.iter().all(|s| s.components() >= 3));
}

#[test]
fn inverted_range_is_empty() {
    let res = find_solutions(10.0, 5.0, 100.0, "E24", 10_000.0, 100.0).unwrap();
    assert!(res.is_empty());
}

#[test]
fn unreachable_target_is_empty() {
    // The output can never reach the supply voltage.
    let res = find_solutions(5.0, 5.0, 0.001, "E6", 100.0, 1000.0).unwrap();
    assert!(res.is_empty());
}

#[test]
fn unknown_series_fails() {
    assert_eq!(
        find_solutions(10.0, 5.0, 5.0, "E96", 100.0, 1000.0),
        Err(DividerError::UnknownSeries { name: "E96".to_string() })
    );
}

#[test]
fn zero_target_fails() {
    assert_eq!(
        find_solutions(10.0, 0.0, 5.0, "E12", 100.0, 1000.0),
        Err(DividerError::InvalidTarget { target: 0.0 })
    );
    // Rejected even when the range would produce nothing to score.
    assert!(find_solutions(10.0, 0.0, 5.0, "E12", 1000.0, 100.0).is_err());
}

#[test]
fn repeated_calls_agree() {
    let a = find_solutions(5.0, 1.8, 2.0, "E24", 470.0, 47_000.0).unwrap();
    let b = find_solutions(5.0, 1.8, 2.0, "E24", 470.0, 47_000.0).unwrap();
    assert_eq!(a, b);
}

#[test]
fn history_line_format() {
    let res = find_solutions(10.0, 5.0, 5.0, "E12", 100.0, 10_000.0).unwrap();
    assert_eq!(
        res[0].to_string(),
        "R1=[10000.0] (10000.00 Ω), R2=[10000.0] (10000.00 Ω), \
         Vout=5.000 V, Error=0.00%, Power=5.000 mW"
    );
}

#[test]
fn unbounded_result_limit() {
    let limits = SearchLimits { results: usize::MAX, ..SearchLimits::default() };
    let res = DividerSearch::new(SeriesName::E6)
        .range(1000.0, 1000.0)
        .limits(limits)
        .search(10.0, 5.0, 1.0)
        .unwrap();
    assert_eq!(res.len(), 3);
}

/// Scores every capped candidate, stable-sorts the passing ones and truncates.
fn exhaustive(vin: f64, target: f64, tolerance: f64, series: &str, r_min: f64, r_max: f64) -> Vec<Solution> {
    let catalog = generate(series, r_min, r_max).unwrap();
    let caps = [
        (NetworkSize::Two, catalog.len()),
        (NetworkSize::Three, THREE_CAP),
        (NetworkSize::Four, FOUR_CAP),
    ];
    let mut all: Vec<Solution> = caps
        .iter()
        .flat_map(|&(size, cap)| enumerate(&catalog, size, cap))
        .map(|net| Solution::score(&net, vin, target).unwrap())
        .filter(|s| s.error_percent() <= tolerance)
        .collect();
    all.sort_by(rank::compare);
    all.truncate(RESULT_LIMIT);
    all
}

#[test]
fn matches_exhaustive_sort_with_ties() {
    // Many exact matches, so ties on error and count are decided by power and arrival order.
    let args = (10.0, 5.0, 2.0, "E6", 1000.0, 10_000.0);
    let res = find_solutions(args.0, args.1, args.2, args.3, args.4, args.5).unwrap();
    assert_eq!(res.len(), RESULT_LIMIT);
    assert_eq!(res, exhaustive(args.0, args.1, args.2, args.3, args.4, args.5));
}

#[test]
fn matches_exhaustive_sort_with_caps() {
    // 37 catalog values, so the four resistor cap is active.
    let args = (12.0, 3.3, 0.5, "E12", 100.0, 100_000.0);
    let res = find_solutions(args.0, args.1, args.2, args.3, args.4, args.5).unwrap();
    assert!(!res.is_empty());
    assert_eq!(res, exhaustive(args.0, args.1, args.2, args.3, args.4, args.5));
}
