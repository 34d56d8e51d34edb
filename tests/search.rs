use surface_pathfinding::prelude::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn reference_profile() -> SurfaceProfile {
    [(0, 10.0), (1, 7.0), (2, 3.0), (3, 1.0), (4, 4.0), (5, 8.0)]
        .into_iter()
        .collect()
}

fn assert_well_formed(path: &Path<Position>, start: Position, target: Position, delta: Position) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&target));
    assert_eq!(path.cost(), path.len() - 1);
    for step in path.windows(2) {
        assert_eq!((step[1] - step[0]).abs(), delta, "bad step in {:?}", path);
    }
}

#[test]
fn reference_to_three() {
    init();
    let path = search(0, 3, 1, Some(&reference_profile())).unwrap();
    assert_eq!(path, vec![0, 1, 2, 3]);
}

#[test]
fn reference_to_five() {
    init();
    let path = search(0, 5, 1, Some(&reference_profile())).unwrap();
    assert_eq!(path, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(path.cost(), 5);
}

#[test]
fn paths_are_well_formed() {
    init();
    let profile: SurfaceProfile = (-30i64..30)
        .map(|pos| (pos, (pos * 7).rem_euclid(13) as f64))
        .collect();

    for (start, target, delta) in [
        (0, 12, 1),
        (0, -12, 3),
        (5, -25, 5),
        (-40, 40, 4),
        (17, 17, 2),
        (1, 2, 1),
    ] {
        let config = SearchConfig {
            delta,
            expansion_limit: Some(100_000),
        };
        let path = search_with_config(start, target, Some(&profile), &config)
            .unwrap_or_else(|| panic!("no path from {} to {}", start, target));
        assert_well_formed(&path, start, target, delta);
    }
}

#[test]
fn misaligned_target_is_not_found() {
    init();
    // 0, 2, 4, ... can never hit an odd target. Without a limit this would run forever.
    let profile: SurfaceProfile = (-5..=5).map(|pos| (pos * 2, 1.0)).collect();
    let config = SearchConfig {
        delta: 2,
        expansion_limit: Some(5_000),
    };

    assert_eq!(search_with_config(0, 7, Some(&profile), &config), None);
}

#[test]
fn repeated_calls_agree() {
    init();
    let profile = reference_profile();

    let first = search(2, -6, 2, Some(&profile));
    let second = search(2, -6, 2, Some(&profile));

    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn profile_is_not_modified() {
    init();
    let profile = reference_profile();
    let before = profile.clone();

    search(0, 5, 1, Some(&profile));

    assert_eq!(profile, before);
}

#[test]
fn custom_heuristic() {
    init();
    let target = -9;
    let mut calls = 0;
    let path = a_star_search(0, target, &SearchConfig::with_delta(3), |pos| {
        calls += 1;
        (pos - target).abs() as f64 / 3.0
    });

    assert_eq!(path.unwrap(), vec![0, -3, -6, -9]);
    // the start, both neighbors of 0, then only the open side of -3 and -6
    assert_eq!(calls, 5);
}

#[test]
fn heuristic_matches_formula() {
    let profile = reference_profile();

    for position in -3..9 {
        for target in [0, 3, 5] {
            let fit = profile.get(position).unwrap_or(10.0);
            let expected = position.abs_diff(target) as f64 * (fit / 10.0);
            assert_eq!(heuristic(position, target, &profile), expected);
            assert!(heuristic(position, target, &profile) >= 0.0);
        }
    }
}

#[test]
fn depth_first_reference() {
    init();
    assert_eq!(depth_first_search(0, 3, 1, 10).unwrap(), vec![0, 1, 2, 3]);
}

#[test]
fn batch_matches_single() {
    init();
    let profile = reference_profile();
    let config = SearchConfig::bounded(10_000);
    let targets = [-4, 0, 3, 5, 9];

    let paths = search_all(0, &targets, Some(&profile), &config);

    assert_eq!(paths.len(), targets.len());
    for target in targets {
        let path = &paths[&target];
        assert_eq!(Some(path), search_with_config(0, target, Some(&profile), &config).as_ref());
        assert_well_formed(path, 0, target, 1);
    }
}
