//! Unit tests for the level generator.

use super::*;
use crate::gex::Role;

fn scenario() -> NamedLevels {
    NamedLevels {
        gamma_flip: Some(4600.0),
        call_wall: Some(4650.0),
        put_wall: Some(4550.0),
        high_volume_level: Some(4620.0),
        max_pain: Some(4580.0),
    }
}

fn find(levels: &[StrikeLevel], strike: f64) -> &StrikeLevel {
    levels
        .iter()
        .find(|l| l.strike == strike)
        .unwrap_or_else(|| panic!("strike {} not generated", strike))
}

// ============================================================================
// Shape
// ============================================================================

#[test]
fn test_default_cardinality() {
    let levels = generate_levels(4600.0, &scenario(), &GeneratorParams::default()).unwrap();
    assert_eq!(levels.len(), 31);
}

#[test]
fn test_cardinality_independent_of_inputs() {
    let params = GeneratorParams::default();
    for reference in [1.0, 99.5, 4600.0, 4603.7, 123_456.0] {
        let levels = generate_levels(reference, &NamedLevels::default(), &params).unwrap();
        assert_eq!(levels.len(), params.strike_count());
    }
}

#[test]
fn test_custom_interval_cardinality() {
    let params = GeneratorParams {
        interval: 5.0,
        span: 50.0,
        ..Default::default()
    };
    let levels = generate_levels(4600.0, &scenario(), &params).unwrap();
    assert_eq!(levels.len(), 21);
}

#[test]
fn test_zero_span_yields_center_only() {
    let params = GeneratorParams {
        span: 0.0,
        ..Default::default()
    };
    let levels = generate_levels(4603.0, &NamedLevels::default(), &params).unwrap();
    assert_eq!(levels.len(), 1);
    assert_eq!(levels[0].strike, 4600.0);
}

#[test]
fn test_strictly_descending() {
    let levels = generate_levels(4603.0, &scenario(), &GeneratorParams::default()).unwrap();
    for pair in levels.windows(2) {
        assert!(pair[0].strike > pair[1].strike);
    }
    assert_eq!(levels.first().unwrap().strike, 4750.0);
    assert_eq!(levels.last().unwrap().strike, 4450.0);
}

#[test]
fn test_strikes_are_interval_multiples() {
    let levels = generate_levels(4607.0, &scenario(), &GeneratorParams::default()).unwrap();
    for level in &levels {
        assert_eq!(level.strike % 10.0, 0.0);
    }
    // 4607 rounds to a 4610 center
    assert_eq!(levels[15].strike, 4610.0);
}

// ============================================================================
// Determinism and sign
// ============================================================================

#[test]
fn test_deterministic_output() {
    let params = GeneratorParams::default();
    let a = generate_levels(4600.0, &scenario(), &params).unwrap();
    let b = generate_levels(4600.0, &scenario(), &params).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn test_sign_consistency() {
    let reference = 4604.0;
    let levels = generate_levels(reference, &scenario(), &GeneratorParams::default()).unwrap();
    for level in &levels {
        if level.strike > reference {
            assert!(level.gex_value >= 0.0, "strike {} negative", level.strike);
        } else if level.strike < reference {
            assert!(level.gex_value <= 0.0, "strike {} positive", level.strike);
        }
    }
}

#[test]
fn test_magnitude_decays_with_distance() {
    let levels = generate_levels(4600.0, &scenario(), &GeneratorParams::default()).unwrap();
    let near = find(&levels, 4610.0).gex_value.abs();
    let far = find(&levels, 4750.0).gex_value.abs();
    assert!(near > far);
}

// ============================================================================
// Classification scenario
// ============================================================================

#[test]
fn test_example_scenario() {
    let levels = generate_levels(4600.0, &scenario(), &GeneratorParams::default()).unwrap();

    let l = find(&levels, 4650.0);
    assert_eq!((l.classification, l.role), (Classification::Wall, Some(Role::Call)));

    let l = find(&levels, 4550.0);
    assert_eq!((l.classification, l.role), (Classification::Wall, Some(Role::Put)));

    let l = find(&levels, 4600.0);
    assert_eq!(
        (l.classification, l.role),
        (Classification::ZeroGamma, Some(Role::Flip))
    );

    let l = find(&levels, 4620.0);
    assert_eq!(
        (l.classification, l.role),
        (Classification::Magnet, Some(Role::Call))
    );

    let l = find(&levels, 4580.0);
    assert_eq!(
        (l.classification, l.role),
        (Classification::Magnet, Some(Role::Put))
    );

    let l = find(&levels, 4460.0);
    assert_eq!((l.classification, l.role), (Classification::Normal, None));
}

#[test]
fn test_far_strikes_are_normal_without_anchors() {
    let levels =
        generate_levels(4600.0, &NamedLevels::default(), &GeneratorParams::default()).unwrap();
    for level in levels.iter().filter(|l| l.distance.abs() >= 100.0) {
        assert_eq!(level.classification, Classification::Normal);
        assert_eq!(level.role, None);
    }
}

#[test]
fn test_near_strikes_use_magnitude_fallback() {
    let levels =
        generate_levels(4600.0, &NamedLevels::default(), &GeneratorParams::default()).unwrap();
    // Within one interval of the reference the decay is ~1, so magnitude
    // clears the magnet threshold on either side.
    let above = find(&levels, 4610.0);
    assert!(above.classification.is_key_level());
    assert_eq!(above.role, Some(Role::Call));
    let below = find(&levels, 4590.0);
    assert!(below.classification.is_key_level());
    assert_eq!(below.role, Some(Role::Put));
}

#[test]
fn test_anchor_roles_on_opposite_side() {
    let named = NamedLevels {
        call_wall: Some(4560.0),
        high_volume_level: Some(4570.0),
        max_pain: Some(4640.0),
        ..Default::default()
    };
    let levels = generate_levels(4600.0, &named, &GeneratorParams::default()).unwrap();

    let call_wall = find(&levels, 4560.0);
    assert!(call_wall.gex_value < 0.0);
    assert_eq!(call_wall.classification, Classification::Wall);
    assert_eq!(call_wall.role, Some(Role::Call));

    let hvl = find(&levels, 4570.0);
    assert!(hvl.gex_value < 0.0);
    assert_eq!(hvl.classification, Classification::Magnet);
    assert_eq!(hvl.role, Some(Role::Call));

    let max_pain = find(&levels, 4640.0);
    assert!(max_pain.gex_value > 0.0);
    assert_eq!(max_pain.classification, Classification::Magnet);
    assert_eq!(max_pain.role, Some(Role::Put));
}

// ============================================================================
// Statistics
// ============================================================================

#[test]
fn test_statistics_ranges() {
    let levels = generate_levels(4600.0, &scenario(), &GeneratorParams::default()).unwrap();
    for level in &levels {
        assert!((0.0..=100.0).contains(&level.call_pct));
        assert!((level.call_pct + level.put_pct - 100.0).abs() < 1e-9);
        assert!((40.0..=100.0).contains(&level.integrity_pct));
        assert!((level.hold_pct + level.break_pct - 100.0).abs() < 1e-9);
        assert!(level.mass >= 0.0);
        assert!(level.effective.abs() <= level.gex_value.abs() + 1e-9);
        assert_eq!(level.distance, level.strike - 4600.0);
    }
}

#[test]
fn test_call_split_follows_dominance() {
    let levels = generate_levels(4600.0, &scenario(), &GeneratorParams::default()).unwrap();
    assert!(find(&levels, 4610.0).call_pct > 50.0);
    assert!(find(&levels, 4590.0).call_pct < 50.0);
}

#[test]
fn test_hold_ranges_by_classification() {
    let levels = generate_levels(4600.0, &scenario(), &GeneratorParams::default()).unwrap();
    for level in &levels {
        if level.classification == Classification::Normal {
            assert!((35.0..=65.0).contains(&level.hold_pct));
        } else {
            assert!((50.0..=95.0).contains(&level.hold_pct));
        }
    }
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_rejects_bad_reference_price() {
    let params = GeneratorParams::default();
    for reference in [0.0, -10.0, f64::NAN, f64::INFINITY] {
        let result = generate_levels(reference, &scenario(), &params);
        assert!(matches!(result, Err(GexError::Validation(_))));
    }
}

#[test]
fn test_rejects_bad_interval() {
    for interval in [0.0, -10.0, f64::NAN] {
        let params = GeneratorParams {
            interval,
            ..Default::default()
        };
        assert!(generate_levels(4600.0, &scenario(), &params).is_err());
    }
}

#[test]
fn test_rejects_bad_span() {
    for span in [-1.0, f64::INFINITY] {
        let params = GeneratorParams {
            span,
            ..Default::default()
        };
        assert!(generate_levels(4600.0, &scenario(), &params).is_err());
    }
}

#[test]
fn test_rejects_oversized_ladder() {
    let params = GeneratorParams {
        interval: 0.01,
        span: 1000.0,
        ..Default::default()
    };
    let err = generate_levels(4600.0, &scenario(), &params).unwrap_err();
    assert!(err.to_string().contains("exceeds"));
}

#[test]
fn test_rejects_unresolvable_strikes() {
    let params = GeneratorParams {
        interval: 1.0,
        span: 15.0,
        ..Default::default()
    };
    let err = generate_levels(1e17, &NamedLevels::default(), &params).unwrap_err();
    assert!(err.to_string().contains("too fine"));
}

#[test]
fn test_large_but_resolvable_reference() {
    let params = GeneratorParams {
        interval: 1.0,
        span: 15.0,
        ..Default::default()
    };
    let levels = generate_levels(1e12, &NamedLevels::default(), &params).unwrap();
    assert_eq!(levels.len(), 31);
    assert!(levels.windows(2).all(|w| w[0].strike > w[1].strike));
}

#[test]
fn test_fractional_interval_accepted() {
    let params = GeneratorParams {
        interval: 0.1,
        span: 1.0,
        ..Default::default()
    };
    let levels = generate_levels(4600.0, &NamedLevels::default(), &params).unwrap();
    assert_eq!(levels.len(), 21);
    assert!(levels.windows(2).all(|w| w[0].strike > w[1].strike));
}

#[test]
fn test_rejects_bad_decay_width() {
    let params = GeneratorParams {
        decay_width: 0.0,
        ..Default::default()
    };
    assert!(params.validate().is_err());
}

// ============================================================================
// Reference resolution
// ============================================================================

#[test]
fn test_resolve_reference_prefers_explicit() {
    assert_eq!(
        resolve_reference_price(Some(4610.0), &scenario(), 4500.0),
        4610.0
    );
}

#[test]
fn test_resolve_reference_falls_back_to_flip() {
    assert_eq!(resolve_reference_price(None, &scenario(), 4500.0), 4600.0);
    assert_eq!(
        resolve_reference_price(Some(0.0), &scenario(), 4500.0),
        4600.0
    );
}

#[test]
fn test_resolve_reference_falls_back_to_baseline() {
    assert_eq!(
        resolve_reference_price(Some(f64::NAN), &NamedLevels::default(), 4500.0),
        4500.0
    );
    let zero_flip = NamedLevels {
        gamma_flip: Some(0.0),
        ..Default::default()
    };
    assert_eq!(resolve_reference_price(None, &zero_flip, 4500.0), 4500.0);
}
