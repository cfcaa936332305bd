//! Strike classification against the named anchors.

use super::{Classification, GeneratorParams, NamedLevels, Role};

/// Returns true when `strike` lies strictly within one interval of `anchor`.
#[must_use]
pub fn is_near(strike: f64, anchor: Option<f64>, interval: f64) -> bool {
    anchor.is_some_and(|level| (strike - level).abs() < interval)
}

/// Classifies a strike. First match wins:
///
/// 1. call wall proximity → `WALL` / `CALL`
/// 2. put wall proximity → `WALL` / `PUT`
/// 3. gamma flip proximity → `ZERO-GAMMA` / `FLIP`
/// 4. high-volume level proximity → `MAGNET` / `CALL`
/// 5. max pain proximity → `MAGNET` / `PUT`
/// 6. `|gex_value| > wall_threshold` → `WALL` with the dominant side
/// 7. `|gex_value| > magnet_threshold` → `MAGNET` with the dominant side
/// 8. otherwise `NORMAL` with no role
#[must_use]
pub fn classify(
    strike: f64,
    named: &NamedLevels,
    gex_value: f64,
    params: &GeneratorParams,
) -> (Classification, Option<Role>) {
    let interval = params.interval;

    if is_near(strike, named.call_wall, interval) {
        return (Classification::Wall, Some(Role::Call));
    }
    if is_near(strike, named.put_wall, interval) {
        return (Classification::Wall, Some(Role::Put));
    }
    if is_near(strike, named.gamma_flip, interval) {
        return (Classification::ZeroGamma, Some(Role::Flip));
    }
    if is_near(strike, named.high_volume_level, interval) {
        return (Classification::Magnet, Some(Role::Call));
    }
    if is_near(strike, named.max_pain, interval) {
        return (Classification::Magnet, Some(Role::Put));
    }

    let dominant = if gex_value >= 0.0 {
        Role::Call
    } else {
        Role::Put
    };
    let magnitude = gex_value.abs();

    if magnitude > params.wall_threshold {
        (Classification::Wall, Some(dominant))
    } else if magnitude > params.magnet_threshold {
        (Classification::Magnet, Some(dominant))
    } else {
        (Classification::Normal, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors() -> NamedLevels {
        NamedLevels {
            gamma_flip: Some(4600.0),
            call_wall: Some(4650.0),
            put_wall: Some(4550.0),
            high_volume_level: Some(4620.0),
            max_pain: Some(4580.0),
        }
    }

    #[test]
    fn test_is_near() {
        assert!(is_near(4650.0, Some(4650.0), 10.0));
        assert!(is_near(4655.0, Some(4650.0), 10.0));
        assert!(!is_near(4660.0, Some(4650.0), 10.0));
        assert!(!is_near(4650.0, None, 10.0));
    }

    #[test]
    fn test_anchor_classifications() {
        let params = GeneratorParams::default();
        let named = anchors();

        assert_eq!(
            classify(4650.0, &named, 0.0, &params),
            (Classification::Wall, Some(Role::Call))
        );
        assert_eq!(
            classify(4550.0, &named, 0.0, &params),
            (Classification::Wall, Some(Role::Put))
        );
        assert_eq!(
            classify(4600.0, &named, 0.9, &params),
            (Classification::ZeroGamma, Some(Role::Flip))
        );
        assert_eq!(
            classify(4620.0, &named, 0.9, &params),
            (Classification::Magnet, Some(Role::Call))
        );
        assert_eq!(
            classify(4580.0, &named, -0.9, &params),
            (Classification::Magnet, Some(Role::Put))
        );
    }

    #[test]
    fn test_anchor_roles_ignore_dominance() {
        let params = GeneratorParams::default();
        let named = NamedLevels {
            call_wall: Some(4550.0),
            put_wall: Some(4680.0),
            high_volume_level: Some(4570.0),
            max_pain: Some(4630.0),
            ..Default::default()
        };

        assert_eq!(
            classify(4550.0, &named, -0.8, &params),
            (Classification::Wall, Some(Role::Call))
        );
        assert_eq!(
            classify(4680.0, &named, 0.8, &params),
            (Classification::Wall, Some(Role::Put))
        );
        assert_eq!(
            classify(4570.0, &named, -0.9, &params),
            (Classification::Magnet, Some(Role::Call))
        );
        assert_eq!(
            classify(4630.0, &named, 0.9, &params),
            (Classification::Magnet, Some(Role::Put))
        );
    }

    #[test]
    fn test_wall_takes_precedence_over_flip() {
        let params = GeneratorParams::default();
        let named = NamedLevels {
            gamma_flip: Some(4605.0),
            call_wall: Some(4600.0),
            ..Default::default()
        };

        assert_eq!(
            classify(4600.0, &named, 0.0, &params),
            (Classification::Wall, Some(Role::Call))
        );
    }

    #[test]
    fn test_call_wall_checked_before_put_wall() {
        let params = GeneratorParams::default();
        let named = NamedLevels {
            call_wall: Some(4600.0),
            put_wall: Some(4600.0),
            ..Default::default()
        };

        assert_eq!(
            classify(4600.0, &named, -0.1, &params).1,
            Some(Role::Call)
        );
    }

    #[test]
    fn test_magnitude_fallback() {
        let params = GeneratorParams::default();
        let named = NamedLevels::default();

        assert_eq!(
            classify(4700.0, &named, 0.51, &params),
            (Classification::Wall, Some(Role::Call))
        );
        assert_eq!(
            classify(4500.0, &named, -0.51, &params),
            (Classification::Wall, Some(Role::Put))
        );
        assert_eq!(
            classify(4700.0, &named, 0.31, &params),
            (Classification::Magnet, Some(Role::Call))
        );
        assert_eq!(
            classify(4500.0, &named, -0.4, &params),
            (Classification::Magnet, Some(Role::Put))
        );
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        let params = GeneratorParams::default();
        let named = NamedLevels::default();

        assert_eq!(
            classify(4700.0, &named, 0.5, &params).0,
            Classification::Magnet
        );
        assert_eq!(
            classify(4700.0, &named, 0.3, &params),
            (Classification::Normal, None)
        );
    }

    #[test]
    fn test_normal_without_anchors() {
        let params = GeneratorParams::default();
        assert_eq!(
            classify(4460.0, &anchors(), -0.02, &params),
            (Classification::Normal, None)
        );
    }

    #[test]
    fn test_proximity_uses_interval() {
        let params = GeneratorParams {
            interval: 25.0,
            ..Default::default()
        };
        let named = NamedLevels {
            call_wall: Some(4650.0),
            ..Default::default()
        };

        assert_eq!(
            classify(4630.0, &named, 0.0, &params).0,
            Classification::Wall
        );
    }
}
