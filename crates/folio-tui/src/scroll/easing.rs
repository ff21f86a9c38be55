//! Easing curves mapping animation progress [0, 1] to eased output [0, 1].

use folio_core::EasingType;

pub trait EasingExt {
    /// Apply the curve to a progress value, input clamped to [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            // instant jump at completion
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => 1.0 - (1.0 - t).powi(3),
            EasingType::Quintic => 1.0 - (1.0 - t).powi(5),
            EasingType::EaseOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f64.powf(-10.0 * t)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 5] = [
        EasingType::None,
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::Quintic,
        EasingType::EaseOut,
    ];

    #[test]
    fn test_ends_at_one() {
        for easing in ALL {
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{easing:?}");
            assert!((easing.apply(2.0) - 1.0).abs() < 0.001, "{easing:?}");
        }
    }

    #[test]
    fn test_starts_at_zero() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 0.001, "{easing:?}");
            assert!(easing.apply(-1.0).abs() < 0.001, "{easing:?}");
        }
    }

    #[test]
    fn test_nondecreasing() {
        for easing in ALL {
            let mut prev = easing.apply(0.0);
            for step in 1..=20 {
                let v = easing.apply(step as f64 / 20.0);
                assert!(v >= prev, "{easing:?} decreased at step {step}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_cubic_front_loads_motion() {
        // ease-out curves cover more than half the distance by t=0.5
        assert!(EasingType::Cubic.apply(0.5) > 0.5);
        assert!(EasingType::Quintic.apply(0.5) > EasingType::Cubic.apply(0.5));
    }
}
