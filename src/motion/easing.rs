/// Easing curves over normalized time `t` in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Quadratic deceleration, used for page transitions.
    EaseOut,
    /// Cubic acceleration then deceleration.
    Power2InOut,
    /// Cubic deceleration.
    Power2Out,
    /// Overshoots past 1.0 before settling; the value is the overshoot amount.
    BackOut(f32),
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::Power2Out => 1.0 - (1.0 - t).powi(3),
            Easing::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u.powi(3) + s * u.powi(2)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::EaseOut,
        Easing::Power2InOut,
        Easing::Power2Out,
        Easing::BackOut(1.7),
    ];

    #[test]
    fn endpoints_are_fixed() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn input_is_clamped() {
        for easing in ALL {
            assert_eq!(easing.apply(-3.0), easing.apply(0.0));
            assert_eq!(easing.apply(4.0), easing.apply(1.0));
        }
    }

    #[test]
    fn in_out_is_symmetric_at_midpoint() {
        assert!((Easing::Power2InOut.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::BackOut(1.7).apply(i as f32 / 100.0))
            .fold(0.0_f32, f32::max);
        assert!(peak > 1.0);
    }
}
