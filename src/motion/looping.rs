use crate::motion::easing::Easing;
use crate::motion::error::MappingError;
use crate::motion::keyframes::Keyframes;
use crate::motion::value::Lerp;

/// A keyframe sequence that repeats forever, sampled by elapsed time.
///
/// Sampling is pure; whoever drives it owns the timer and is responsible for
/// stopping it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopAnimation<V> {
    keyframes: Keyframes<V>,
    period_ms: f64,
    easing: Easing,
}

impl<V: Lerp> LoopAnimation<V> {
    pub fn new(keyframes: Keyframes<V>, period_ms: f64, easing: Easing) -> Self {
        Self {
            keyframes,
            period_ms: period_ms.max(1.0),
            easing,
        }
    }

    /// Keyframes spread evenly over one period.
    pub fn evenly(values: Vec<V>, period_ms: f64, easing: Easing) -> Result<Self, MappingError> {
        let last = values.len().saturating_sub(1).max(1) as f64;
        let thresholds: Vec<f64> = (0..values.len()).map(|i| i as f64 / last).collect();
        Ok(Self::new(Keyframes::new(thresholds, values)?, period_ms, easing))
    }

    /// Position within the current cycle, in [0, 1).
    pub fn phase(&self, elapsed_ms: f64) -> f64 {
        elapsed_ms.max(0.0).rem_euclid(self.period_ms) / self.period_ms
    }

    pub fn sample(&self, elapsed_ms: f64) -> V {
        self.keyframes
            .sample_eased(self.phase(elapsed_ms), self.easing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bob_repeats_every_period() {
        let bob = LoopAnimation::evenly(vec![0.0, 10.0, 0.0], 2_000.0, Easing::EaseInOut).unwrap();
        assert_eq!(bob.sample(0.0), 0.0);
        assert_eq!(bob.sample(1_000.0), 10.0);
        assert_eq!(bob.sample(2_000.0), 0.0);
        assert_eq!(bob.sample(3_000.0), 10.0);
        assert_eq!(bob.sample(500.0), bob.sample(4_500.0));
    }

    #[test]
    fn linear_sweep_moves_at_constant_speed() {
        let scan = LoopAnimation::evenly(vec![-100.0, 200.0], 1_500.0, Easing::Linear).unwrap();
        assert_eq!(scan.sample(0.0), -100.0);
        assert!((scan.sample(750.0) - 50.0).abs() < 1e-9);
        assert_eq!(scan.sample(1_500.0), -100.0);
    }

    #[test]
    fn negative_elapsed_time_rests_at_the_start() {
        let bob = LoopAnimation::evenly(vec![0.6, 1.0, 0.6], 1_500.0, Easing::EaseInOut).unwrap();
        assert_eq!(bob.sample(-20.0), 0.6);
    }

    #[test]
    fn a_single_value_is_not_a_loop() {
        assert_eq!(
            LoopAnimation::evenly(vec![1.0], 1_000.0, Easing::Linear).unwrap_err(),
            MappingError::TooFewPoints(1)
        );
    }
}
