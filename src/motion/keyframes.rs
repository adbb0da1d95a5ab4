use crate::motion::easing::Easing;
use crate::motion::error::MappingError;
use crate::motion::value::{Lerp, StyleValue};
#[cfg(test)]
use crate::motion::value::Rgba;

/// A breakpoint mapping: progress thresholds paired with output values,
/// sampled piecewise-linearly.
///
/// Thresholds are strictly increasing and there are as many outputs as
/// thresholds (at least two). Both are checked once in [`Keyframes::new`];
/// sampling never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes<V> {
    thresholds: Vec<f64>,
    outputs: Vec<V>,
}

impl<V: Lerp> Keyframes<V> {
    pub fn new(
        thresholds: impl Into<Vec<f64>>,
        outputs: impl Into<Vec<V>>,
    ) -> Result<Self, MappingError> {
        let thresholds = thresholds.into();
        let outputs = outputs.into();

        if thresholds.len() != outputs.len() {
            return Err(MappingError::LengthMismatch {
                thresholds: thresholds.len(),
                outputs: outputs.len(),
            });
        }
        if thresholds.len() < 2 {
            return Err(MappingError::TooFewPoints(thresholds.len()));
        }
        if let Some(index) = thresholds.iter().position(|t| !t.is_finite()) {
            return Err(MappingError::NonFiniteThreshold(index));
        }
        for (index, pair) in thresholds.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(MappingError::NonIncreasingThresholds {
                    index: index + 1,
                    previous: pair[0],
                    next: pair[1],
                });
            }
        }
        let first = &outputs[0];
        for (index, output) in outputs.iter().enumerate().skip(1) {
            if !first.same_shape(output) {
                return Err(MappingError::TemplateMismatch {
                    index,
                    expected: first.to_string(),
                    found: output.to_string(),
                });
            }
        }

        Ok(Self {
            thresholds,
            outputs,
        })
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Output at `progress`, clamped to the first/last output outside the
    /// threshold range.
    pub fn sample(&self, progress: f64) -> V {
        self.sample_eased(progress, Easing::Linear)
    }

    /// Like [`Keyframes::sample`], but `easing` is applied to the position within
    /// each segment, so every segment gets its own curve.
    pub fn sample_eased(&self, progress: f64, easing: Easing) -> V {
        let last = self.thresholds.len() - 1;
        if progress.is_nan() || progress <= self.thresholds[0] {
            return self.outputs[0].clone();
        }
        if progress >= self.thresholds[last] {
            return self.outputs[last].clone();
        }

        // thresholds[lower] <= progress < thresholds[upper]
        let upper = self.thresholds.partition_point(|&t| t <= progress);
        let lower = upper - 1;
        let span = self.thresholds[upper] - self.thresholds[lower];
        let local = (progress - self.thresholds[lower]) / span;

        self.outputs[lower].lerp(&self.outputs[upper], easing.sample(local))
    }
}

impl Keyframes<StyleValue> {
    pub fn from_strs(thresholds: &[f64], outputs: &[&str]) -> Result<Self, MappingError> {
        Self::new(
            thresholds,
            outputs.iter().map(|s| StyleValue::from(*s)).collect::<Vec<_>>(),
        )
    }
}

#[cfg(test)]
impl Keyframes<Rgba> {
    pub fn from_colors(thresholds: &[f64], outputs: &[&str]) -> Result<Self, MappingError> {
        let colors = outputs
            .iter()
            .map(|s| s.parse::<Rgba>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(thresholds, colors)
    }
}

/// One-off evaluation of a mapping that is not kept around.
pub fn interpolate<V: Lerp>(
    progress: f64,
    thresholds: &[f64],
    outputs: &[V],
) -> Result<V, MappingError> {
    Ok(Keyframes::new(thresholds, outputs.to_vec())?.sample(progress))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use crate::motion::value::Rgba;

    fn fade() -> Keyframes<f64> {
        Keyframes::<f64>::new([0.0, 0.5, 1.0], [0.0, 1.0, 0.0]).unwrap()
    }

    #[test]
    fn fade_in_fade_out_scenario() {
        let fade = fade();
        assert_eq!(fade.sample(0.0), 0.0);
        assert_eq!(fade.sample(0.25), 0.5);
        assert_eq!(fade.sample(0.5), 1.0);
        assert_eq!(fade.sample(0.75), 0.5);
        assert_eq!(fade.sample(1.0), 0.0);
    }

    #[test]
    fn clamps_outside_the_threshold_range() {
        let mapping = Keyframes::<f64>::new([0.2, 0.4, 0.9], [3.0, -1.0, 8.0]).unwrap();
        for p in [0.0, 0.1, 0.2, -5.0, f64::NAN] {
            assert_eq!(mapping.sample(p), 3.0, "p = {p}");
        }
        for p in [0.9, 0.95, 1.0, 7.0] {
            assert_eq!(mapping.sample(p), 8.0, "p = {p}");
        }
    }

    #[test]
    fn blends_linearly_between_adjacent_thresholds() {
        let thresholds = [0.0, 0.2, 0.5, 1.0];
        let outputs = [1.0, 1.2, 1.5, 2.0];
        let mapping = Keyframes::<f64>::new(thresholds, outputs).unwrap();

        for step in 1..100 {
            let p = step as f64 / 100.0;
            let i = thresholds.windows(2).position(|w| w[0] <= p && p < w[1]).unwrap();
            let expected = outputs[i]
                + (outputs[i + 1] - outputs[i]) * (p - thresholds[i])
                    / (thresholds[i + 1] - thresholds[i]);
            assert!((mapping.sample(p) - expected).abs() < 1e-12, "p = {p}");
        }
    }

    #[test]
    fn sampling_is_pure() {
        let mapping = Keyframes::<StyleValue>::from_strs(&[0.0, 0.1, 0.3], &["blur(0px)", "blur(4px)", "blur(10px)"])
            .unwrap();
        let first = mapping.sample(0.2);
        let second = mapping.sample(0.2);
        assert_eq!(first, second);
        assert_eq!(first.to_string(), "blur(7px)");
    }

    #[test]
    fn rejects_malformed_mappings() {
        assert_eq!(
            Keyframes::<f64>::new([0.0, 1.0], [1.0]).unwrap_err(),
            MappingError::LengthMismatch {
                thresholds: 2,
                outputs: 1
            }
        );
        assert_eq!(
            Keyframes::<f64>::new([0.5], [1.0]).unwrap_err(),
            MappingError::TooFewPoints(1)
        );
        assert!(matches!(
            Keyframes::<f64>::new([0.0, 0.5, 0.5], [0.0, 1.0, 0.0]),
            Err(MappingError::NonIncreasingThresholds { index: 2, .. })
        ));
        assert!(matches!(
            Keyframes::<f64>::new([0.0, 0.6, 0.4], [0.0, 1.0, 0.0]),
            Err(MappingError::NonIncreasingThresholds { index: 2, .. })
        ));
        assert_eq!(
            Keyframes::<f64>::new([0.0, f64::INFINITY], [0.0, 1.0]).unwrap_err(),
            MappingError::NonFiniteThreshold(1)
        );
        assert!(matches!(
            Keyframes::<StyleValue>::from_strs(&[0.0, 1.0], &["blur(0px)", "scale(1)"]),
            Err(MappingError::TemplateMismatch { index: 1, .. })
        ));
        assert!(matches!(
            Keyframes::<Rgba>::from_colors(&[0.0, 1.0], &["#fff", "chartreuse"]),
            Err(MappingError::InvalidColor(_))
        ));
    }

    #[test]
    fn interpolates_percentages_and_colours() {
        let height = Keyframes::<StyleValue>::from_strs(&[0.5, 0.65], &["0%", "100%"]).unwrap();
        assert_eq!(height.sample(0.575).to_string(), "50%");
        assert_eq!(height.sample(0.4).to_string(), "0%");

        let label = Keyframes::<Rgba>::from_colors(&[0.0, 1.0], &["#ffffff", "#000"]).unwrap();
        assert_eq!(label.sample(1.0).to_string(), "#000000");
        assert_eq!(label.sample(0.0).to_string(), "#ffffff");
    }

    #[test]
    fn eased_segments_keep_their_endpoints() {
        let bob = Keyframes::<f64>::new([0.0, 0.5, 1.0], [0.0, 10.0, 0.0]).unwrap();
        assert_eq!(bob.sample_eased(0.5, Easing::EaseInOut), 10.0);
        assert!(bob.sample_eased(0.125, Easing::EaseInOut) < bob.sample(0.125));
    }

    #[test]
    fn one_off_interpolation_validates_first() {
        assert_eq!(interpolate(0.75, &[0.0, 0.5, 1.0], &[0.0, 1.0, 0.0]), Ok(0.5));
        assert!(interpolate(0.5, &[0.0], &[0.0]).is_err());
    }

    #[test]
    fn scroll_cue_is_gone_after_the_first_twentieth() {
        let cue = |p| interpolate(p, &config::SCROLL_CUE_RANGE, &[1.0_f64, 0.0]).unwrap();
        assert_eq!(cue(0.0), 1.0);
        assert!((cue(0.025) - 0.5).abs() < 1e-12);
        assert_eq!(cue(0.05), 0.0);
        assert_eq!(cue(0.3), 0.0);
    }
}
