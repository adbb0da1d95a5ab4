//! Progress-to-style mappings for the scroll-driven parts of the page.
//!
//! Each driver owns its breakpoint mappings and turns one progress value into a
//! complete style. They hold no state between calls, so the components can
//! re-evaluate them on every progress notification.

use crate::motion::error::MappingError;
use crate::motion::keyframes::Keyframes;
use crate::motion::value::{format_number, StyleValue};

/// Static description of a section's reveal: the progress window and the
/// opacity/scale/offset at each of its control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionPreset {
    pub window: &'static [f64],
    pub opacity: &'static [f64],
    pub scale: &'static [f64],
    pub translate_y: &'static [f64],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionStyle {
    pub opacity: f64,
    pub scale: f64,
    pub translate_y: f64,
}

impl SectionStyle {
    /// Fully visible, untransformed. Used when a section's mapping is unusable.
    pub const NEUTRAL: SectionStyle = SectionStyle {
        opacity: 1.0,
        scale: 1.0,
        translate_y: 0.0,
    };

    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px) scale({});",
            format_number(self.opacity),
            format_number(self.translate_y),
            format_number(self.scale)
        )
    }
}

/// Fades, scales and slides a content block while progress crosses its window.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionVisibility {
    opacity: Keyframes<f64>,
    scale: Keyframes<f64>,
    translate_y: Keyframes<f64>,
}

impl SectionVisibility {
    pub fn new(
        window: &[f64],
        opacity: &[f64],
        scale: &[f64],
        translate_y: &[f64],
    ) -> Result<Self, MappingError> {
        if !(2..=3).contains(&window.len()) {
            return Err(MappingError::InvalidWindow(window.len()));
        }
        Ok(Self {
            opacity: Keyframes::new(window, opacity)?,
            scale: Keyframes::new(window, scale)?,
            translate_y: Keyframes::new(window, translate_y)?,
        })
    }

    pub fn from_preset(preset: &SectionPreset) -> Result<Self, MappingError> {
        Self::new(preset.window, preset.opacity, preset.scale, preset.translate_y)
    }

    pub fn style_at(&self, progress: f64) -> SectionStyle {
        SectionStyle {
            opacity: self.opacity.sample(progress),
            scale: self.scale.sample(progress),
            translate_y: self.translate_y.sample(progress),
        }
    }

    /// Whether `progress` falls inside the section's window, bounds included.
    /// Neighbouring windows may overlap, in which case both are active.
    pub fn is_active(&self, progress: f64) -> bool {
        let window = self.opacity.thresholds();
        progress >= window[0] && progress <= window[window.len() - 1]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundStyle {
    pub video_scale: f64,
    pub video_filter: StyleValue,
    pub video_opacity: f64,
    pub spotlight_scale: f64,
    pub spotlight_opacity: f64,
}

impl BackgroundStyle {
    pub fn video_css(&self) -> String {
        format!(
            "transform: scale({}); filter: {}; opacity: {};",
            format_number(self.video_scale),
            self.video_filter,
            format_number(self.video_opacity)
        )
    }

    pub fn spotlight_css(&self) -> String {
        format!(
            "transform: scale({}); opacity: {};",
            format_number(self.spotlight_scale),
            format_number(self.spotlight_opacity)
        )
    }
}

/// Background video zoom/blur/fade plus the vignette overlay. Meant to be fed
/// smoothed progress.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundEffects {
    video_scale: Keyframes<f64>,
    video_filter: Keyframes<StyleValue>,
    video_opacity: Keyframes<f64>,
    spotlight_scale: Keyframes<f64>,
    spotlight_opacity: Keyframes<f64>,
}

impl BackgroundEffects {
    pub fn new() -> Result<Self, MappingError> {
        Ok(Self {
            video_scale: Keyframes::new([0.0, 0.2, 0.5, 1.0], [1.0, 1.2, 1.5, 2.0])?,
            video_filter: Keyframes::<StyleValue>::from_strs(
                &[0.0, 0.1, 0.3],
                &["blur(0px)", "blur(4px)", "blur(10px)"],
            )?,
            video_opacity: Keyframes::new([0.0, 0.5, 0.8, 1.0], [0.6, 0.3, 0.1, 0.0])?,
            spotlight_scale: Keyframes::new([0.0, 0.5, 1.0], [1.0, 1.5, 0.8])?,
            spotlight_opacity: Keyframes::new([0.0, 0.2, 0.8, 1.0], [0.3, 0.8, 0.8, 0.4])?,
        })
    }

    pub fn style_at(&self, progress: f64) -> BackgroundStyle {
        BackgroundStyle {
            video_scale: self.video_scale.sample(progress),
            video_filter: self.video_filter.sample(progress),
            video_opacity: self.video_opacity.sample(progress),
            spotlight_scale: self.spotlight_scale.sample(progress),
            spotlight_opacity: self.spotlight_opacity.sample(progress),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub height: StyleValue,
    pub opacity: f64,
}

impl LineStyle {
    pub fn to_css(&self) -> String {
        format!(
            "height: {}; opacity: {};",
            self.height,
            format_number(self.opacity)
        )
    }
}

/// The vertical line that fills in as the reader scrolls between two sections.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectingLine {
    height: Keyframes<StyleValue>,
    opacity: Keyframes<f64>,
}

impl ConnectingLine {
    pub fn new(range: [f64; 2]) -> Result<Self, MappingError> {
        Ok(Self {
            height: Keyframes::<StyleValue>::from_strs(&range, &["0%", "100%"])?,
            opacity: Keyframes::new(range, [0.0, 1.0])?,
        })
    }

    pub fn style_at(&self, progress: f64) -> LineStyle {
        LineStyle {
            height: self.height.sample(progress),
            opacity: self.opacity.sample(progress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[test]
    fn every_page_section_has_a_valid_mapping() {
        for preset in config::SECTIONS {
            assert!(SectionVisibility::from_preset(preset).is_ok(), "{preset:?}");
        }
    }

    #[test]
    fn three_point_window_fades_in_holds_and_fades_out() {
        let section = SectionVisibility::from_preset(&config::QUESTION_SECTION).unwrap();

        let before = section.style_at(0.1);
        assert_eq!(before, SectionStyle { opacity: 0.0, scale: 0.7, translate_y: 50.0 });

        let peak = section.style_at(0.3);
        assert_eq!(peak, SectionStyle { opacity: 1.0, scale: 1.0, translate_y: 0.0 });

        let after = section.style_at(0.9);
        assert_eq!(after, SectionStyle { opacity: 0.0, scale: 1.3, translate_y: -50.0 });
    }

    #[test]
    fn overlapping_windows_are_both_active_at_the_seam() {
        let earlier = SectionVisibility::new(&[0.2, 0.3, 0.4], &[0.0, 1.0, 0.0], &[1.0; 3], &[0.0; 3])
            .unwrap();
        let later = SectionVisibility::new(&[0.4, 0.5, 0.6], &[0.0, 1.0, 0.0], &[1.0; 3], &[0.0; 3])
            .unwrap();
        assert!(earlier.is_active(0.4));
        assert!(later.is_active(0.4));
        assert!(!earlier.is_active(0.41));
    }

    #[test]
    fn overlapping_page_sections_render_together() {
        let narrative = SectionVisibility::from_preset(&config::NARRATIVE_SECTION).unwrap();
        let question = SectionVisibility::from_preset(&config::QUESTION_SECTION).unwrap();
        let p = 0.22;
        assert!(narrative.style_at(p).opacity > 0.0);
        assert!(question.style_at(p).opacity > 0.0);
    }

    #[test]
    fn rejects_windows_of_the_wrong_size() {
        assert_eq!(
            SectionVisibility::new(&[0.1], &[1.0], &[1.0], &[0.0]).unwrap_err(),
            MappingError::InvalidWindow(1)
        );
        assert_eq!(
            SectionVisibility::new(&[0.0, 0.1, 0.2, 0.3], &[0.0; 4], &[1.0; 4], &[0.0; 4])
                .unwrap_err(),
            MappingError::InvalidWindow(4)
        );
        assert!(matches!(
            SectionVisibility::new(&[0.0, 0.5, 1.0], &[0.0, 1.0], &[1.0; 3], &[0.0; 3]),
            Err(MappingError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn section_css_is_compact() {
        let style = SectionStyle { opacity: 0.5, scale: 0.95, translate_y: -30.0 };
        assert_eq!(
            style.to_css(),
            "opacity: 0.5; transform: translateY(-30px) scale(0.95);"
        );
    }

    #[test]
    fn background_zooms_blurs_and_fades() {
        let background = BackgroundEffects::new().unwrap();

        let top = background.style_at(0.0);
        assert_eq!(top.video_css(), "transform: scale(1); filter: blur(0px); opacity: 0.6;");
        assert_eq!(top.spotlight_css(), "transform: scale(1); opacity: 0.3;");

        let middle = background.style_at(0.5);
        assert_eq!(middle.video_scale, 1.5);
        assert_eq!(middle.video_filter.to_string(), "blur(10px)");
        assert_eq!(middle.video_opacity, 0.3);
        assert_eq!(middle.spotlight_scale, 1.5);
        assert_eq!(middle.spotlight_opacity, 0.8);

        let bottom = background.style_at(1.0);
        assert_eq!(bottom.video_scale, 2.0);
        assert_eq!(bottom.video_opacity, 0.0);
        assert_eq!(bottom.spotlight_scale, 0.8);
        assert_eq!(bottom.spotlight_opacity, 0.4);
    }

    #[test]
    fn line_fills_over_its_range() {
        let line = ConnectingLine::new(config::LINE_RANGE).unwrap();
        assert_eq!(line.style_at(0.3).to_css(), "height: 0%; opacity: 0;");
        assert_eq!(line.style_at(1.0).to_css(), "height: 100%; opacity: 1;");

        let halfway = line.style_at(0.575);
        assert_eq!(halfway.height.to_string(), "50%");
        assert!((halfway.opacity - 0.5).abs() < 1e-9);
    }
}
