use crate::config;
use crate::motion::easing::Easing;
use crate::motion::looping::LoopAnimation;
use crate::motion::value::{format_number, Lerp, Rgba};

/// A timed transition between two numbers. Times are milliseconds on any
/// monotonic clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn settled(value: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from: value,
            to: value,
            start_ms: f64::NEG_INFINITY,
            duration_ms: duration_ms.max(1.0),
            easing,
        }
    }

    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.duration_ms
    }

    pub fn is_done(&self, now_ms: f64) -> bool {
        now_ms >= self.end_ms()
    }

    pub fn sample(&self, now_ms: f64) -> f64 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let t = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0);
        self.from.lerp(&self.to, self.easing.sample(t))
    }

    /// Starts again from wherever the tween currently is, so reversing midway
    /// never jumps.
    pub fn retarget(&mut self, now_ms: f64, to: f64) {
        let current = self.sample(now_ms);
        self.from = current;
        self.to = to;
        self.start_ms = now_ms;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverState {
    Idle,
    Hovered,
}

/// Everything the call-to-action button renders that depends on interaction.
#[derive(Clone, Debug, PartialEq)]
pub struct CtaVisual {
    pub bracket_opacity: f64,
    /// Outward offset of each corner bracket, in px along both axes.
    pub bracket_offset: f64,
    /// Vertical offset of the fill layer, as a percentage of the button height.
    pub fill_offset: f64,
    /// Horizontal offset of the scanning highlight, as a percentage of its width.
    pub scan_offset: f64,
    pub label_color: Rgba,
    pub letter_spacing_em: f64,
    pub glow_opacity: f64,
    pub glow_scale: f64,
    pub press_scale: f64,
}

impl CtaVisual {
    #[cfg(test)]
    pub fn idle() -> Self {
        Self::blend(0.0, 0.0, 0.0, 0.0, config::SCAN_FROM, false)
    }

    fn blend(brackets: f64, fill: f64, label: f64, glow: f64, scan_offset: f64, pressed: bool) -> Self {
        Self {
            bracket_opacity: brackets,
            bracket_offset: config::BRACKET_OFFSET_PX * brackets,
            fill_offset: 100.0 * (1.0 - fill),
            scan_offset,
            label_color: Rgba::WHITE.lerp(&Rgba::BLACK, label),
            letter_spacing_em: 0.2_f64.lerp(&0.4, label),
            glow_opacity: glow,
            glow_scale: 1.0_f64.lerp(&1.05, glow),
            press_scale: if pressed { config::PRESS_SCALE } else { 1.0 },
        }
    }

    /// Style for a corner bracket; `dx`/`dy` give its outward direction (-1 or 1).
    pub fn bracket_css(&self, dx: f64, dy: f64) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px);",
            format_number(self.bracket_opacity),
            format_number(dx * self.bracket_offset),
            format_number(dy * self.bracket_offset)
        )
    }

    pub fn fill_css(&self) -> String {
        format!("transform: translateY({}%);", format_number(self.fill_offset))
    }

    pub fn scan_css(&self) -> String {
        format!("transform: translateX({}%) skewX(12deg);", format_number(self.scan_offset))
    }

    pub fn label_css(&self) -> String {
        format!(
            "color: {}; letter-spacing: {}em;",
            self.label_color,
            format_number(self.letter_spacing_em)
        )
    }

    pub fn glow_css(&self) -> String {
        format!(
            "opacity: {}; transform: scale({});",
            format_number(self.glow_opacity),
            format_number(self.glow_scale)
        )
    }

    pub fn button_css(&self) -> String {
        format!("transform: scale({});", format_number(self.press_scale))
    }
}

/// Hover/tap state of the call-to-action button.
///
/// Pointer enter/leave switch between idle and hovered and retarget each timed
/// transition from its current value. Pressing is a transient scale-down that
/// does not change the hover state. Nothing is activated here.
#[derive(Clone, Debug)]
pub struct CtaInteraction {
    state: HoverState,
    pressed: bool,
    brackets: Tween,
    fill: Tween,
    label: Tween,
    glow: Tween,
    scan: Option<LoopAnimation<f64>>,
    scan_started_ms: Option<f64>,
}

impl Default for CtaInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl CtaInteraction {
    pub fn new() -> Self {
        let scan = LoopAnimation::evenly(
            vec![config::SCAN_FROM, config::SCAN_TO],
            config::SCAN_PERIOD_MS,
            Easing::Linear,
        )
        .map_err(|err| log::error!("scan loop disabled: {}", err))
        .ok();
        Self {
            state: HoverState::Idle,
            pressed: false,
            brackets: Tween::settled(0.0, config::BRACKET_TRANSITION_MS, Easing::Ease),
            fill: Tween::settled(0.0, config::FILL_TRANSITION_MS, config::FILL_EASING),
            label: Tween::settled(0.0, config::LABEL_TRANSITION_MS, Easing::Ease),
            glow: Tween::settled(0.0, config::GLOW_TRANSITION_MS, Easing::Ease),
            scan,
            scan_started_ms: None,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> HoverState {
        self.state
    }

    #[cfg(test)]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn pointer_enter(&mut self, now_ms: f64) {
        if self.state == HoverState::Hovered {
            return;
        }
        self.state = HoverState::Hovered;
        self.retarget_all(now_ms, 1.0);
        self.scan_started_ms = Some(now_ms);
    }

    pub fn pointer_leave(&mut self, now_ms: f64) {
        if self.state == HoverState::Idle {
            return;
        }
        self.state = HoverState::Idle;
        self.pressed = false;
        self.retarget_all(now_ms, 0.0);
        self.scan_started_ms = None;
    }

    pub fn pointer_down(&mut self) {
        self.pressed = true;
    }

    pub fn pointer_up(&mut self) {
        self.pressed = false;
    }

    fn retarget_all(&mut self, now_ms: f64, to: f64) {
        for tween in [&mut self.brackets, &mut self.fill, &mut self.label, &mut self.glow] {
            tween.retarget(now_ms, to);
        }
    }

    /// Whether anything still changes over time: a transition in flight, or the
    /// scanning loop while hovered.
    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.scan_started_ms.is_some()
            || [&self.brackets, &self.fill, &self.label, &self.glow]
                .iter()
                .any(|tween| !tween.is_done(now_ms))
    }

    pub fn visual(&self, now_ms: f64) -> CtaVisual {
        let scan_offset = match (&self.scan, self.scan_started_ms) {
            (Some(scan), Some(start)) => scan.sample(now_ms - start),
            _ => config::SCAN_FROM,
        };
        CtaVisual::blend(
            self.brackets.sample(now_ms),
            self.fill.sample(now_ms),
            self.label.sample(now_ms),
            self.glow.sample(now_ms),
            scan_offset,
            self.pressed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_the_idle_baseline() {
        let cta = CtaInteraction::new();
        assert_eq!(cta.state(), HoverState::Idle);
        assert_eq!(cta.visual(0.0), CtaVisual::idle());
        assert!(!cta.is_animating(0.0));

        let idle = CtaVisual::idle();
        assert_eq!(idle.fill_offset, 100.0);
        assert_eq!(idle.scan_offset, -100.0);
        assert_eq!(idle.label_color, Rgba::WHITE);
        assert_eq!(idle.letter_spacing_em, 0.2);
    }

    #[test]
    fn hovering_reveals_everything() {
        let mut cta = CtaInteraction::new();
        cta.pointer_enter(1_000.0);
        assert_eq!(cta.state(), HoverState::Hovered);

        let settled = cta.visual(1_000.0 + config::FILL_TRANSITION_MS);
        assert_eq!(settled.bracket_opacity, 1.0);
        assert_eq!(settled.bracket_offset, config::BRACKET_OFFSET_PX);
        assert_eq!(settled.fill_offset, 0.0);
        assert_eq!(settled.label_color, Rgba::BLACK);
        assert_eq!(settled.letter_spacing_em, 0.4);
        assert_eq!(settled.glow_opacity, 1.0);
        assert!((settled.glow_scale - 1.05).abs() < 1e-12);
        assert!(cta.is_animating(10_000.0), "scan loop runs while hovered");
    }

    #[test]
    fn fill_rises_with_a_fast_out_curve() {
        let mut cta = CtaInteraction::new();
        cta.pointer_enter(0.0);
        let quarter = cta.visual(config::FILL_TRANSITION_MS / 4.0).fill_offset;
        assert!(quarter < 75.0, "eased fill should lead linear time, got {quarter}");
        assert!(quarter > 0.0);
    }

    #[test]
    fn scan_sweeps_left_to_right_while_hovered() {
        let mut cta = CtaInteraction::new();
        cta.pointer_enter(0.0);
        let early = cta.visual(100.0).scan_offset;
        let later = cta.visual(700.0).scan_offset;
        assert!(early > config::SCAN_FROM && later > early);
        assert_eq!(cta.visual(config::SCAN_PERIOD_MS).scan_offset, config::SCAN_FROM);
    }

    #[test]
    fn leaving_before_transitions_finish_returns_exactly_to_idle() {
        let mut cta = CtaInteraction::new();
        cta.pointer_enter(0.0);
        cta.pointer_leave(120.0);
        assert_eq!(cta.state(), HoverState::Idle);

        let reversing = cta.visual(130.0);
        assert!(reversing.fill_offset < 100.0, "reversal starts from where it was");
        assert_eq!(reversing.scan_offset, config::SCAN_FROM);

        let later = 120.0 + config::FILL_TRANSITION_MS;
        assert_eq!(cta.visual(later), CtaVisual::idle());
        assert!(!cta.is_animating(later));
    }

    #[test]
    fn reversal_never_jumps() {
        let mut cta = CtaInteraction::new();
        cta.pointer_enter(0.0);
        let before = cta.visual(200.0);
        cta.pointer_leave(200.0);
        let after = cta.visual(200.0);
        assert_eq!(before.fill_offset, after.fill_offset);
        assert_eq!(before.bracket_opacity, after.bracket_opacity);
    }

    #[test]
    fn pressing_is_independent_of_hover() {
        let mut cta = CtaInteraction::new();
        cta.pointer_down();
        assert_eq!(cta.visual(0.0).press_scale, config::PRESS_SCALE);
        assert_eq!(cta.state(), HoverState::Idle);
        cta.pointer_up();
        assert_eq!(cta.visual(0.0), CtaVisual::idle());

        cta.pointer_enter(0.0);
        cta.pointer_down();
        cta.pointer_leave(10.0);
        assert!(!cta.is_pressed());
    }

    #[test]
    fn repeated_enter_does_not_restart_transitions() {
        let mut cta = CtaInteraction::new();
        cta.pointer_enter(0.0);
        let halfway = cta.visual(300.0);
        cta.pointer_enter(300.0);
        assert_eq!(cta.visual(300.0), halfway);
    }

    #[test]
    fn css_fragments() {
        let idle = CtaVisual::idle();
        assert_eq!(idle.bracket_css(-1.0, 1.0), "opacity: 0; transform: translate(0px, 0px);");
        assert_eq!(idle.fill_css(), "transform: translateY(100%);");
        assert_eq!(idle.label_css(), "color: #ffffff; letter-spacing: 0.2em;");
        assert_eq!(idle.button_css(), "transform: scale(1);");
    }

    #[test]
    fn tweens_retarget_from_their_current_value() {
        let mut tween = Tween::settled(0.0, 100.0, Easing::Linear);
        tween.retarget(0.0, 1.0);
        assert_eq!(tween.sample(50.0), 0.5);
        tween.retarget(50.0, 0.0);
        assert_eq!(tween.sample(50.0), 0.5);
        assert_eq!(tween.sample(150.0), 0.0);
        assert!(tween.is_done(150.0));
    }
}
