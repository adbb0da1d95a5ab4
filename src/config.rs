use log::Level;

use crate::motion::drivers::SectionPreset;
use crate::motion::easing::Easing;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const BACKGROUND_VIDEO_URL: &str =
    "https://podofisioclinic.com/wp-content/uploads/2026/02/0_Physiotherapy_Chiropractic_1920x1080.mp4";

pub const DEVELOPER_URL: &str = "https://kivomarketing.com";

// Scroll smoothing
pub const SPRING_STIFFNESS: f64 = 100.0;
pub const SPRING_DAMPING: f64 = 30.0;
pub const SPRING_MASS: f64 = 1.0;
pub const SPRING_REST_DELTA: f64 = 0.001;
pub const SPRING_REST_SPEED: f64 = 0.01;

/// Tick period for every frame loop on the page.
pub const FRAME_INTERVAL_MS: u32 = 16;

// Looping decorations
pub const CHEVRON_BOB_MS: f64 = 2_000.0;
pub const ARROW_BOB_MS: f64 = 1_500.0;
pub const CHEVRON_BOB_OFFSETS: &[f64] = &[0.0, 10.0, 0.0];
pub const ARROW_BOB_OFFSETS: &[f64] = &[0.0, 12.0, 0.0];
pub const ARROW_BOB_OPACITIES: &[f64] = &[0.6, 1.0, 0.6];

/// The hero scroll cue fades out over this stretch of raw progress.
pub const SCROLL_CUE_RANGE: [f64; 2] = [0.0, 0.05];

/// Stretch of smoothed progress over which the connecting line fills.
pub const LINE_RANGE: [f64; 2] = [0.5, 0.65];

// Call-to-action button
pub const BRACKET_OFFSET_PX: f64 = 5.0;
pub const BRACKET_TRANSITION_MS: f64 = 300.0;
pub const FILL_TRANSITION_MS: f64 = 600.0;
pub const FILL_EASING: Easing = Easing::CubicBezier(0.23, 1.0, 0.32, 1.0);
pub const LABEL_TRANSITION_MS: f64 = 500.0;
pub const GLOW_TRANSITION_MS: f64 = 500.0;
pub const SCAN_FROM: f64 = -100.0;
pub const SCAN_TO: f64 = 200.0;
pub const SCAN_PERIOD_MS: f64 = 1_500.0;
pub const PRESS_SCALE: f64 = 0.98;

pub const HERO_SECTION: SectionPreset = SectionPreset {
    window: &[0.0, 0.1],
    opacity: &[1.0, 0.0],
    scale: &[1.0, 0.95],
    translate_y: &[0.0, -30.0],
};

pub const NARRATIVE_SECTION: SectionPreset = SectionPreset {
    window: &[0.05, 0.15, 0.25],
    opacity: &[0.0, 1.0, 0.0],
    scale: &[0.9, 1.0, 0.95],
    translate_y: &[50.0, 0.0, -50.0],
};

pub const QUESTION_SECTION: SectionPreset = SectionPreset {
    window: &[0.2, 0.3, 0.4],
    opacity: &[0.0, 1.0, 0.0],
    scale: &[0.7, 1.0, 1.3],
    translate_y: &[50.0, 0.0, -50.0],
};

pub const CLUE_SECTION: SectionPreset = SectionPreset {
    window: &[0.4, 0.5, 0.6],
    opacity: &[0.0, 1.0, 0.0],
    scale: &[0.95, 1.0, 0.95],
    translate_y: &[50.0, 0.0, -50.0],
};

pub const OFFER_SECTION: SectionPreset = SectionPreset {
    window: &[0.6, 0.75, 0.9],
    opacity: &[0.0, 1.0, 0.0],
    scale: &[0.98, 1.0, 0.98],
    translate_y: &[50.0, 0.0, -50.0],
};

pub const CTA_SECTION: SectionPreset = SectionPreset {
    window: &[0.85, 1.0],
    opacity: &[0.0, 1.0],
    scale: &[0.8, 1.0],
    translate_y: &[100.0, 0.0],
};

#[cfg(test)]
pub const SECTIONS: &[&SectionPreset] = &[
    &HERO_SECTION,
    &NARRATIVE_SECTION,
    &QUESTION_SECTION,
    &CLUE_SECTION,
    &OFFER_SECTION,
    &CTA_SECTION,
];

/// Pre-opening prices shown in the offer section.
pub const PREOPENING_PRICES: &[(&str, &str)] = &[
    ("Estudio + Plantillas", "140€"),
    ("Fisioterapia", "45€"),
    ("Podología", "30€"),
];
