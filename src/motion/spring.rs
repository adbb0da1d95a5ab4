use crate::config;

/// Longest frame gap integrated in one call; a backgrounded tab would otherwise
/// hand us seconds at once.
const MAX_FRAME_MS: f64 = 64.0;

/// Integration sub-step.
const STEP_MS: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Largest distance from the target that still counts as settled.
    pub rest_delta: f64,
    /// Largest speed (units per second) that still counts as settled.
    pub rest_speed: f64,
}

impl SpringConfig {
    /// The filter applied to scroll progress.
    pub const SCROLL: SpringConfig = SpringConfig {
        stiffness: config::SPRING_STIFFNESS,
        damping: config::SPRING_DAMPING,
        mass: config::SPRING_MASS,
        rest_delta: config::SPRING_REST_DELTA,
        rest_speed: config::SPRING_REST_SPEED,
    };
}

/// A damped spring chasing a target value.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            position: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    #[cfg(test)]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_at_rest(&self) -> bool {
        (self.target - self.position).abs() <= self.config.rest_delta
            && self.velocity.abs() <= self.config.rest_speed
    }

    /// Advances the spring by `dt_ms`. Returns `true` while it is still moving;
    /// once settled the position snaps exactly onto the target.
    pub fn step(&mut self, dt_ms: f64) -> bool {
        let mut remaining = dt_ms.clamp(0.0, MAX_FRAME_MS);
        while remaining > 0.0 {
            let h = remaining.min(STEP_MS) / 1000.0;
            let displacement = self.position - self.target;
            let force = -self.config.stiffness * displacement - self.config.damping * self.velocity;
            self.velocity += force / self.config.mass * h;
            self.position += self.velocity * h;
            remaining -= STEP_MS;
        }

        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settles_on_the_target() {
        let mut spring = Spring::new(SpringConfig::SCROLL, 0.0);
        spring.set_target(1.0);

        let mut frames = 0;
        while spring.step(16.0) {
            frames += 1;
            assert!(frames < 1_000, "spring never settled");
        }
        assert_eq!(spring.position(), 1.0);
        assert_eq!(spring.velocity(), 0.0);
        assert!(spring.is_at_rest());
    }

    #[test]
    fn lags_behind_a_jump() {
        let mut spring = Spring::new(SpringConfig::SCROLL, 0.0);
        spring.set_target(1.0);
        assert!(spring.step(16.0));
        assert!(spring.position() > 0.0);
        assert!(spring.position() < 0.5);
    }

    #[test]
    fn overdamped_scroll_spring_never_overshoots() {
        let mut spring = Spring::new(SpringConfig::SCROLL, 0.2);
        spring.set_target(0.8);
        for _ in 0..200 {
            spring.step(16.0);
            assert!(spring.position() <= 0.8 + 1e-12);
        }
    }

    #[test]
    fn long_frames_are_capped() {
        let mut capped = Spring::new(SpringConfig::SCROLL, 0.0);
        capped.set_target(1.0);
        capped.step(5_000.0);

        let mut reference = Spring::new(SpringConfig::SCROLL, 0.0);
        reference.set_target(1.0);
        reference.step(MAX_FRAME_MS);

        assert_eq!(capped.position(), reference.position());
    }

    #[test]
    fn a_spring_at_rest_stays_put() {
        let mut spring = Spring::new(SpringConfig::SCROLL, 0.4);
        assert!(!spring.step(16.0));
        assert_eq!(spring.position(), 0.4);
    }
}
