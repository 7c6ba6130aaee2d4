//! Damped spring for a single animated value.
//!
//! Parameterised by friction/tension in the "origami" convention and
//! integrated with fixed substeps (semi-implicit Euler).

/// Integration step in seconds
const SUBSTEP: f64 = 0.001;

/// Displacement below which the spring may come to rest
pub const REST_DISPLACEMENT_THRESHOLD: f64 = 0.001;
/// Speed below which the spring may come to rest
pub const REST_SPEED_THRESHOLD: f64 = 0.001;

/// Spring parameters in friction/tension form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub friction: f64,
    pub tension: f64,
}

impl SpringConfig {
    /// Spring used to return a released icon to its slot
    pub const ICON_RETURN: Self = Self {
        friction: 5.0,
        tension: 40.0,
    };

    pub const fn new(friction: f64, tension: f64) -> Self {
        Self { friction, tension }
    }

    /// Spring constant `k`
    pub fn stiffness(&self) -> f64 {
        (self.tension - 30.0) * 3.62 + 194.0
    }

    /// Damping coefficient `c`
    pub fn damping(&self) -> f64 {
        (self.friction - 8.0) * 3.0 + 25.0
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::ICON_RETURN
    }
}

/// One value animating toward a target
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    stiffness: f64,
    damping: f64,
    at_rest: bool,
}

impl Spring {
    /// Start a spring at `from` (with zero velocity) heading to `to`
    pub fn new(from: f64, to: f64, config: SpringConfig) -> Self {
        let mut spring = Self {
            value: from,
            velocity: 0.0,
            target: to,
            stiffness: config.stiffness(),
            damping: config.damping(),
            at_rest: false,
        };
        spring.settle_if_resting();
        spring
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Advance by `dt` seconds. Returns true once the spring is at rest.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.at_rest || dt <= 0.0 {
            return self.at_rest;
        }

        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP);
            let displacement = self.value - self.target;
            let force = -self.stiffness * displacement - self.damping * self.velocity;
            self.velocity += force * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        self.settle_if_resting();
        self.at_rest
    }

    fn settle_if_resting(&mut self) {
        if (self.value - self.target).abs() <= REST_DISPLACEMENT_THRESHOLD
            && self.velocity.abs() <= REST_SPEED_THRESHOLD
        {
            self.value = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origami_conversion() {
        let config = SpringConfig::ICON_RETURN;
        assert!((config.stiffness() - 230.2).abs() < 1e-9);
        assert!((config.damping() - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_spring_at_target_is_immediately_at_rest() {
        let spring = Spring::new(0.0, 0.0, SpringConfig::ICON_RETURN);
        assert!(spring.is_at_rest());
        assert_eq!(spring.value(), 0.0);
    }

    #[test]
    fn test_spring_settles_exactly_on_target() {
        let mut spring = Spring::new(60.0, 0.0, SpringConfig::ICON_RETURN);
        let mut frames = 0;
        while !spring.step(1.0 / 60.0) {
            frames += 1;
            assert!(frames < 600, "spring did not settle within 10s");
        }
        assert_eq!(spring.value(), 0.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn test_underdamped_spring_overshoots() {
        // friction 5 / tension 40 is underdamped, so the value crosses the target
        let mut spring = Spring::new(-50.0, 0.0, SpringConfig::ICON_RETURN);
        let mut max_seen = f64::MIN;
        for _ in 0..120 {
            spring.step(1.0 / 60.0);
            max_seen = max_seen.max(spring.value());
        }
        assert!(max_seen > 0.0);
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let mut spring = Spring::new(10.0, 0.0, SpringConfig::ICON_RETURN);
        assert!(!spring.step(0.0));
        assert_eq!(spring.value(), 10.0);
    }
}
