use std::f32::consts::PI;
use std::time::Duration;

use serde::Deserialize;

/// Default duration of a timing transition.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(500);

/// Easing function for timing transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    /// Cubic bezier (0.42, 0, 1, 1).
    Ease,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
    Quad,
    Cubic,
    Sin,
    Circle,
    Exp,
    Bounce,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Ease => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Easing::EaseIn | Easing::Quad => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::Cubic => t * t * t,
            Easing::Sin => 1.0 - (t * PI / 2.0).cos(),
            Easing::Circle => 1.0 - (1.0 - t * t).sqrt(),
            Easing::Exp => {
                if t <= 0.0 {
                    0.0
                } else {
                    2f32.powf(10.0 * (t - 1.0))
                }
            }
            Easing::Bounce => bounce(t),
        }
    }
}

fn bounce(t: f32) -> f32 {
    if t < 1.0 / 2.75 {
        7.5625 * t * t
    } else if t < 2.0 / 2.75 {
        let t = t - 1.5 / 2.75;
        7.5625 * t * t + 0.75
    } else if t < 2.5 / 2.75 {
        let t = t - 2.25 / 2.75;
        7.5625 * t * t + 0.9375
    } else {
        let t = t - 2.625 / 2.75;
        7.5625 * t * t + 0.984375
    }
}

/// Evaluate a CSS-style cubic bezier easing curve at `x`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    let curve = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };

    // Bisection on the x curve; it is monotonic for x1, x2 in [0, 1].
    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    let mut s = x;
    for _ in 0..32 {
        let current = curve(x1, x2, s);
        if (current - x).abs() < 1e-5 {
            break;
        }
        if current < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    curve(y1, y2, s)
}

/// Parameters of a time-based transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingConfig {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            delay: Duration::ZERO,
            easing: Easing::default(),
        }
    }
}

impl TimingConfig {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            ..Default::default()
        }
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Parameters of a physics-based spring transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Distance to the target under which the spring may come to rest.
    pub rest_displacement_threshold: f32,
    /// Speed under which the spring may come to rest.
    pub rest_speed_threshold: f32,
    /// Snap to the target as soon as the spring crosses it.
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::from_bounciness(8.0, 12.0)
    }
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
            rest_displacement_threshold: 0.001,
            rest_speed_threshold: 0.001,
            overshoot_clamping: false,
        }
    }

    /// Derive stiffness and damping from the bounciness/speed pair.
    ///
    /// Higher bounciness overshoots more, higher speed settles sooner.
    pub fn from_bounciness(bounciness: f32, speed: f32) -> Self {
        let b = project_normal(normalize(bounciness / 1.7, 0.0, 20.0), 0.0, 0.8);
        let s = normalize(speed / 1.7, 0.0, 20.0);

        let tension = project_normal(s, 0.5, 200.0);
        let friction = quadratic_out_interpolation(b, no_bounce_friction(tension), 0.01);

        Self::new(
            (tension - 30.0) * 3.62 + 194.0,
            (friction - 8.0) * 3.0 + 25.0,
        )
    }

    pub fn mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn overshoot_clamping(mut self, clamp: bool) -> Self {
        self.overshoot_clamping = clamp;
        self
    }

    pub fn rest_thresholds(mut self, displacement: f32, speed: f32) -> Self {
        self.rest_displacement_threshold = displacement;
        self.rest_speed_threshold = speed;
        self
    }
}

fn normalize(value: f32, start: f32, end: f32) -> f32 {
    (value - start) / (end - start)
}

fn project_normal(n: f32, start: f32, end: f32) -> f32 {
    start + n * (end - start)
}

fn quadratic_out_interpolation(t: f32, start: f32, end: f32) -> f32 {
    let t = 2.0 * t - t * t;
    t * end + (1.0 - t) * start
}

fn no_bounce_friction(tension: f32) -> f32 {
    let x = tension;
    if x <= 18.0 {
        0.0007 * x.powi(3) - 0.031 * x.powi(2) + 0.64 * x + 1.28
    } else if x <= 44.0 {
        0.000044 * x.powi(3) - 0.006 * x.powi(2) + 0.36 * x + 2.0
    } else {
        0.00000045 * x.powi(3) - 0.000332 * x.powi(2) + 0.1078 * x + 5.84
    }
}

/// The algorithm that drives a transition, with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Technique {
    Timing(TimingConfig),
    Spring(SpringConfig),
}

impl Technique {
    pub fn timing(duration: Duration, easing: Easing) -> Self {
        Self::Timing(TimingConfig::new(duration, easing))
    }

    pub fn spring(bounciness: f32) -> Self {
        Self::Spring(SpringConfig::from_bounciness(bounciness, 12.0))
    }

    /// Key naming this technique in declarative descriptors.
    pub fn name(&self) -> &'static str {
        match self {
            Technique::Timing(_) => "timing",
            Technique::Spring(_) => "spring",
        }
    }
}
