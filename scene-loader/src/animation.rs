//! Animation runtime driving a single shared scalar.
//!
//! An [`AnimatedValue`] is a cheap handle; clones observe the same scalar.
//! The [`Animator`] is its only writer and runs at most one motion at a
//! time. Starting a new motion stops the previous one, and every started
//! motion reports exactly one [`Completion`], either when it settles
//! (`finished: true`) or when it is interrupted (`finished: false`).

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use log::trace;

use crate::transitions::{SpringConfig, Technique, TimingConfig};

/// Damping ratios this close to 1 use the critically damped solution.
const CRITICAL_BAND: f64 = 1e-6;

/// Shared handle to one mutable scalar.
#[derive(Debug, Clone, Default)]
pub struct AnimatedValue(Rc<Cell<f32>>);

impl AnimatedValue {
    pub fn new(value: f32) -> Self {
        Self(Rc::new(Cell::new(value)))
    }

    pub fn get(&self) -> f32 {
        self.0.get()
    }

    pub fn set(&self, value: f32) {
        self.0.set(value);
    }

    /// Returns true if both handles point at the same scalar.
    pub fn ptr_eq(&self, other: &AnimatedValue) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Identifies one started motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationId(u64);

/// Completion report of a started motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub id: AnimationId,
    /// False when the motion was stopped before reaching its target.
    pub finished: bool,
}

#[derive(Debug, Clone)]
enum Motion {
    Timing {
        from: f32,
        config: TimingConfig,
        elapsed: Duration,
    },
    Spring {
        oscillator: Oscillator,
        start_side: f64,
        elapsed: f64,
        config: SpringConfig,
    },
}

/// Closed-form damped spring, as displacement from the target over time.
#[derive(Debug, Clone, Copy)]
enum Oscillator {
    /// No restoring force.
    Slack,
    Under {
        decay: f64,
        freq: f64,
        c1: f64,
        c2: f64,
    },
    Critical {
        omega: f64,
        c1: f64,
        c2: f64,
    },
    Over {
        r1: f64,
        r2: f64,
        a: f64,
        b: f64,
    },
}

impl Oscillator {
    fn new(displacement: f64, velocity: f64, config: &SpringConfig) -> Self {
        let stiffness = (config.stiffness as f64).max(0.0);
        let damping = (config.damping as f64).max(0.0);
        let mass = (config.mass as f64).max(f64::EPSILON);
        if stiffness == 0.0 {
            return Self::Slack;
        }

        let omega = (stiffness / mass).sqrt();
        let zeta = damping / (2.0 * (stiffness * mass).sqrt());

        if (zeta - 1.0).abs() < CRITICAL_BAND {
            Self::Critical {
                omega,
                c1: displacement,
                c2: velocity + omega * displacement,
            }
        } else if zeta < 1.0 {
            let decay = zeta * omega;
            let freq = omega * (1.0 - zeta * zeta).sqrt();
            Self::Under {
                decay,
                freq,
                c1: displacement,
                c2: (velocity + decay * displacement) / freq,
            }
        } else {
            // Slow root from r1 * r2 == omega^2.
            let r2 = -omega * (zeta + (zeta * zeta - 1.0).sqrt());
            let r1 = omega * omega / r2;
            let a = (velocity - r2 * displacement) / (r1 - r2);
            Self::Over {
                r1,
                r2,
                a,
                b: displacement - a,
            }
        }
    }

    /// Displacement and velocity `t` seconds after the motion started.
    fn state(&self, t: f64) -> (f64, f64) {
        match *self {
            Self::Slack => (0.0, 0.0),
            Self::Under { decay, freq, c1, c2 } => {
                let envelope = (-decay * t).exp();
                let (sin, cos) = (freq * t).sin_cos();
                (
                    envelope * (c1 * cos + c2 * sin),
                    envelope * ((freq * c2 - decay * c1) * cos - (decay * c2 + freq * c1) * sin),
                )
            }
            Self::Critical { omega, c1, c2 } => {
                let envelope = (-omega * t).exp();
                let displacement = c1 + c2 * t;
                (envelope * displacement, envelope * (c2 - omega * displacement))
            }
            Self::Over { r1, r2, a, b } => {
                let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
                (a * e1 + b * e2, a * r1 * e1 + b * r2 * e2)
            }
        }
    }
}

#[derive(Debug, Clone)]
struct ActiveMotion {
    id: AnimationId,
    to: f32,
    motion: Motion,
}

impl ActiveMotion {
    /// Advance by `dt`, returning the new value and whether the motion settled.
    fn step(&mut self, dt: Duration) -> (f32, bool) {
        let to = self.to;
        match &mut self.motion {
            Motion::Timing {
                from,
                config,
                elapsed,
            } => {
                *elapsed += dt;
                let active = elapsed.saturating_sub(config.delay);
                if active < config.duration {
                    let progress = active.as_secs_f32() / config.duration.as_secs_f32();
                    let eased = config.easing.apply(progress);
                    (*from + (to - *from) * eased, false)
                } else if *elapsed >= config.delay {
                    (to, true)
                } else {
                    (*from, false)
                }
            }
            Motion::Spring {
                oscillator,
                start_side,
                elapsed,
                config,
            } => {
                *elapsed += dt.as_secs_f64();
                let (displacement, velocity) = oscillator.state(*elapsed);

                let diverged = !displacement.is_finite() || !velocity.is_finite();
                let overshot = config.overshoot_clamping
                    && *start_side != 0.0
                    && displacement.signum() != *start_side;
                let at_rest = velocity.abs() <= config.rest_speed_threshold as f64
                    && displacement.abs() <= config.rest_displacement_threshold as f64;

                if diverged || overshot || at_rest || matches!(oscillator, Oscillator::Slack) {
                    (to, true)
                } else {
                    ((to as f64 + displacement) as f32, false)
                }
            }
        }
    }
}

/// Runs one motion at a time over an [`AnimatedValue`].
#[derive(Debug)]
pub struct Animator {
    value: AnimatedValue,
    active: Option<ActiveMotion>,
    next_id: u64,
}

impl Animator {
    pub fn new(value: AnimatedValue) -> Self {
        Self {
            value,
            active: None,
            next_id: 0,
        }
    }

    /// The scalar this animator writes.
    pub fn value(&self) -> &AnimatedValue {
        &self.value
    }

    /// Returns true while a motion is in flight.
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Start a motion from the current value toward `to`.
    ///
    /// Returns the new motion's id and, if a motion was already in flight,
    /// the interrupted motion's completion.
    pub fn start(&mut self, to: f32, technique: &Technique) -> (AnimationId, Option<Completion>) {
        let interrupted = self.stop();

        let id = AnimationId(self.next_id);
        self.next_id += 1;

        let current = self.value.get();
        let motion = match technique {
            Technique::Timing(config) => Motion::Timing {
                from: current,
                config: *config,
                elapsed: Duration::ZERO,
            },
            Technique::Spring(config) => {
                let displacement = (current - to) as f64;
                Motion::Spring {
                    oscillator: Oscillator::new(displacement, 0.0, config),
                    start_side: displacement.signum(),
                    elapsed: 0.0,
                    config: *config,
                }
            }
        };

        trace!("animation {:?}: {} -> {} ({})", id, current, to, technique.name());
        self.active = Some(ActiveMotion { id, to, motion });
        (id, interrupted)
    }

    /// Advance the running motion by one frame.
    ///
    /// Returns the completion once the motion settles on its target.
    pub fn tick(&mut self, dt: Duration) -> Option<Completion> {
        let active = self.active.as_mut()?;
        let (value, settled) = active.step(dt);
        self.value.set(value);

        if settled {
            let id = active.id;
            self.active = None;
            trace!("animation {:?} finished at {}", id, value);
            Some(Completion { id, finished: true })
        } else {
            None
        }
    }

    /// Stop the running motion where it is.
    pub fn stop(&mut self) -> Option<Completion> {
        self.active.take().map(|active| {
            trace!("animation {:?} interrupted at {}", active.id, self.value.get());
            Completion {
                id: active.id,
                finished: false,
            }
        })
    }
}
