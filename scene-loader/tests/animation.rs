use std::time::Duration;

use scene_loader::{AnimatedValue, Animator, Easing, SpringConfig, Technique, TimingConfig};

const FRAME: Duration = Duration::from_millis(16);

fn linear(ms: u64) -> Technique {
    Technique::timing(Duration::from_millis(ms), Easing::Linear)
}

/// Tick until the animator reports a completion, returning the elapsed frames.
fn run_to_completion(animator: &mut Animator) -> usize {
    for frame in 1..=5_000 {
        if let Some(completion) = animator.tick(FRAME) {
            assert!(completion.finished);
            return frame;
        }
    }
    panic!("motion did not settle");
}

// ============================================================================
// AnimatedValue
// ============================================================================

#[test]
fn test_animated_value_clones_share_scalar() {
    let value = AnimatedValue::new(1.0);
    let observer = value.clone();

    value.set(0.25);

    assert_eq!(observer.get(), 0.25);
    assert!(value.ptr_eq(&observer));
    assert!(!value.ptr_eq(&AnimatedValue::new(0.25)));
}

// ============================================================================
// Timing
// ============================================================================

#[test]
fn test_timing_interpolates_linearly() {
    let value = AnimatedValue::new(0.0);
    let mut animator = Animator::new(value.clone());
    animator.start(10.0, &linear(100));

    assert!(animator.tick(Duration::from_millis(25)).is_none());
    assert!((value.get() - 2.5).abs() < 1e-4);

    assert!(animator.tick(Duration::from_millis(50)).is_none());
    assert!((value.get() - 7.5).abs() < 1e-4);

    let completion = animator.tick(Duration::from_millis(25)).unwrap();
    assert!(completion.finished);
    assert_eq!(value.get(), 10.0);
    assert!(!animator.is_running());
}

#[test]
fn test_timing_respects_delay() {
    let value = AnimatedValue::new(0.0);
    let mut animator = Animator::new(value.clone());
    let technique = Technique::Timing(
        TimingConfig::new(Duration::from_millis(100), Easing::Linear)
            .delay(Duration::from_millis(100)),
    );
    animator.start(1.0, &technique);

    animator.tick(Duration::from_millis(80));
    assert_eq!(value.get(), 0.0);

    animator.tick(Duration::from_millis(70));
    assert!((value.get() - 0.5).abs() < 1e-4);

    assert!(animator.tick(Duration::from_millis(50)).is_some());
    assert_eq!(value.get(), 1.0);
}

#[test]
fn test_zero_duration_finishes_on_first_tick() {
    let value = AnimatedValue::new(0.0);
    let mut animator = Animator::new(value.clone());
    animator.start(1.0, &linear(0));

    assert!(animator.tick(Duration::ZERO).is_some());
    assert_eq!(value.get(), 1.0);
}

#[test]
fn test_tick_without_motion() {
    let value = AnimatedValue::new(3.0);
    let mut animator = Animator::new(value.clone());

    assert!(animator.tick(FRAME).is_none());
    assert!(animator.stop().is_none());
    assert_eq!(value.get(), 3.0);
}

// ============================================================================
// Interruption
// ============================================================================

#[test]
fn test_start_interrupts_running_motion() {
    let value = AnimatedValue::new(0.0);
    let mut animator = Animator::new(value.clone());

    let (first, interrupted) = animator.start(1.0, &linear(100));
    assert!(interrupted.is_none());
    animator.tick(Duration::from_millis(50));

    let (second, interrupted) = animator.start(0.0, &linear(100));
    let interrupted = interrupted.unwrap();
    assert_eq!(interrupted.id, first);
    assert!(!interrupted.finished);
    assert_ne!(first, second);

    // New motion continues from the interrupted position
    animator.tick(Duration::from_millis(50));
    assert!((value.get() - 0.25).abs() < 1e-4);

    let completion = animator.tick(Duration::from_millis(50)).unwrap();
    assert_eq!(completion.id, second);
    assert_eq!(value.get(), 0.0);
}

#[test]
fn test_stop_leaves_value_in_place() {
    let value = AnimatedValue::new(0.0);
    let mut animator = Animator::new(value.clone());
    let (id, _) = animator.start(1.0, &linear(100));
    animator.tick(Duration::from_millis(40));

    let completion = animator.stop().unwrap();

    assert_eq!(completion.id, id);
    assert!(!completion.finished);
    assert!((value.get() - 0.4).abs() < 1e-4);
    assert!(animator.tick(FRAME).is_none(), "a stopped motion never completes");
}

// ============================================================================
// Spring
// ============================================================================

#[test]
fn test_spring_settles_on_target() {
    let value = AnimatedValue::new(-40.0);
    let mut animator = Animator::new(value.clone());
    animator.start(0.0, &Technique::spring(8.0));

    run_to_completion(&mut animator);

    assert_eq!(value.get(), 0.0);
}

#[test]
fn test_bouncy_spring_overshoots() {
    let value = AnimatedValue::new(-40.0);
    let mut animator = Animator::new(value.clone());
    animator.start(0.0, &Technique::spring(18.0));

    let mut peak = f32::MIN;
    while animator.tick(FRAME).is_none() {
        peak = peak.max(value.get());
    }

    assert!(peak > 0.0, "expected overshoot, peak was {peak}");
}

#[test]
fn test_overshoot_clamping_stops_at_target() {
    let value = AnimatedValue::new(-40.0);
    let mut animator = Animator::new(value.clone());
    let spring = SpringConfig::from_bounciness(18.0, 12.0).overshoot_clamping(true);
    animator.start(0.0, &Technique::Spring(spring));

    loop {
        let completion = animator.tick(FRAME);
        assert!(value.get() <= 0.0, "crossed target: {}", value.get());
        if completion.is_some() {
            break;
        }
    }
    assert_eq!(value.get(), 0.0);
}

#[test]
fn test_spring_large_frame_is_stable() {
    let value = AnimatedValue::new(100.0);
    let mut animator = Animator::new(value.clone());
    animator.start(0.0, &Technique::Spring(SpringConfig::new(500.0, 30.0)));

    animator.tick(Duration::from_millis(500));
    assert!(value.get().abs() < 100.0, "diverged to {}", value.get());
}

#[test]
fn test_spring_position_ignores_frame_size() {
    let coarse = AnimatedValue::new(-40.0);
    let fine = AnimatedValue::new(-40.0);
    let mut coarse_animator = Animator::new(coarse.clone());
    let mut fine_animator = Animator::new(fine.clone());
    coarse_animator.start(0.0, &Technique::spring(8.0));
    fine_animator.start(0.0, &Technique::spring(8.0));

    coarse_animator.tick(Duration::from_millis(200));
    for _ in 0..200 {
        fine_animator.tick(Duration::from_millis(1));
    }

    assert!((coarse.get() - fine.get()).abs() < 1e-3);
}

#[test]
fn test_extreme_springs_settle_on_target() {
    let springs = [
        SpringConfig::new(100.0, 600.0),
        SpringConfig::new(500.0, 10.0).mass(0.001),
        SpringConfig::new(300_000.0, 20.0),
        SpringConfig::new(100.0, 20.0),
    ];

    for spring in springs {
        let value = AnimatedValue::new(-24.0);
        let mut animator = Animator::new(value.clone());
        animator.start(0.0, &Technique::Spring(spring));

        for _ in 0..200 {
            if animator.tick(FRAME).is_some() {
                break;
            }
            assert!(value.get().is_finite(), "{spring:?} produced {}", value.get());
        }
        if animator.is_running() {
            run_to_completion(&mut animator);
        }
        assert_eq!(value.get(), 0.0, "{spring:?}");
    }
}

#[test]
fn test_default_spring_matches_bounciness_pair() {
    assert_eq!(SpringConfig::default(), SpringConfig::from_bounciness(8.0, 12.0));

    let stiff = SpringConfig::from_bounciness(0.0, 30.0);
    let loose = SpringConfig::from_bounciness(0.0, 2.0);
    assert!(stiff.stiffness > loose.stiffness);
    assert!(SpringConfig::default().damping > 0.0);
}

// ============================================================================
// Easing
// ============================================================================

#[test]
fn test_easing_endpoints() {
    let all = [
        Easing::Linear,
        Easing::Ease,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::Quad,
        Easing::Cubic,
        Easing::Sin,
        Easing::Circle,
        Easing::Exp,
        Easing::Bounce,
    ];
    for easing in all {
        assert!(easing.apply(0.0).abs() < 1e-3, "{easing:?} at 0");
        assert!((easing.apply(1.0) - 1.0).abs() < 1e-3, "{easing:?} at 1");
    }
}

#[test]
fn test_easing_clamps_progress() {
    assert_eq!(Easing::Linear.apply(-1.0), 0.0);
    assert_eq!(Easing::Linear.apply(2.0), 1.0);
}

#[test]
fn test_ease_in_out_is_symmetric() {
    assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
    let a = Easing::EaseInOut.apply(0.25);
    let b = Easing::EaseInOut.apply(0.75);
    assert!((a + b - 1.0).abs() < 1e-6);
}

#[test]
fn test_ease_in_starts_slow() {
    assert!(Easing::EaseIn.apply(0.5) < 0.5);
    assert!(Easing::EaseOut.apply(0.5) > 0.5);
    assert!(Easing::Ease.apply(0.5) < 0.5);
}
