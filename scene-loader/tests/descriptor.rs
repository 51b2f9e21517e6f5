use std::time::Duration;

use scene_loader::{
    AnimatedValue, AnimationBounds, AnimationDescriptor, ConfigError, Direction, Easing,
    Resolver, SpringConfig, StyleChannel, Technique, TimingConfig, Viewport,
};

const VIEWPORT: Viewport = Viewport::new(120, 40);

fn bounds_of(direction: Direction) -> AnimationBounds {
    let descriptor = AnimationDescriptor::new(direction, Technique::Timing(TimingConfig::default()));
    Resolver::new(Some(&descriptor), VIEWPORT)
        .current_bounds()
        .unwrap()
}

// ============================================================================
// Direction bounds
// ============================================================================

#[test]
fn test_fade_bounds() {
    assert_eq!(bounds_of(Direction::Fade), AnimationBounds::new(0.0, 1.0));
}

#[test]
fn test_top_bounds() {
    assert_eq!(bounds_of(Direction::Top), AnimationBounds::new(-40.0, 0.0));
}

#[test]
fn test_bottom_bounds() {
    assert_eq!(bounds_of(Direction::Bottom), AnimationBounds::new(40.0, 0.0));
}

#[test]
fn test_left_bounds() {
    assert_eq!(bounds_of(Direction::Left), AnimationBounds::new(-120.0, 0.0));
}

#[test]
fn test_right_bounds() {
    assert_eq!(bounds_of(Direction::Right), AnimationBounds::new(120.0, 0.0));
}

#[test]
fn test_bounds_target() {
    let bounds = AnimationBounds::new(-40.0, 0.0);
    assert_eq!(bounds.target(true), 0.0);
    assert_eq!(bounds.target(false), -40.0);
}

#[test]
fn test_directional_bounds_track_viewport() {
    let small = Direction::Top.bounds(Viewport::new(10, 5));
    let large = Direction::Top.bounds(Viewport::new(10, 50));
    assert_eq!(small.start, -5.0);
    assert_eq!(large.start, -50.0);
    assert_eq!(Direction::Fade.bounds(Viewport::new(1, 1)), AnimationBounds::new(0.0, 1.0));
}

// ============================================================================
// Direction names
// ============================================================================

#[test]
fn test_direction_names_parse_back() {
    for direction in Direction::ALL {
        assert_eq!(direction.name().parse::<Direction>().unwrap(), direction);
    }
}

#[test]
fn test_bottom_alias() {
    assert_eq!("bottom".parse::<Direction>().unwrap(), Direction::Bottom);
    assert_eq!(Direction::Bottom.to_string(), "bot");
}

#[test]
fn test_unknown_direction_name() {
    let err = "spin".parse::<Direction>().unwrap_err();
    assert!(matches!(err, ConfigError::UnknownAnimation { ref name } if name == "spin"));
    assert_eq!(
        err.to_string(),
        "Unknown animation spin, known are: fade, top, bot, left, right"
    );
}

#[test]
fn test_direction_channels() {
    assert_eq!(Direction::Fade.channel(), StyleChannel::Opacity);
    assert_eq!(Direction::Top.channel(), StyleChannel::Top);
    assert_eq!(Direction::Bottom.channel(), StyleChannel::Top);
    assert_eq!(Direction::Left.channel(), StyleChannel::Left);
    assert_eq!(Direction::Right.channel(), StyleChannel::Left);
}

// ============================================================================
// Resolver
// ============================================================================

#[test]
fn test_resolver_without_descriptor() {
    let resolver = Resolver::new(None, VIEWPORT);
    assert_eq!(resolver.current_direction_name(), "");
    assert_eq!(resolver.current_technique(), "");
    assert!(matches!(resolver.current_bounds(), Err(ConfigError::NoAnimation)));
    assert!(resolver.current_animated_style(&AnimatedValue::new(0.0)).is_none());
    assert_eq!(ConfigError::NoAnimation.to_string(), "No animation is set");
}

#[test]
fn test_resolver_names() {
    let descriptor = AnimationDescriptor::bottom(Technique::spring(4.0));
    let resolver = Resolver::new(Some(&descriptor), VIEWPORT);
    assert_eq!(resolver.current_direction_name(), "bot");
    assert_eq!(resolver.current_technique(), "spring");
}

#[test]
fn test_animated_style_reads_live_value() {
    let descriptor = AnimationDescriptor::left(Technique::Timing(TimingConfig::default()));
    let value = AnimatedValue::new(-120.0);
    let style = Resolver::new(Some(&descriptor), VIEWPORT)
        .current_animated_style(&value)
        .unwrap();

    assert_eq!(style.channel, StyleChannel::Left);
    assert!(style.value.ptr_eq(&value));
    assert_eq!(style.offset(), (-120, 0));
    assert_eq!(style.opacity(), 1.0);

    value.set(-7.6);
    assert_eq!(style.offset(), (-8, 0));
}

#[test]
fn test_fade_style_clamps_opacity() {
    let descriptor = AnimationDescriptor::fade(Technique::Timing(TimingConfig::default()));
    let value = AnimatedValue::new(1.4);
    let style = Resolver::new(Some(&descriptor), VIEWPORT)
        .current_animated_style(&value)
        .unwrap();

    assert_eq!(style.opacity(), 1.0);
    assert_eq!(style.offset(), (0, 0));
    value.set(0.25);
    assert_eq!(style.opacity(), 0.25);
}

// ============================================================================
// Declarative parsing
// ============================================================================

#[test]
fn test_parse_timing_descriptor() {
    let descriptor = AnimationDescriptor::from_json_str(
        r#"{"fade": {"timing": {"duration": 1000, "delay": 50, "easing": "circle"}}}"#,
    )
    .unwrap();

    assert_eq!(descriptor.direction, Direction::Fade);
    assert_eq!(
        descriptor.technique,
        Technique::Timing(
            TimingConfig::new(Duration::from_millis(1000), Easing::Circle)
                .delay(Duration::from_millis(50))
        )
    );
}

#[test]
fn test_parse_timing_defaults() {
    let descriptor = AnimationDescriptor::from_json_str(r#"{"top": {"timing": {}}}"#).unwrap();
    assert_eq!(descriptor.direction, Direction::Top);
    assert_eq!(descriptor.technique, Technique::Timing(TimingConfig::default()));
}

#[test]
fn test_parse_spring_bounciness() {
    let descriptor =
        AnimationDescriptor::from_json_str(r#"{"bot": {"spring": {"bounciness": 15}}}"#).unwrap();
    assert_eq!(descriptor, AnimationDescriptor::bottom(Technique::spring(15.0)));
}

#[test]
fn test_parse_spring_physics() {
    let descriptor = AnimationDescriptor::from_json_str(
        r#"{"left": {"spring": {
            "stiffness": 200,
            "damping": 20,
            "mass": 2,
            "overshootClamping": true,
            "restDisplacementThreshold": 0.5,
            "restSpeedThreshold": 0.25
        }}}"#,
    )
    .unwrap();

    let expected = SpringConfig::new(200.0, 20.0)
        .mass(2.0)
        .overshoot_clamping(true)
        .rest_thresholds(0.5, 0.25);
    assert_eq!(descriptor, AnimationDescriptor::left(Technique::Spring(expected)));
}

#[test]
fn test_parse_empty_descriptor() {
    let err = AnimationDescriptor::from_json_str("{}").unwrap_err();
    assert!(matches!(err, ConfigError::Empty));
}

#[test]
fn test_parse_multiple_directions() {
    let err = AnimationDescriptor::from_json_str(
        r#"{"fade": {"timing": {}}, "top": {"timing": {}}}"#,
    )
    .unwrap_err();

    match &err {
        ConfigError::MultipleAnimations { names } => {
            assert_eq!(names.len(), 2);
            assert!(names.iter().any(|n| n == "fade"));
            assert!(names.iter().any(|n| n == "top"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err
        .to_string()
        .starts_with("Only one animation could be defined at a time, got: "));
}

#[test]
fn test_parse_unknown_direction() {
    let err = AnimationDescriptor::from_json_str(r#"{"zoom": {"timing": {}}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownAnimation { ref name } if name == "zoom"));
}

#[test]
fn test_parse_missing_technique() {
    let err = AnimationDescriptor::from_json_str(r#"{"fade": {}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::MissingTechnique { ref direction } if direction == "fade"));
}

#[test]
fn test_parse_multiple_techniques() {
    let err = AnimationDescriptor::from_json_str(r#"{"fade": {"timing": {}, "spring": {}}}"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::MultipleTechniques { ref names, .. } if names.len() == 2));
}

#[test]
fn test_parse_unknown_technique() {
    let err = AnimationDescriptor::from_json_str(r#"{"fade": {"decay": {}}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownTechnique { ref name } if name == "decay"));
}

#[test]
fn test_parse_negative_duration() {
    let err = AnimationDescriptor::from_json_str(r#"{"fade": {"timing": {"duration": -1}}}"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidParameter { technique: "timing", .. }));
}

#[test]
fn test_parse_mixed_spring_parameters() {
    let err = AnimationDescriptor::from_json_str(
        r#"{"top": {"spring": {"bounciness": 4, "stiffness": 100}}}"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidParameter { technique: "spring", .. }));
}

#[test]
fn test_parse_zero_mass() {
    let err = AnimationDescriptor::from_json_str(r#"{"top": {"spring": {"mass": 0}}}"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidParameter { technique: "spring", .. }));
}

#[test]
fn test_parse_unknown_parameter() {
    let err = AnimationDescriptor::from_json_str(r#"{"fade": {"timing": {"speed": 3}}}"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_parse_unknown_easing() {
    let err = AnimationDescriptor::from_json_str(r#"{"fade": {"timing": {"easing": "wobble"}}}"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_parse_not_an_object() {
    let err = AnimationDescriptor::from_json_str("[1, 2]").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));

    let err = AnimationDescriptor::from_json_str("not json").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_validate_accepts_defaults() {
    assert!(AnimationDescriptor::fade(Technique::Timing(TimingConfig::default()))
        .validate()
        .is_ok());
    assert!(AnimationDescriptor::top(Technique::Spring(SpringConfig::default()))
        .validate()
        .is_ok());
}

#[test]
fn test_validate_rejects_bad_spring() {
    let nan = AnimationDescriptor::top(Technique::Spring(SpringConfig::new(f32::NAN, 10.0)));
    assert!(nan.validate().is_err());

    let weightless =
        AnimationDescriptor::top(Technique::Spring(SpringConfig::default().mass(0.0)));
    assert!(weightless.validate().is_err());
}
