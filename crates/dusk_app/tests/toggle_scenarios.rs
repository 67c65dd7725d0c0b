//! End-to-end behavior of the theme toggle screen

use dusk_app::headless_runner::run_scenario;
use dusk_app::headless_runtime::HeadlessRunConfig;
use dusk_app::prelude::*;

#[test]
fn even_toggle_count_restores_inactive_state() {
    let mut animator = ThemeToggleAnimator::default();
    for count in 1..=8 {
        animator.toggle();
        animator.tick(37.0);
        assert_eq!(animator.is_active(), count % 2 == 1);
    }
    assert!(!animator.is_active());
}

#[test]
fn color_phase_target_is_always_an_endpoint() {
    let mut animator = ThemeToggleAnimator::default();
    for dt in [0.0, 5.0, 120.0, 333.0, 599.0, 601.0, 16.0] {
        animator.toggle();
        let expected = if animator.is_active() { 1.0 } else { 0.0 };
        assert_eq!(
            animator.target(AnimatedProperty::ColorPhase),
            TransitionTarget::Value(expected)
        );
        animator.tick(dt);
    }
}

#[test]
fn background_endpoints_are_exact() {
    let mut animator = ThemeToggleAnimator::default();
    let palette = animator.theme().palette().clone();

    assert_eq!(animator.frame().background, palette.dark);

    animator.toggle();
    animator.tick(600.0);
    assert_eq!(animator.value(AnimatedProperty::ColorPhase), 1.0);
    assert_eq!(animator.frame().background, palette.light);

    animator.toggle();
    animator.tick(600.0);
    assert_eq!(animator.frame().background, palette.dark);
}

#[test]
fn rapid_double_toggle_is_net_noop_on_targets() {
    let mut animator = ThemeToggleAnimator::default();
    let initial = animator.targets();

    animator.toggle();
    animator.tick(90.0);
    animator.toggle();

    let targets = animator.targets();
    assert!(!targets.is_active);
    assert_eq!(targets.color_phase, initial.color_phase);
    assert_eq!(targets.opacity, initial.opacity);
    assert_eq!(targets.progress, initial.progress);
    assert_eq!(targets.scale, TransitionTarget::Value(1.0));

    // In-flight values head back from where they were, not from the endpoints
    let phase = animator.value(AnimatedProperty::ColorPhase);
    assert!(phase > 0.0 && phase < 1.0);

    animator.tick(600.0);
    assert_eq!(animator.value(AnimatedProperty::ColorPhase), 0.0);
    assert_eq!(animator.value(AnimatedProperty::Opacity), 0.2);
    assert!(!animator.is_animating());
}

#[test]
fn initial_render_then_one_toggle() {
    let mut animator = ThemeToggleAnimator::default();

    let targets = animator.targets();
    assert!(!targets.is_active);
    assert_eq!(targets.color_phase, TransitionTarget::Value(0.0));
    assert_eq!(targets.opacity, TransitionTarget::Value(0.2));
    assert_eq!(targets.scale, TransitionTarget::Value(1.0));

    assert!(animator.toggle());
    let targets = animator.targets();
    assert!(targets.is_active);
    assert_eq!(targets.opacity, TransitionTarget::Value(1.0));
    assert_eq!(targets.color_phase, TransitionTarget::Value(1.0));
    assert_eq!(
        targets.scale,
        TransitionTarget::Between {
            base: 1.0,
            peak: 1.3,
            infinite: true
        }
    );
}

#[test]
fn pulse_keeps_running_between_bounds() {
    let mut animator = ThemeToggleAnimator::default();
    animator.toggle();

    let mut min = f32::MAX;
    let mut max = f32::MIN;
    for _ in 0..(10 * 600 / 16) {
        animator.tick(16.0);
        let scale = animator.value(AnimatedProperty::Scale);
        min = min.min(scale);
        max = max.max(scale);
    }

    assert!(animator.is_animating());
    assert!(min >= 1.0 - 1e-4);
    assert!(max <= 1.3 + 1e-4);
    assert!(max > 1.29 && min < 1.01);
}

#[test]
fn scripted_scenario_passes() {
    let scenario = r##"{ "steps": [
        { "type": "assert_active", "value": false },
        { "type": "assert_target", "scalar": "opacity", "value": 0.2 },
        { "type": "assert_color", "element": "background", "hex": "#1e1e24" },
        { "type": "toggle" },
        { "type": "assert_active", "value": true },
        { "type": "assert_target", "scalar": "color_phase", "value": 1.0 },
        { "type": "assert_oscillating", "scalar": "scale" },
        { "type": "wait", "ms": 600 },
        { "type": "assert_value", "scalar": "opacity", "value": 1.0 },
        { "type": "assert_value", "scalar": "progress", "value": 0.5 },
        { "type": "assert_color", "element": "background", "hex": "#f4f4f8" },
        { "type": "assert_color", "element": "icon", "hex": "#1e1e24" },
        { "type": "toggle" },
        { "type": "wait", "ms": 600 },
        { "type": "assert_active", "value": false },
        { "type": "assert_settled" }
    ]}"##;

    let mut animator = ThemeToggleAnimator::default();
    let outcome = run_scenario(scenario, HeadlessRunConfig::default(), &mut animator).unwrap();

    assert!(!outcome.is_failed(), "{:?}", outcome.report());
    assert_eq!(outcome.report().toggles, 2);
    assert_eq!(outcome.report().elapsed_ms, 1200);
}

#[test]
fn collapse_variant_scenario() {
    let config = ThemeConfig::from_toml("variant = \"collapse\"\nduration_ms = 300").unwrap();
    let mut animator = ThemeToggleAnimator::from_config(&config).unwrap();

    let scenario = r#"{ "steps": [
        { "type": "toggle" },
        { "type": "wait", "ms": 300 },
        { "type": "assert_value", "scalar": "opacity", "value": 1.0 },
        { "type": "toggle" },
        { "type": "wait", "ms": 300 },
        { "type": "assert_value", "scalar": "scale", "value": 0.0 },
        { "type": "assert_value", "scalar": "opacity", "value": 0.0 }
    ]}"#;
    let outcome = run_scenario(scenario, HeadlessRunConfig::default(), &mut animator).unwrap();
    assert!(!outcome.is_failed(), "{:?}", outcome.report());
}

#[test]
fn spin_variant_unwinds_when_active() {
    let config = ThemeConfig::from_toml("variant = \"spin\"").unwrap();
    let mut animator = ThemeToggleAnimator::from_config(&config).unwrap();

    let outcome = run_scenario(
        r#"{ "steps": [
            { "type": "toggle" },
            { "type": "wait", "ms": 600 },
            { "type": "assert_value", "scalar": "progress", "value": 0.0 }
        ]}"#,
        HeadlessRunConfig::default(),
        &mut animator,
    )
    .unwrap();
    assert!(!outcome.is_failed(), "{:?}", outcome.report());

    let square = animator.frame().square;
    assert_eq!(square.corner_radius.top_left, 0.0);
    assert_eq!(square.rotation_rad, 0.0);

    animator.toggle();
    animator.tick(600.0);
    let square = animator.frame().square;
    assert_eq!(square.corner_radius.top_left, dusk_app::SQUARE_SIZE / 2.0);
}
