//! Assertion helpers for headless toggle runs.

use crate::render::ColorElement;
use crate::toggle::{AnimatedProperty, ThemeToggleAnimator};
use dusk_animation::TransitionTarget;
use dusk_core::Color;
use rustc_hash::FxHashMap;

/// Largest per-channel difference still treated as the same 8-bit color
const COLOR_TOLERANCE: f32 = 0.5 / 255.0;

/// Target comparisons allow for f32 round trips through JSON
const TARGET_TOLERANCE: f32 = 1e-6;

/// Snapshot of animator-observable state used for assertions.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsSnapshot {
    pub is_active: bool,
    pub is_animating: bool,
    pub values: FxHashMap<AnimatedProperty, f32>,
    pub targets: FxHashMap<AnimatedProperty, TransitionTarget>,
    pub colors: FxHashMap<ColorElement, Color>,
}

impl DiagnosticsSnapshot {
    pub fn capture(animator: &ThemeToggleAnimator) -> Self {
        let frame = animator.frame();
        let mut snapshot = Self {
            is_active: animator.is_active(),
            is_animating: animator.is_animating(),
            ..Default::default()
        };
        for property in AnimatedProperty::all() {
            snapshot
                .values
                .insert(*property, animator.value(*property));
            snapshot
                .targets
                .insert(*property, animator.target(*property));
        }
        for element in ColorElement::all() {
            snapshot.colors.insert(*element, frame.color(*element));
        }
        snapshot
    }
}

/// Assertion result with structured failure details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed { code: String, message: String },
}

fn failed(code: &str, message: String) -> AssertionResult {
    AssertionResult::Failed {
        code: code.to_string(),
        message,
    }
}

fn missing(property: AnimatedProperty) -> AssertionResult {
    failed("missing_scalar", format!("{property}: scalar not captured"))
}

pub fn evaluate_assert_active(expected: bool, snapshot: &DiagnosticsSnapshot) -> AssertionResult {
    if snapshot.is_active == expected {
        AssertionResult::Passed
    } else {
        failed(
            "active_mismatch",
            format!("expected is_active={expected}, got {}", snapshot.is_active),
        )
    }
}

pub fn evaluate_assert_target(
    property: AnimatedProperty,
    expected: f32,
    snapshot: &DiagnosticsSnapshot,
) -> AssertionResult {
    let Some(target) = snapshot.targets.get(&property) else {
        return missing(property);
    };
    match target {
        TransitionTarget::Value(v) if (v - expected).abs() <= TARGET_TOLERANCE => {
            AssertionResult::Passed
        }
        TransitionTarget::Value(v) => failed(
            "target_mismatch",
            format!("{property}: expected target {expected}, got {v}"),
        ),
        TransitionTarget::Between { base, peak, .. } => failed(
            "target_oscillating",
            format!("{property}: expected target {expected}, but oscillating {base}..{peak}"),
        ),
    }
}

pub fn evaluate_assert_oscillating(
    property: AnimatedProperty,
    snapshot: &DiagnosticsSnapshot,
) -> AssertionResult {
    let Some(target) = snapshot.targets.get(&property) else {
        return missing(property);
    };
    match target {
        TransitionTarget::Between { infinite: true, .. } => AssertionResult::Passed,
        TransitionTarget::Between { .. } => failed(
            "oscillation_finite",
            format!("{property}: oscillation is not infinite"),
        ),
        TransitionTarget::Value(v) => failed(
            "not_oscillating",
            format!("{property}: expected oscillation, settling on {v}"),
        ),
    }
}

pub fn evaluate_assert_value(
    property: AnimatedProperty,
    expected: f32,
    tolerance: f32,
    snapshot: &DiagnosticsSnapshot,
) -> AssertionResult {
    let Some(value) = snapshot.values.get(&property) else {
        return missing(property);
    };
    if (value - expected).abs() <= tolerance {
        AssertionResult::Passed
    } else {
        failed(
            "value_mismatch",
            format!("{property}: expected {expected} ± {tolerance}, got {value}"),
        )
    }
}

pub fn evaluate_assert_color(
    element: ColorElement,
    hex: &str,
    snapshot: &DiagnosticsSnapshot,
) -> AssertionResult {
    let expected = match Color::from_hex_str(hex) {
        Ok(color) => color,
        Err(err) => return failed("invalid_color", format!("{}: {err}", element.name())),
    };
    let Some(actual) = snapshot.colors.get(&element) else {
        return failed(
            "missing_element",
            format!("{}: element not captured", element.name()),
        );
    };

    let close = expected
        .to_array()
        .iter()
        .zip(actual.to_array())
        .all(|(e, a)| (e - a).abs() <= COLOR_TOLERANCE);
    if close {
        AssertionResult::Passed
    } else {
        failed(
            "color_mismatch",
            format!(
                "{}: expected {}, got {}",
                element.name(),
                expected.to_hex_string(),
                actual.to_hex_string()
            ),
        )
    }
}

pub fn evaluate_assert_settled(snapshot: &DiagnosticsSnapshot) -> AssertionResult {
    if snapshot.is_animating {
        failed("still_animating", "animations still in flight".to_string())
    } else {
        AssertionResult::Passed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_snapshot_passes_resting_assertions() {
        let animator = ThemeToggleAnimator::default();
        let snapshot = DiagnosticsSnapshot::capture(&animator);

        assert_eq!(evaluate_assert_active(false, &snapshot), AssertionResult::Passed);
        assert_eq!(
            evaluate_assert_target(AnimatedProperty::Opacity, 0.2, &snapshot),
            AssertionResult::Passed
        );
        assert_eq!(
            evaluate_assert_color(ColorElement::Background, "#1e1e24", &snapshot),
            AssertionResult::Passed
        );
    }

    #[test]
    fn test_failures_carry_codes() {
        let mut animator = ThemeToggleAnimator::default();
        animator.toggle();
        let snapshot = DiagnosticsSnapshot::capture(&animator);

        match evaluate_assert_target(AnimatedProperty::Scale, 1.0, &snapshot) {
            AssertionResult::Failed { code, .. } => assert_eq!(code, "target_oscillating"),
            AssertionResult::Passed => panic!("scale should be oscillating"),
        }
        match evaluate_assert_oscillating(AnimatedProperty::Opacity, &snapshot) {
            AssertionResult::Failed { code, .. } => assert_eq!(code, "not_oscillating"),
            AssertionResult::Passed => panic!("opacity should settle"),
        }
        match evaluate_assert_color(ColorElement::Icon, "nope", &snapshot) {
            AssertionResult::Failed { code, .. } => assert_eq!(code, "invalid_color"),
            AssertionResult::Passed => panic!("bad hex must fail"),
        }
        match evaluate_assert_settled(&snapshot) {
            AssertionResult::Failed { code, .. } => assert_eq!(code, "still_animating"),
            AssertionResult::Passed => panic!("pulse never settles"),
        }
    }
}
