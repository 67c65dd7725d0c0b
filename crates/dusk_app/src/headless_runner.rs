//! Scenario runner that drives a toggle animator headlessly.

use crate::headless_assert::{
    evaluate_assert_active, evaluate_assert_color, evaluate_assert_oscillating,
    evaluate_assert_settled, evaluate_assert_target, evaluate_assert_value, AssertionResult,
    DiagnosticsSnapshot,
};
use crate::headless_report::HeadlessReport;
use crate::headless_runtime::{HeadlessRunConfig, HeadlessRuntime};
use crate::headless_scenario::{HeadlessScenario, ScenarioStep};
use crate::render::FrameSample;
use crate::toggle::ThemeToggleAnimator;
use anyhow::Result;

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: HeadlessReport },
    Failed { report: HeadlessReport },
}

impl RunOutcome {
    pub fn report(&self) -> &HeadlessReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Clock and samples accumulated across steps
#[derive(Default)]
struct RunState {
    elapsed_frames: u64,
    elapsed_ms: u64,
    samples: Vec<FrameSample>,
}

/// Execute scenario JSON against `animator`.
pub fn run_scenario(
    input: &str,
    runtime_cfg: HeadlessRunConfig,
    animator: &mut ThemeToggleAnimator,
) -> Result<RunOutcome> {
    let scenario = HeadlessScenario::from_json(input)?;
    run_loaded_scenario(&scenario, runtime_cfg, animator)
}

/// Execute a pre-loaded scenario against `animator`.
pub fn run_loaded_scenario(
    scenario: &HeadlessScenario,
    runtime_cfg: HeadlessRunConfig,
    animator: &mut ThemeToggleAnimator,
) -> Result<RunOutcome> {
    let mut state = RunState::default();

    for (step_index, step) in scenario.steps.iter().enumerate() {
        let checked = match step {
            ScenarioStep::Toggle => {
                animator.toggle();
                None
            }
            ScenarioStep::Wait { ms } => {
                let frames = runtime_cfg.frames_for_ms(*ms);
                let mut remaining_ms = *ms;
                run_frames(runtime_cfg, frames, animator, &mut state, || {
                    let step_ms = remaining_ms.min(runtime_cfg.tick_ms);
                    remaining_ms = remaining_ms.saturating_sub(step_ms);
                    step_ms
                })?;
                None
            }
            ScenarioStep::Tick { frames } => {
                run_frames(runtime_cfg, *frames, animator, &mut state, || {
                    runtime_cfg.tick_ms
                })?;
                None
            }
            ScenarioStep::AssertActive { value } => {
                let snapshot = DiagnosticsSnapshot::capture(animator);
                Some(("assert_active", evaluate_assert_active(*value, &snapshot)))
            }
            ScenarioStep::AssertTarget { scalar, value } => {
                let snapshot = DiagnosticsSnapshot::capture(animator);
                Some((
                    "assert_target",
                    evaluate_assert_target(*scalar, *value, &snapshot),
                ))
            }
            ScenarioStep::AssertOscillating { scalar } => {
                let snapshot = DiagnosticsSnapshot::capture(animator);
                Some((
                    "assert_oscillating",
                    evaluate_assert_oscillating(*scalar, &snapshot),
                ))
            }
            ScenarioStep::AssertValue {
                scalar,
                value,
                tolerance,
            } => {
                let snapshot = DiagnosticsSnapshot::capture(animator);
                Some((
                    "assert_value",
                    evaluate_assert_value(*scalar, *value, *tolerance, &snapshot),
                ))
            }
            ScenarioStep::AssertColor { element, hex } => {
                let snapshot = DiagnosticsSnapshot::capture(animator);
                Some((
                    "assert_color",
                    evaluate_assert_color(*element, hex, &snapshot),
                ))
            }
            ScenarioStep::AssertSettled => {
                let snapshot = DiagnosticsSnapshot::capture(animator);
                Some(("assert_settled", evaluate_assert_settled(&snapshot)))
            }
        };

        if let Some((assertion, AssertionResult::Failed { code, message })) = checked {
            tracing::debug!(step_index, assertion, %code, %message, "scenario assertion failed");
            let report = HeadlessReport::failed(
                assertion,
                step_index,
                code,
                message,
                state.elapsed_frames,
                state.elapsed_ms,
                animator.toggle_count(),
            )
            .with_samples(state.samples);
            return Ok(RunOutcome::Failed { report });
        }
    }

    let report = HeadlessReport::passed(
        state.elapsed_frames,
        state.elapsed_ms,
        animator.toggle_count(),
    )
    .with_samples(state.samples);
    Ok(RunOutcome::Passed { report })
}

fn run_frames<A>(
    runtime_cfg: HeadlessRunConfig,
    frames: u32,
    animator: &mut ThemeToggleAnimator,
    state: &mut RunState,
    mut advance_ms: A,
) -> Result<()>
where
    A: FnMut() -> u64,
{
    if frames == 0 {
        return Ok(());
    }

    let mut cfg = runtime_cfg;
    cfg.max_frames = frames;
    let mut sampled_frames = 0u32;

    HeadlessRuntime::run(cfg, |_| {
        let dt = advance_ms();
        animator.tick(dt as f64);
        state.elapsed_frames = state.elapsed_frames.saturating_add(1);
        state.elapsed_ms = state.elapsed_ms.saturating_add(dt);
        sampled_frames = sampled_frames.saturating_add(1);

        if runtime_cfg.is_probe_frame(sampled_frames, frames) {
            state.samples.push(animator.frame().sample());
        }
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless_report::ReportStatus;

    #[test]
    fn test_wait_advances_exact_milliseconds() {
        let mut animator = ThemeToggleAnimator::default();
        let outcome = run_scenario(
            r#"{ "steps": [ { "type": "wait", "ms": 600 } ] }"#,
            HeadlessRunConfig::default(),
            &mut animator,
        )
        .unwrap();

        assert_eq!(outcome.report().elapsed_ms, 600);
        assert_eq!(outcome.report().elapsed_frames, 38);
        assert_eq!(animator.now_ms(), 600.0);
    }

    #[test]
    fn test_failed_assertion_reports_step() {
        let mut animator = ThemeToggleAnimator::default();
        let outcome = run_scenario(
            r#"{ "steps": [
                { "type": "toggle" },
                { "type": "tick", "frames": 2 },
                { "type": "assert_active", "value": false }
            ]}"#,
            HeadlessRunConfig::default(),
            &mut animator,
        )
        .unwrap();

        assert!(outcome.is_failed());
        let report = outcome.report();
        assert_eq!(report.status, ReportStatus::Failed);
        assert_eq!(report.failed_step_index, Some(2));
        assert_eq!(report.assertion.as_deref(), Some("assert_active"));
        assert_eq!(report.code.as_deref(), Some("active_mismatch"));
        assert_eq!(report.elapsed_frames, 2);
        assert_eq!(report.toggles, 1);
    }

    #[test]
    fn test_records_samples_when_enabled() {
        let mut animator = ThemeToggleAnimator::default();
        let cfg = HeadlessRunConfig {
            probe_every_frames: 4,
            record_samples: true,
            ..Default::default()
        };
        let outcome = run_scenario(
            r#"{ "steps": [ { "type": "toggle" }, { "type": "tick", "frames": 10 } ] }"#,
            cfg,
            &mut animator,
        )
        .unwrap();

        // frames 4, 8 and the final frame 10
        let samples = &outcome.report().samples;
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[2].time_ms, 160.0);
        assert!(samples.iter().all(|s| s.is_active));
    }
}
