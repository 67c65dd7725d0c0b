//! Deterministic frame loop for headless toggle runs.

use anyhow::{bail, Result};

/// Frame budget and logical clock for a headless run.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessRunConfig {
    /// Number of frames to execute.
    pub max_frames: u32,
    /// Logical milliseconds between frames.
    pub tick_ms: u64,
    /// Frame sampling interval (1 = every frame, 4 = every 4 frames).
    pub probe_every_frames: u32,
    /// Record a `FrameSample` at every probe into the report.
    pub record_samples: bool,
}

impl Default for HeadlessRunConfig {
    fn default() -> Self {
        Self {
            max_frames: 1,
            tick_ms: 16,
            probe_every_frames: 4,
            record_samples: false,
        }
    }
}

impl HeadlessRunConfig {
    /// Whole frames needed to cover `ms`; the last one may be partial.
    pub fn frames_for_ms(&self, ms: u64) -> u32 {
        if ms == 0 {
            return 0;
        }
        let tick = self.tick_ms.max(1);
        let frames = ms.saturating_add(tick - 1) / tick;
        frames.min(u32::MAX as u64) as u32
    }

    /// True when the `count`-th frame (1-based) of a run of `total` is probed.
    pub fn is_probe_frame(&self, count: u32, total: u32) -> bool {
        self.record_samples && (count % self.probe_every_frames.max(1) == 0 || count == total)
    }
}

/// Frame context passed to headless frame callbacks.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessContext {
    pub frame_index: u32,
    /// Logical time at the start of the frame.
    pub elapsed_ms: u64,
}

/// Deterministic headless runtime loop.
pub struct HeadlessRuntime;

impl HeadlessRuntime {
    /// Run a fixed frame budget in headless mode.
    pub fn run<F>(cfg: HeadlessRunConfig, mut on_frame: F) -> Result<()>
    where
        F: FnMut(&HeadlessContext),
    {
        if cfg.max_frames == 0 {
            bail!("headless max_frames must be > 0");
        }
        if cfg.tick_ms == 0 {
            bail!("headless tick_ms must be > 0");
        }

        let mut elapsed_ms = 0u64;
        for frame_index in 0..cfg.max_frames {
            on_frame(&HeadlessContext {
                frame_index,
                elapsed_ms,
            });
            elapsed_ms = elapsed_ms.saturating_add(cfg.tick_ms);
        }

        tracing::trace!(frames = cfg.max_frames, elapsed_ms, "headless run finished");
        Ok(())
    }
}
