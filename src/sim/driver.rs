//! Frame driver
//!
//! Turns host animation-frame timestamps into whole simulation ticks. Ticks
//! run at `SIM_DT` regardless of the display refresh rate, at most
//! `MAX_SUBSTEPS` per frame, and stop the moment the engine no longer wants
//! frames so nothing runs past a game over.

use super::engine::Engine;
use super::spawn::HeightSource;
use super::tick::TickOutcome;
use crate::consts::*;

/// Longest frame gap honoured (seconds); longer stalls are dropped
const MAX_FRAME_GAP: f32 = 0.1;

/// Frame gaps this close to `SIM_DT` count as exactly one tick (rAF jitter)
const SNAP_EPSILON: f32 = 0.001;

/// Result of driving one host frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// Ticks run this frame
    pub ticks: u32,
    /// Outcome of the last tick run (`Idle` if none ran)
    pub outcome: TickOutcome,
    /// Whether the host should request another frame
    pub keep_running: bool,
}

/// Fixed-step accumulator between the host clock and the engine
#[derive(Debug, Clone, Default)]
pub struct FrameDriver {
    accumulator: f32,
    last_time: Option<f64>,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart the clock (call alongside `Engine::start`)
    pub fn arm(&mut self) {
        self.accumulator = 0.0;
        self.last_time = None;
    }

    /// Run the ticks owed for a frame at `time_ms` (host clock, milliseconds)
    pub fn advance<H: HeightSource>(
        &mut self,
        engine: &mut Engine<H>,
        time_ms: f64,
    ) -> FrameReport {
        let mut report = FrameReport {
            ticks: 0,
            outcome: TickOutcome::Idle,
            keep_running: engine.wants_frames(),
        };
        if !report.keep_running {
            return report;
        }

        let dt = match self.last_time {
            // First frame of a run ticks once
            None => SIM_DT,
            Some(last) => (((time_ms - last) / 1000.0) as f32).clamp(0.0, MAX_FRAME_GAP),
        };
        let dt = if (dt - SIM_DT).abs() < SNAP_EPSILON { SIM_DT } else { dt };
        self.last_time = Some(time_ms);
        self.accumulator += dt;

        while self.accumulator >= SIM_DT && report.ticks < MAX_SUBSTEPS {
            report.outcome = engine.tick();
            report.ticks += 1;
            self.accumulator -= SIM_DT;
            if !engine.wants_frames() {
                // Leftover time belongs to a run that is over
                self.accumulator = 0.0;
                break;
            }
        }
        if report.ticks == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }

        report.keep_running = engine.wants_frames();
        report
    }
}
