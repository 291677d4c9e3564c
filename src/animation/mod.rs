/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of gear-train.
 *
 * gear-train is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * gear-train is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with gear-train. If not, see <https://www.gnu.org/licenses/>.
 */

use std::ops::ControlFlow;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SchedulerError {
    #[error("invalid frame rate `{0}`. Frame rate must be a positive number")]
    InvalidFrameRate(f64),
    #[error("invalid duration `{0}`. Duration must be zero or more seconds")]
    InvalidDuration(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Wait until each frame's time has elapsed on the wall clock before producing it
    Realtime,
    /// Produce frames back to back
    Immediate,
}

/// Drives an animation by handing a callback a monotonically increasing elapsed time, one
/// call per frame.
///
/// Frame `k` is always evaluated at `k / frame_rate` seconds regardless of pacing, so two
/// runs with the same settings produce the same sequence of times.
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    frame_rate: f64,
    duration: f64,
    pacing: Pacing,
}

impl FrameScheduler {
    pub fn new(frame_rate: f64, duration_secs: f64, pacing: Pacing) -> Result<FrameScheduler, SchedulerError> {
        if !frame_rate.is_finite() || frame_rate <= 0.0 {
            return Err(SchedulerError::InvalidFrameRate(frame_rate));
        }
        if !duration_secs.is_finite() || duration_secs < 0.0 {
            return Err(SchedulerError::InvalidDuration(duration_secs));
        }
        Ok(FrameScheduler { frame_rate, duration: duration_secs, pacing })
    }

    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Number of frames in a full run, including the frame at t=0. Saturates at `u64::MAX`
    pub fn frame_count(&self) -> u64 {
        ((self.duration * self.frame_rate + 1e-9).floor() as u64).saturating_add(1)
    }

    pub fn time_of_frame(&self, frame: u64) -> f64 {
        frame as f64 / self.frame_rate
    }

    /// Call `on_frame` with `(frame index, elapsed seconds)` for every frame until the run
    /// completes or the callback breaks. Returns the number of frames produced.
    pub fn run<F, E>(&self, mut on_frame: F) -> Result<u64, E>
        where F: FnMut(u64, f64) -> Result<ControlFlow<()>, E>
    {
        let total = self.frame_count();
        info!("Scheduling {} frames at {} fps ({:?})", total, self.frame_rate, self.pacing);
        let start = Instant::now();
        let mut produced = 0;
        for frame in 0..total {
            let t = self.time_of_frame(frame);
            if self.pacing == Pacing::Realtime {
                let deadline = start + Duration::from_secs_f64(t);
                let now = Instant::now();
                if deadline > now {
                    thread::sleep(deadline - now);
                }
            }
            let flow = on_frame(frame, t)?;
            produced += 1;
            if flow.is_break() {
                debug!("Animation stopped after frame {}", frame);
                break;
            }
        }
        Ok(produced)
    }
}

#[cfg(test)]
mod tests {
    use std::ops::ControlFlow;
    use std::time::Instant;
    use crate::animation::{FrameScheduler, Pacing, SchedulerError};

    #[test]
    fn rejects_bad_settings() {
        assert_eq!(FrameScheduler::new(0.0, 1.0, Pacing::Immediate).unwrap_err(), SchedulerError::InvalidFrameRate(0.0));
        assert_eq!(FrameScheduler::new(-30.0, 1.0, Pacing::Immediate).unwrap_err(), SchedulerError::InvalidFrameRate(-30.0));
        assert!(FrameScheduler::new(f64::NAN, 1.0, Pacing::Immediate).is_err());
        assert_eq!(FrameScheduler::new(30.0, -1.0, Pacing::Immediate).unwrap_err(), SchedulerError::InvalidDuration(-1.0));
        assert!(FrameScheduler::new(30.0, f64::INFINITY, Pacing::Immediate).is_err());
    }

    #[test]
    fn frame_times_are_fixed_steps() {
        let scheduler = FrameScheduler::new(30.0, 2.0, Pacing::Immediate).unwrap();
        assert_eq!(scheduler.frame_count(), 61);
        let mut times = Vec::new();
        let produced = scheduler.run(|frame, t| -> Result<ControlFlow<()>, ()> {
            assert_eq!(t, frame as f64 / 30.0);
            times.push(t);
            Ok(ControlFlow::Continue(()))
        }).unwrap();
        assert_eq!(produced, 61);
        assert_eq!(times.first(), Some(&0.0));
        assert_eq!(times.last(), Some(&2.0));
        assert!(times.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn huge_duration_saturates_frame_count() {
        let scheduler = FrameScheduler::new(30.0, 1e300, Pacing::Immediate).unwrap();
        assert_eq!(scheduler.frame_count(), u64::MAX);
        let produced = scheduler.run(|frame, _| -> Result<ControlFlow<()>, ()> {
            match frame {
                2 => Ok(ControlFlow::Break(())),
                _ => Ok(ControlFlow::Continue(()))
            }
        }).unwrap();
        assert_eq!(produced, 3);
    }

    #[test]
    fn zero_duration_renders_single_frame() {
        let scheduler = FrameScheduler::new(60.0, 0.0, Pacing::Immediate).unwrap();
        let produced = scheduler.run(|_, t| -> Result<ControlFlow<()>, ()> {
            assert_eq!(t, 0.0);
            Ok(ControlFlow::Continue(()))
        }).unwrap();
        assert_eq!(produced, 1);
    }

    #[test]
    fn callback_can_stop_the_run() {
        let scheduler = FrameScheduler::new(10.0, 100.0, Pacing::Immediate).unwrap();
        let produced = scheduler.run(|frame, _| -> Result<ControlFlow<()>, ()> {
            match frame {
                4 => Ok(ControlFlow::Break(())),
                _ => Ok(ControlFlow::Continue(()))
            }
        }).unwrap();
        assert_eq!(produced, 5);
    }

    #[test]
    fn callback_errors_propagate() {
        let scheduler = FrameScheduler::new(10.0, 1.0, Pacing::Immediate).unwrap();
        let mut calls = 0;
        let result = scheduler.run(|frame, _| {
            calls += 1;
            match frame {
                2 => Err(format!("frame {} failed", frame)),
                _ => Ok(ControlFlow::Continue(()))
            }
        });
        assert_eq!(result, Err("frame 2 failed".to_string()));
        assert_eq!(calls, 3);
    }

    #[test]
    fn realtime_pacing_waits_for_frames() {
        let scheduler = FrameScheduler::new(50.0, 0.1, Pacing::Realtime).unwrap();
        let start = Instant::now();
        let produced = scheduler.run(|_, _| -> Result<ControlFlow<()>, ()> {
            Ok(ControlFlow::Continue(()))
        }).unwrap();
        assert_eq!(produced, 6);
        assert!(start.elapsed().as_secs_f64() >= 0.1);
    }
}
