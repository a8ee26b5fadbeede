use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Anything that can hand out one `FrameTime` per frame.
pub trait TickSource {
    fn tick(&mut self) -> FrameTime;
}

/// Wall-clock frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped to avoid pathological values when the application is paused
/// by the debugger, minimized, or stalls.
///
/// With a target frame rate set, `tick()` sleeps until at least `1 / fps` has passed
/// since the previous tick, so the reported `dt` is never meaningfully below the
/// frame interval.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
    min_interval: Option<Duration>,
}

impl FrameClock {
    /// Creates an uncapped clock with default clamps.
    ///
    /// - minimum prevents zero-dt behavior from tight loops on some platforms
    /// - maximum prevents simulation explosions after long stalls
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min: Duration::from_micros(100), // 0.0001s
            dt_max: Duration::from_millis(250), // 0.25s
            min_interval: None,
        }
    }

    /// Caps the tick rate at `fps` frames per second. Zero or non-finite disables the cap.
    pub fn with_target_fps(mut self, fps: f32) -> Self {
        self.min_interval = frame_interval(fps);
        self
    }

    /// The minimum spacing between ticks, if capped.
    #[inline]
    pub fn min_interval(&self) -> Option<Duration> {
        self.min_interval
    }

    /// Resets the clock baseline.
    ///
    /// Useful after surface reconfigure events or when resuming from suspension.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        if let Some(interval) = self.min_interval {
            let elapsed = self.last.elapsed();
            if elapsed < interval {
                std::thread::sleep(interval - elapsed);
            }
        }

        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for FrameClock {
    #[inline]
    fn tick(&mut self) -> FrameTime {
        FrameClock::tick(self)
    }
}

/// Deterministic clock: every tick reports the same `dt`.
///
/// `now` advances from a fixed origin by exactly `dt` per tick, and no tick
/// ever sleeps.
#[derive(Debug, Clone)]
pub struct FixedStep {
    origin: Instant,
    step: Duration,
    frame_index: u64,
}

impl FixedStep {
    /// A step of `1 / fps` seconds. Non-positive or non-finite rates fall back to 60 fps.
    pub fn from_fps(fps: f32) -> Self {
        Self::new(frame_interval(fps).unwrap_or(Duration::from_secs_f64(1.0 / 60.0)))
    }

    pub fn new(step: Duration) -> Self {
        Self {
            origin: Instant::now(),
            step,
            frame_index: 0,
        }
    }

    #[inline]
    pub fn step(&self) -> Duration {
        self.step
    }
}

impl TickSource for FixedStep {
    fn tick(&mut self) -> FrameTime {
        let elapsed = u32::try_from(self.frame_index + 1)
            .map(|n| self.step.saturating_mul(n))
            .unwrap_or(Duration::MAX);
        let ft = FrameTime {
            dt: self.step.as_secs_f32(),
            now: self.origin.checked_add(elapsed).unwrap_or(self.origin),
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

fn frame_interval(fps: f32) -> Option<Duration> {
    if fps.is_finite() && fps > 0.0 {
        Some(Duration::from_secs_f64(1.0 / f64::from(fps)))
    } else {
        None
    }
}
