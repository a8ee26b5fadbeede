//! Time subsystem.
//!
//! Provides stable, testable frame timing utilities without coupling to the runtime.
//! Intended usage:
//! - one `FrameClock` per window, optionally capped to a target frame rate
//! - `FixedStep` wherever a loop must advance deterministically (headless runs, tests)
//! - call `tick()` once per frame to obtain `FrameTime`

mod frame_clock;

pub use frame_clock::{FixedStep, FrameClock, FrameTime, TickSource};
