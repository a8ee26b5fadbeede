//! Pursuit simulation.
//!
//! Every update step is a plain function over [`SimState`]; [`FrameDriver`] owns the
//! state and sequences the steps once per frame.

pub mod catch;
pub mod config;
pub mod driver;
pub mod random;
pub mod state;
pub mod steering;
pub mod target;

pub use config::SimConfig;
pub use driver::{FrameDriver, FrameInput, LoopState, SimEvent};
pub use random::RandomSource;
pub use state::{CaughtStatus, PursuerState, SimState, TargetState};
