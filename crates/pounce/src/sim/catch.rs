use super::{target, RandomSource, SimConfig, SimState};

/// Proximity check run after the pursuer has moved.
///
/// Within `catch_distance` (inclusive) the caught countdown is started if it
/// isn't running, and the target is nudged away, on every such tick.
/// Returns whether the pursuer was within range.
pub fn check_catch<R>(state: &mut SimState, rng: &mut R, config: &SimConfig) -> bool
where
    R: RandomSource + ?Sized,
{
    if state.separation() > config.catch_distance {
        return false;
    }

    if state.caught.trigger(config.caught_duration) {
        log::debug!(
            "caught at ({:.1}, {:.1})",
            state.pursuer.position.x,
            state.pursuer.position.y
        );
    }
    target::flee_nudge(&mut state.target, rng, config);
    true
}
