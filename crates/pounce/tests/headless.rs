//! Drives the frame loop without a window, through a fixed-step clock.

use std::convert::Infallible;

use pounce::sim::{FrameDriver, FrameInput, LoopState, SimConfig, SimEvent, SimState};
use pounce::view::{compose_frame, CatPalette};
use pounce_engine::coords::Vec2;
use pounce_engine::scene::DrawList;
use pounce_engine::time::FixedStep;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A pointer wandering the window, with the occasional click and exit.
fn scripted_inputs(seed: u64, frames: usize) -> Vec<FrameInput> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut pointer = Vec2::new(400.0, 300.0);
    (0..frames)
        .map(|_| {
            pointer += Vec2::new(rng.gen_range(-25.0..25.0), rng.gen_range(-25.0..25.0));
            let mut input = FrameInput {
                pointer: rng.gen_bool(0.95).then_some(pointer),
                events: Vec::new(),
            };
            if rng.gen_bool(0.02) {
                input.events.push(SimEvent::PrimaryClick);
            }
            input
        })
        .collect()
}

fn run(seed: u64, inputs: &[FrameInput]) -> Vec<SimState> {
    let mut driver = FrameDriver::new(SimConfig::default(), ChaCha8Rng::seed_from_u64(seed));
    let mut clock = FixedStep::from_fps(60.0);
    let mut trace = Vec::new();
    driver
        .run(&mut clock, inputs.iter().cloned(), |s| -> Result<(), Infallible> {
            trace.push(*s);
            Ok(())
        })
        .unwrap();
    trace
}

#[test]
fn same_seed_and_inputs_give_same_trajectory() {
    let inputs = scripted_inputs(1, 600);
    let a = run(9, &inputs);
    let b = run(9, &inputs);
    assert_eq!(a.len(), 600);
    assert_eq!(a, b);
}

#[test]
fn speed_stays_capped_over_a_long_run() {
    let config = SimConfig::default();
    let inputs = scripted_inputs(2, 3_000);
    for (i, s) in run(4, &inputs).iter().enumerate() {
        assert!(
            s.pursuer.speed() <= config.max_speed + 1e-3,
            "frame {i}: speed {}",
            s.pursuer.speed()
        );
    }
}

#[test]
fn chasing_a_still_pointer_ends_in_a_catch() {
    let inputs = vec![FrameInput::pointer_at(Vec2::new(650.0, 120.0)); 600];
    let trace = run(5, &inputs);
    assert!(trace.iter().any(|s| s.caught.is_active()));
}

#[test]
fn escape_ends_the_run_after_rendering_that_frame() {
    let mut inputs = vec![FrameInput::pointer_at(Vec2::new(100.0, 100.0)); 10];
    inputs[4].events.push(SimEvent::Cancel);

    let mut driver = FrameDriver::new(SimConfig::default(), ChaCha8Rng::seed_from_u64(0));
    let mut clock = FixedStep::from_fps(60.0);
    let mut rendered = 0;
    let frames = driver
        .run(&mut clock, inputs, |_| -> Result<(), Infallible> {
            rendered += 1;
            Ok(())
        })
        .unwrap();

    assert_eq!(frames, 5);
    assert_eq!(rendered, 5);
    assert_eq!(driver.loop_state(), LoopState::Stopped);
}

#[test]
fn every_frame_composes_a_drawable_scene() {
    let config = SimConfig::default();
    let inputs = scripted_inputs(3, 120);
    let mut driver = FrameDriver::new(config, ChaCha8Rng::seed_from_u64(3));
    let mut clock = FixedStep::from_fps(60.0);
    let mut dl = DrawList::new();
    let palette = CatPalette::default();

    driver
        .run(&mut clock, inputs, |s| -> Result<(), Infallible> {
            compose_frame(&mut dl, s, &config, None, &palette);
            assert_eq!(dl.len(), 10);
            Ok(())
        })
        .unwrap();
}
