//! Frame loop driver.
//!
//! One call to [`FrameDriver::frame`] is one iteration of the loop:
//!
//! 1. drain the frame's discrete events (quit, cancel, primary click)
//! 2. sample the pointer, steer, integrate, detect a catch
//! 3. render
//! 4. decay the caught countdown by `dt`
//!
//! A stop request only takes effect between iterations: the stopping frame
//! still runs in full.
//!
//! The wall-clock wait happens outside, in whatever [`TickSource`] supplies `dt`.

use pounce_engine::coords::Vec2;
use pounce_engine::input::{InputFrame, InputState, Key, MouseButton};
use pounce_engine::time::TickSource;

use super::{catch, steering, target, RandomSource, SimConfig, SimState};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Discrete input the simulation reacts to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SimEvent {
    /// Window close.
    Quit,
    /// Escape pressed.
    Cancel,
    /// Primary mouse button pressed.
    PrimaryClick,
}

/// Input for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Pointer in logical window pixels; `None` while outside the window.
    pub pointer: Option<Vec2>,
    /// Applied in order, before the update.
    pub events: Vec<SimEvent>,
}

impl FrameInput {
    pub fn pointer_at(pointer: Vec2) -> Self {
        Self { pointer: Some(pointer), events: Vec::new() }
    }

    pub fn with_event(mut self, ev: SimEvent) -> Self {
        self.events.push(ev);
        self
    }

    /// Extracts the frame's simulation input from the engine's input state.
    ///
    /// At most one event of each kind is produced per frame. Their relative
    /// order does not affect the frame's outcome.
    pub fn from_engine(state: &InputState, frame: &InputFrame) -> Self {
        let events = [
            (frame.close_requested, SimEvent::Quit),
            (frame.key_pressed(Key::Escape), SimEvent::Cancel),
            (frame.button_pressed(MouseButton::Left), SimEvent::PrimaryClick),
        ]
        .into_iter()
        .filter_map(|(hit, ev)| hit.then_some(ev))
        .collect();

        Self { pointer: state.pointer_pos, events }
    }
}

/// Owns the simulation state and runs it one frame at a time.
#[derive(Debug)]
pub struct FrameDriver<R> {
    config: SimConfig,
    state: SimState,
    loop_state: LoopState,
    rng: R,
    frames: u64,
}

impl<R: RandomSource> FrameDriver<R> {
    pub fn new(config: SimConfig, rng: R) -> Self {
        Self {
            config,
            state: SimState::new(&config),
            loop_state: LoopState::Running,
            rng,
            frames: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> &SimState {
        &self.state
    }

    #[inline]
    pub fn loop_state(&self) -> LoopState {
        self.loop_state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.loop_state == LoopState::Running
    }

    /// Frames completed so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Runs one loop iteration and hands the updated state to `render`.
    ///
    /// The frame is updated and rendered even when its events stopped the
    /// loop. A render error is returned as is and leaves the caught countdown undecayed.
    pub fn frame<F, E>(&mut self, dt: f32, input: &FrameInput, render: F) -> Result<LoopState, E>
    where
        F: FnOnce(&SimState) -> Result<(), E>,
    {
        self.update(dt, input);
        render(&self.state)?;
        self.state.caught.decay(dt);
        self.frames += 1;
        Ok(self.loop_state)
    }

    /// Steps 1 and 2 of the loop: events, then the simulation update.
    fn update(&mut self, dt: f32, input: &FrameInput) {
        for ev in &input.events {
            self.handle_event(*ev);
        }

        let Self { config, state, rng, .. } = self;

        target::acquire(&mut state.target, input.pointer, config);
        steering::update_pursuer(&mut state.pursuer, state.target.position, dt, config);
        catch::check_catch(state, rng, config);

        log::trace!(
            "frame {}: pos ({:.1}, {:.1}) speed {:.1} target ({:.1}, {:.1})",
            self.frames,
            state.pursuer.position.x,
            state.pursuer.position.y,
            state.pursuer.speed(),
            state.target.position.x,
            state.target.position.y
        );
    }

    fn handle_event(&mut self, ev: SimEvent) {
        match ev {
            SimEvent::Quit | SimEvent::Cancel => {
                if self.is_running() {
                    log::info!("stop requested ({ev:?})");
                }
                self.loop_state = LoopState::Stopped;
            }
            SimEvent::PrimaryClick => {
                target::teleport(&mut self.state.target, &mut self.rng, &self.config);
            }
        }
    }

    /// Drives the loop from `clock` until it stops or `inputs` runs out.
    ///
    /// Returns the number of frames run by this call.
    pub fn run<T, I, F, E>(&mut self, clock: &mut T, inputs: I, mut render: F) -> Result<u64, E>
    where
        T: TickSource + ?Sized,
        I: IntoIterator<Item = FrameInput>,
        F: FnMut(&SimState) -> Result<(), E>,
    {
        let start = self.frames;
        for input in inputs {
            if !self.is_running() {
                break;
            }
            let dt = clock.tick().dt;
            self.frame(dt, &input, &mut render)?;
        }
        Ok(self.frames - start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::Scripted;
    use approx::assert_relative_eq;
    use pounce_engine::input::{InputEvent, KeyState, MouseButtonState, PointerButtonEvent};
    use pounce_engine::time::FixedStep;
    use std::convert::Infallible;

    const DT: f32 = 1.0 / 60.0;

    fn driver() -> FrameDriver<Scripted> {
        FrameDriver::new(SimConfig::default(), Scripted::default())
    }

    fn no_render(_: &SimState) -> Result<(), Infallible> {
        Ok(())
    }

    // ── loop state ────────────────────────────────────────────────────────

    #[test]
    fn quit_stops_the_loop() {
        let mut d = driver();
        let input = FrameInput::default().with_event(SimEvent::Quit);
        assert_eq!(d.frame(DT, &input, no_render), Ok(LoopState::Stopped));
        assert!(!d.is_running());
    }

    #[test]
    fn cancel_stops_a_click_does_not() {
        let mut d = driver();
        let click = FrameInput::default().with_event(SimEvent::PrimaryClick);
        assert_eq!(d.frame(DT, &click, no_render), Ok(LoopState::Running));

        let esc = FrameInput::default().with_event(SimEvent::Cancel);
        assert_eq!(d.frame(DT, &esc, no_render), Ok(LoopState::Stopped));
    }

    #[test]
    fn stopping_frame_still_updates_and_renders() {
        let mut d = driver();
        let mut seen = None;
        let input = FrameInput::pointer_at(Vec2::new(400.0, 340.0)).with_event(SimEvent::Quit);
        let res = d.frame(DT, &input, |s| -> Result<(), Infallible> {
            seen = Some(*s);
            Ok(())
        });
        assert_eq!(res, Ok(LoopState::Stopped));

        let Some(s) = seen else { panic!("stopping frame was not rendered") };
        assert_eq!(s.target.position, Vec2::new(400.0, 340.0));
        assert_relative_eq!(s.pursuer.velocity.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(s.pursuer.velocity.y, 9.0, epsilon = 1e-4);
    }

    #[test]
    fn click_in_stopping_frame_still_teleports() {
        let mut d = FrameDriver::new(SimConfig::default(), Scripted::fractions(&[0.0, 1.0]));
        let input = FrameInput::default()
            .with_event(SimEvent::Cancel)
            .with_event(SimEvent::PrimaryClick);
        d.frame(DT, &input, no_render).unwrap();
        assert_eq!(d.state().target.position, Vec2::new(50.0, 550.0));
        assert!(!d.is_running());
    }

    // ── update order ──────────────────────────────────────────────────────

    #[test]
    fn first_frame_scenario() {
        let mut d = driver();
        let input = FrameInput::pointer_at(Vec2::new(400.0, 340.0));
        d.frame(DT, &input, no_render).unwrap();

        let s = d.state();
        assert_relative_eq!(s.pursuer.velocity.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(s.pursuer.velocity.y, 9.0, epsilon = 1e-4);
        assert!(!s.caught.is_active());
        assert_eq!(s.target.position, Vec2::new(400.0, 340.0));
    }

    #[test]
    fn pointer_overrides_teleport_in_same_frame() {
        let mut d = driver();
        let input = FrameInput::pointer_at(Vec2::new(10.0, 20.0)).with_event(SimEvent::PrimaryClick);
        d.frame(DT, &input, no_render).unwrap();
        assert_eq!(d.state().target.position, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn teleport_persists_without_pointer() {
        let mut d = FrameDriver::new(SimConfig::default(), Scripted::fractions(&[0.0, 1.0]));
        let input = FrameInput::default().with_event(SimEvent::PrimaryClick);
        d.frame(DT, &input, no_render).unwrap();
        assert_eq!(d.state().target.position, Vec2::new(50.0, 550.0));

        d.frame(DT, &FrameInput::default(), no_render).unwrap();
        assert_eq!(d.state().target.position, Vec2::new(50.0, 550.0));
    }

    #[test]
    fn render_sees_state_before_decay() {
        let mut d = driver();
        let center = d.config().center();
        let mut seen = 0.0;
        d.frame(DT, &FrameInput::pointer_at(center), |s| -> Result<(), Infallible> {
            seen = s.caught.remaining();
            Ok(())
        })
        .unwrap();
        assert_relative_eq!(seen, 0.9);
        assert_relative_eq!(d.state().caught.remaining(), 0.9 - DT, epsilon = 1e-6);
    }

    #[test]
    fn render_error_propagates() {
        let mut d = driver();
        let res = d.frame(DT, &FrameInput::default(), |_| Err("surface gone"));
        assert_eq!(res, Err("surface gone"));
        assert_eq!(d.frames(), 0);
    }

    #[test]
    fn sustained_contact_scenario() {
        let mut d = driver();
        let center = d.config().center();
        let input = FrameInput::pointer_at(center);
        let mut last_remaining = f32::INFINITY;

        for tick in 0..20 {
            let mut target_seen = Vec2::zero();
            d.frame(DT, &input, |s| -> Result<(), Infallible> {
                target_seen = s.target.position;
                Ok(())
            })
            .unwrap();

            let s = d.state();
            assert!(s.caught.is_active(), "tick {tick}");
            assert!(s.caught.remaining() < last_remaining);
            if tick > 0 {
                assert_relative_eq!(last_remaining - s.caught.remaining(), DT, epsilon = 1e-5);
            }
            last_remaining = s.caught.remaining();

            // Scripted coins are all heads: pointer sample, then +40 on both axes.
            assert_eq!(target_seen, center + Vec2::new(40.0, 40.0));
        }
        assert_relative_eq!(last_remaining, 0.9 - 20.0 * DT, epsilon = 1e-4);
    }

    // ── engine input ──────────────────────────────────────────────────────

    fn press(button: MouseButton) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state: MouseButtonState::Pressed,
            pos: Vec2::new(5.0, 6.0),
        })
    }

    #[test]
    fn engine_input_is_translated() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, InputEvent::PointerMoved(Vec2::new(1.0, 2.0)));
        state.apply_event(&mut frame, InputEvent::Key { key: Key::Unknown(44), state: KeyState::Pressed });
        state.apply_event(&mut frame, press(MouseButton::Right));
        let input = FrameInput::from_engine(&state, &frame);
        assert_eq!(input.pointer, Some(Vec2::new(1.0, 2.0)));
        assert!(input.events.is_empty());

        state.apply_event(&mut frame, InputEvent::CloseRequested);
        state.apply_event(&mut frame, InputEvent::Key { key: Key::Escape, state: KeyState::Pressed });
        state.apply_event(&mut frame, press(MouseButton::Left));
        let input = FrameInput::from_engine(&state, &frame);
        assert_eq!(input.pointer, Some(Vec2::new(5.0, 6.0)));
        assert_eq!(input.events, vec![SimEvent::Quit, SimEvent::Cancel, SimEvent::PrimaryClick]);
    }

    #[test]
    fn held_escape_cancels_once() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        let esc = InputEvent::Key { key: Key::Escape, state: KeyState::Pressed };

        state.apply_event(&mut frame, esc.clone());
        assert_eq!(FrameInput::from_engine(&state, &frame).events, vec![SimEvent::Cancel]);

        frame.clear();
        state.apply_event(&mut frame, esc);
        assert!(FrameInput::from_engine(&state, &frame).events.is_empty());
    }

    #[test]
    fn engine_close_stops_after_a_full_frame() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, InputEvent::PointerMoved(Vec2::new(400.0, 340.0)));
        state.apply_event(&mut frame, InputEvent::CloseRequested);

        let mut d = driver();
        let input = FrameInput::from_engine(&state, &frame);
        assert_eq!(d.frame(DT, &input, no_render), Ok(LoopState::Stopped));
        assert_eq!(d.state().target.position, Vec2::new(400.0, 340.0));
    }

    // ── headless run ──────────────────────────────────────────────────────

    #[test]
    fn run_stops_at_quit() {
        let mut d = driver();
        let mut clock = FixedStep::from_fps(60.0);
        let inputs = (0..10).map(|i| {
            let input = FrameInput::pointer_at(Vec2::new(700.0, 100.0));
            if i == 3 { input.with_event(SimEvent::Quit) } else { input }
        });
        let n = d.run(&mut clock, inputs, no_render).unwrap();
        assert_eq!(n, 4);
        assert_eq!(d.loop_state(), LoopState::Stopped);
    }
}
