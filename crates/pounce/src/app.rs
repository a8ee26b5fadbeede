//! Hosts the simulation inside the engine runtime.

use rand::rngs::StdRng;
use rand::SeedableRng;

use pounce_engine::core::{App as EngineApp, AppControl, FrameCtx};
use pounce_engine::device::{FrameError, GpuInit};
use pounce_engine::render::{ShapeRenderer, TextRenderer};
use pounce_engine::scene::DrawList;
use pounce_engine::text::{FontId, FontSystem};
use pounce_engine::window::{LogicalSize, Runtime, RuntimeConfig};

use crate::sim::{FrameDriver, FrameInput, LoopState, SimConfig};
use crate::view::{background, compose_frame, CatPalette};

/// Window settings matching a simulation config: fixed size, capped at `fps`.
pub fn runtime_config(config: &SimConfig) -> RuntimeConfig {
    RuntimeConfig {
        title: "Cat Chasing Mouse".to_string(),
        size: LogicalSize::new(f64::from(config.width), f64::from(config.height)),
        resizable: false,
        target_fps: config.fps,
    }
}

pub struct PounceApp {
    driver: FrameDriver<StdRng>,
    palette: CatPalette,

    fonts: FontSystem,
    hud_font: Option<FontId>,

    draw_list: DrawList,
    shapes: ShapeRenderer,
    text: TextRenderer,
}

impl PounceApp {
    pub fn new(config: SimConfig, rng: StdRng) -> Self {
        let mut fonts = FontSystem::new();
        let hud_font = match fonts.load_system_font() {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("{e}; HUD disabled");
                None
            }
        };

        Self {
            driver: FrameDriver::new(config, rng),
            palette: CatPalette::default(),
            fonts,
            hud_font,
            draw_list: DrawList::new(),
            shapes: ShapeRenderer::new(),
            text: TextRenderer::new(),
        }
    }

    /// Opens the window and runs until the user quits.
    pub fn run(self) -> anyhow::Result<()> {
        let rc = runtime_config(self.driver.config());
        log::info!("starting: {}x{} @ {} fps", rc.size.width, rc.size.height, rc.target_fps);
        Runtime::run(rc, GpuInit::default(), self)
    }
}

impl Default for PounceApp {
    fn default() -> Self {
        Self::new(SimConfig::default(), StdRng::from_entropy())
    }
}

impl EngineApp for PounceApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl, FrameError> {
        let input = FrameInput::from_engine(ctx.input, ctx.input_frame);
        let config = *self.driver.config();

        let Self { driver, palette, fonts, hud_font, draw_list, shapes, text } = self;

        let loop_state = driver.frame(ctx.time.dt, &input, |state| {
            compose_frame(draw_list, state, &config, *hud_font, palette);
            ctx.render(background(), |rctx, target| {
                shapes.render(rctx, target, draw_list);
                text.render(rctx, target, draw_list, fonts);
            })
        })?;

        Ok(match loop_state {
            LoopState::Running => AppControl::Continue,
            LoopState::Stopped => {
                log::info!("stopped after {} frames", driver.frames());
                AppControl::Exit
            }
        })
    }
}
