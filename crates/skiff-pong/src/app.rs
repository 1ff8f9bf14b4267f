use anyhow::{Context, Result};
use glam::Mat4;
use skiff_engine::core::{App, AppControl, FrameCtx};
use skiff_engine::device::Gpu;
use skiff_engine::paint::Color;
use skiff_engine::render::{orthographic, ShaderProgram, SpriteRenderer};

use crate::state::{PongState, HALF_HEIGHT, HALF_WIDTH, SHIP_ONE, SHIP_TWO};

const VERTEX_SHADER_PATH: &str = "shaders/vertex_textured.wgsl";
const FRAGMENT_SHADER_PATH: &str = "shaders/fragment_textured.wgsl";

const SHIP_ONE_TEXTURE_PATH: &str = "assets/shipOne.png";
const SHIP_TWO_TEXTURE_PATH: &str = "assets/shipTwo.png";

/// Ship pong: input → update → render, once per redraw.
pub struct ShipPong {
    state: PongState,
    renderer: Option<SpriteRenderer>,
    background: Color,
}

impl ShipPong {
    pub fn new() -> Self {
        Self {
            state: PongState::new(),
            renderer: None,
            // #76b6c4, ocean blue.
            background: Color::from_rgba_u8(118, 182, 196, 255),
        }
    }
}

impl Default for ShipPong {
    fn default() -> Self {
        Self::new()
    }
}

impl App for ShipPong {
    fn on_init(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        let ctx = gpu.render_ctx();

        let program = ShaderProgram::load(&ctx, VERTEX_SHADER_PATH, FRAGMENT_SHADER_PATH)
            .context("failed to load sprite shaders")?;
        let mut renderer = SpriteRenderer::new(&ctx, program);
        renderer.set_camera(ctx.queue, orthographic(HALF_WIDTH, HALF_HEIGHT), Mat4::IDENTITY);

        self.state.sprites[SHIP_ONE].texture = renderer.load_texture(&ctx, SHIP_ONE_TEXTURE_PATH)?;
        self.state.sprites[SHIP_TWO].texture = renderer.load_texture(&ctx, SHIP_TWO_TEXTURE_PATH)?;

        log::info!("ship pong ready: W/S and Up/Down move, T toggles two-player mode");
        self.renderer = Some(renderer);
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.state.process_input(ctx.input, ctx.input_frame);
        self.state.update(ctx.time.dt);

        let Some(renderer) = self.renderer.as_mut() else {
            return AppControl::Continue;
        };
        let sprites = &self.state.sprites;

        ctx.render(self.background, |rctx, target| {
            renderer.render(rctx, target, sprites);
        })
    }
}
