use anyhow::{Context, Result};
use glam::Mat4;
use skiff_engine::core::{App, AppControl, FrameCtx};
use skiff_engine::device::Gpu;
use skiff_engine::paint::Color;
use skiff_engine::render::{orthographic, ShaderProgram, SpriteRenderer};

use crate::state::{PenguinState, HALF_HEIGHT, HALF_WIDTH, PENGUIN, PUFFLE};

const VERTEX_SHADER_PATH: &str = "shaders/vertex_textured.wgsl";
const FRAGMENT_SHADER_PATH: &str = "shaders/fragment_textured.wgsl";

const PENGUIN_TEXTURE_PATH: &str = "assets/penguin.png";
const PUFFLE_TEXTURE_PATH: &str = "assets/puffle.png";

pub struct PenguinDemo {
    state: PenguinState,
    renderer: Option<SpriteRenderer>,
    background: Color,
}

impl PenguinDemo {
    pub fn new() -> Self {
        Self {
            state: PenguinState::new(),
            renderer: None,
            background: Color::from_rgba_u8(214, 236, 245, 255),
        }
    }
}

impl Default for PenguinDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl App for PenguinDemo {
    fn on_init(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        let ctx = gpu.render_ctx();

        let program = ShaderProgram::load(&ctx, VERTEX_SHADER_PATH, FRAGMENT_SHADER_PATH)
            .context("failed to load sprite shaders")?;
        let mut renderer = SpriteRenderer::new(&ctx, program);
        renderer.set_camera(ctx.queue, orthographic(HALF_WIDTH, HALF_HEIGHT), Mat4::IDENTITY);

        self.state.sprites[PENGUIN].texture = renderer.load_texture(&ctx, PENGUIN_TEXTURE_PATH)?;
        self.state.sprites[PUFFLE].texture = renderer.load_texture(&ctx, PUFFLE_TEXTURE_PATH)?;

        self.renderer = Some(renderer);
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
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
