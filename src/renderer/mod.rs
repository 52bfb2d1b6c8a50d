//! Canvas-2D scene renderer
//!
//! Draws a simulation [`Snapshot`](crate::sim::Snapshot) each frame. Strictly
//! read-only: rendering never mutates game state.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::*;
use crate::sim::{Edge, GravityDir, Snapshot};

pub struct SceneRenderer {
    ctx: CanvasRenderingContext2d,
}

impl SceneRenderer {
    /// Size the canvas to the playfield and grab its 2D context.
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        canvas.set_width(BOUNDS_WIDTH as u32);
        canvas.set_height(BOUNDS_HEIGHT as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self { ctx })
    }

    pub fn render(&self, snapshot: &Snapshot) {
        let w = BOUNDS_WIDTH as f64;
        let h = BOUNDS_HEIGHT as f64;

        // Backdrop
        self.ctx.set_shadow_blur(0.0);
        self.ctx.set_fill_style_str("#050505");
        self.ctx.fill_rect(0.0, 0.0, w, h);

        // Player block with glow
        let player_y = snapshot.player.y as f64;
        self.ctx.set_shadow_blur(15.0);
        self.ctx.set_shadow_color("#0ff");
        self.ctx.set_fill_style_str("#0ff");
        self.ctx.fill_rect(
            PLAYER_X as f64,
            player_y,
            PLAYER_SIZE as f64,
            PLAYER_SIZE as f64,
        );

        // Pupils sit on the gravity-facing side
        self.ctx.set_shadow_blur(0.0);
        self.ctx.set_fill_style_str("#000");
        let eye_y = match snapshot.gravity_direction {
            GravityDir::Down => player_y + 20.0,
            GravityDir::Up => player_y + 5.0,
        };
        self.ctx.fill_rect(PLAYER_X as f64 + 5.0, eye_y, 5.0, 5.0);
        self.ctx.fill_rect(PLAYER_X as f64 + 20.0, eye_y, 5.0, 5.0);

        // Spike triangles grow from their boundary toward the field
        self.ctx.set_shadow_blur(10.0);
        self.ctx.set_shadow_color("#f0f");
        self.ctx.set_fill_style_str("#f0f");
        for obstacle in snapshot.obstacles {
            let x = obstacle.x as f64;
            let width = obstacle.width as f64;
            self.ctx.begin_path();
            match obstacle.edge {
                Edge::Top => {
                    self.ctx.move_to(x, 0.0);
                    self.ctx.line_to(x + width / 2.0, obstacle.height as f64);
                    self.ctx.line_to(x + width, 0.0);
                }
                Edge::Bottom => {
                    self.ctx.move_to(x, h);
                    self.ctx.line_to(x + width / 2.0, obstacle.y as f64);
                    self.ctx.line_to(x + width, h);
                }
            }
            self.ctx.fill();
        }

        // Boundary strips
        self.ctx.set_shadow_blur(0.0);
        self.ctx.set_fill_style_str("#333");
        self.ctx.fill_rect(0.0, 0.0, w, 2.0);
        self.ctx.fill_rect(0.0, h - 2.0, w, 2.0);
    }
}
