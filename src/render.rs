//! Replays core `Frame`s onto a 2D canvas.

use crate::dom;
use crate::input;
use wasm_bindgen::Clamped;
use waves_core::{Frame, GrainOverlay, Layout, Rgb};
use web_sys as web;

pub struct Surface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    // Grain lives on a detached canvas so it can be composited with drawImage
    grain_canvas: web::HtmlCanvasElement,
    grain_ctx: web::CanvasRenderingContext2d,
    logical_w: u32,
    logical_h: u32,
    dpr: f64,
}

impl Surface {
    pub fn new(
        document: &web::Document,
        canvas: web::HtmlCanvasElement,
    ) -> anyhow::Result<Self> {
        let ctx = dom::context_2d(&canvas)?;
        let grain_canvas = dom::create_canvas(document)?;
        let grain_ctx = dom::context_2d(&grain_canvas)?;
        Ok(Self {
            canvas,
            ctx,
            grain_canvas,
            grain_ctx,
            logical_w: 0,
            logical_h: 0,
            dpr: 1.0,
        })
    }

    #[inline]
    pub fn logical_size(&self) -> (u32, u32) {
        (self.logical_w, self.logical_h)
    }

    /// Resize the visible canvas to the layout and upload a new grain image.
    pub fn sync(&mut self, layout: &Layout, grain: &GrainOverlay) -> anyhow::Result<()> {
        let (w, h) = (layout.canvas_width(), layout.canvas_height());
        let dpr = dom::device_pixel_ratio();
        let (bw, bh) = input::backing_size(w, h, dpr);
        self.canvas.set_width(bw);
        self.canvas.set_height(bh);
        let style = self.canvas.style();
        _ = style.set_property("width", &format!("{}px", w));
        _ = style.set_property("height", &format!("{}px", h));
        self.logical_w = w;
        self.logical_h = h;
        self.dpr = bw as f64 / w.max(1) as f64;

        self.grain_canvas.set_width(grain.width);
        self.grain_canvas.set_height(grain.height);
        let image = web::ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(&grain.pixels),
            grain.width,
            grain.height,
        )
        .map_err(|e| anyhow::anyhow!("grain ImageData: {:?}", e))?;
        self.grain_ctx
            .put_image_data(&image, 0.0, 0.0)
            .map_err(|e| anyhow::anyhow!("grain putImageData: {:?}", e))?;
        log::info!(
            "[render] canvas {}x{} (backing {}x{}, dpr {:.2})",
            w,
            h,
            bw,
            bh,
            self.dpr
        );
        Ok(())
    }

    pub fn draw(&self, frame: &Frame) -> anyhow::Result<()> {
        let ctx = &self.ctx;
        let w = self.logical_w as f64;
        let h = self.logical_h as f64;
        ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        ctx.set_global_composite_operation("source-over")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        ctx.set_fill_style_str(&Rgb::gray(frame.background).to_css_hex());
        ctx.fill_rect(0.0, 0.0, w, h);

        ctx.save();
        _ = ctx.translate(0.0, frame.translate_y as f64);
        for band in &frame.bands {
            let Some((first, rest)) = band.points.split_first() else {
                continue;
            };
            let color = band.color.to_css_hex();
            ctx.set_fill_style_str(&color);
            ctx.set_stroke_style_str(&color);
            ctx.begin_path();
            ctx.move_to(first.x as f64, first.y as f64);
            for p in rest {
                ctx.line_to(p.x as f64, p.y as f64);
            }
            ctx.fill();
            ctx.stroke();
        }
        ctx.restore();

        ctx.set_global_composite_operation("multiply")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        ctx.draw_image_with_html_canvas_element_and_dw_and_dh(&self.grain_canvas, 0.0, 0.0, w, h)
            .map_err(|e| anyhow::anyhow!("grain drawImage: {:?}", e))?;
        ctx.set_global_composite_operation("source-over")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(())
    }
}
