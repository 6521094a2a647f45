//! CPU rasterisation of frames, used by the native front-end and by tests.
//!
//! Backed by a `tiny_skia::Pixmap`. The surface is cleared to an opaque
//! background before anything else is drawn and every band color is opaque,
//! so its premultiplied storage reads back as plain RGBA8.

use crate::error::{WavesError, WavesResult};
use crate::grain::GrainOverlay;
use crate::palette::Rgb;
use crate::wave::Frame;
use glam::Vec2;
use tiny_skia::{
    BlendMode, Color, FillRule, IntSize, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Stroke,
    Transform,
};

pub type Rgba8 = [u8; 4];

#[derive(Clone, Debug)]
pub struct Raster {
    pixmap: Pixmap,
}

impl Raster {
    pub fn new(width: u32, height: u32) -> WavesResult<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            WavesError::dimensions(format!(
                "raster must be at least 1x1, got {width}x{height}"
            ))
        })?;
        Ok(Self { pixmap })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn clear(&mut self, color: Rgb) {
        let [r, g, b] = color.0;
        self.pixmap.fill(Color::from_rgba8(r, g, b, 255));
    }

    /// Straight (demultiplied) RGBA at `(x, y)`, `None` outside the surface.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        self.pixmap.pixel(x, y).map(|c| {
            let c = c.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
    }

    /// Fill a polygon (implicitly closed) with the even-odd rule.
    pub fn fill_polygon(&mut self, points: &[Vec2], color: Rgb, offset: Vec2) {
        let Some(path) = band_path(points, true) else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &solid_paint(color),
            FillRule::EvenOdd,
            Transform::from_translate(offset.x, offset.y),
            None,
        );
    }

    /// Stroke an open polyline with 1px lines.
    pub fn stroke_polyline(&mut self, points: &[Vec2], color: Rgb, offset: Vec2) {
        let Some(path) = band_path(points, false) else {
            return;
        };
        let stroke = Stroke {
            width: 1.0,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &solid_paint(color),
            &stroke,
            Transform::from_translate(offset.x, offset.y),
            None,
        );
    }

    /// Multiply `grain` over the whole surface:
    /// `out = Cb * ((1 - As) + As * Cs)` on an opaque backdrop. Never
    /// brightens; white grain leaves the backdrop unchanged.
    pub fn multiply_grain(&mut self, grain: &GrainOverlay) -> WavesResult<()> {
        if grain.size() != (self.width(), self.height()) {
            return Err(WavesError::dimensions(format!(
                "grain is {}x{}, raster is {}x{}",
                grain.width,
                grain.height,
                self.width(),
                self.height()
            )));
        }
        let overlay = grain_pixmap(grain)?;
        let paint = PixmapPaint {
            blend_mode: BlendMode::Multiply,
            ..PixmapPaint::default()
        };
        self.pixmap
            .draw_pixmap(0, 0, overlay.as_ref(), &paint, Transform::identity(), None);
        Ok(())
    }

    /// Draw all bands of `frame`, then multiply the grain over the result.
    pub fn render_frame(frame: &Frame, grain: &GrainOverlay) -> WavesResult<Self> {
        let mut raster = Self::new(frame.width, frame.height)?;
        raster.clear(Rgb::gray(frame.background));
        let offset = Vec2::new(0.0, frame.translate_y);
        for band in &frame.bands {
            raster.fill_polygon(&band.points, band.color, offset);
            raster.stroke_polyline(&band.points, band.color, offset);
        }
        raster.multiply_grain(grain)?;
        Ok(raster)
    }

    /// Straight RGBA8 rows, ready for PNG encoding.
    pub fn into_rgba8(self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect()
    }
}

fn solid_paint(color: Rgb) -> Paint<'static> {
    let [r, g, b] = color.0;
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, 255);
    paint.anti_alias = true;
    paint
}

/// `None` for fewer than two points or non-finite coordinates.
fn band_path(points: &[Vec2], close: bool) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    if rest.is_empty() {
        return None;
    }
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    if close {
        pb.close();
    }
    pb.finish()
}

/// The grain is straight alpha; pixmaps store premultiplied color.
fn grain_pixmap(grain: &GrainOverlay) -> WavesResult<Pixmap> {
    let expected = grain.width as usize * grain.height as usize * 4;
    if grain.pixels.len() != expected {
        return Err(WavesError::buffer(format!(
            "grain holds {} bytes, {}x{} needs {}",
            grain.pixels.len(),
            grain.width,
            grain.height,
            expected
        )));
    }
    let mut data = grain.pixels.clone();
    for px in data.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * a + 127) / 255) as u8;
        }
    }
    let size = IntSize::from_wh(grain.width, grain.height)
        .ok_or_else(|| WavesError::dimensions("grain must be at least 1x1"))?;
    Pixmap::from_vec(data, size)
        .ok_or_else(|| WavesError::buffer("grain does not fit its pixmap"))
}
