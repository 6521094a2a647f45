use crate::constants::GRAIN_ALPHA;
use rand::Rng;

/// Film-grain overlay: straight (non-premultiplied) RGBA8 pixels, every
/// pixel a random gray at a fixed translucency.
#[derive(Clone, Debug, PartialEq)]
pub struct GrainOverlay {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl GrainOverlay {
    pub fn generate<R: Rng + ?Sized>(width: u32, height: u32, rng: &mut R) -> Self {
        let count = width as usize * height as usize;
        let mut pixels = vec![0u8; count * 4];
        for px in pixels.chunks_exact_mut(4) {
            let v = rng.gen_range(0.0f32..255.0).round() as u8;
            px[0] = v;
            px[1] = v;
            px[2] = v;
            px[3] = GRAIN_ALPHA;
        }
        log::debug!("[grain] generated {}x{}", width, height);
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
