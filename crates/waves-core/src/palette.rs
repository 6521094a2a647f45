use crate::constants::DEFAULT_PALETTE;
use crate::error::{WavesError, WavesResult};
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self([v, v, v])
    }

    /// `#RRGGBB`, suitable for canvas fill/stroke styles.
    pub fn to_css_hex(self) -> String {
        let [r, g, b] = self.0;
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Parse `#RRGGBB` (leading `#` optional).
    pub fn from_hex(s: &str) -> WavesResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(WavesError::parameter(format!("expected #RRGGBB, got {s:?}")));
        }
        let mut out = [0u8; 3];
        for (i, c) in out.iter_mut().enumerate() {
            *c = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .map_err(|_| WavesError::parameter(format!("bad hex color {s:?}")))?;
        }
        Ok(Self(out))
    }
}

/// Ordered band colors. Band `i` uses `colors[i % len]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().copied().map(Rgb).collect(),
        }
    }
}

impl Palette {
    pub fn new(colors: Vec<Rgb>) -> WavesResult<Self> {
        if colors.is_empty() {
            return Err(WavesError::parameter("palette needs at least one color"));
        }
        Ok(Self { colors })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    #[inline]
    pub fn color_for(&self, band: usize) -> Rgb {
        self.colors[band % self.colors.len()]
    }

    /// Random reorder. A shuffle that lands on the previous order is rotated
    /// by one so a tap always produces a visible change.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let before = self.colors.clone();
        self.colors.shuffle(rng);
        if self.colors == before {
            self.colors.rotate_left(1);
        }
    }
}
