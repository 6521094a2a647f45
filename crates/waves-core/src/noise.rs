//! Seeded coherent noise.
//!
//! A lattice of uniform values filled from a 32-bit LCG, sampled with cosine
//! interpolation over four octaves. The field is a pure function of the seed:
//! two fields built from the same seed return identical samples everywhere.

const LATTICE_BITS: u32 = 12;
const LATTICE_MASK: usize = (1 << LATTICE_BITS) - 1; // 4095
const Y_WRAP_BITS: u32 = 4;
const Y_WRAP: usize = 1 << Y_WRAP_BITS;
const Z_WRAP_BITS: u32 = 8;
const Z_WRAP: usize = 1 << Z_WRAP_BITS;

const OCTAVES: usize = 4;
const AMP_FALLOFF: f64 = 0.5;

// Numerical Recipes LCG, modulus 2^32
const LCG_A: u64 = 1_664_525;
const LCG_C: u64 = 1_013_904_223;
const LCG_M: u64 = 1 << 32;

#[derive(Clone)]
pub struct NoiseField {
    seed: u32,
    lattice: Box<[f64]>,
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField").field("seed", &self.seed).finish()
    }
}

impl NoiseField {
    pub fn new(seed: u32) -> Self {
        let mut z = seed as u64;
        let lattice = (0..=LATTICE_MASK)
            .map(|_| {
                z = (LCG_A * z + LCG_C) % LCG_M;
                z as f64 / LCG_M as f64
            })
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Self { seed, lattice }
    }

    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn reseed(&mut self, seed: u32) {
        *self = Self::new(seed);
    }

    /// Sample the field. Output lies in `[0, 1)`; negative coordinates are
    /// mirrored about zero.
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let (mut xi, mut xf) = split(x);
        let (mut yi, mut yf) = split(y);
        let (mut zi, mut zf) = split(z);

        let mut r = 0.0;
        let mut ampl = 0.5;
        for _ in 0..OCTAVES {
            let mut of = xi
                .wrapping_add(yi << Y_WRAP_BITS)
                .wrapping_add(zi << Z_WRAP_BITS);

            let rxf = scaled_cosine(xf);
            let ryf = scaled_cosine(yf);

            let mut n1 = self.at(of);
            n1 += rxf * (self.at(of.wrapping_add(1)) - n1);
            let mut n2 = self.at(of.wrapping_add(Y_WRAP));
            n2 += rxf * (self.at(of.wrapping_add(Y_WRAP + 1)) - n2);
            n1 += ryf * (n2 - n1);

            of = of.wrapping_add(Z_WRAP);
            n2 = self.at(of);
            n2 += rxf * (self.at(of.wrapping_add(1)) - n2);
            let mut n3 = self.at(of.wrapping_add(Y_WRAP));
            n3 += rxf * (self.at(of.wrapping_add(Y_WRAP + 1)) - n3);
            n2 += ryf * (n3 - n2);

            n1 += scaled_cosine(zf) * (n2 - n1);

            r += n1 * ampl;
            ampl *= AMP_FALLOFF;

            double(&mut xi, &mut xf);
            double(&mut yi, &mut yf);
            double(&mut zi, &mut zf);
        }
        r
    }

    #[inline]
    fn at(&self, offset: usize) -> f64 {
        self.lattice[offset & LATTICE_MASK]
    }
}

#[inline]
fn split(v: f64) -> (usize, f64) {
    let v = if v.is_finite() { v.abs() } else { 0.0 };
    let i = v.floor();
    // only the low lattice bits matter, so wrap large coordinates
    ((i % (LCG_M as f64)) as usize, v - i)
}

#[inline]
fn double(i: &mut usize, f: &mut f64) {
    *i = i.wrapping_shl(1);
    *f *= 2.0;
    if *f >= 1.0 {
        *i = i.wrapping_add(1);
        *f -= 1.0;
    }
}

#[inline]
fn scaled_cosine(t: f64) -> f64 {
    0.5 * (1.0 - (t * std::f64::consts::PI).cos())
}
