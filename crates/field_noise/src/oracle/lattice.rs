//! Seeded hash-lattice noise.
//!
//! Value noise on the integer lattice (quintic fade, range [-1, 1]) summed over octaves,
//! plus a jittered-lattice nearest-neighbor search with one feature point per cell and
//! one lattice per octave.
//! Everything is derived from integer hashes of cell coordinates, so results depend only
//! on the seed and the input.
use glam::{IVec3, Vec3};
use rand::Rng;

use crate::oracle::{FeaturePoint, NoiseOracle, RankedFeaturePoints};

/// Amplitude falloff between octaves when the caller does not supply a gain.
pub const DEFAULT_PERSISTENCE: f32 = 0.5;

/// Number of lattice cells scanned by the nearest-neighbor search (3x3x3).
pub const SEARCH_CELLS: usize = 27;

const CELL_SALTS: [u32; 3] = [0x068b_c021, 0x02e1_b213, 0x0f1a_1234];
const CHANNEL_SALTS: [u32; 3] = [0x5bd1_e995, 0x27d4_eb2f, 0x1656_67b1];
const SCALAR_SALT: u32 = 0x3c6e_f372;

/// Reference [`NoiseOracle`] backed by an integer hash lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LatticeNoise {
    seed: u32,
}

impl LatticeNoise {
    /// Creates a lattice with the given seed.
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Creates a lattice with a seed drawn from `rng`.
    pub fn from_rng(rng: &mut dyn Rng) -> Self {
        Self::new(rng.next_u32())
    }

    /// Returns the seed this lattice was built from.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Position of the feature point owned by `cell` in the base layer.
    pub fn feature_point(&self, cell: IVec3, randomness: f32) -> Vec3 {
        self.layer_feature_point(cell, 0, randomness)
    }

    /// Feature point owned by `cell` of octave `layer`, in that layer's coordinates.
    ///
    /// Each layer hashes with its own `w` coordinate, so layers do not share points even
    /// when the lacunarity is 1.
    fn layer_feature_point(&self, cell: IVec3, layer: i32, randomness: f32) -> Vec3 {
        let jitter = Vec3::new(
            unit01(hash4(cell.x, cell.y, cell.z, layer, self.seed ^ CELL_SALTS[0])),
            unit01(hash4(cell.x, cell.y, cell.z, layer, self.seed ^ CELL_SALTS[1])),
            unit01(hash4(cell.x, cell.y, cell.z, layer, self.seed ^ CELL_SALTS[2])),
        );
        cell.as_vec3() + 0.5 + (jitter - 0.5) * randomness
    }

    /// Scans the 3x3x3 cells of `layer` around `p` and merges them into `ranked`.
    ///
    /// Layer points are mapped back into sample space by dividing by `frequency`, so
    /// every candidate is a real point with `offset = p - feature`.
    fn scan_layer(
        &self,
        p: Vec3,
        layer: i32,
        frequency: f32,
        randomness: f32,
        ranked: &mut [FeaturePoint],
    ) {
        let base = (p * frequency).floor().as_ivec3();
        for dz in -1..=1 {
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let cell = base + IVec3::new(dx, dy, dz);
                    let feature = self.layer_feature_point(cell, layer, randomness) / frequency;
                    let offset = p - feature;
                    insert_ranked(
                        ranked,
                        FeaturePoint {
                            distance: offset.length(),
                            offset,
                        },
                    );
                }
            }
        }
    }
}

impl Default for LatticeNoise {
    fn default() -> Self {
        Self::new(0)
    }
}

impl NoiseOracle for LatticeNoise {
    fn scalar_noise3(&self, p: Vec3, octaves: u32, lacunarity: f32) -> f32 {
        fbm(
            p,
            None,
            octaves,
            lacunarity,
            DEFAULT_PERSISTENCE,
            self.seed ^ SCALAR_SALT,
        )
    }

    fn vector_noise4(&self, p: Vec3, time: f32, octaves: u32, lacunarity: f32) -> Vec3 {
        vector_fbm(p, Some(time), octaves, lacunarity, DEFAULT_PERSISTENCE, self.seed)
    }

    fn vector_noise3(&self, p: Vec3, octaves: u32, lacunarity: f32, gain: f32) -> Vec3 {
        vector_fbm(p, None, octaves, lacunarity, gain, self.seed)
    }

    /// Always scans at least one octave. Octave `k` contributes the points of a lattice
    /// scaled by `lacunarity^k`; candidates of all octaves are ranked together. Octaves
    /// whose frequency is not a positive finite number are skipped.
    fn nearest_feature_points<const N: usize>(
        &self,
        p: Vec3,
        octaves: u32,
        lacunarity: f32,
        randomness: f32,
    ) -> RankedFeaturePoints<N> {
        const {
            assert!(N <= SEARCH_CELLS, "at most 27 feature points per query");
        }

        let mut ranked = [FeaturePoint {
            distance: f32::INFINITY,
            offset: Vec3::ZERO,
        }; N];
        let mut frequency = 1.0_f32;
        for layer in 0..octaves.max(1) {
            if !(frequency.is_finite() && frequency > 0.0) {
                break;
            }
            self.scan_layer(p, layer as i32, frequency, randomness, &mut ranked);
            frequency *= lacunarity;
        }
        ranked
    }
}

/// Inserts `candidate` into the ascending `ranked` slice, dropping the farthest entry.
#[inline]
fn insert_ranked(ranked: &mut [FeaturePoint], candidate: FeaturePoint) {
    let Some(slot) = ranked
        .iter()
        .position(|fp| candidate.distance < fp.distance)
    else {
        return;
    };
    ranked[slot..].rotate_right(1);
    ranked[slot] = candidate;
}

fn fbm(p: Vec3, time: Option<f32>, octaves: u32, lacunarity: f32, gain: f32, seed: u32) -> f32 {
    let mut sum = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;
    for _ in 0..octaves {
        let q = p * frequency;
        let v = match time {
            Some(t) => value4(q, t * frequency, seed),
            None => value_slice(q, 0, seed),
        };
        sum += amplitude * v;
        frequency *= lacunarity;
        amplitude *= gain;
    }
    sum
}

fn vector_fbm(
    p: Vec3,
    time: Option<f32>,
    octaves: u32,
    lacunarity: f32,
    gain: f32,
    seed: u32,
) -> Vec3 {
    Vec3::new(
        fbm(p, time, octaves, lacunarity, gain, seed ^ CHANNEL_SALTS[0]),
        fbm(p, time, octaves, lacunarity, gain, seed ^ CHANNEL_SALTS[1]),
        fbm(p, time, octaves, lacunarity, gain, seed ^ CHANNEL_SALTS[2]),
    )
}

#[inline]
fn mix(mut v: u32) -> u32 {
    v ^= v >> 16;
    v = v.wrapping_mul(0x7feb_352d);
    v ^= v >> 15;
    v = v.wrapping_mul(0x846c_a68b);
    v ^= v >> 16;
    v
}

#[inline]
fn hash4(x: i32, y: i32, z: i32, w: i32, seed: u32) -> u32 {
    let mut h = seed ^ 0x9e37_79b9;
    h ^= mix((x as u32).wrapping_add(0x85eb_ca6b));
    h ^= mix((y as u32).wrapping_add(0xc2b2_ae35));
    h ^= mix((z as u32).wrapping_add(0x27d4_eb2f));
    h ^= mix((w as u32).wrapping_add(0x1656_67b1));
    mix(h)
}

/// Low 24 bits of `h` mapped to [0, 1), exactly representable in `f32`.
#[inline]
fn unit01(h: u32) -> f32 {
    (h & 0x00FF_FFFF) as f32 / 16_777_216.0
}

#[inline]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

fn corner(cell: IVec3, w: i32, seed: u32) -> f32 {
    unit01(hash4(cell.x, cell.y, cell.z, w, seed)) * 2.0 - 1.0
}

/// Trilinear value noise on the 3D slice `w` of the lattice.
fn value_slice(p: Vec3, w: i32, seed: u32) -> f32 {
    let floor = p.floor();
    let cell = floor.as_ivec3();
    let f = p - floor;
    let u = Vec3::new(fade(f.x), fade(f.y), fade(f.z));

    let c = |dx: i32, dy: i32, dz: i32| corner(cell + IVec3::new(dx, dy, dz), w, seed);
    let x00 = lerp(c(0, 0, 0), c(1, 0, 0), u.x);
    let x10 = lerp(c(0, 1, 0), c(1, 1, 0), u.x);
    let x01 = lerp(c(0, 0, 1), c(1, 0, 1), u.x);
    let x11 = lerp(c(0, 1, 1), c(1, 1, 1), u.x);
    let y0 = lerp(x00, x10, u.y);
    let y1 = lerp(x01, x11, u.y);
    lerp(y0, y1, u.z)
}

fn value4(p: Vec3, w: f32, seed: u32) -> f32 {
    let floor = w.floor();
    let slice = floor as i32;
    lerp(
        value_slice(p, slice, seed),
        value_slice(p, slice + 1, seed),
        fade(w - floor),
    )
}
