//! Procedural background starfield: deterministic point stars scattered through
//! a spherical shell behind the constellation sphere.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A single background star.
#[derive(Clone, Debug)]
pub struct StarPoint {
    /// Position in scene units, inside the generator's shell.
    pub position: Vec3,
    /// Brightness in [0.0, 1.0] where 1.0 is the brightest visible star.
    pub brightness: f32,
    /// RGB color in [0, 1].
    pub color: [f32; 3],
    /// Point size in pixels.
    pub size: f32,
}

/// GPU vertex layout for one background star.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct StarVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub size: f32,
}

impl From<&StarPoint> for StarVertex {
    fn from(star: &StarPoint) -> Self {
        Self {
            position: star.position.to_array(),
            color: star.color,
            size: star.size,
        }
    }
}

/// Generates a deterministic starfield from a seed.
#[derive(Clone, Debug)]
pub struct StarfieldGenerator {
    seed: u64,
    count: u32,
    radius: f32,
    depth: f32,
    factor: f32,
    saturation: f32,
}

impl StarfieldGenerator {
    /// Generator for `count` stars with the default shell (radius 300,
    /// depth 100), size factor 4, and white stars.
    pub fn new(seed: u64, count: u32) -> Self {
        Self {
            seed,
            count,
            radius: 300.0,
            depth: 100.0,
            factor: 4.0,
            saturation: 0.0,
        }
    }

    /// Place stars between `radius` and `radius + depth` from the origin.
    #[must_use]
    pub fn with_shell(mut self, radius: f32, depth: f32) -> Self {
        self.radius = radius.max(0.0);
        self.depth = depth.max(0.0);
        self
    }

    /// Scale star point sizes.
    #[must_use]
    pub fn with_factor(mut self, factor: f32) -> Self {
        self.factor = factor.max(0.0);
        self
    }

    /// Blend star colors from white (0.0) to full blackbody color (1.0).
    #[must_use]
    pub fn with_saturation(mut self, saturation: f32) -> Self {
        self.saturation = saturation.clamp(0.0, 1.0);
        self
    }

    /// Generate the stars. Deterministic for a given configuration.
    pub fn generate(&self) -> Vec<StarPoint> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut stars = Vec::with_capacity(self.count as usize);

        for _ in 0..self.count {
            let theta = rng.random::<f32>() * std::f32::consts::TAU;
            let phi = (1.0 - 2.0 * rng.random::<f32>()).acos();
            let direction =
                Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());
            let distance = self.radius + rng.random::<f32>() * self.depth;

            // Power-law: many dim, few bright.
            let brightness = rng.random::<f32>().powf(4.0).clamp(0.0, 1.0);

            let temperature = 2000.0 + brightness * 28000.0;
            let tint = blackbody_to_rgb(temperature);
            let color = std::array::from_fn(|i| 1.0 + (tint[i] - 1.0) * self.saturation);

            let size = self.factor * (0.5 + 0.5 * rng.random::<f32>());

            stars.push(StarPoint {
                position: direction * distance,
                brightness,
                color,
                size,
            });
        }

        tracing::debug!(count = stars.len(), seed = self.seed, "Generated starfield");
        stars
    }

    /// Generate the stars as packed vertex bytes.
    pub fn generate_vertex_bytes(&self) -> Vec<u8> {
        let vertices: Vec<StarVertex> = self.generate().iter().map(StarVertex::from).collect();
        bytemuck::cast_slice(&vertices).to_vec()
    }
}

/// Convert a blackbody temperature in Kelvin to an approximate sRGB color.
///
/// Uses a simplified Planckian locus approximation (Tanner Helland algorithm).
pub fn blackbody_to_rgb(temperature_k: f32) -> [f32; 3] {
    let t = temperature_k / 100.0;
    let r = if t <= 66.0 {
        1.0
    } else {
        (329.698_73 * (t - 60.0).powf(-0.133_204_76) / 255.0).clamp(0.0, 1.0)
    };
    let g = if t <= 66.0 {
        (99.470_8 * t.ln() - 161.119_57).clamp(0.0, 255.0) / 255.0
    } else {
        (288.122_17 * (t - 60.0).powf(-0.075_514_85) / 255.0).clamp(0.0, 1.0)
    };
    let b = if t >= 66.0 {
        1.0
    } else if t <= 19.0 {
        0.0
    } else {
        (138.517_73 * (t - 10.0).ln() - 305.044_8).clamp(0.0, 255.0) / 255.0
    };
    [r, g, b]
}
