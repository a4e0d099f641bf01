//! Random simple polygons in 2D (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of simple (star-shaped) polygons
//!   for property tests and benches of the mesher.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, and emit the points in angle order. Angular jitter stays
//!   below half the spacing and `n >= 4`, so consecutive angles stay strictly
//!   increasing with gaps under π: the outline is star-shaped around the
//!   origin and never self-intersects. Unlike a hull, concave dents survive.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(4),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(4);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.5,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random simple polygon, counterclockwise around the origin.
pub fn draw_star_polygon(cfg: RadialCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = 2.0 * std::f64::consts::PI / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * 2.0 * std::f64::consts::PI
    } else {
        0.0
    };
    (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64) * delta + jitter;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::shoelace_area;

    #[test]
    fn reproducible_draw() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(10),
            angle_jitter_frac: 0.2,
            radial_jitter: 0.1,
            base_radius: 1.0,
            random_phase: true,
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_star_polygon(cfg, tok);
        let p2 = draw_star_polygon(cfg, tok);
        assert_eq!(p1.len(), 10);
        for (a, b) in p1.iter().zip(p2.iter()) {
            assert!((a - b).norm() < 1e-12);
        }
        let other = draw_star_polygon(cfg, ReplayToken { seed: 42, index: 8 });
        assert!(p1.iter().zip(other.iter()).any(|(a, b)| (a - b).norm() > 1e-9));
    }

    #[test]
    fn draws_are_counterclockwise() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Uniform { min: 3, max: 40 },
            ..RadialCfg::default()
        };
        for index in 0..50 {
            let pts = draw_star_polygon(cfg, ReplayToken { seed: 3, index });
            assert!(pts.len() >= 4);
            assert!(shoelace_area(&pts) > 0.0);
        }
    }
}
