//! Demo signal: sin(x) on an even grid, optionally with seeded noise.
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single RNG, so
//! a run can be reproduced from the values in its provenance sidecar.

use anyhow::{bail, Result};
use plr::{point, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Demo signal configuration.
#[derive(Clone, Copy, Debug)]
pub struct SignalCfg {
    /// Number of samples (at least 2 for an even grid).
    pub n: usize,
    /// Samples span `[0, x_max]`.
    pub x_max: f64,
    /// Uniform noise amplitude added to y. 0 disables noise.
    pub noise: f64,
}

impl Default for SignalCfg {
    fn default() -> Self {
        Self {
            n: 1000,
            x_max: 7.0,
            noise: 0.0,
        }
    }
}

/// Replay token to make noisy draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

impl SignalCfg {
    /// Reject settings that cannot produce a strictly increasing grid or a
    /// bounded noise draw.
    pub fn validate(&self) -> Result<()> {
        if self.n < 2 {
            bail!("n must be at least 2, got {}", self.n);
        }
        if !(self.x_max.is_finite() && self.x_max > 0.0) {
            bail!("x_max must be finite and > 0, got {}", self.x_max);
        }
        if !(self.noise.is_finite() && self.noise >= 0.0) {
            bail!("noise must be finite and >= 0, got {}", self.noise);
        }
        Ok(())
    }
}

/// Sample the demo signal. x is strictly increasing.
pub fn sine(cfg: SignalCfg, tok: ReplayToken) -> Result<Vec<Point>> {
    cfg.validate()?;
    let n = cfg.n;
    let step = cfg.x_max / (n - 1) as f64;
    let amp = cfg.noise;
    let mut rng = tok.to_std_rng();
    let points = (0..n)
        .map(|i| {
            let x = step * i as f64;
            let jitter = if amp > 0.0 {
                rng.gen_range(-amp..=amp)
            } else {
                0.0
            };
            point(x, x.sin() + jitter)
        })
        .collect();
    Ok(points)
}
