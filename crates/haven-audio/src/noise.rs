//! Seeded white, pink and brown noise.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NoiseColor {
    White,
    Pink,
    Brown,
}

#[derive(Debug, Clone)]
pub struct NoiseGenerator {
    color: NoiseColor,
    rng: StdRng,
    pink: [f32; 7],
    brown_last: f32,
}

impl NoiseGenerator {
    pub fn new(color: NoiseColor, seed: u64) -> Self {
        Self {
            color,
            rng: StdRng::seed_from_u64(seed),
            pink: [0.0; 7],
            brown_last: 0.0,
        }
    }

    pub fn color(&self) -> NoiseColor {
        self.color
    }

    pub fn next_sample(&mut self) -> f32 {
        let white = self.rng.gen_range(-1.0f32..1.0);
        match self.color {
            NoiseColor::White => white,
            NoiseColor::Pink => self.pink(white),
            NoiseColor::Brown => self.brown(white),
        }
    }

    // Paul Kellet's refined pink filter
    fn pink(&mut self, white: f32) -> f32 {
        let b = &mut self.pink;
        b[0] = 0.99886 * b[0] + white * 0.0555179;
        b[1] = 0.99332 * b[1] + white * 0.0750759;
        b[2] = 0.96900 * b[2] + white * 0.1538520;
        b[3] = 0.86650 * b[3] + white * 0.3104856;
        b[4] = 0.55000 * b[4] + white * 0.5329522;
        b[5] = -0.7616 * b[5] - white * 0.0168980;
        let out = b[0] + b[1] + b[2] + b[3] + b[4] + b[5] + b[6] + white * 0.5362;
        b[6] = white * 0.115926;
        out * 0.11
    }

    fn brown(&mut self, white: f32) -> f32 {
        self.brown_last = (self.brown_last + 0.02 * white) / 1.02;
        self.brown_last * 3.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn take(color: NoiseColor, seed: u64, n: usize) -> Vec<f32> {
        let mut noise = NoiseGenerator::new(color, seed);
        (0..n).map(|_| noise.next_sample()).collect()
    }

    #[test]
    fn test_same_seed_same_samples() {
        for color in [NoiseColor::White, NoiseColor::Pink, NoiseColor::Brown] {
            assert_eq!(take(color, 7, 512), take(color, 7, 512));
        }
        assert_ne!(take(NoiseColor::White, 1, 64), take(NoiseColor::White, 2, 64));
    }

    #[test]
    fn test_white_is_uniform_in_unit_range() {
        let samples = take(NoiseColor::White, 42, 44_100);
        assert!(samples.iter().all(|s| (-1.0..1.0).contains(s)));
        let mean = samples.iter().sum::<f32>() / samples.len() as f32;
        assert!(mean.abs() < 0.02);
    }

    #[test]
    fn test_brown_is_smoother_than_white() {
        let step = |samples: &[f32]| {
            samples.windows(2).map(|w| (w[1] - w[0]).abs()).sum::<f32>() / samples.len() as f32
        };
        let white = take(NoiseColor::White, 3, 4096);
        let brown = take(NoiseColor::Brown, 3, 4096);
        assert!(step(&brown) < step(&white) / 5.0);
    }
}
