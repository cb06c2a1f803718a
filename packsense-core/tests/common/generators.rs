//! Duty-cycle trace generators
//!
//! Produces sample sequences the way the identity line looks on a real
//! robot: a steady duty cycle per pack with a little measurement jitter,
//! dropouts while a connector is reseated, and the occasional glitch.

use super::fraction_for;

/// Deterministic jittery signal generator
pub struct SignalGenerator {
    seed: u32,
}

impl SignalGenerator {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// `count` samples around raw level `center`, jittered by up to `jitter`
    pub fn steady(&mut self, center: u8, jitter: u8, count: usize) -> Vec<f64> {
        (0..count)
            .map(|_| {
                let offset = self.random_int(0, u32::from(jitter) * 2) as i16 - i16::from(jitter);
                let raw = (i16::from(center) + offset).clamp(0, 255) as u8;
                fraction_for(raw)
            })
            .collect()
    }

    /// Steady samples with `dropouts` single-tick reads of an empty line
    pub fn with_dropouts(&mut self, center: u8, jitter: u8, count: usize, dropouts: usize) -> Vec<f64> {
        let mut samples = self.steady(center, jitter, count);
        for _ in 0..dropouts {
            let index = self.random_int(0, count.saturating_sub(1) as u32) as usize;
            samples[index] = 0.0;
        }
        samples
    }

    /// `count` samples of an unplugged line
    pub fn empty(count: usize) -> Vec<f64> {
        vec![0.0; count]
    }

    fn random_float(&mut self) -> f32 {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        (self.seed as f32) / (u32::MAX as f32)
    }

    fn random_int(&mut self, min: u32, max: u32) -> u32 {
        let span = (max - min + 1) as f32;
        (min + (self.random_float() * span) as u32).min(max)
    }
}
