//! Binary stripe pattern synthesis.

/// Configuration for stripe pattern generation.
#[derive(Debug, Clone, Copy)]
pub struct StripeConfig {
    /// Side length of the square pattern in pixels.
    pub size: u32,
    /// Number of frequency levels; each level halves the stripe period.
    pub levels: u32,
}

impl StripeConfig {
    pub fn new(size: u32, levels: u32) -> Self {
        Self { size, levels }
    }

    /// Width of one dark or lit band at a level, in pixels.
    ///
    /// Not necessarily integral: sizes that do not divide evenly by the
    /// level's division count produce fractional bands.
    pub fn step(&self, level: u32) -> f64 {
        let divisions = 2f64.powi(level as i32 + 1);
        self.size as f64 / divisions
    }

    /// Stripe period of a level: the distance after which the pattern
    /// repeats.
    pub fn period(&self, level: u32) -> f64 {
        2.0 * self.step(level)
    }
}

/// Stripe pattern generator.
pub struct StripeGenerator {
    config: StripeConfig,
}

impl StripeGenerator {
    pub fn new(config: StripeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StripeConfig {
        &self.config
    }

    /// Generate pixel data for one level (grayscale bytes, row-major).
    ///
    /// The pattern depends only on the column: a column is lit (255) when
    /// its position within the period falls strictly past the half-period
    /// mark, dark (0) otherwise. Every row is identical.
    pub fn generate_level(&self, level: u32) -> Vec<u8> {
        let size = self.config.size as usize;
        let step = self.config.step(level);
        let period = self.config.period(level);

        let mut row = vec![0u8; size];
        for (c, value) in row.iter_mut().enumerate() {
            if (c as f64) % period > step {
                *value = 255;
            }
        }

        let mut data = Vec::with_capacity(size * size);
        for _ in 0..size {
            data.extend_from_slice(&row);
        }
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_halves_each_level() {
        let config = StripeConfig::new(1024, 7);
        for level in 0..7 {
            let expected = 2.0 * 1024.0 / 2f64.powi(level as i32 + 1);
            assert_eq!(config.period(level), expected, "level {}", level);
        }
        assert_eq!(config.period(0), 1024.0);
        assert_eq!(config.step(0), 512.0);
    }

    #[test]
    fn test_level_zero_split() {
        let generator = StripeGenerator::new(StripeConfig::new(1024, 7));
        let data = generator.generate_level(0);

        // Strict > keeps the boundary column at 512 dark.
        for c in 0..=512 {
            assert_eq!(data[c], 0, "column {}", c);
        }
        for c in 513..1024 {
            assert_eq!(data[c], 255, "column {}", c);
        }
    }

    #[test]
    fn test_level_one_repeats_every_half() {
        let generator = StripeGenerator::new(StripeConfig::new(1024, 7));
        let data = generator.generate_level(1);

        // period 512, step 256
        for c in 0..=256 {
            assert_eq!(data[c], 0, "column {}", c);
        }
        for c in 257..512 {
            assert_eq!(data[c], 255, "column {}", c);
        }
        for c in 0..512 {
            assert_eq!(data[c], data[c + 512], "column {}", c);
        }
    }

    #[test]
    fn test_rows_identical() {
        let generator = StripeGenerator::new(StripeConfig::new(64, 4));
        for level in 0..4 {
            let data = generator.generate_level(level);
            for row in 1..64 {
                assert_eq!(&data[row * 64..(row + 1) * 64], &data[0..64]);
            }
        }
    }

    #[test]
    fn test_exactly_two_values() {
        let generator = StripeGenerator::new(StripeConfig::new(256, 8));
        for level in 0..8 {
            let data = generator.generate_level(level);
            assert!(data.iter().all(|&v| v == 0 || v == 255));
            if generator.config().step(level) > 1.0 {
                assert!(data.contains(&0), "level {}", level);
                assert!(data.contains(&255), "level {}", level);
            }
        }
    }

    #[test]
    fn test_dimensions() {
        let generator = StripeGenerator::new(StripeConfig::new(100, 3));
        for level in 0..3 {
            assert_eq!(generator.generate_level(level).len(), 100 * 100);
        }
    }

    #[test]
    fn test_deterministic() {
        let generator = StripeGenerator::new(StripeConfig::new(128, 5));
        for level in 0..5 {
            assert_eq!(generator.generate_level(level), generator.generate_level(level));
        }
    }

    #[test]
    fn test_fractional_step() {
        // 100 / 8 = 12.5: the column test stays defined and deterministic.
        let generator = StripeGenerator::new(StripeConfig::new(100, 4));
        let data = generator.generate_level(2);
        assert_eq!(data.len(), 100 * 100);
        assert!(data.iter().all(|&v| v == 0 || v == 255));
        // period 25, step 12.5: column 13 is the first lit column
        assert_eq!(data[12], 0);
        assert_eq!(data[13], 255);
    }
}
