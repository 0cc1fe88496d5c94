//! Audio processing
//!
//! SampleBlock -> remove DC -> window -> FFT -> weighted energy -> dB SPL -> smoothed dB SPL
pub mod decibels;
pub mod energy;
pub mod fft;
pub mod meter;
pub mod samples;
pub mod smoothing;
pub mod tables;
pub mod weighting;

pub fn bin_to_frequency(bin_index: usize, sample_rate_hz: u32, num_bins: usize) -> f32 {
    (bin_index as f32) * (sample_rate_hz as f32) / ((num_bins * 2) as f32)
}

pub use decibels::{LevelConverter, REFERENCE_PRESSURE_PA};
pub use energy::weighted_energy;
pub use fft::{MicroFft, SpectralTransform};
pub use meter::{ReferenceSplMeter, SplMeter};
pub use samples::SampleBlock;
pub use smoothing::ExponentialMovingAverage;
pub use tables::{MeterTables, TABLES_256_16K};
pub use weighting::{AWeighting, FlatWeighting, Weighting, weighting_profile};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_to_frequency() {
        assert_eq!(bin_to_frequency(0, 16_000, 128), 0.0);
        assert_eq!(bin_to_frequency(1, 16_000, 128), 62.5);
        assert_eq!(bin_to_frequency(16, 16_000, 128), 1_000.0);
        assert_eq!(bin_to_frequency(127, 16_000, 128), 7_937.5);
    }
}
