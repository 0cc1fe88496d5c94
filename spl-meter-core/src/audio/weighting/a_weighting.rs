use crate::audio::bin_to_frequency;

#[allow(unused_imports)]
use micromath::F32Ext;

use super::Weighting;

/// IEC 61672 A-weighting for the bins of an FFT. approximates the sensitivity of human hearing
pub struct AWeighting<const N: usize> {
    sample_rate_hz: u32,
}

impl<const N: usize> AWeighting<N> {
    pub fn new(sample_rate_hz: u32) -> Self {
        Self { sample_rate_hz }
    }
}

impl<const N: usize> Weighting<N> for AWeighting<N> {
    fn weight(&self, i: usize) -> f32 {
        let f = bin_to_frequency(i, self.sample_rate_hz, N);

        a_weighting(f)
    }
}

pub fn a_weighting_decibels(f: f32) -> f32 {
    let numerator = (12194f32.powi(2)) * f.powi(4);
    let denominator = (f.powi(2) + 20.6f32.powi(2))
        * ((f.powi(2) + 107.7f32.powi(2)) * (f.powi(2) + 737.9f32.powi(2))).sqrt()
        * (f.powi(2) + 12194f32.powi(2));

    let ra = numerator / denominator;

    20.0 * ra.log10() + 2.0
}

/// reminder, multiplying with this is the same as adding decibels
pub fn a_weighting(f: f32) -> f32 {
    if f <= 0.0 {
        // the curve goes to -inf dB at DC
        return 0.0;
    }

    let a_weighted_decibels = a_weighting_decibels(f);

    10.0f32.powf(a_weighted_decibels / 20.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reference_points() {
        // IEC 61672 table values
        assert_abs_diff_eq!(a_weighting_decibels(1_000.0), 0.0, epsilon = 0.01);
        assert_abs_diff_eq!(a_weighting_decibels(100.0), -19.1, epsilon = 0.1);
        assert_abs_diff_eq!(a_weighting_decibels(4_000.0), 1.0, epsilon = 0.1);
    }

    #[test]
    fn test_dc_is_silenced() {
        assert_eq!(a_weighting(0.0), 0.0);
        assert_eq!(AWeighting::<128>::new(16_000).weight(0), 0.0);
    }

    #[test]
    fn test_bin_weights() {
        // 128 bins at 16kHz is 62.5 Hz per bin. bin 16 is 1kHz
        let a = AWeighting::<128>::new(16_000);

        assert_abs_diff_eq!(a.weight(16), 1.0, epsilon = 0.01);
        assert!(a.weight(1) < 0.1);
    }
}
