#[allow(unused_imports)]
use micromath::F32Ext;

use crate::config::MeterConfig;

/// 20 micropascals. the threshold of human hearing
pub const REFERENCE_PRESSURE_PA: f32 = 20e-6;

/// Turns the weighted energy of one block into dB SPL.
///
/// Everything that depends only on configuration is stored here so `process` doesn't recompute it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LevelConverter {
    /// N^2. the FFT is unscaled
    block_len_squared: f32,
    adc_full_scale: f32,
    adc_reference_voltage: f32,
    sensitivity_v_per_pa: f32,
    calibration_offset_db: f32,
}

impl LevelConverter {
    pub const fn new(block_len: usize, config: &MeterConfig) -> Self {
        Self {
            block_len_squared: (block_len * block_len) as f32,
            adc_full_scale: config.adc_full_scale as f32,
            adc_reference_voltage: config.adc_reference_voltage,
            sensitivity_v_per_pa: config.sensitivity_v_per_pa,
            calibration_offset_db: config.calibration_offset_db,
        }
    }

    /// RMS of the block in ADC codes. The factor of 2 puts back the mirrored half of the spectrum.
    #[inline]
    pub fn rms_code(&self, total_energy: f32) -> f32 {
        let mean_square_code = (total_energy * 2.0) / self.block_len_squared;

        mean_square_code.sqrt()
    }

    #[inline]
    pub fn pressure_pa(&self, total_energy: f32) -> f32 {
        let rms_voltage =
            (self.rms_code(total_energy) / self.adc_full_scale) * self.adc_reference_voltage;

        rms_voltage / self.sensitivity_v_per_pa
    }

    /// Calibrated dB SPL for the energy of one block.
    ///
    /// Energy that is zero (or negative from rounding) returns exactly 0.0 instead of -inf. This is a
    /// floor to keep the log happy, NOT a claim that the room is at 0 dB.
    pub fn decibels(&self, total_energy: f32) -> f32 {
        if total_energy <= 0.0 {
            return 0.0;
        }

        let spl = 20.0 * (self.pressure_pa(total_energy) / REFERENCE_PRESSURE_PA).log10();

        spl + self.calibration_offset_db
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// a converter that maps 1 code to 1 pascal
    fn unit_converter(block_len: usize) -> LevelConverter {
        let config = MeterConfig {
            adc_full_scale: 1,
            adc_reference_voltage: 1.0,
            sensitivity_v_per_pa: 1.0,
            calibration_offset_db: 0.0,
            ..MeterConfig::default()
        };

        LevelConverter::new(block_len, &config)
    }

    #[test]
    fn test_silence_floor() {
        let converter = LevelConverter::new(256, &MeterConfig::default());

        assert_eq!(converter.decibels(0.0), 0.0);
        assert_eq!(converter.decibels(-1e-9), 0.0);
    }

    #[test]
    fn test_one_pascal() {
        let converter = unit_converter(256);

        // mean square of 1.0 needs an energy of N^2 / 2
        let energy = 256.0 * 256.0 / 2.0;

        assert_abs_diff_eq!(converter.rms_code(energy), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(converter.pressure_pa(energy), 1.0, epsilon = 1e-6);

        // 1 Pa is ~94 dB SPL. microphone datasheets use this as their reference
        assert_abs_diff_eq!(converter.decibels(energy), 93.979, epsilon = 1e-2);
    }

    #[test]
    fn test_default_config_chain() {
        let config = MeterConfig::default();
        let converter = LevelConverter::new(256, &config);

        let energy = 1.0e6;

        let rms_code = (energy * 2.0f32 / (256.0 * 256.0)).sqrt();
        let volts = rms_code / 4096.0 * 3.3;
        let pascals = volts / config.sensitivity_v_per_pa;
        let expected = 20.0 * (pascals / 20e-6).log10() - 30.0;

        assert_abs_diff_eq!(converter.decibels(energy), expected, epsilon = 1e-3);
    }

    #[test]
    fn test_calibration_offset_is_additive() {
        let a = LevelConverter::new(256, &MeterConfig::default());
        let b = LevelConverter::new(
            256,
            &MeterConfig {
                calibration_offset_db: -20.0,
                ..MeterConfig::default()
            },
        );

        assert_abs_diff_eq!(
            b.decibels(1234.5) - a.decibels(1234.5),
            10.0,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_doubling_pressure_adds_6db() {
        let converter = unit_converter(256);

        // energy scales with pressure squared
        let quiet = converter.decibels(100.0);
        let loud = converter.decibels(400.0);

        assert_abs_diff_eq!(loud - quiet, 6.0206, epsilon = 1e-3);
    }
}
