#[allow(unused_imports)]
use micromath::F32Ext;

use crate::errors::{MeterError, MeterResult};

/// -38 dBV/Pa as V/Pa. This is the typical analog MEMS microphone.
pub const DEFAULT_SENSITIVITY_V_PER_PA: f32 = 0.012_589_254;

/// Device specific constants. These are fixed when the firmware is built.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MeterConfig {
    /// the tables must be regenerated if this changes
    pub sample_rate_hz: u32,
    pub adc_reference_voltage: f32,
    /// number of distinct codes the ADC can produce. 4096 for a 12-bit ADC
    pub adc_full_scale: u32,
    /// volts per pascal
    pub sensitivity_v_per_pa: f32,
    /// added to every reading. tune this against a professional sound level meter
    pub calibration_offset_db: f32,
    /// EMA alpha. smaller is smoother and slower
    pub smoothing_alpha: f32,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self::new_default()
    }
}

impl MeterConfig {
    /// [Default] can't be const and we want this in statics
    pub const fn new_default() -> Self {
        Self {
            sample_rate_hz: 16_000,
            adc_reference_voltage: 3.3,
            adc_full_scale: 4096,
            sensitivity_v_per_pa: DEFAULT_SENSITIVITY_V_PER_PA,
            calibration_offset_db: -30.0,
            smoothing_alpha: 0.1,
        }
    }

    /// microphone datasheets give sensitivity in dBV/Pa (something like -38 or -42)
    pub fn with_sensitivity_dbv(mut self, dbv_per_pa: f32) -> Self {
        self.sensitivity_v_per_pa = 10.0f32.powf(dbv_per_pa / 20.0);
        self
    }

    /// make sure every denominator in the level math is positive
    pub fn validate(&self) -> MeterResult<()> {
        // written this way so NaN fails too
        if !(self.smoothing_alpha > 0.0 && self.smoothing_alpha <= 1.0) {
            return Err(MeterError::InvalidSmoothing);
        }
        if self.adc_full_scale == 0 {
            return Err(MeterError::InvalidAdcScale);
        }
        if !(self.adc_reference_voltage > 0.0) {
            return Err(MeterError::InvalidReferenceVoltage);
        }
        if !(self.sensitivity_v_per_pa > 0.0) {
            return Err(MeterError::InvalidSensitivity);
        }
        if self.sample_rate_hz == 0 {
            return Err(MeterError::InvalidSampleRate);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(MeterConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_sensitivity_dbv() {
        let config = MeterConfig::default().with_sensitivity_dbv(-38.0);

        assert_abs_diff_eq!(
            config.sensitivity_v_per_pa,
            DEFAULT_SENSITIVITY_V_PER_PA,
            epsilon = 1e-6
        );

        let config = config.with_sensitivity_dbv(0.0);
        assert_abs_diff_eq!(config.sensitivity_v_per_pa, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_invalid_alpha() {
        for alpha in [0.0, -0.1, 1.5, f32::NAN] {
            let config = MeterConfig {
                smoothing_alpha: alpha,
                ..MeterConfig::default()
            };

            assert_eq!(config.validate(), Err(MeterError::InvalidSmoothing));
        }

        let config = MeterConfig {
            smoothing_alpha: 1.0,
            ..MeterConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_invalid_denominators() {
        let base = MeterConfig::default();

        assert_eq!(
            MeterConfig {
                adc_full_scale: 0,
                ..base
            }
            .validate(),
            Err(MeterError::InvalidAdcScale)
        );
        assert_eq!(
            MeterConfig {
                adc_reference_voltage: 0.0,
                ..base
            }
            .validate(),
            Err(MeterError::InvalidReferenceVoltage)
        );
        assert_eq!(
            MeterConfig {
                sensitivity_v_per_pa: -1.0,
                ..base
            }
            .validate(),
            Err(MeterError::InvalidSensitivity)
        );
        assert_eq!(
            MeterConfig {
                sample_rate_hz: 0,
                ..base
            }
            .validate(),
            Err(MeterError::InvalidSampleRate)
        );
    }
}
