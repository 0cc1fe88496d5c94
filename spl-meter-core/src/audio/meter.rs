use num_complex::Complex;

use super::decibels::LevelConverter;
use super::energy::weighted_energy;
use super::fft::{MicroFft, SpectralTransform};
use super::samples::SampleBlock;
use super::smoothing::ExponentialMovingAverage;
use super::tables::{MeterTables, TABLES_256_16K};
use crate::config::MeterConfig;
use crate::errors::{MeterError, MeterResult};
use crate::logging::{info, trace};

/// The reference device: 256 sample blocks of a 12-bit ADC at 16kHz.
pub type ReferenceSplMeter = SplMeter<'static, 256, 128, MicroFft>;

/// Raw ADC blocks in, a smoothed A-weighted dB SPL reading out.
///
/// N = samples per block. BINS = N / 2.
///
/// Every buffer is allocated up front, so this can live in a `static` and `process` never allocates.
pub struct SplMeter<'a, const N: usize, const BINS: usize, F: SpectralTransform<N, BINS>> {
    config: MeterConfig,
    tables: MeterTables<'a>,
    fft: F,
    converter: LevelConverter,
    smoothing: ExponentialMovingAverage,
    /// the un-smoothed reading of the most recent block
    instantaneous_level: f32,
    total_energy: f32,
    blocks_processed: u32,
    initialized: bool,
    /// windowed samples. the fft may clobber this
    fft_in: [f32; N],
    spectrum: [Complex<f32>; BINS],
}

impl<'a, const N: usize, const BINS: usize, F: SpectralTransform<N, BINS>>
    SplMeter<'a, N, BINS, F>
{
    /// Use this when you want the meter to be statically allocated.
    /// You MUST call `init` on this before using it!
    pub const fn uninit(config: MeterConfig, tables: MeterTables<'a>, fft: F) -> Self {
        const {
            assert!(N >= 4, "blocks must have at least 4 samples");
            assert!(N.is_power_of_two(), "block length must be a power of two");
            assert!(BINS * 2 == N, "BINS must be half of N");
        }

        Self {
            converter: LevelConverter::new(N, &config),
            smoothing: ExponentialMovingAverage::new(config.smoothing_alpha),
            config,
            tables,
            fft,
            instantaneous_level: 0.0,
            total_energy: 0.0,
            blocks_processed: 0,
            initialized: false,
            fft_in: [0.0; N],
            spectrum: [Complex::new(0.0, 0.0); BINS],
        }
    }

    /// create an initialized meter.
    /// useful if you don't need this statically allocated.
    /// `init` is called for you.
    pub fn new(config: MeterConfig, tables: MeterTables<'a>, fft: F) -> MeterResult<Self> {
        let mut x = Self::uninit(config, tables, fft);

        x.init()?;

        Ok(x)
    }

    /// Check the configuration and tables against N, set up the FFT, and zero the state.
    ///
    /// Call this exactly once. Every error here is a build misconfiguration.
    pub fn init(&mut self) -> MeterResult<()> {
        if self.initialized {
            return Err(MeterError::AlreadyInitialized);
        }

        self.config.validate()?;
        self.tables.validate(N, self.config.sample_rate_hz)?;

        self.fft.init();

        self.converter = LevelConverter::new(N, &self.config);
        self.smoothing = ExponentialMovingAverage::new(self.config.smoothing_alpha);
        self.instantaneous_level = 0.0;
        self.total_energy = 0.0;
        self.blocks_processed = 0;

        let sample_rate_hz = self.config.sample_rate_hz as f32;
        info!(
            "spl meter initialized. {} samples per block. {} Hz per bin. {} ms per block",
            N,
            sample_rate_hz / N as f32,
            N as f32 * 1000.0 / sample_rate_hz,
        );

        self.initialized = true;

        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Run the whole pipeline on one block.
    ///
    /// DC removal -> window -> FFT -> weighted energy -> dB SPL -> smoothing
    ///
    /// This must finish before the next block arrives. It never blocks and never allocates.
    pub fn process(&mut self, block: &SampleBlock<N>) {
        assert!(self.initialized, "SplMeter::process called before init");

        let dc_offset = block.remove_dc_and_window(self.tables.window, &mut self.fft_in);

        self.fft.forward(&mut self.fft_in, &mut self.spectrum);

        self.total_energy = weighted_energy(&self.spectrum, self.tables.weighting);

        self.instantaneous_level = self.converter.decibels(self.total_energy);

        // TODO: the level isn't clamped. a glitched block can drag the smoothed reading far off for a while
        let smoothed = self.smoothing.update(self.instantaneous_level);

        self.blocks_processed = self.blocks_processed.wrapping_add(1);

        trace!(
            "dc offset: {}; energy: {}; instant: {} dB; smoothed: {} dB",
            dc_offset, self.total_energy, self.instantaneous_level, smoothed
        );
    }

    /// The latest smoothed reading in dB. 0.0 until the first block is processed.
    #[inline]
    pub fn smoothed_level(&self) -> f32 {
        self.smoothing.value()
    }

    /// The un-smoothed reading of the most recent block in dB.
    #[inline]
    pub fn instantaneous_level(&self) -> f32 {
        self.instantaneous_level
    }

    /// Weighted energy of the most recent block. Zero for a block that is all DC.
    #[inline]
    pub fn total_energy(&self) -> f32 {
        self.total_energy
    }

    /// wraps around
    pub fn blocks_processed(&self) -> u32 {
        self.blocks_processed
    }

    pub fn config(&self) -> &MeterConfig {
        &self.config
    }
}

impl ReferenceSplMeter {
    /// Uninitialized meter with the default config and the shipped 256 sample tables.
    pub const fn reference_device() -> Self {
        Self::uninit(MeterConfig::new_default(), TABLES_256_16K, MicroFft)
    }
}
