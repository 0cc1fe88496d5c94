use num_complex::Complex;

use crate::logging::trace;

/// Real input in, one-sided complex spectrum out.
///
/// The meter only depends on this trait so an accelerated FFT (a vendor DSP library, a hardware
/// block) can replace [MicroFft] without touching the rest of the pipeline.
pub trait SpectralTransform<const N: usize, const BINS: usize> {
    /// called once by [super::SplMeter::init]. twiddle factors and other setup belong here
    fn init(&mut self) {}

    /// Unscaled forward FFT. `output[k]` is the bin for `k * sample_rate / N`.
    ///
    /// `input` is scratch space and may be clobbered.
    fn forward(&mut self, input: &mut [f32; N], output: &mut [Complex<f32>; BINS]);
}

/// Software FFT from [microfft]. No setup and no heap. Works for every power of two from 64 to 4096.
#[derive(Debug, Default, Clone, Copy)]
pub struct MicroFft;

macro_rules! impl_micro_fft {
    ($in_size:expr, $rfft:path) => {
        impl SpectralTransform<$in_size, { $in_size / 2 }> for MicroFft {
            #[inline]
            fn forward(
                &mut self,
                input: &mut [f32; $in_size],
                output: &mut [Complex<f32>; $in_size / 2],
            ) {
                let spectrum = $rfft(input);

                // microfft packs the real-valued coefficient at the Nyquist frequency into the
                // imaginary part of the DC bin. clear it so bin 0 is only DC
                trace!("nyquist coefficient: {}", spectrum[0].im);
                spectrum[0].im = 0.0;

                *output = *spectrum;
            }
        }
    };
}

impl_micro_fft!(64, microfft::real::rfft_64);
impl_micro_fft!(128, microfft::real::rfft_128);
impl_micro_fft!(256, microfft::real::rfft_256);
impl_micro_fft!(512, microfft::real::rfft_512);
impl_micro_fft!(1024, microfft::real::rfft_1024);
impl_micro_fft!(2048, microfft::real::rfft_2048);
impl_micro_fft!(4096, microfft::real::rfft_4096);
