use num_complex::Complex;

/// Sum the weighted power of every bin except DC.
///
/// `weighting` must already be squared and combined (see [super::weighting_profile]), so one
/// multiply applies every correction curve. Power, weighting, and the sum happen in a single pass.
#[inline]
pub fn weighted_energy<const BINS: usize>(
    spectrum: &[Complex<f32>; BINS],
    weighting: &[f32],
) -> f32 {
    debug_assert_eq!(weighting.len(), BINS);

    spectrum
        .iter()
        .zip(weighting.iter())
        // bin 0 is the DC offset we already subtracted. whatever is left there isn't sound
        .skip(1)
        .map(|(s, w)| s.norm_sqr() * w)
        .sum()
}
