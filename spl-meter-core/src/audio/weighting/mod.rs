mod a_weighting;
mod flat;

pub use a_weighting::{AWeighting, a_weighting, a_weighting_decibels};
pub use flat::FlatWeighting;

use itertools::Itertools;

/// A frequency response correction applied to the power spectrum.
///
/// similar to [crate::windows::Window], but weights depend on the sample rate so they need `&self`
pub trait Weighting<const N: usize> {
    /// the linear weight (NOT in db!). this is an amplitude gain, so square it before multiplying power
    fn weight(&self, n: usize) -> f32;

    #[inline]
    fn curve(&self) -> [f32; N] {
        let mut curve = [0.0; N];

        self.curve_in_place(&mut curve);

        curve
    }

    #[inline]
    fn curve_in_place(&self, output: &mut [f32; N]) {
        output.iter_mut().set_from(self.curve_iter());
    }

    #[inline]
    fn curve_iter(&self) -> impl Iterator<Item = f32> {
        (0..N).map(|x| self.weight(x))
    }
}

/// Pre-square and pre-combine two amplitude curves so the meter only needs one multiply per bin.
///
/// `(a * b)^2 == a^2 * b^2`, so applying this to power is the same as applying both filters to the amplitudes.
/// Bin 0 is DC. The meter never reads it, so it is zeroed.
pub fn weighting_profile<const BINS: usize>(
    a: &impl Weighting<BINS>,
    b: &impl Weighting<BINS>,
) -> [f32; BINS] {
    let mut profile = [0.0; BINS];

    for (x, (a, b)) in profile
        .iter_mut()
        .zip(a.curve_iter().zip(b.curve_iter()))
        .skip(1)
    {
        *x = (a * a) * (b * b);
    }

    profile
}
