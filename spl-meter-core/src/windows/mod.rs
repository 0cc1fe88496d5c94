mod flat;
mod hanning;

pub use flat::FlatWindow;
pub use hanning::HanningWindow;

/// Tapering applied to a block before the FFT.
///
/// The meter only needs the coefficients, so these are usually generated once (or offline) and
/// stored in a [crate::audio::MeterTables].
pub trait Window<const N: usize> {
    fn window(i: usize) -> f32;

    fn windows() -> [f32; N] {
        let mut window = [0.0; N];

        for (i, x) in window.iter_mut().enumerate() {
            *x = Self::window(i);
        }

        window
    }

    fn windows_iter() -> impl Iterator<Item = f32> {
        (0..N).map(|i| Self::window(i))
    }
}
