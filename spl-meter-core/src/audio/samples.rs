/// One capture window of raw ADC codes. N = number of microphone samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct SampleBlock<const N: usize>(pub [u16; N]);

impl<const N: usize> Default for SampleBlock<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> SampleBlock<N> {
    pub const fn new() -> Self {
        Self([0; N])
    }

    /// The mean of the block. The analog front end drifts, so this is recalculated for every block instead of using a constant.
    pub fn dc_offset(&self) -> f32 {
        // u64 so that a block of max codes can't overflow no matter how long it is
        let sum: u64 = self.0.iter().map(|&x| x as u64).sum();

        (sum as f64 / N as f64) as f32
    }

    /// Center the samples on zero and taper them for the FFT. Returns the DC offset that was removed.
    pub fn remove_dc_and_window(&self, window: &[f32], output: &mut [f32; N]) -> f32 {
        debug_assert_eq!(window.len(), N);

        let dc_offset = self.dc_offset();

        for ((out, &x), w) in output.iter_mut().zip(self.0.iter()).zip(window.iter()) {
            *out = (x as f32 - dc_offset) * w;
        }

        dc_offset
    }
}

impl<const N: usize> From<[u16; N]> for SampleBlock<N> {
    fn from(x: [u16; N]) -> Self {
        Self(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dc_offset() {
        let block = SampleBlock([1, 2, 3, 6]);

        assert_eq!(block.dc_offset(), 3.0);
    }

    #[test]
    fn test_dc_offset_full_range() {
        let block = SampleBlock([u16::MAX; 4096]);

        assert_eq!(block.dc_offset(), u16::MAX as f32);
    }

    #[test]
    fn test_remove_dc_and_window() {
        let block = SampleBlock([10, 20, 30, 40]);
        let window = [0.0, 1.0, 1.0, 0.5];

        let mut output = [0.0; 4];
        let dc_offset = block.remove_dc_and_window(&window, &mut output);

        assert_eq!(dc_offset, 25.0);
        assert_eq!(output, [-0.0, -5.0, 5.0, 7.5]);
    }
}
