use core::f32::consts::PI;

#[allow(unused_imports)]
use micromath::F32Ext;

use super::Window;

/// Symmetric Hann window. `window(i) == window(N - 1 - i)`
pub struct HanningWindow<const N: usize>;

impl<const N: usize> Window<N> for HanningWindow<N> {
    fn window(i: usize) -> f32 {
        // mirror the second half so the coefficients are exactly symmetric
        let i = i.min(N - 1 - i);

        0.5 - 0.5 * (2.0 * PI * i as f32 / (N - 1) as f32).cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_symmetric() {
        let w = HanningWindow::<256>::windows();

        for i in 0..256 {
            assert_eq!(w[i], w[255 - i], "{i}");
        }
    }

    #[test]
    fn test_ends_and_middle() {
        let w = HanningWindow::<255>::windows();

        assert_abs_diff_eq!(w[0], 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(w[254], 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(w[127], 1.0, epsilon = 1e-6);

        for x in w {
            assert!((0.0..=1.0).contains(&x));
        }
    }
}
