use super::Window;

/// rectangular window. useful for testing. leaks a lot more than hanning
pub struct FlatWindow<const N: usize>;

impl<const N: usize> Window<N> for FlatWindow<N> {
    fn window(_: usize) -> f32 {
        1.0
    }
}
