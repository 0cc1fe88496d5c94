use super::Weighting;

/// no correction at all. use this for a microphone with a flat response or to measure dBZ
pub struct FlatWeighting<const N: usize>;

impl<const N: usize> Weighting<N> for FlatWeighting<N> {
    fn weight(&self, _i: usize) -> f32 {
        1.0
    }
}
