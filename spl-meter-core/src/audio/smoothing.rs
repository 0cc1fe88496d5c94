/// First order low pass over successive readings.
///
/// `value = alpha * x + (1 - alpha) * value`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ExponentialMovingAverage {
    alpha: f32,
    value: f32,
}

impl ExponentialMovingAverage {
    /// starts at 0.0. alpha must be in (0, 1]. 1.0 disables smoothing
    pub const fn new(alpha: f32) -> Self {
        Self { alpha, value: 0.0 }
    }

    #[inline]
    pub fn update(&mut self, x: f32) -> f32 {
        self.value = (self.alpha * x) + ((1.0 - self.alpha) * self.value);

        self.value
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }
}
