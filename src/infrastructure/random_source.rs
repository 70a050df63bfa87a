// Uniform random integers for synthetic humidity readings
use crate::application::value_source::ValueSource;
use rand::Rng;

/// Integers drawn uniformly from `[min, max)`.
#[derive(Debug, Clone, Copy)]
pub struct UniformIntSource {
    min: i64,
    max: i64,
}

impl UniformIntSource {
    /// Returns `None` for an empty range.
    pub fn new(min: i64, max: i64) -> Option<Self> {
        (min < max).then_some(Self { min, max })
    }
}

impl ValueSource for UniformIntSource {
    fn draw(&self) -> f64 {
        rand::rng().random_range(self.min..self.max) as f64
    }
}
