// Sample domain model

/// One measurement point: milliseconds since the Unix epoch and the measured value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time_ms: i64,
    pub value: f64,
}

impl Sample {
    pub fn new(time_ms: i64, value: f64) -> Self {
        Self { time_ms, value }
    }
}
