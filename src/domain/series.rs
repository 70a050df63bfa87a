// Daily time series and its generator
use super::sample::Sample;

pub const MS_PER_DAY: i64 = 86_400_000;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SeriesError {
    #[error("day count must be at least 1")]
    EmptyRange,

    #[error("{day_count} days before {reference_ms} ms is out of range")]
    TimestampOverflow { day_count: u32, reference_ms: i64 },
}

/// Samples ordered oldest to newest, one per day.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    /// Build `day_count` daily samples whose last timestamp is `reference_ms`.
    ///
    /// Every offset is computed from `reference_ms`, so spacing stays exact no
    /// matter how long `value_fn` takes. `value_fn` is called once per sample,
    /// oldest first.
    pub fn generate<F>(day_count: u32, reference_ms: i64, mut value_fn: F) -> Result<Self, SeriesError>
    where
        F: FnMut() -> f64,
    {
        if day_count == 0 {
            return Err(SeriesError::EmptyRange);
        }

        let overflow = SeriesError::TimestampOverflow {
            day_count,
            reference_ms,
        };
        let span = (i64::from(day_count) - 1)
            .checked_mul(MS_PER_DAY)
            .ok_or(overflow.clone())?;
        let first_ms = reference_ms.checked_sub(span).ok_or(overflow)?;

        let samples = (0..i64::from(day_count))
            .map(|k| Sample::new(first_ms + k * MS_PER_DAY, value_fn()))
            .collect();

        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample closest to `x_ms` on the time axis. Ties go to the older sample.
    pub fn nearest(&self, x_ms: i64) -> Option<Sample> {
        if self.is_empty() {
            return None;
        }

        // Timestamps are sorted, so the answer is at the insertion point or just before it.
        let idx = self.samples.partition_point(|s| s.time_ms < x_ms);
        let before = idx.checked_sub(1).and_then(|i| self.samples.get(i));
        let after = self.samples.get(idx);

        match (before, after) {
            (Some(b), Some(a)) => {
                if x_ms.abs_diff(b.time_ms) <= a.time_ms.abs_diff(x_ms) {
                    Some(*b)
                } else {
                    Some(*a)
                }
            }
            (Some(b), None) => Some(*b),
            (None, Some(a)) => Some(*a),
            (None, None) => None,
        }
    }
}
