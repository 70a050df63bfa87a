// Chart view - one mounted chart with its series and hover state
use crate::domain::hover::HoverTracker;
use crate::domain::sample::Sample;
use crate::domain::series::Series;
use crate::domain::tooltip::Tooltip;
use chrono::FixedOffset;

#[derive(Debug, Clone)]
pub struct ChartView {
    series: Series,
    tracker: HoverTracker,
    offset: FixedOffset,
}

impl ChartView {
    pub fn mount(series: Series, offset: FixedOffset) -> Self {
        Self {
            series,
            tracker: HoverTracker::new(),
            offset,
        }
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn highlight(&self) -> Option<Sample> {
        self.tracker.highlight()
    }

    pub fn tooltip(&self) -> Option<Tooltip> {
        self.highlight()
            .and_then(|sample| Tooltip::for_sample(&sample, self.offset))
    }

    /// Pointer moved over the plot. `None` means no position was reported.
    pub fn hover(&mut self, x_ms: Option<i64>) -> bool {
        let resolved = x_ms.and_then(|x| self.series.nearest(x));
        self.tracker.on_nearest_xy(resolved)
    }

    pub fn leave(&mut self) -> bool {
        self.tracker.on_pointer_leave()
    }

    /// Swap in a freshly generated series; the old highlight no longer applies.
    pub fn replace_series(&mut self, series: Series) {
        self.series = series;
        self.tracker = HoverTracker::new();
    }
}
