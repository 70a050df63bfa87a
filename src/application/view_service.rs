// View service - mounts chart views and routes pointer events to them
use crate::application::chart_view::ChartView;
use crate::application::clock::Clock;
use crate::application::value_source::ValueSource;
use crate::domain::dashboard::ChartDescriptor;
use crate::domain::sample::Sample;
use crate::domain::series::{Series, SeriesError};
use crate::domain::tooltip::Tooltip;
use chrono::FixedOffset;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

pub type ViewId = u64;

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("view {0} is not mounted")]
    NotFound(ViewId),

    #[error(transparent)]
    Series(#[from] SeriesError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub id: ViewId,
    pub chart: ChartDescriptor,
    pub data: Vec<Sample>,
    pub highlight: Option<Sample>,
    pub tooltip: Option<Tooltip>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HoverOutcome {
    pub changed: bool,
    pub highlight: Option<Sample>,
    pub tooltip: Option<Tooltip>,
}

#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub day_count: u32,
    pub offset: FixedOffset,
    pub chart: ChartDescriptor,
    /// Mounting beyond this many views unmounts the oldest one.
    pub max_views: usize,
}

#[derive(Clone)]
pub struct ViewService {
    clock: Arc<dyn Clock>,
    source: Arc<dyn ValueSource>,
    settings: ViewSettings,
    views: Arc<RwLock<HashMap<ViewId, ChartView>>>,
    next_id: Arc<AtomicU64>,
}

impl ViewService {
    pub fn new(clock: Arc<dyn Clock>, source: Arc<dyn ValueSource>, settings: ViewSettings) -> Self {
        Self {
            clock,
            source,
            settings,
            views: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    pub async fn mount(&self) -> Result<ViewSnapshot, ViewError> {
        let series = self.generate_series()?;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let view = ChartView::mount(series, self.settings.offset);
        let snapshot = self.snapshot_of(id, &view);

        let mut views = self.views.write().await;
        if views.len() >= self.settings.max_views {
            // Ids are handed out in increasing order, so the smallest is the oldest.
            if let Some(oldest) = views.keys().min().copied() {
                views.remove(&oldest);
                tracing::warn!(
                    "View limit {} reached, unmounted view {}",
                    self.settings.max_views,
                    oldest
                );
            }
        }
        views.insert(id, view);
        tracing::info!("Mounted view {} with {} samples", id, snapshot.data.len());

        Ok(snapshot)
    }

    pub async fn snapshot(&self, id: ViewId) -> Result<ViewSnapshot, ViewError> {
        let views = self.views.read().await;
        let view = views.get(&id).ok_or(ViewError::NotFound(id))?;
        Ok(self.snapshot_of(id, view))
    }

    pub async fn hover(&self, id: ViewId, x_ms: Option<i64>) -> Result<HoverOutcome, ViewError> {
        let mut views = self.views.write().await;
        let view = views.get_mut(&id).ok_or(ViewError::NotFound(id))?;
        let changed = view.hover(x_ms);

        tracing::debug!(
            "Hover on view {} at {:?}: highlight={:?}, changed={}",
            id,
            x_ms,
            view.highlight(),
            changed
        );

        Ok(Self::outcome_of(changed, view))
    }

    pub async fn leave(&self, id: ViewId) -> Result<HoverOutcome, ViewError> {
        let mut views = self.views.write().await;
        let view = views.get_mut(&id).ok_or(ViewError::NotFound(id))?;
        let changed = view.leave();

        tracing::debug!("Pointer left view {}, changed={}", id, changed);

        Ok(Self::outcome_of(changed, view))
    }

    pub async fn regenerate(&self, id: ViewId) -> Result<ViewSnapshot, ViewError> {
        let mut views = self.views.write().await;
        let view = views.get_mut(&id).ok_or(ViewError::NotFound(id))?;
        view.replace_series(self.generate_series()?);

        tracing::info!("Regenerated series for view {}", id);

        Ok(self.snapshot_of(id, view))
    }

    pub async fn unmount(&self, id: ViewId) -> Result<(), ViewError> {
        self.views
            .write()
            .await
            .remove(&id)
            .ok_or(ViewError::NotFound(id))?;

        tracing::info!("Unmounted view {}", id);
        Ok(())
    }

    fn generate_series(&self) -> Result<Series, SeriesError> {
        // Read the clock once; every timestamp is an offset from this instant.
        let reference_ms = self.clock.now_ms();
        Series::generate(self.settings.day_count, reference_ms, || self.source.draw())
    }

    fn snapshot_of(&self, id: ViewId, view: &ChartView) -> ViewSnapshot {
        ViewSnapshot {
            id,
            chart: self.settings.chart.clone(),
            data: view.series().samples().to_vec(),
            highlight: view.highlight(),
            tooltip: view.tooltip(),
        }
    }

    fn outcome_of(changed: bool, view: &ChartView) -> HoverOutcome {
        HoverOutcome {
            changed,
            highlight: view.highlight(),
            tooltip: view.tooltip(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::domain::series::MS_PER_DAY;

    #[tokio::test]
    async fn test_mount_generates_fresh_series() {
        let service = service(3);
        let snapshot = service.mount().await.unwrap();

        assert_eq!(
            snapshot.data,
            vec![
                Sample::new(NOW - 2 * MS_PER_DAY, 50.0),
                Sample::new(NOW - MS_PER_DAY, 50.0),
                Sample::new(NOW, 50.0),
            ]
        );
        assert_eq!(snapshot.highlight, None);
        assert_eq!(snapshot.tooltip, None);
        assert_eq!(snapshot.chart.title, "Semaine 3");
    }

    #[tokio::test]
    async fn test_mount_past_limit_unmounts_oldest() {
        let mut limited = settings(3);
        limited.max_views = 2;
        let service = ViewService::new(
            Arc::new(FixedClock::at(NOW)),
            Arc::new(ConstantSource(50.0)),
            limited,
        );

        let first = service.mount().await.unwrap().id;
        let second = service.mount().await.unwrap().id;
        service.hover(second, Some(NOW)).await.unwrap();
        let third = service.mount().await.unwrap().id;

        assert!(matches!(service.snapshot(first).await, Err(ViewError::NotFound(_))));
        assert_eq!(
            service.snapshot(second).await.unwrap().highlight,
            Some(Sample::new(NOW, 50.0))
        );
        assert!(service.snapshot(third).await.is_ok());
    }

    #[tokio::test]
    async fn test_views_have_independent_highlights() {
        let service = service(3);
        let a = service.mount().await.unwrap().id;
        let b = service.mount().await.unwrap().id;
        assert_ne!(a, b);

        let outcome = service.hover(a, Some(NOW)).await.unwrap();
        assert!(outcome.changed);
        assert_eq!(outcome.highlight, Some(Sample::new(NOW, 50.0)));
        assert_eq!(outcome.tooltip.unwrap().title, "20 mars");

        assert_eq!(service.snapshot(b).await.unwrap().highlight, None);
    }

    #[tokio::test]
    async fn test_leave_returns_to_idle() {
        let service = service(3);
        let id = service.mount().await.unwrap().id;

        service.hover(id, Some(NOW)).await.unwrap();
        let outcome = service.leave(id).await.unwrap();
        assert!(outcome.changed);
        assert_eq!(outcome.highlight, None);

        let outcome = service.leave(id).await.unwrap();
        assert!(!outcome.changed);
    }

    #[tokio::test]
    async fn test_regenerate_reads_clock_again() {
        let clock = Arc::new(FixedClock::at(NOW));
        let service = ViewService::new(clock.clone(), Arc::new(ConstantSource(50.0)), settings(2));
        let id = service.mount().await.unwrap().id;
        service.hover(id, Some(NOW)).await.unwrap();

        clock.0.store(NOW + MS_PER_DAY, Ordering::SeqCst);
        let snapshot = service.regenerate(id).await.unwrap();

        assert_eq!(snapshot.data.last().unwrap().time_ms, NOW + MS_PER_DAY);
        assert_eq!(snapshot.highlight, None);
    }

    #[tokio::test]
    async fn test_unknown_and_unmounted_views() {
        let service = service(3);
        assert!(matches!(service.hover(42, Some(NOW)).await, Err(ViewError::NotFound(42))));

        let id = service.mount().await.unwrap().id;
        service.unmount(id).await.unwrap();
        assert!(matches!(service.snapshot(id).await, Err(ViewError::NotFound(_))));
        assert!(matches!(service.unmount(id).await, Err(ViewError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_zero_day_count_fails_mount() {
        let service = service(0);
        assert!(matches!(
            service.mount().await,
            Err(ViewError::Series(SeriesError::EmptyRange))
        ));
    }
}
