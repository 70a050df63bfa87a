// Mapper to convert domain models to JSON response types
use crate::application::view_service::{HoverOutcome, ViewSnapshot};
use crate::domain::dashboard::{ChartDescriptor, NavLink, OverviewPage, SummaryCard, SummaryStat};
use crate::domain::sample::Sample;
use crate::domain::tooltip::Tooltip;
use serde::Serialize;

/// Wire shape of the chart component's `data` prop.
#[derive(Debug, Serialize)]
pub struct PointJson {
    pub x: i64,
    pub y: f64,
}

#[derive(Debug, Serialize)]
pub struct ViewJson {
    pub id: u64,
    pub chart: ChartDescriptor,
    pub data: Vec<PointJson>,
    pub highlight: Option<PointJson>,
    pub tooltip: Option<Tooltip>,
}

#[derive(Debug, Serialize)]
pub struct HoverJson {
    pub changed: bool,
    pub highlight: Option<PointJson>,
    pub tooltip: Option<Tooltip>,
}

#[derive(Debug, Serialize)]
pub struct SummaryJson {
    pub date: String,
    pub scale: f64,
    pub stats: Vec<SummaryStat>,
}

#[derive(Debug, Serialize)]
pub struct OverviewJson {
    pub heading: String,
    pub nav: Vec<NavLink>,
    pub summaries: Vec<SummaryJson>,
    pub chart: ChartDescriptor,
}

pub fn overview_to_json(page: OverviewPage) -> OverviewJson {
    OverviewJson {
        heading: page.heading,
        nav: page.nav,
        summaries: page.summaries.into_iter().map(summary_to_json).collect(),
        chart: page.chart,
    }
}

pub fn view_to_json(snapshot: ViewSnapshot) -> ViewJson {
    ViewJson {
        id: snapshot.id,
        chart: snapshot.chart,
        data: snapshot.data.into_iter().map(point_to_json).collect(),
        highlight: snapshot.highlight.map(point_to_json),
        tooltip: snapshot.tooltip,
    }
}

pub fn hover_to_json(outcome: HoverOutcome) -> HoverJson {
    HoverJson {
        changed: outcome.changed,
        highlight: outcome.highlight.map(point_to_json),
        tooltip: outcome.tooltip,
    }
}

fn point_to_json(sample: Sample) -> PointJson {
    PointJson {
        x: sample.time_ms,
        y: sample.value,
    }
}

fn summary_to_json(card: SummaryCard) -> SummaryJson {
    SummaryJson {
        date: card.date_label,
        scale: card.scale,
        stats: card.stats,
    }
}
