use crate::domain::dashboard::{ChartDescriptor, DayReadings, Range};
use anyhow::{bail, Context};
use chrono::FixedOffset;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub views: ViewsSettings,
    #[serde(default = "default_summaries")]
    pub summaries: Vec<SummaryConfig>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ViewsSettings {
    /// Upper bound on simultaneously mounted chart views.
    pub max_mounted: usize,
}

impl Default for ViewsSettings {
    fn default() -> Self {
        Self { max_mounted: 256 }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ChartConfig {
    pub day_count: u32,
    /// Inclusive lower bound of the synthetic values.
    pub value_min: i64,
    /// Exclusive upper bound of the synthetic values.
    pub value_max: i64,
    pub utc_offset_minutes: i32,
    pub title: String,
    pub caption: String,
    pub x_title: String,
    pub y_title: String,
    pub tick_total: u32,
    pub width: u32,
    pub height: u32,
    pub color: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            day_count: 30,
            value_min: 30,
            value_max: 100,
            utc_offset_minutes: 0,
            title: "Semaine 3".to_string(),
            caption: "évolution de l'humidité et de la température en fonction du temps".to_string(),
            x_title: "Temps".to_string(),
            y_title: "Humidité (%)".to_string(),
            tick_total: 6,
            width: 700,
            height: 300,
            color: "teal".to_string(),
        }
    }
}

impl ChartConfig {
    pub fn utc_offset(&self) -> anyhow::Result<FixedOffset> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .with_context(|| format!("invalid chart.utc_offset_minutes: {}", self.utc_offset_minutes))
    }

    pub fn descriptor(&self) -> ChartDescriptor {
        ChartDescriptor {
            title: self.title.clone(),
            caption: self.caption.clone(),
            x_title: self.x_title.clone(),
            y_title: self.y_title.clone(),
            tick_total: self.tick_total,
            width: self.width,
            height: self.height,
            color: self.color.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct RangeConfig {
    pub current: f64,
    pub min: f64,
    pub max: f64,
}

impl From<RangeConfig> for Range {
    fn from(r: RangeConfig) -> Self {
        Range {
            current: r.current,
            min: r.min,
            max: r.max,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SummaryConfig {
    pub date_label: String,
    #[serde(default)]
    pub minimal: bool,
    pub temperature: RangeConfig,
    pub humidity: RangeConfig,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub photos: u32,
}

impl SummaryConfig {
    pub fn readings(&self) -> DayReadings {
        DayReadings {
            temperature: self.temperature.into(),
            humidity: self.humidity.into(),
            time: self.time.clone(),
            date: self.date.clone(),
            photos: self.photos,
        }
    }
}

fn default_summaries() -> Vec<SummaryConfig> {
    let card = |date_label: &str, minimal: bool| SummaryConfig {
        date_label: date_label.to_string(),
        minimal,
        temperature: RangeConfig {
            current: 30.4,
            min: 23.0,
            max: 33.0,
        },
        humidity: RangeConfig {
            current: 68.7,
            min: 54.0,
            max: 73.0,
        },
        time: "10h28".to_string(),
        date: "20/03/2020".to_string(),
        photos: 23,
    };

    vec![
        card("Aujourd'hui", false),
        card("19/03", true),
        card("18/03", true),
    ]
}

impl DashboardConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.chart.day_count == 0 {
            bail!("chart.day_count must be at least 1");
        }
        if self.chart.value_min >= self.chart.value_max {
            bail!(
                "chart.value_min ({}) must be below chart.value_max ({})",
                self.chart.value_min,
                self.chart.value_max
            );
        }
        if self.views.max_mounted == 0 {
            bail!("views.max_mounted must be at least 1");
        }
        self.chart.utc_offset()?;
        Ok(())
    }
}

/// Load `config/dashboard.*` (optional) overlaid with `DASHBOARD__*` environment variables.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    load_with_environment(environment())
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("DASHBOARD")
        .separator("__")
        .try_parsing(true)
}

fn load_with_environment(environment: config::Environment) -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(environment)
        .build()?;

    let config: DashboardConfig = settings
        .try_deserialize()
        .context("failed to parse dashboard configuration")?;
    config.validate()?;

    Ok(config)
}
