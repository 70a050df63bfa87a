// Dashboard domain model - navigation, summary cards and chart descriptor
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatIcon {
    Temperature,
    Humidity,
    Time,
    Photo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStat {
    pub icon: StatIcon,
    pub value: String,
    pub caption: String,
}

impl SummaryStat {
    pub fn new(icon: StatIcon, value: String, caption: String) -> Self {
        Self {
            icon,
            value,
            caption,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub current: f64,
    pub min: f64,
    pub max: f64,
}

/// Readings shown on one summary card.
#[derive(Debug, Clone, PartialEq)]
pub struct DayReadings {
    pub temperature: Range,
    pub humidity: Range,
    pub time: String,
    pub date: String,
    pub photos: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SummaryOptions {
    /// Only temperature and humidity, rendered smaller.
    pub minimal: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub date_label: String,
    pub scale: f64,
    pub stats: Vec<SummaryStat>,
}

impl SummaryCard {
    pub fn new(date_label: String, readings: &DayReadings, options: SummaryOptions) -> Self {
        let mut stats = vec![
            SummaryStat::new(
                StatIcon::Temperature,
                format!("{}°C", readings.temperature.current),
                format!(
                    "min: {}°C max: {}°C",
                    readings.temperature.min, readings.temperature.max
                ),
            ),
            SummaryStat::new(
                StatIcon::Humidity,
                format!("{}%", readings.humidity.current),
                format!("min: {}% max: {}%", readings.humidity.min, readings.humidity.max),
            ),
        ];

        if !options.minimal {
            stats.push(SummaryStat::new(
                StatIcon::Time,
                readings.time.clone(),
                readings.date.clone(),
            ));
            stats.push(SummaryStat::new(
                StatIcon::Photo,
                readings.photos.to_string(),
                "photos prises".to_string(),
            ));
        }

        let scale = if options.minimal { 0.8 } else { 1.0 };

        Self {
            date_label,
            scale,
            stats,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub path: String,
}

impl NavLink {
    pub fn new(label: &str, path: &str) -> Self {
        Self {
            label: label.to_string(),
            path: path.to_string(),
        }
    }

    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("Résumé", "/"),
            Self::new("Statistiques détaillées", "/stats"),
            Self::new("Calendrier", "/calendar"),
            Self::new("Gallerie", "/gallery"),
        ]
    }
}

/// Static presentation of the time-series chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDescriptor {
    pub title: String,
    pub caption: String,
    pub x_title: String,
    pub y_title: String,
    pub tick_total: u32,
    pub width: u32,
    pub height: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewPage {
    pub heading: String,
    pub nav: Vec<NavLink>,
    pub summaries: Vec<SummaryCard>,
    pub chart: ChartDescriptor,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings() -> DayReadings {
        DayReadings {
            temperature: Range {
                current: 30.4,
                min: 23.0,
                max: 33.0,
            },
            humidity: Range {
                current: 68.7,
                min: 54.0,
                max: 73.0,
            },
            time: "10h28".to_string(),
            date: "20/03/2020".to_string(),
            photos: 23,
        }
    }

    #[test]
    fn test_full_card() {
        let card = SummaryCard::new("Aujourd'hui".to_string(), &readings(), SummaryOptions::default());

        assert_eq!(card.scale, 1.0);
        let icons: Vec<StatIcon> = card.stats.iter().map(|s| s.icon).collect();
        assert_eq!(
            icons,
            vec![StatIcon::Temperature, StatIcon::Humidity, StatIcon::Time, StatIcon::Photo]
        );
        assert_eq!(card.stats[0].value, "30.4°C");
        assert_eq!(card.stats[0].caption, "min: 23°C max: 33°C");
        assert_eq!(card.stats[1].value, "68.7%");
        assert_eq!(card.stats[1].caption, "min: 54% max: 73%");
        assert_eq!(card.stats[2].caption, "20/03/2020");
        assert_eq!(card.stats[3].value, "23");
        assert_eq!(card.stats[3].caption, "photos prises");
    }

    #[test]
    fn test_minimal_card_omits_time_and_photos() {
        let card = SummaryCard::new("19/03".to_string(), &readings(), SummaryOptions { minimal: true });

        assert_eq!(card.scale, 0.8);
        assert_eq!(card.stats.len(), 2);
        assert!(card
            .stats
            .iter()
            .all(|s| matches!(s.icon, StatIcon::Temperature | StatIcon::Humidity)));
    }
}
