// Overview service - Use case for the summary page
use crate::domain::dashboard::{NavLink, OverviewPage, SummaryCard, SummaryOptions};
use crate::infrastructure::config::{ChartConfig, SummaryConfig};

#[derive(Clone)]
pub struct OverviewService {
    chart: ChartConfig,
    summaries: Vec<SummaryConfig>,
}

impl OverviewService {
    pub fn new(chart: ChartConfig, summaries: Vec<SummaryConfig>) -> Self {
        Self { chart, summaries }
    }

    pub fn overview(&self) -> OverviewPage {
        let summaries = self
            .summaries
            .iter()
            .map(|s| {
                SummaryCard::new(
                    s.date_label.clone(),
                    &s.readings(),
                    SummaryOptions { minimal: s.minimal },
                )
            })
            .collect();

        OverviewPage {
            heading: "Monitoring".to_string(),
            nav: NavLink::defaults(),
            summaries,
            chart: self.chart.descriptor(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::StatIcon;

    fn service() -> OverviewService {
        let config: crate::infrastructure::config::DashboardConfig = config::Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        OverviewService::new(config.chart, config.summaries)
    }

    #[test]
    fn test_overview_layout() {
        let page = service().overview();

        assert_eq!(page.heading, "Monitoring");
        let paths: Vec<&str> = page.nav.iter().map(|l| l.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/stats", "/calendar", "/gallery"]);

        assert_eq!(page.summaries.len(), 3);
        assert_eq!(page.summaries[0].date_label, "Aujourd'hui");
        assert_eq!(page.summaries[0].stats.len(), 4);
        assert_eq!(page.summaries[1].stats.len(), 2);
        assert_eq!(page.summaries[2].stats[1].icon, StatIcon::Humidity);

        assert_eq!(page.chart.title, "Semaine 3");
        assert_eq!(page.chart.y_title, "Humidité (%)");
    }
}
