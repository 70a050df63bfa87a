// Crosshair tooltip shown for the highlighted sample
use super::sample::Sample;
use chrono::{DateTime, FixedOffset, Locale};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub title: String,
    pub body: String,
}

impl Tooltip {
    /// Returns `None` when the timestamp is outside chrono's representable range.
    pub fn for_sample(sample: &Sample, offset: FixedOffset) -> Option<Self> {
        Some(Self {
            title: format_day_month(sample.time_ms, offset)?,
            body: format!("humidité: {}%", sample.value),
        })
    }
}

/// fr-FR date with `{ month: "long", day: "numeric" }`, e.g. "20 mars".
pub fn format_day_month(time_ms: i64, offset: FixedOffset) -> Option<String> {
    let local = DateTime::from_timestamp_millis(time_ms)?.with_timezone(&offset);
    Some(local.format_localized("%-d %B", Locale::fr_FR).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn ms(y: i32, m: u32, d: u32, h: u32) -> i64 {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap().timestamp_millis()
    }

    #[test]
    fn test_format_day_month() {
        assert_eq!(format_day_month(ms(2020, 3, 20, 10), utc()).unwrap(), "20 mars");
        assert_eq!(format_day_month(ms(2026, 10, 16, 0), utc()).unwrap(), "16 octobre");
        assert_eq!(format_day_month(ms(2021, 2, 1, 12), utc()).unwrap(), "1 février");
    }

    #[test]
    fn test_format_respects_offset() {
        let paris_summer = FixedOffset::east_opt(2 * 3600).unwrap();
        // 23:00 UTC on 31 July is already 1 August in Paris
        assert_eq!(format_day_month(ms(2020, 7, 31, 23), paris_summer).unwrap(), "1 août");
        assert_eq!(format_day_month(ms(2020, 7, 31, 23), utc()).unwrap(), "31 juillet");
    }

    #[test]
    fn test_tooltip_for_sample() {
        let sample = Sample::new(ms(2020, 12, 25, 8), 68.0);
        let tooltip = Tooltip::for_sample(&sample, utc()).unwrap();
        assert_eq!(tooltip.title, "25 décembre");
        assert_eq!(tooltip.body, "humidité: 68%");
    }

    #[test]
    fn test_out_of_range_timestamp() {
        assert_eq!(format_day_month(i64::MAX, utc()), None);
    }
}
