use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

/// How X tick values are turned into labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickFormat {
    /// Plain decimal notation, no scientific offset.
    #[default]
    Plain,
    /// Axis values are timestamps in the given unit since the Unix epoch.
    Time(TimeUnit),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmartDateFormat {
    Year,       // 2024
    MonthYear,  // Jan 2024
    DayMonth,   // 12 Jan
    HourMin,    // 10:30
    HourMinSec, // 10:30:15
    Millis,     // 10:30:15.250
}

impl TimeUnit {
    fn per_second(self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Milliseconds => 1_000.0,
            TimeUnit::Microseconds => 1_000_000.0,
            TimeUnit::Nanoseconds => 1_000_000_000.0,
        }
    }
}

/// Determines the best date format based on the visible time range (in seconds).
pub fn determine_date_format(visible_range_sec: f64) -> SmartDateFormat {
    const MINUTE: f64 = 60.0;
    const HOUR: f64 = 3600.0;
    const DAY: f64 = 24.0 * HOUR;
    const MONTH: f64 = 30.0 * DAY;
    const YEAR: f64 = 365.0 * DAY;

    if visible_range_sec > YEAR * 2.0 {
        SmartDateFormat::Year
    } else if visible_range_sec > MONTH * 2.0 {
        SmartDateFormat::MonthYear
    } else if visible_range_sec > DAY * 1.5 {
        SmartDateFormat::DayMonth
    } else if visible_range_sec > MINUTE * 5.0 {
        SmartDateFormat::HourMin
    } else if visible_range_sec > 10.0 {
        SmartDateFormat::HourMinSec
    } else {
        SmartDateFormat::Millis
    }
}

/// Formats a timestamp according to the specified format and unit.
pub fn format_timestamp(value: f64, format: SmartDateFormat, unit: TimeUnit) -> String {
    let millis = (value / unit.per_second() * 1000.0).round() as i64;

    let dt = match Utc.timestamp_millis_opt(millis) {
        chrono::LocalResult::Single(d) => d,
        chrono::LocalResult::Ambiguous(d, _) => d,
        chrono::LocalResult::None => return format!("{:.2}", value),
    };

    match format {
        SmartDateFormat::Year => dt.format("%Y").to_string(),
        SmartDateFormat::MonthYear => dt.format("%b %Y").to_string(),
        SmartDateFormat::DayMonth => dt.format("%d %b").to_string(),
        SmartDateFormat::HourMin => dt.format("%H:%M").to_string(),
        SmartDateFormat::HourMinSec => dt.format("%H:%M:%S").to_string(),
        SmartDateFormat::Millis => dt.format("%H:%M:%S%.3f").to_string(),
    }
}

/// Plain label with just enough decimals to tell neighbouring ticks apart.
pub fn format_plain(value: f64, visible_span: f64) -> String {
    let decimals = if visible_span > 0.0 && visible_span.is_finite() {
        (2.0 - visible_span.log10().floor()).clamp(0.0, 6.0) as usize
    } else {
        2
    };
    format!("{:.*}", decimals, value)
}

/// Labels for a set of ticks spanning `visible_span` axis units.
pub fn format_ticks(ticks: &[f64], visible_span: f64, format: TickFormat) -> Vec<String> {
    match format {
        TickFormat::Plain => ticks.iter().map(|&t| format_plain(t, visible_span)).collect(),
        TickFormat::Time(unit) => {
            let smart = determine_date_format(visible_span / unit.per_second());
            ticks
                .iter()
                .map(|&t| format_timestamp(t, smart, unit))
                .collect()
        }
    }
}
