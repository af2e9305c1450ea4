//! Date and day-of-week formatting
//!
//! Pure functions turning a calendar date into the strings shown by the
//! widget. The format enums double as the values stored in synced state,
//! so their serialized form is the human-readable label.

use std::fmt;
use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::WidgetError;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const MONTH_NAMES_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];

/// How the date part of the label is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateFormat {
    #[default]
    #[serde(rename = "MM/DD/YYYY")]
    MonthDayYear,
    #[serde(rename = "DD/MM/YYYY")]
    DayMonthYear,
    #[serde(rename = "YYYY-MM-DD")]
    Iso,
    #[serde(rename = "Month DD, YYYY")]
    MonthNameDayYear,
    #[serde(rename = "DD Month YYYY")]
    DayMonthNameYear,
    #[serde(rename = "MMM DD, YYYY")]
    ShortMonthDayYear,
}

impl DateFormat {
    /// All formats in menu order
    pub const ALL: [DateFormat; 6] = [
        DateFormat::MonthDayYear,
        DateFormat::DayMonthYear,
        DateFormat::Iso,
        DateFormat::MonthNameDayYear,
        DateFormat::DayMonthNameYear,
        DateFormat::ShortMonthDayYear,
    ];

    /// Label shown in the settings menu and stored in synced state
    pub fn label(&self) -> &'static str {
        match self {
            DateFormat::MonthDayYear => "MM/DD/YYYY",
            DateFormat::DayMonthYear => "DD/MM/YYYY",
            DateFormat::Iso => "YYYY-MM-DD",
            DateFormat::MonthNameDayYear => "Month DD, YYYY",
            DateFormat::DayMonthNameYear => "DD Month YYYY",
            DateFormat::ShortMonthDayYear => "MMM DD, YYYY",
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DateFormat {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateFormat::ALL
            .into_iter()
            .find(|format| format.label() == s)
            .ok_or_else(|| WidgetError::UnknownFormat(s.to_string()))
    }
}

/// How much of the weekday name is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayFormat {
    Hidden,
    Short,
    Medium,
    #[default]
    Long,
}

impl DayFormat {
    /// All formats in menu order
    pub const ALL: [DayFormat; 4] = [
        DayFormat::Hidden,
        DayFormat::Short,
        DayFormat::Medium,
        DayFormat::Long,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DayFormat::Hidden => "Hidden",
            DayFormat::Short => "Short",
            DayFormat::Medium => "Medium",
            DayFormat::Long => "Long",
        }
    }
}

impl fmt::Display for DayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DayFormat {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayFormat::ALL
            .into_iter()
            .find(|format| format.label() == s)
            .ok_or_else(|| WidgetError::UnknownFormat(s.to_string()))
    }
}

/// Format the date part of `date`
pub fn format_date<D: Datelike>(date: &D, format: DateFormat) -> String {
    let day = date.day();
    let month = date.month();
    let year = date.year();
    let index = date.month0() as usize;

    match format {
        DateFormat::MonthDayYear => format!("{:02}/{:02}/{}", month, day, year),
        DateFormat::DayMonthYear => format!("{:02}/{:02}/{}", day, month, year),
        DateFormat::Iso => format!("{}-{:02}-{:02}", year, month, day),
        DateFormat::MonthNameDayYear => format!("{} {}, {}", MONTH_NAMES[index], day, year),
        DateFormat::DayMonthNameYear => format!("{} {} {}", day, MONTH_NAMES[index], year),
        DateFormat::ShortMonthDayYear => {
            format!("{} {}, {}", MONTH_NAMES_SHORT[index], day, year)
        }
    }
}

/// Full weekday name, Sunday-first table
pub fn weekday_name<D: Datelike>(date: &D) -> &'static str {
    WEEKDAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// Format the weekday of `date`; `Hidden` yields an empty string
pub fn format_day_of_week<D: Datelike>(date: &D, format: DayFormat) -> String {
    let full = weekday_name(date);

    match format {
        DayFormat::Hidden => String::new(),
        DayFormat::Short => full[..1].to_string(),
        DayFormat::Medium => full[..3].to_string(),
        DayFormat::Long => full.to_string(),
    }
}

/// Join the weekday and date into the primary label.
///
/// An empty weekday drops the separator entirely.
pub fn compose_label(day: &str, date: &str) -> String {
    if day.is_empty() {
        date.to_string()
    } else {
        format!("{}, {}", day, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn date_formats_match_reference_strings() {
        let date = reference();
        let expected = [
            "03/05/2024",
            "05/03/2024",
            "2024-03-05",
            "March 5, 2024",
            "5 March 2024",
            "Mar 5, 2024",
        ];
        for (format, want) in DateFormat::ALL.into_iter().zip(expected) {
            assert_eq!(format_date(&date, format), want, "format {}", format);
        }
    }

    #[test]
    fn day_formats_match_reference_strings() {
        let date = reference();
        assert_eq!(format_day_of_week(&date, DayFormat::Hidden), "");
        assert_eq!(format_day_of_week(&date, DayFormat::Short), "T");
        assert_eq!(format_day_of_week(&date, DayFormat::Medium), "Tue");
        assert_eq!(format_day_of_week(&date, DayFormat::Long), "Tuesday");
    }

    #[test]
    fn weekday_table_starts_on_sunday() {
        let sunday = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        let saturday = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(weekday_name(&sunday), "Sunday");
        assert_eq!(weekday_name(&saturday), "Saturday");
    }

    #[test]
    fn december_and_double_digit_days_are_not_padded_twice() {
        let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        assert_eq!(format_date(&date, DateFormat::MonthDayYear), "12/31/1999");
        assert_eq!(format_date(&date, DateFormat::ShortMonthDayYear), "Dec 31, 1999");
        assert_eq!(format_date(&date, DateFormat::DayMonthNameYear), "31 December 1999");
    }

    #[test]
    fn compose_label_skips_separator_for_hidden_day() {
        assert_eq!(compose_label("Tuesday", "2024-03-05"), "Tuesday, 2024-03-05");
        assert_eq!(compose_label("", "2024-03-05"), "2024-03-05");
    }

    #[test]
    fn labels_parse_back_to_variants() {
        for format in DateFormat::ALL {
            assert_eq!(format.label().parse::<DateFormat>().unwrap(), format);
        }
        for format in DayFormat::ALL {
            assert_eq!(format.label().parse::<DayFormat>().unwrap(), format);
        }
        assert!("YYYY/MM/DD".parse::<DateFormat>().is_err());
        assert!("Tiny".parse::<DayFormat>().is_err());
    }

    #[test]
    fn serialized_form_is_the_label() {
        let value = serde_json::to_value(DateFormat::MonthNameDayYear).unwrap();
        assert_eq!(value, serde_json::json!("Month DD, YYYY"));
        let value = serde_json::to_value(DayFormat::Medium).unwrap();
        assert_eq!(value, serde_json::json!("Medium"));
    }
}
