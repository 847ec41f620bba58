//! Minute-of-day and calendar helpers shared by the schedule grid, the editor and the calendar panels

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

use crate::config::{ClockFormat, TimeFormat};

#[cfg(test)]
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Format a minute offset as "HH:MM", wrapping past midnight
pub fn minutes_to_hm(minutes: u32) -> String {
    let hour = (minutes / 60) % 24;
    let minute = minutes % 60;
    format!("{:02}:{:02}", hour, minute)
}

/// Format a minute offset according to clock format
pub fn format_clock_time(minutes: u32, clock_format: ClockFormat) -> String {
    match clock_format {
        ClockFormat::Hour24 => minutes_to_hm(minutes),
        ClockFormat::Hour12 => {
            let hour = (minutes / 60) % 24;
            let min = minutes % 60;
            let (h12, ampm) = if hour == 0 {
                (12, "am")
            } else if hour < 12 {
                (hour, "am")
            } else if hour == 12 {
                (12, "pm")
            } else {
                (hour - 12, "pm")
            };
            format!("{}:{:02}{}", h12, min, ampm)
        }
    }
}

/// Hour-axis label: two-digit hour for 24h, "9a"/"3p" for 12h
pub fn hour_label(hour: u32, clock_format: ClockFormat) -> String {
    match clock_format {
        ClockFormat::Hour24 => format!("{:02}", hour),
        ClockFormat::Hour12 => match hour {
            0 => "12a".to_string(),
            1..=11 => format!("{}a", hour),
            12 => "12p".to_string(),
            _ => format!("{}p", hour - 12),
        },
    }
}

/// Format a duration in minutes as "1h 30m" or "1.5h"
pub fn format_duration(minutes: u32, time_format: TimeFormat) -> String {
    match time_format {
        TimeFormat::HoursMinutes => {
            let hours = minutes / 60;
            let mins = minutes % 60;
            if hours > 0 && mins > 0 {
                format!("{}h {}m", hours, mins)
            } else if hours > 0 {
                format!("{}h", hours)
            } else {
                format!("{}m", mins)
            }
        }
        TimeFormat::Decimal => {
            let hours = minutes as f32 / 60.0;
            if hours == hours.floor() {
                format!("{}h", hours as u32)
            } else {
                // Format with 2 decimals, then trim trailing zeros
                let s = format!("{:.2}", hours);
                let trimmed = s.trim_end_matches('0').trim_end_matches('.');
                format!("{}h", trimmed)
            }
        }
    }
}

/// Parse a user-entered time ("9:00am", "14:30", "2pm") to minutes since midnight
pub fn parse_time_input(input: &str) -> Option<u32> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    // Check for am/pm suffix
    let (time_part, meridiem) = if let Some(rest) = input.strip_suffix("pm") {
        (rest, Some(true))
    } else if let Some(rest) = input.strip_suffix("am") {
        (rest, Some(false))
    } else if let Some(rest) = input.strip_suffix('p') {
        (rest, Some(true))
    } else if let Some(rest) = input.strip_suffix('a') {
        (rest, Some(false))
    } else {
        (input.as_str(), None)
    };

    let time_part = time_part.trim();
    let (hour, minute) = match time_part.split_once(':') {
        Some((h, m)) => (h.parse::<u32>().ok()?, m.parse::<u32>().ok()?),
        None => (time_part.parse::<u32>().ok()?, 0),
    };

    let hour_24 = match meridiem {
        Some(true) if hour < 12 => hour + 12,
        Some(false) if hour == 12 => 0,
        _ => hour,
    };

    if hour_24 > 23 || minute > 59 {
        return None;
    }
    Some(hour_24 * 60 + minute)
}

/// Monday of the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let days_from_monday = date.weekday().num_days_from_monday();
    date - Duration::days(days_from_monday as i64)
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month `delta` months away from `date`'s month
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let first = month_start(date);
    let shifted = if delta >= 0 {
        first.checked_add_months(Months::new(delta as u32))
    } else {
        first.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.unwrap_or(first)
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = month_start(date);
    let next = shift_month(first, 1);
    (next - first).num_days() as u32
}

/// Cells of a Sunday-first month grid; leading blanks are `None`
pub fn month_cells(date: NaiveDate) -> Vec<Option<NaiveDate>> {
    let first = month_start(date);
    let leading = first.weekday().num_days_from_sunday() as usize;
    let mut cells = vec![None; leading];
    cells.extend((0..days_in_month(first)).map(|d| Some(first + Duration::days(d as i64))));
    cells
}

pub fn weekday_short(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}
