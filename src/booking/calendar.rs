//! Date and time-slot rules for bookings.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

/// Bookable time slots. 1:30 PM is the lunch break.
pub const TIME_SLOTS: [&str; 22] = [
    "7:00 AM", "7:30 AM", "8:00 AM", "8:30 AM", "9:00 AM", "9:30 AM", "10:00 AM", "10:30 AM",
    "11:00 AM", "11:30 AM", "12:00 PM", "12:30 PM", "1:00 PM", "2:00 PM", "2:30 PM", "3:00 PM",
    "3:30 PM", "4:00 PM", "4:30 PM", "5:00 PM", "5:30 PM", "6:00 PM",
];

pub fn is_valid_time_slot(slot: &str) -> bool {
    TIME_SLOTS.contains(&slot)
}

/// Friday and Saturday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Fri | Weekday::Sat)
}

/// December 31 of the year after `today`.
pub fn last_selectable_date(today: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(today.year() + 1, 12, 31).unwrap_or(NaiveDate::MAX)
}

pub fn is_date_disabled(date: NaiveDate, today: NaiveDate) -> bool {
    date < today || is_weekend(date) || date > last_selectable_date(today)
}

/// First bookable day on or after `today`.
pub fn next_available_date(today: NaiveDate) -> Option<NaiveDate> {
    today
        .iter_days()
        .take_while(|d| *d <= last_selectable_date(today))
        .find(|d| !is_date_disabled(*d, today))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub disabled: bool,
    pub is_today: bool,
}

/// Every day of a month with its disabled flag. Empty for an invalid month.
pub fn month_days(year: i32, month: u32, today: NaiveDate) -> Vec<CalendarDay> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let mut days = Vec::with_capacity(31);
    let mut date = first;
    while date.month() == month {
        days.push(CalendarDay {
            date,
            disabled: is_date_disabled(date, today),
            is_today: date == today,
        });
        date += Duration::days(1);
    }
    days
}
