//! Event calendar: which year and day are "current".

use chrono::{Datelike, Local, NaiveDate};

/// The first Advent of Code event.
pub const FIRST_YEAR: u16 = 2015;

/// Number of puzzle days in an event; shortened to twelve from 2025.
pub fn last_day(year: u16) -> u8 {
    if year >= 2025 { 12 } else { 25 }
}

/// This year while December runs, otherwise the previous one.
pub fn default_year(today: NaiveDate) -> u16 {
    if today.month() == 12 {
        today.year() as u16
    } else {
        (today.year() - 1) as u16
    }
}

/// Today's puzzle during the event, otherwise day 1.
pub fn default_day(today: NaiveDate) -> u8 {
    let day = today.day() as u8;
    if today.month() == 12 && day <= last_day(today.year() as u16) {
        day
    } else {
        1
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn is_puzzle_day(year: u16, day: u8) -> bool {
    year >= FIRST_YEAR && (1..=last_day(year)).contains(&day)
}
