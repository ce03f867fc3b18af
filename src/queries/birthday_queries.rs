use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::fmt;

use crate::model::AddressBook;

/// Display format for announced birthdays, e.g. `15,03,2024`.
pub const ANNOUNCE_FORMAT: &str = "%d,%m,%Y";

pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A contact whose birthday is coming up, with the date it should be celebrated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.date.format(ANNOUNCE_FORMAT))
    }
}

/// The birthday's date in `year`. Feb 29 becomes Feb 28 outside leap years.
pub fn occurrence_in_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, birthday.month(), 28))
}

/// This year's occurrence if it is today or later, otherwise next year's.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in_year(birthday, today.year())?;
    if this_year < today {
        occurrence_in_year(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Saturday and Sunday move forward to the following Monday. A weekend at the
/// very end of the calendar has no Monday after it and stays put.
pub fn shift_weekend_to_monday(date: NaiveDate) -> NaiveDate {
    let ahead = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date.checked_add_days(Days::new(ahead)).unwrap_or(date)
}

/// Contacts whose next birthday lies in `today..=today + window_days`, in book
/// order. A window reaching past the last representable date stops there.
/// Dates are shifted off weekends after the window check, so a shifted date
/// may fall just past the window.
pub fn upcoming_birthdays(
    book: &AddressBook,
    window_days: u32,
    today: NaiveDate,
) -> Vec<UpcomingBirthday> {
    let window_end = today
        .checked_add_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MAX);

    book.iter()
        .filter_map(|record| {
            let birthday = record.birthday()?;
            let occurrence = next_occurrence(birthday.date(), today)?;
            (occurrence <= window_end).then(|| UpcomingBirthday {
                name: record.name().to_string(),
                date: shift_weekend_to_monday(occurrence),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn leap_day_clamps_to_feb_28() {
        assert_eq!(occurrence_in_year(date(2000, 2, 29), 2025), Some(date(2025, 2, 28)));
        assert_eq!(occurrence_in_year(date(2000, 2, 29), 2028), Some(date(2028, 2, 29)));
    }

    #[test]
    fn past_birthday_rolls_to_next_year() {
        assert_eq!(
            next_occurrence(date(1990, 1, 5), date(2024, 3, 1)),
            Some(date(2025, 1, 5))
        );
    }

    #[test]
    fn birthday_today_is_this_year() {
        assert_eq!(
            next_occurrence(date(1990, 3, 1), date(2024, 3, 1)),
            Some(date(2024, 3, 1))
        );
    }

    #[test]
    fn weekend_shift() {
        // 2024-03-16 is a Saturday
        assert_eq!(shift_weekend_to_monday(date(2024, 3, 16)), date(2024, 3, 18));
        assert_eq!(shift_weekend_to_monday(date(2024, 3, 17)), date(2024, 3, 18));
        assert_eq!(shift_weekend_to_monday(date(2024, 3, 15)), date(2024, 3, 15));
    }

    #[test]
    fn display_uses_commas() {
        let upcoming = UpcomingBirthday {
            name: "Alice".into(),
            date: date(2024, 3, 15),
        };
        assert_eq!(upcoming.to_string(), "Alice: 15,03,2024");
    }
}
