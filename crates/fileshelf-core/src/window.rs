use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ShelfError;

/// Named temporal presets offered by the listing view's filter dropdown.
///
/// `resolve` turns a token into an inclusive calendar-day window relative to
/// an explicit "today"; `All` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NamedFilter {
    #[default]
    All,
    Today,
    Yesterday,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    ThisYear,
    LastYear,
}

/// Inclusive `[start, end]` calendar-day bound. Ordering on `NaiveDate`
/// matches lexicographic ordering on `YYYY-MM-DD` strings, so this is the
/// typed rendering of the wire-level date-string window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

impl NamedFilter {
    /// Dropdown order, fixed by the view contract.
    pub const ALL: [Self; 9] = [
        Self::All,
        Self::Today,
        Self::Yesterday,
        Self::ThisWeek,
        Self::LastWeek,
        Self::ThisMonth,
        Self::LastMonth,
        Self::ThisYear,
        Self::LastYear,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::ThisWeek => "This Week",
            Self::LastWeek => "Last Week",
            Self::ThisMonth => "This Month",
            Self::LastMonth => "Last Month",
            Self::ThisYear => "This Year",
            Self::LastYear => "Last Year",
        }
    }

    /// Resolves the token against `today`. `None` means no date bound.
    ///
    /// Pure: depends only on `(self, today)`. Weeks start on Sunday. The
    /// checked date arithmetic can only fall outside chrono's representable
    /// range at its extreme years; such a window degrades to unbounded
    /// rather than panicking.
    #[must_use]
    pub fn resolve(self, today: NaiveDate) -> Option<DateWindow> {
        match self {
            Self::All => None,
            _ => self.bounded(today),
        }
    }

    fn bounded(self, today: NaiveDate) -> Option<DateWindow> {
        let window = match self {
            Self::All => return None,
            Self::Today => DateWindow {
                start: today,
                end: today,
            },
            Self::Yesterday => {
                let day = today.checked_sub_days(Days::new(1))?;
                DateWindow {
                    start: day,
                    end: day,
                }
            }
            Self::ThisWeek => week_of(today, 0)?,
            Self::LastWeek => week_of(today, 7)?,
            Self::ThisMonth => month_window(today.year(), today.month())?,
            Self::LastMonth => {
                let (year, month) = previous_month(today.year(), today.month());
                month_window(year, month)?
            }
            Self::ThisYear => year_window(today.year())?,
            Self::LastYear => year_window(today.year() - 1)?,
        };
        Some(window)
    }
}

/// Sunday-start week containing `today`, shifted back by `offset_days`.
fn week_of(today: NaiveDate, offset_days: u64) -> Option<DateWindow> {
    let into_week = u64::from(today.weekday().num_days_from_sunday());
    let start = today.checked_sub_days(Days::new(into_week + offset_days))?;
    let end = start.checked_add_days(Days::new(6))?;
    Some(DateWindow { start, end })
}

fn month_window(year: i32, month: u32) -> Option<DateWindow> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.checked_sub_days(Days::new(1))?;
    Some(DateWindow { start, end })
}

fn year_window(year: i32) -> Option<DateWindow> {
    Some(DateWindow {
        start: NaiveDate::from_ymd_opt(year, 1, 1)?,
        end: NaiveDate::from_ymd_opt(year, 12, 31)?,
    })
}

const fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

impl fmt::Display for NamedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NamedFilter {
    type Err = ShelfError;

    /// Accepts the display label in any casing, with or without the space
    /// (`"This Week"`, `this-week`, `thisweek`).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let folded: String = raw
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        let filter = match folded.as_str() {
            "all" => Self::All,
            "today" => Self::Today,
            "yesterday" => Self::Yesterday,
            "thisweek" => Self::ThisWeek,
            "lastweek" => Self::LastWeek,
            "thismonth" => Self::ThisMonth,
            "lastmonth" => Self::LastMonth,
            "thisyear" => Self::ThisYear,
            "lastyear" => Self::LastYear,
            _ => {
                return Err(ShelfError::Validation(format!(
                    "unknown filter: {raw}"
                )));
            }
        };
        Ok(filter)
    }
}
