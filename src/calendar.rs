//! Month Grid
//!
//! Calendar math for the agenda view. Weeks start on Monday; the grid
//! pads with days from the neighbouring months so every row is full.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// One cell in the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDay {
    pub date: NaiveDate,
    /// False for padding days from the previous or next month
    pub in_month: bool,
}

/// First day of the given month.
pub fn month_start(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Last day of the given month.
pub fn month_end(year: i32, month: u32) -> Option<NaiveDate> {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.and_then(|d| d.checked_sub_days(Days::new(1)))
}

/// Full weeks covering the month, Monday first.
pub fn month_grid(year: i32, month: u32) -> Vec<Vec<GridDay>> {
    let Some(start) = month_start(year, month) else {
        return Vec::new();
    };
    let Some(end) = month_end(year, month) else {
        return Vec::new();
    };

    // Walk back to the Monday on or before the 1st
    let lead = start.weekday().num_days_from_monday() as u64;
    let Some(mut day) = start.checked_sub_days(Days::new(lead)) else {
        return Vec::new();
    };

    let mut weeks = Vec::new();
    loop {
        let mut week = Vec::with_capacity(7);
        for _ in 0..7 {
            week.push(GridDay {
                date: day,
                in_month: day.month() == month && day.year() == year,
            });
            day = match day.checked_add_days(Days::new(1)) {
                Some(d) => d,
                None => return weeks,
            };
        }
        weeks.push(week);
        if day > end {
            break;
        }
    }
    weeks
}

/// Previous month as (year, month).
pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Next month as (year, month).
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_rows_start_on_monday() {
        // June 2025 starts on a Sunday
        let grid = month_grid(2025, 6);
        for week in &grid {
            assert_eq!(week.len(), 7);
            assert_eq!(week[0].date.weekday(), Weekday::Mon);
        }
        // Leading padding: Mon May 26 .. Sat May 31
        assert_eq!(grid[0][0].date, NaiveDate::from_ymd_opt(2025, 5, 26).unwrap());
        assert!(!grid[0][0].in_month);
        assert_eq!(grid[0][6].date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert!(grid[0][6].in_month);
    }

    #[test]
    fn month_starting_monday_has_no_leading_padding() {
        // September 2025 starts on a Monday
        let grid = month_grid(2025, 9);
        assert_eq!(grid[0][0].date, NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
        assert!(grid[0][0].in_month);
    }

    #[test]
    fn grid_covers_whole_month() {
        let grid = month_grid(2025, 2);
        let days: Vec<_> = grid.iter().flatten().filter(|d| d.in_month).collect();
        assert_eq!(days.len(), 28);
        let last = grid.last().unwrap();
        assert!(last[6].date >= NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
    }

    #[test]
    fn leap_february_has_29_days() {
        let grid = month_grid(2024, 2);
        let days = grid.iter().flatten().filter(|d| d.in_month).count();
        assert_eq!(days, 29);
    }

    #[test]
    fn month_end_december_wraps_year() {
        assert_eq!(
            month_end(2025, 12),
            NaiveDate::from_ymd_opt(2025, 12, 31)
        );
    }

    #[test]
    fn month_navigation_wraps() {
        assert_eq!(prev_month(2025, 1), (2024, 12));
        assert_eq!(next_month(2025, 12), (2026, 1));
        assert_eq!(next_month(2025, 6), (2025, 7));
    }
}
