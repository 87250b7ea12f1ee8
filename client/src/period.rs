//! # Period Selector Module
//!
//! Tracks the reporting window every expense fetch is filtered by: a concrete
//! calendar month, or "all time".
//!
//! ## Responsibilities:
//! - Month navigation (previous/next) with a future-month boundary
//! - All-time toggle that always re-enters concrete mode at the real
//!   current month
//! - Deriving the half-open date range and the list query for a window
//!
//! Every transition is followed by a page-1 refetch; the coordinator owns
//! that trigger.

use chrono::{Datelike, NaiveDate};
use log::info;
use serde::{Deserialize, Serialize};
use shared::ExpenseListQuery;

/// The active reporting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodWindow {
    /// No date filtering
    AllTime,
    /// A single calendar month; `month` is 1-12
    Month { year: i32, month: u32 },
}

impl PeriodWindow {
    /// Half-open date range `[first_of_month, first_of_next_month)` covered
    /// by this window. `None` for all-time.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match *self {
            PeriodWindow::AllTime => None,
            PeriodWindow::Month { year, month } => {
                let first = NaiveDate::from_ymd_opt(year, month, 1)?;
                let next_first = if month == 12 {
                    NaiveDate::from_ymd_opt(year + 1, 1, 1)?
                } else {
                    NaiveDate::from_ymd_opt(year, month + 1, 1)?
                };
                Some((first, next_first))
            }
        }
    }

    /// The window for the immediately preceding month. `None` for all-time,
    /// which has no predecessor.
    pub fn previous_month(&self) -> Option<PeriodWindow> {
        match *self {
            PeriodWindow::AllTime => None,
            PeriodWindow::Month { year, month } => Some(if month == 1 {
                PeriodWindow::Month {
                    year: year - 1,
                    month: 12,
                }
            } else {
                PeriodWindow::Month {
                    year,
                    month: month - 1,
                }
            }),
        }
    }

    /// Build the list query for this window. All-time omits date filters.
    pub fn query(&self, page_number: u32, page_size: u32) -> ExpenseListQuery {
        let range = self.date_range();
        ExpenseListQuery {
            page_number,
            page_size,
            from_date: range.map(|(from, _)| from),
            to_date: range.map(|(_, to)| to),
        }
    }
}

/// Month/all-time navigation state.
///
/// The concrete month fields are retained while all-time is active, so
/// `previous()` from all-time drops back to the last concrete month visited.
/// `toggle_all_time()` instead always re-enters at the real current month,
/// discarding prior navigation; that reset is the defined behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodSelector {
    year: i32,
    /// 1-12
    month: u32,
    all_time: bool,
}

impl PeriodSelector {
    /// Start at the real current calendar month.
    pub fn new() -> Self {
        let now = chrono::Local::now().date_naive();
        Self {
            year: now.year(),
            month: now.month(),
            all_time: false,
        }
    }

    pub fn current_window(&self) -> PeriodWindow {
        if self.all_time {
            PeriodWindow::AllTime
        } else {
            PeriodWindow::Month {
                year: self.year,
                month: self.month,
            }
        }
    }

    pub fn is_all_time(&self) -> bool {
        self.all_time
    }

    /// Whether `next()` is permitted. False at the real current month (the
    /// selector never shows future periods) and false during all-time, where
    /// there is no month to advance.
    pub fn can_go_next(&self) -> bool {
        if self.all_time {
            return false;
        }
        let now = chrono::Local::now().date_naive();
        self.year < now.year() || (self.year == now.year() && self.month < now.month())
    }

    /// Navigate one month back. From all-time this returns to the last
    /// concrete month visited without moving it.
    pub fn previous(&mut self) {
        if self.all_time {
            self.all_time = false;
        } else if self.month == 1 {
            self.month = 12;
            self.year -= 1;
        } else {
            self.month -= 1;
        }
        info!("📅 Period moved back to {}/{}", self.month, self.year);
    }

    /// Navigate one month forward. No-op when `can_go_next()` is false.
    pub fn next(&mut self) {
        if !self.can_go_next() {
            info!("📅 Ignoring next(): already at the current month");
            return;
        }
        if self.month == 12 {
            self.month = 1;
            self.year += 1;
        } else {
            self.month += 1;
        }
        info!("📅 Period moved forward to {}/{}", self.month, self.year);
    }

    /// Flip between all-time and the real current month.
    pub fn toggle_all_time(&mut self) {
        self.all_time = !self.all_time;
        if !self.all_time {
            let now = chrono::Local::now().date_naive();
            self.year = now.year();
            self.month = now.month();
        }
        info!(
            "📅 Period toggled to {}",
            if self.all_time { "all time" } else { "current month" }
        );
    }

    /// English name of the selected month, for hosts without an i18n layer.
    pub fn month_name(&self) -> &'static str {
        match self.month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "Unknown",
        }
    }
}

impl Default for PeriodSelector {
    fn default() -> Self {
        Self::new()
    }
}
