//! Month-grid arithmetic and the scheduled-event list for the calendar screen.
//!
//! The grid starts on Sunday. "Today" is pinned to the sample data's
//! reference date so the highlighted cell and the event list agree.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use chrono::{Datelike, Months, NaiveDate};

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September", "October", "November", "December",
];

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Cards show at most this many events per day before "+N more".
pub const EVENTS_PER_DAY: usize = 2;

/// Reference "today" for the sample data.
#[must_use]
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 27).unwrap_or_default()
}

/// First day of the month being displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthCursor(NaiveDate);

impl Default for MonthCursor {
    fn default() -> Self {
        Self::containing(today())
    }
}

impl MonthCursor {
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }

    #[must_use]
    pub fn first(self) -> NaiveDate {
        self.0
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self(self.0.checked_sub_months(Months::new(1)).unwrap_or(self.0))
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.checked_add_months(Months::new(1)).unwrap_or(self.0))
    }

    /// e.g. `"December 2025"`.
    #[must_use]
    pub fn title(self) -> String {
        let name = MONTH_NAMES.get(self.0.month0() as usize).copied().unwrap_or_default();
        format!("{name} {}", self.0.year())
    }

    #[must_use]
    pub fn days_in_month(self) -> u32 {
        self.next().0.signed_duration_since(self.0).num_days().try_into().unwrap_or(0)
    }

    /// Empty cells before the 1st, counted from Sunday.
    #[must_use]
    pub fn leading_blanks(self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Grid cells: `None` for the leading blanks, then each day of the month.
    #[must_use]
    pub fn cells(self) -> Vec<Option<NaiveDate>> {
        let blanks = (0..self.leading_blanks()).map(|_| None);
        let days = self.0.iter_days().take_while(move |d| d.month() == self.0.month()).map(Some);
        blanks.chain(days).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventStatus {
    Completed,
    Urgent,
    Upcoming,
    Scheduled,
}

impl EventStatus {
    pub const ALL: [Self; 4] = [Self::Completed, Self::Urgent, Self::Upcoming, Self::Scheduled];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Urgent => "urgent",
            Self::Upcoming => "upcoming",
            Self::Scheduled => "scheduled",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Urgent => "Urgent",
            Self::Upcoming => "Upcoming",
            Self::Scheduled => "Scheduled",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarEvent {
    pub date: NaiveDate,
    pub title: &'static str,
    pub status: EventStatus,
}

/// Sample schedule around the reference date.
#[must_use]
pub fn events() -> Vec<CalendarEvent> {
    [
        ((2025, 12, 28), "Forklift #A-203 - Oil Change", EventStatus::Urgent),
        ((2025, 12, 30), "Generator B-45 - Filter Replacement", EventStatus::Upcoming),
        ((2026, 1, 2), "HVAC Unit #12 - Inspection", EventStatus::Upcoming),
        ((2026, 1, 5), "Truck Fleet #7 - Tire Rotation", EventStatus::Scheduled),
        ((2026, 1, 8), "Compressor C-19 - Pressure Check", EventStatus::Scheduled),
        ((2025, 12, 15), "Forklift #A-203 - Completed", EventStatus::Completed),
        ((2025, 12, 12), "Generator B-45 - Completed", EventStatus::Completed),
        ((2025, 12, 10), "Compressor C-19 - Emergency Repair", EventStatus::Completed),
    ]
    .into_iter()
    .filter_map(|((y, m, d), title, status)| {
        NaiveDate::from_ymd_opt(y, m, d).map(|date| CalendarEvent { date, title, status })
    })
    .collect()
}

/// Events falling on `date`, in list order.
#[must_use]
pub fn events_on(events: &[CalendarEvent], date: NaiveDate) -> Vec<&CalendarEvent> {
    events.iter().filter(|e| e.date == date).collect()
}
