use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::CalendarConfig;

/// Days the landlord has to refund or account for the deposit after surrender.
pub const RETURN_DEADLINE_DAYS: i64 = 30;

/// Source of "today" for every analysis run.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall clock projected onto the service's fixed civil calendar.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(calendar: CalendarConfig) -> Self {
        Self {
            offset: calendar.offset(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(CalendarConfig::default())
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }
}

/// Clock pinned to one date, used by the CLI `--today` override and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Elapsed-time view of a dispute. `None` fields mean the timeline is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub move_out_date: Option<NaiveDate>,
    pub days_since_move_out: Option<i64>,
    pub past_deadline: Option<bool>,
    pub deadline_date: Option<NaiveDate>,
    pub days_until_deadline: Option<i64>,
}

impl Timeline {
    pub fn compute(raw_move_out: &str, today: NaiveDate) -> Self {
        let Some(move_out_date) = parse_intake_date(raw_move_out) else {
            return Self::unknown();
        };

        let days_since_move_out = (today - move_out_date).num_days();
        let deadline_date = move_out_date.checked_add_signed(Duration::days(RETURN_DEADLINE_DAYS));

        Self {
            move_out_date: Some(move_out_date),
            days_since_move_out: Some(days_since_move_out),
            past_deadline: Some(days_since_move_out > RETURN_DEADLINE_DAYS),
            deadline_date,
            days_until_deadline: Some(RETURN_DEADLINE_DAYS - days_since_move_out),
        }
    }

    pub const fn unknown() -> Self {
        Self {
            move_out_date: None,
            days_since_move_out: None,
            past_deadline: None,
            deadline_date: None,
            days_until_deadline: None,
        }
    }

    pub const fn is_known(&self) -> bool {
        self.days_since_move_out.is_some()
    }

    /// Known and strictly beyond the statutory window.
    pub fn is_past_deadline(&self) -> bool {
        self.past_deadline == Some(true)
    }

    /// Known and still inside the statutory window.
    pub fn is_within_deadline(&self) -> bool {
        self.past_deadline == Some(false)
    }

    pub fn days_at_least(&self, days: i64) -> bool {
        self.days_since_move_out
            .map(|elapsed| elapsed >= days)
            .unwrap_or(false)
    }

    /// Days beyond the deadline, zero while the window is still open.
    pub fn days_overdue(&self) -> Option<i64> {
        self.days_since_move_out
            .map(|elapsed| (elapsed - RETURN_DEADLINE_DAYS).max(0))
    }
}

/// Parse the date formats the intake forms emit.
pub fn parse_intake_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%m/%d/%Y"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|stamp| stamp.date_naive())
        })
        .or_else(|| {
            trimmed
                .get(..10)
                .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        })
}
