use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire format for deadline and event timestamps, e.g. `2021-08-04 2359`.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H%M";

const DISPLAY_FORMAT: &str = "%b %d %Y, %H:%M";

/// Parse a timestamp in `yyyy-MM-dd HHmm` form.
///
/// Every field must be zero-padded to its full width. Days 29-31 past the
/// end of the month clamp to the month's last day, and `2400` is midnight
/// of the following day. Other out-of-range fields are rejected.
pub fn parse_date_time(input: &str) -> Option<NaiveDateTime> {
    let bytes = input.as_bytes();
    if bytes.len() != 15 {
        return None;
    }
    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        10 => *b == b' ',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return None;
    }

    let field = |range: std::ops::Range<usize>| input[range].parse::<u32>().ok();
    let year = i32::try_from(field(0..4)?).ok()?;
    let (month, day) = (field(5..7)?, field(8..10)?);
    let (hour, minute) = (field(11..13)?, field(13..15)?);

    if year < 1 || !(1..=12).contains(&month) || !(1..=31).contains(&day) || minute > 59 {
        return None;
    }
    let date = NaiveDate::from_ymd_opt(year, month, day.min(days_in_month(year, month)?))?;

    match hour {
        24 if minute == 0 => date.succ_opt()?.and_hms_opt(0, 0, 0),
        0..=23 => date.and_hms_opt(hour, minute, 0),
        _ => None,
    }
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    Some(NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?.day())
}

pub fn format_date_time(value: &NaiveDateTime) -> String {
    value.format(DATE_TIME_FORMAT).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskKind {
    Todo,
    Deadline {
        #[serde(with = "date_time_serde")]
        by: NaiveDateTime,
    },
    Event {
        #[serde(with = "date_time_serde")]
        at: NaiveDateTime,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub description: String,
    pub is_done: bool,
    #[serde(flatten)]
    pub kind: TaskKind,
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            is_done: false,
            kind: TaskKind::Todo,
        }
    }

    pub fn deadline(description: impl Into<String>, by: NaiveDateTime) -> Self {
        Self {
            description: description.into(),
            is_done: false,
            kind: TaskKind::Deadline { by },
        }
    }

    pub fn event(description: impl Into<String>, at: NaiveDateTime) -> Self {
        Self {
            description: description.into(),
            is_done: false,
            kind: TaskKind::Event { at },
        }
    }

    /// Single-letter tag shown in listings.
    pub fn tag(&self) -> char {
        match self.kind {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }

    pub fn mark_done(&mut self) {
        self.is_done = true;
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_done { 'X' } else { ' ' };
        write!(f, "[{}][{}] {}", self.tag(), status, self.description)?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", by.format(DISPLAY_FORMAT)),
            TaskKind::Event { at } => write!(f, " (at: {})", at.format(DISPLAY_FORMAT)),
        }
    }
}

mod date_time_serde {
    use super::{format_date_time, parse_date_time};
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date_time(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date_time(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid date time `{}`, expected yyyy-MM-dd HHmm", raw)))
    }
}
