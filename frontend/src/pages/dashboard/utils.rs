use crate::api::{RequestKind, RequestRecord, RequestStatus};
use crate::utils::time::today_in_app_tz;
use chrono::{Datelike, Duration, NaiveDate};

/// Calendar month shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    pub fn current() -> Self {
        Self::containing(today_in_app_tz())
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn label(&self) -> String {
        self.first_day()
            .map(|day| day.format("%B %Y").to_string())
            .unwrap_or_default()
    }
}

/// Weeks of the month, Sunday first. Days outside the month are `None`.
pub fn calendar_weeks(cursor: MonthCursor) -> Vec<[Option<NaiveDate>; 7]> {
    let Some(first) = cursor.first_day() else {
        return Vec::new();
    };
    let offset = first.weekday().num_days_from_sunday() as i64;
    let mut weeks = Vec::new();
    let mut start = first - Duration::days(offset);
    loop {
        let mut week = [None; 7];
        for (index, slot) in week.iter_mut().enumerate() {
            let day = start + Duration::days(index as i64);
            if day.month() == cursor.month && day.year() == cursor.year {
                *slot = Some(day);
            }
        }
        if week.iter().all(Option::is_none) {
            break;
        }
        weeks.push(week);
        start += Duration::days(7);
    }
    weeks
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEntry {
    pub key: String,
    pub kind: RequestKind,
    pub label: String,
}

/// Approved requests whose schedule covers `day`.
pub fn approved_on(records: &[RequestRecord], day: NaiveDate) -> Vec<CalendarEntry> {
    records
        .iter()
        .filter(|record| record.status() == Some(RequestStatus::Approved))
        .filter(|record| {
            let (from, to) = record.date_span();
            from <= day && day <= to
        })
        .map(|record| CalendarEntry {
            key: record.key(),
            kind: record.kind(),
            label: format!(
                "{}: {}",
                record.kind().abbreviation(),
                record.requester_names().join(", ")
            ),
        })
        .collect()
}

pub fn kind_chip_class(kind: RequestKind) -> &'static str {
    match kind {
        RequestKind::TravelOrder => "bg-status-info-bg text-status-info-text",
        RequestKind::OfficialBusiness => "bg-status-success-bg text-status-success-text",
        RequestKind::PassSlip => "bg-status-warning-bg text-status-warning-text",
    }
}

/// Bar length relative to the largest count, in whole percent.
pub fn bar_width_percent(count: usize, max: usize) -> u32 {
    if max == 0 {
        return 0;
    }
    ((count as f64 / max as f64) * 100.0).round().clamp(0.0, 100.0) as u32
}
