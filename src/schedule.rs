//! Schedule Utilities
//!
//! Timeline entries and "happening now" detection.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEvent {
    /// Local time as "HH:MM"
    pub time: String,
    pub title: String,
    pub description: String,
}

impl ScheduleEvent {
    pub fn new(time: &str, title: &str, description: &str) -> Self {
        Self {
            time: time.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    pub fn parsed_time(&self) -> Option<NaiveTime> {
        parse_time(&self.time)
    }
}

pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").ok()
}

/// Index of the entry that is happening at `now`
///
/// Only on the event date: the entry with the latest time not after
/// `now`. Later entries win ties. Unparsable times never match.
pub fn current_index(events: &[ScheduleEvent], event_date: Option<NaiveDate>, now: NaiveDateTime) -> Option<usize> {
    if event_date != Some(now.date()) {
        return None;
    }
    events
        .iter()
        .enumerate()
        .filter_map(|(i, e)| e.parsed_time().map(|t| (t, i)))
        .filter(|(t, _)| *t <= now.time())
        .max()
        .map(|(_, i)| i)
}

/// Browser local time, minute precision
pub fn local_now() -> Option<NaiveDateTime> {
    let date = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(date.get_full_year() as i32, date.get_month() + 1, date.get_date())?
        .and_hms_opt(date.get_hours(), date.get_minutes(), 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events() -> Vec<ScheduleEvent> {
        vec![
            ScheduleEvent::new("09:05", "Depart", ""),
            ScheduleEvent::new("11:20", "Arrive", ""),
            ScheduleEvent::new("soon", "Surprise", ""),
            ScheduleEvent::new("13:30", "Missions", "Team A: museum\nTeam B: tower"),
        ]
    }

    fn at(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        date.and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("09:05"), NaiveTime::from_hms_opt(9, 5, 0));
        assert_eq!(parse_time(" 17:55 "), NaiveTime::from_hms_opt(17, 55, 0));
        assert_eq!(parse_time("soon"), None);
        assert_eq!(parse_time("25:00"), None);
    }

    #[test]
    fn test_current_index_on_event_day() {
        let day = NaiveDate::from_ymd_opt(2025, 11, 27).unwrap();
        let e = events();
        assert_eq!(current_index(&e, Some(day), at(day, 8, 0)), None);
        assert_eq!(current_index(&e, Some(day), at(day, 9, 5)), Some(0));
        assert_eq!(current_index(&e, Some(day), at(day, 12, 0)), Some(1));
        assert_eq!(current_index(&e, Some(day), at(day, 22, 0)), Some(3));
    }

    #[test]
    fn test_current_index_other_days() {
        let day = NaiveDate::from_ymd_opt(2025, 11, 27).unwrap();
        let other = NaiveDate::from_ymd_opt(2025, 11, 28).unwrap();
        assert_eq!(current_index(&events(), Some(day), at(other, 12, 0)), None);
        assert_eq!(current_index(&events(), None, at(day, 12, 0)), None);
    }

    #[test]
    fn test_same_time_prefers_later_entry() {
        let day = NaiveDate::from_ymd_opt(2025, 11, 27).unwrap();
        let e = vec![
            ScheduleEvent::new("19:30", "Arrive Seoul", ""),
            ScheduleEvent::new("19:30", "Wrap up", ""),
        ];
        assert_eq!(current_index(&e, Some(day), at(day, 20, 0)), Some(1));
    }
}
