//! Event Configuration
//!
//! The immutable event data: hero, default mission dataset, codebook,
//! map markers and schedule. Built once in `main` and handed to the
//! component tree through context.

use std::collections::HashMap;

use chrono::NaiveDate;
use mission_core::{Codebook, Group, SessionConfig, DEFAULT_CODE_LENGTH};

use crate::map::{MapConfig, MapLocation};
use crate::schedule::ScheduleEvent;

#[derive(Debug, Clone, PartialEq)]
pub struct HeroInfo {
    pub title: String,
    pub subtitle: String,
    pub date_label: String,
    pub location: String,
    pub image_url: String,
}

#[derive(Debug, Clone)]
pub struct EventConfig {
    pub hero: HeroInfo,
    /// Day the schedule refers to; `None` disables the "now" marker
    pub event_date: Option<NaiveDate>,
    /// Default mission dataset, also the schema for stored progress
    pub groups: Vec<Group>,
    pub codebook: Codebook,
    pub map: MapConfig,
    pub schedule: Vec<ScheduleEvent>,
    pub session: SessionConfig,
}

impl EventConfig {
    /// The Gyeongju trip
    pub fn builtin() -> Self {
        let groups = vec![
            Group::new("A", "🗽럼프 팀", "#ef4444")
                .with_members(["aren", "geralt", "lucy", "amy"])
                .with_mission(1, "첨성대에서 재미있는 단체 셀카 찍기")
                .with_mission(2, "최고의 황남빵 찾아서 먹기")
                .with_mission(3, "저녁 코드 퀴즈 우승하기"),
            Group::new("B", "🧧진핑 팀", "#3b82f6")
                .with_members(["jay", "jayce", "jinx", "vayne"])
                .with_mission(1, "동궁과 월지에서 10초 브이로그 찍기")
                .with_mission(2, "만원 이하로 독특한 기념품 사기")
                .with_mission(3, "KTX에서 버그 픽스 커밋하기"),
        ];

        let codebook = Codebook::new(DEFAULT_CODE_LENGTH)
            .with_code("A", "9771")
            .with_code("B", "0821");

        let mut locations = HashMap::new();
        locations.insert(
            "A".to_string(),
            vec![
                MapLocation::new("A1", "첨성대", 45.0, 55.0).with_search_link(),
                MapLocation::new("A2", "황남빵 맛집", 35.0, 50.0),
                MapLocation::new("A3", "퀴즈 행사장", 50.0, 60.0),
            ],
        );
        locations.insert(
            "B".to_string(),
            vec![
                MapLocation::new("B1", "동궁과 월지", 60.0, 40.0).with_search_link(),
                MapLocation::new("B2", "기념품 가게", 38.0, 52.0),
                MapLocation::new("B3", "신경주역", 20.0, 20.0).with_search_link(),
            ],
        );

        let schedule = vec![
            ScheduleEvent::new("09:05", "출발", "수서역 SRT (동탄역 09:21분 도착)"),
            ScheduleEvent::new("11:20", "경주역 도착", "경주역 도착. 쏘카 픽업 후 이동. (역내 황남빵 구매)"),
            ScheduleEvent::new("12:00", "점심식사", "요석궁1779. 천미 天味 Chunmi."),
            ScheduleEvent::new(
                "13:30",
                "팀별 미션수행",
                "🗽럼프팀: 경주박물관 → 월정교/최부자댁 → 설월당\n🧧진핑팀: 황리단길 → 경주타워/황룡원 → 브레스커피웍스",
            ),
            ScheduleEvent::new("16:30", "미션종료", "경주역 쏘카 반납 후 집합. (KTX 16:50 출발)"),
            ScheduleEvent::new("17:55", "대전 환승", "역내 성심당에서 빵 구매. (KTX 18:25 출발)"),
            ScheduleEvent::new("19:30", "서울역 도착", ""),
        ];

        Self {
            hero: HeroInfo {
                title: "같이기차, 낭만여행".to_string(),
                subtitle: "함께·가치·낭만".to_string(),
                date_label: "2025년 11월 27일".to_string(),
                location: "대한민국 경주".to_string(),
                image_url: "public/hero.jpg".to_string(),
            },
            event_date: NaiveDate::from_ymd_opt(2025, 11, 27),
            groups,
            codebook,
            map: MapConfig {
                image_url: "https://images.unsplash.com/photo-1736117703416-f260ee174bac?fit=max&fm=jpg&q=80&w=1080".to_string(),
                locations,
            },
            schedule,
            session: SessionConfig::default(),
        }
    }

    /// Group shown first on the map
    pub fn first_group_id(&self) -> String {
        self.groups.first().map(|g| g.id.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_group_has_a_code_and_markers() {
        let config = EventConfig::builtin();
        for group in &config.groups {
            assert!(config.codebook.contains(&group.id), "missing code for {}", group.id);
            assert!(!config.map.locations_for(&group.id).is_empty());
        }
        assert_eq!(config.first_group_id(), "A");
    }

    #[test]
    fn test_default_dataset_shape() {
        let config = EventConfig::builtin();
        let ids: HashSet<&str> = config.groups.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids.len(), config.groups.len());
        for group in &config.groups {
            assert_eq!(group.missions[0].id, mission_core::FIRST_MISSION_ID);
            assert!(group.missions.iter().all(|m| !m.completed));
            let mission_ids: HashSet<u32> = group.missions.iter().map(|m| m.id).collect();
            assert_eq!(mission_ids.len(), group.missions.len());
        }
    }

    #[test]
    fn test_progress_uses_default_storage_key() {
        let config = EventConfig::builtin();
        assert_eq!(config.session.storage_key, mission_core::DEFAULT_STORAGE_KEY);
        assert_eq!(config.session.storage_key, "trip-missions");
    }

    #[test]
    fn test_schedule_times_parse() {
        let config = EventConfig::builtin();
        assert!(config.schedule.iter().all(|e| e.parsed_time().is_some()));
    }
}
