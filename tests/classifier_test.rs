use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};
use tariff_zones::tariff::{
    DayKind, Season, TariffClassifier, TariffPolicy, Zone, ZoneBlock, ZoneSchedule,
};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

#[test]
fn winter_weekday_morning_peak() {
    let result = tariff_zones::classify(&at(2024, 1, 15, 8, 0));
    assert_eq!(result.zone, Zone::One);
    assert!(result.label.contains("High Season Working Day"));
    assert_eq!(result.remaining_block_time.to_string(), "6h:0m");
}

#[test]
fn summer_saturday_before_dawn() {
    let result = tariff_zones::classify(&at(2024, 7, 6, 5, 45));
    assert_eq!(result.zone, Zone::Five);
    assert_eq!(result.remaining_block_time.to_string(), "0h:15m");
}

#[test]
fn december_saturday_late_evening() {
    let result = tariff_zones::classify(&at(2024, 12, 21, 23, 0));
    assert_eq!(result.zone, Zone::Four);
    assert_eq!(result.remaining_block_time.to_string(), "7h:0m");
}

#[test]
fn season_edges() {
    assert_eq!(Season::from_month(2), Season::High);
    assert_eq!(Season::from_month(3), Season::Low);
    assert_eq!(Season::from_month(10), Season::Low);
    assert_eq!(Season::from_month(11), Season::High);
}

#[test]
fn sunday_is_non_working() {
    // 2024-01-14 is a Sunday
    let schedule = TariffClassifier::canonical().day_schedule(&at(2024, 1, 14, 12, 0));
    assert_eq!(schedule.day_kind, DayKind::NonWorking);
    assert_eq!(schedule.day_kind_label, "Non-Working Day");
    assert_eq!(schedule.tariff.label, "Zone 2 (High Season Non-Working Day)");
}

#[test]
fn timezone_aware_input_uses_its_wall_clock() {
    let instant = Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap();
    let naive = at(2024, 1, 15, 8, 0);
    assert_eq!(
        tariff_zones::classify(&instant),
        tariff_zones::classify(&naive)
    );
}

#[test]
fn sampled_minutes_of_a_year_are_well_formed() {
    let classifier = TariffClassifier::canonical();
    let mut day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    while day.year() == 2024 {
        for minute in (0..1440).step_by(7) {
            let t = day.and_hms_opt(minute / 60, minute % 60, 0).unwrap();
            let result = classifier.classify(&t);
            assert!((1..=5).contains(&result.zone.number()));
            assert!(!result.label.is_empty());
            assert!(result.remaining_block_time.total_minutes() < 1440);
        }
        day = day.succ_opt().unwrap();
    }
}

#[test]
fn custom_policy_is_injected() {
    let flat = ZoneSchedule::new(vec![ZoneBlock::new(0, Zone::Three), ZoneBlock::new(12, Zone::Four)])
        .unwrap();
    let schedules = tariff_zones::tariff::QuadrantSchedules {
        high_season_working: flat.clone(),
        high_season_non_working: flat.clone(),
        low_season_working: flat.clone(),
        low_season_non_working: flat,
    };
    let policy = TariffPolicy::new("half-day", 1, schedules).unwrap();
    let classifier = TariffClassifier::new(policy);

    let morning = classifier.classify(&at(2024, 7, 8, 9, 30));
    assert_eq!(morning.zone, Zone::Three);
    assert_eq!(morning.remaining_block_time.to_string(), "2h:30m");

    let evening = classifier.classify(&at(2024, 7, 8, 23, 0));
    assert_eq!(evening.zone, Zone::Four);
    assert_eq!(evening.remaining_block_time.to_string(), "1h:0m");
    assert_eq!(classifier.policy().id(), "half-day@v1");
}
