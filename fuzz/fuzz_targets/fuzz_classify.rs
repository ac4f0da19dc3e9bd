#![no_main]
use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;
use tariff_zones::tariff::TariffClassifier;

fuzz_target!(|data: &[u8]| {
    if data.len() < 6 {
        return;
    }

    // year, month, day, hour, minute from raw bytes
    let year = 1970 + i32::from(u16::from_be_bytes([data[0], data[1]]) % 200);
    let month = u32::from(data[2] % 12) + 1;
    let day = u32::from(data[3] % 31) + 1;
    let hour = u32::from(data[4] % 24);
    let minute = u32::from(data[5] % 60);

    let Some(at) = NaiveDate::from_ymd_opt(year, month, day).and_then(|d| d.and_hms_opt(hour, minute, 0))
    else {
        return;
    };

    let classifier = TariffClassifier::canonical();
    let result = classifier.classify(&at);
    assert!((1..=5).contains(&result.zone.number()));
    assert!(!result.label.is_empty());
    assert!(result.remaining_block_time.total_minutes() < 24 * 60);

    let schedule = classifier.day_schedule(&at);
    assert_eq!(schedule.hours[hour as usize], result.zone);
    assert_eq!(schedule.tariff, result);
});
