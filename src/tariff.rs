//! Tariff zone classification
//!
//! Maps a calendar instant to the active tariff zone, a human label, and the
//! time left until the zone next changes. Classification is a pure function
//! of the instant's month, weekday, hour and minute under an injected
//! [`TariffPolicy`]; the canonical policy is [`TariffPolicy::five_zone`].
//!
//! ```
//! use chrono::NaiveDate;
//! use tariff_zones::tariff::{classify, Zone};
//!
//! let at = NaiveDate::from_ymd_opt(2024, 1, 15)
//!     .and_then(|d| d.and_hms_opt(8, 0, 0))
//!     .unwrap();
//! let result = classify(&at);
//! assert_eq!(result.zone, Zone::One);
//! assert_eq!(result.remaining_block_time.to_string(), "6h:0m");
//! ```

mod policy;
mod schedule;
mod zone;


pub use policy::{FIVE_ZONE_NAME, FIVE_ZONE_VERSION, PolicyInfo, QuadrantSchedules, TariffPolicy};
pub use schedule::{ZoneBlock, ZoneRule, ZoneSchedule};
pub use zone::Zone;

use chrono::{Datelike, TimeDelta, Timelike, Weekday};
use schedule::MINUTES_PER_DAY;
use serde::{Serialize, Serializer};
use std::fmt;

/// Tariff season, a function of the month only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Season {
    /// November through February
    High,
    Low,
}

impl Season {
    /// Season for a 1-based month number
    pub const fn from_month(month: u32) -> Self {
        match month {
            11 | 12 | 1 | 2 => Self::High,
            _ => Self::Low,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High Season",
            Self::Low => "Low Season",
        }
    }
}

/// Working day or weekend, a function of the weekday only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum DayKind {
    Working,
    /// Saturday and Sunday
    NonWorking,
}

impl DayKind {
    pub const fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sat | Weekday::Sun => Self::NonWorking,
            _ => Self::Working,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Working => "Working Day",
            Self::NonWorking => "Non-Working Day",
        }
    }
}

/// (season, day kind) pair selecting one schedule of a policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quadrant {
    pub season: Season,
    pub day_kind: DayKind,
}

impl Quadrant {
    pub const ALL: [Self; 4] = [
        Self::new(Season::High, DayKind::Working),
        Self::new(Season::High, DayKind::NonWorking),
        Self::new(Season::Low, DayKind::Working),
        Self::new(Season::Low, DayKind::NonWorking),
    ];

    pub const fn new(season: Season, day_kind: DayKind) -> Self {
        Self { season, day_kind }
    }

    /// Quadrant of a calendar instant
    pub fn of<T: Datelike>(at: &T) -> Self {
        Self::new(
            Season::from_month(at.month()),
            DayKind::from_weekday(at.weekday()),
        )
    }

    /// Stable key, e.g. `high_season_working`
    pub const fn key(self) -> &'static str {
        match (self.season, self.day_kind) {
            (Season::High, DayKind::Working) => "high_season_working",
            (Season::High, DayKind::NonWorking) => "high_season_non_working",
            (Season::Low, DayKind::Working) => "low_season_working",
            (Season::Low, DayKind::NonWorking) => "low_season_non_working",
        }
    }

    /// `Zone N (<season> <day kind>)`
    pub fn zone_label(self, zone: Zone) -> String {
        format!(
            "Zone {} ({} {})",
            zone,
            self.season.label(),
            self.day_kind.label()
        )
    }
}

/// Whole minutes until the next zone boundary, always below one day.
///
/// Displays and serializes as `{hours}h:{minutes}m`, e.g. `6h:0m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RemainingBlockTime {
    total_minutes: u32,
}

impl RemainingBlockTime {
    pub const fn from_minutes(minutes: u32) -> Self {
        Self {
            total_minutes: minutes % MINUTES_PER_DAY,
        }
    }

    pub const fn total_minutes(self) -> u32 {
        self.total_minutes
    }

    pub const fn hours(self) -> u32 {
        self.total_minutes / 60
    }

    /// Leftover minutes after whole hours
    pub const fn minutes(self) -> u32 {
        self.total_minutes % 60
    }

    pub fn to_duration(self) -> TimeDelta {
        TimeDelta::minutes(i64::from(self.total_minutes))
    }
}

impl fmt::Display for RemainingBlockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h:{}m", self.hours(), self.minutes())
    }
}

impl Serialize for RemainingBlockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of classifying one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TariffResult {
    /// 1 (most expensive) to 5 (cheapest)
    #[cfg_attr(feature = "openapi", schema(value_type = u8, minimum = 1, maximum = 5))]
    pub zone: Zone,
    pub label: String,
    /// Time until the next boundary, formatted `{h}h:{m}m`
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "6h:0m"))]
    pub remaining_block_time: RemainingBlockTime,
}

/// Whole-day view of the active quadrant, used to render the dial
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DaySchedule {
    pub policy: PolicyInfo,
    pub season: Season,
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    pub season_label: &'static str,
    pub day_kind: DayKind,
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    pub day_kind_label: &'static str,
    /// Zone for each hour 0..24
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<u8>))]
    pub hours: Vec<Zone>,
    pub boundaries: Vec<u8>,
    pub minute_of_day: u32,
    pub tariff: TariffResult,
}

/// Stateless classifier over an injected policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TariffClassifier {
    policy: TariffPolicy,
}

static CANONICAL: TariffClassifier = TariffClassifier::new(TariffPolicy::five_zone());

impl TariffClassifier {
    pub const fn new(policy: TariffPolicy) -> Self {
        Self { policy }
    }

    /// Shared classifier for the canonical policy
    pub fn canonical() -> &'static Self {
        &CANONICAL
    }

    pub const fn policy(&self) -> &TariffPolicy {
        &self.policy
    }

    /// Classify a calendar instant
    pub fn classify<T: Datelike + Timelike>(&self, at: &T) -> TariffResult {
        let quadrant = Quadrant::of(at);
        let schedule = self.policy.schedule(quadrant);
        let (hour, minute) = (at.hour(), at.minute());
        let zone = schedule.zone_at(hour);
        TariffResult {
            zone,
            label: quadrant.zone_label(zone),
            remaining_block_time: schedule.remaining(hour, minute),
        }
    }

    /// Classification plus the full hourly layout of the instant's day
    pub fn day_schedule<T: Datelike + Timelike>(&self, at: &T) -> DaySchedule {
        let quadrant = Quadrant::of(at);
        let schedule = self.policy.schedule(quadrant);
        DaySchedule {
            policy: self.policy.info(),
            season: quadrant.season,
            season_label: quadrant.season.label(),
            day_kind: quadrant.day_kind,
            day_kind_label: quadrant.day_kind.label(),
            hours: schedule.hourly().to_vec(),
            boundaries: schedule.boundary_hours().collect(),
            minute_of_day: at.hour() * 60 + at.minute(),
            tariff: self.classify(at),
        }
    }
}

impl Default for TariffClassifier {
    fn default() -> Self {
        Self::new(TariffPolicy::five_zone())
    }
}

/// Classify with the canonical five-zone policy
pub fn classify<T: Datelike + Timelike>(at: &T) -> TariffResult {
    CANONICAL.classify(at)
}
