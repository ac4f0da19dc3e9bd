//! Versioned tariff policies
//!
//! A policy bundles the four quadrant schedules under an explicit name and
//! version. Only the five-zone policy ships; the older three-zone table is
//! not carried.

use super::schedule::{ZoneBlock, ZoneSchedule};
use super::zone::Zone;
use super::{DayKind, Quadrant, Season};
use crate::error::{Result, TariffError};
use serde::Serialize;
use std::borrow::Cow;

pub const FIVE_ZONE_NAME: &str = "five-zone";
pub const FIVE_ZONE_VERSION: u32 = 2;

const fn block(start: u8, zone: Zone) -> ZoneBlock {
    ZoneBlock::new(start, zone)
}

// The 22:00 block of every quadrant wraps through midnight to 06:00.
const HIGH_SEASON_WORKING: [ZoneBlock; 6] = [
    block(6, Zone::Two),
    block(7, Zone::One),
    block(14, Zone::Two),
    block(16, Zone::One),
    block(20, Zone::Two),
    block(22, Zone::Three),
];

const HIGH_SEASON_NON_WORKING: [ZoneBlock; 6] = [
    block(6, Zone::Three),
    block(7, Zone::Two),
    block(14, Zone::Three),
    block(16, Zone::Two),
    block(20, Zone::Three),
    block(22, Zone::Four),
];

const LOW_SEASON_WORKING: [ZoneBlock; 6] = [
    block(6, Zone::Three),
    block(7, Zone::Two),
    block(14, Zone::Three),
    block(16, Zone::Two),
    block(20, Zone::Three),
    block(22, Zone::Four),
];

const LOW_SEASON_NON_WORKING: [ZoneBlock; 6] = [
    block(6, Zone::Four),
    block(7, Zone::One),
    block(14, Zone::Two),
    block(16, Zone::One),
    block(20, Zone::Two),
    block(22, Zone::Five),
];

/// One schedule per (season, day kind) quadrant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadrantSchedules {
    pub high_season_working: ZoneSchedule,
    pub high_season_non_working: ZoneSchedule,
    pub low_season_working: ZoneSchedule,
    pub low_season_non_working: ZoneSchedule,
}

impl QuadrantSchedules {
    pub const fn get(&self, quadrant: Quadrant) -> &ZoneSchedule {
        match (quadrant.season, quadrant.day_kind) {
            (Season::High, DayKind::Working) => &self.high_season_working,
            (Season::High, DayKind::NonWorking) => &self.high_season_non_working,
            (Season::Low, DayKind::Working) => &self.low_season_working,
            (Season::Low, DayKind::NonWorking) => &self.low_season_non_working,
        }
    }
}

/// Name and version of a policy as exposed over the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PolicyInfo {
    pub name: String,
    pub version: u32,
}

/// Immutable, versioned set of zone schedules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TariffPolicy {
    name: Cow<'static, str>,
    version: u32,
    schedules: QuadrantSchedules,
}

impl TariffPolicy {
    /// The canonical five-zone policy
    pub const fn five_zone() -> Self {
        Self {
            name: Cow::Borrowed(FIVE_ZONE_NAME),
            version: FIVE_ZONE_VERSION,
            schedules: QuadrantSchedules {
                high_season_working: ZoneSchedule::from_static(&HIGH_SEASON_WORKING),
                high_season_non_working: ZoneSchedule::from_static(&HIGH_SEASON_NON_WORKING),
                low_season_working: ZoneSchedule::from_static(&LOW_SEASON_WORKING),
                low_season_non_working: ZoneSchedule::from_static(&LOW_SEASON_NON_WORKING),
            },
        }
    }

    /// Build a custom policy from already validated schedules
    pub fn new<S: Into<String>>(
        name: S,
        version: u32,
        schedules: QuadrantSchedules,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TariffError::validation(
                "policy.name",
                "Policy name cannot be empty",
            ));
        }
        Ok(Self {
            name: Cow::Owned(name),
            version,
            schedules,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn version(&self) -> u32 {
        self.version
    }

    /// `name@vN`, used in logs
    pub fn id(&self) -> String {
        format!("{}@v{}", self.name, self.version)
    }

    pub fn info(&self) -> PolicyInfo {
        PolicyInfo {
            name: self.name.to_string(),
            version: self.version,
        }
    }

    pub const fn schedules(&self) -> &QuadrantSchedules {
        &self.schedules
    }

    pub const fn schedule(&self, quadrant: Quadrant) -> &ZoneSchedule {
        self.schedules.get(quadrant)
    }

    /// Validate every quadrant schedule
    pub fn validate(&self) -> Result<()> {
        for quadrant in Quadrant::ALL {
            self.schedule(quadrant).validate().map_err(|e| {
                TariffError::validation(
                    format!("policy.{}", quadrant.key()),
                    e.to_string(),
                )
            })?;
        }
        Ok(())
    }
}

impl Default for TariffPolicy {
    fn default() -> Self {
        Self::five_zone()
    }
}
