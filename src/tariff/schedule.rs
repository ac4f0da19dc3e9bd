//! Per-quadrant zone schedules and boundary arithmetic

use super::RemainingBlockTime;
use super::zone::Zone;
use crate::error::{Result, TariffError};
use serde::Serialize;
use std::borrow::Cow;

pub(crate) const HOURS_PER_DAY: u32 = 24;
pub(crate) const MINUTES_PER_DAY: u32 = 1440;

/// A block of constant zone starting at `start` (hour of day) and running
/// until the next block's start hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZoneBlock {
    pub start: u8,
    pub zone: Zone,
}

impl ZoneBlock {
    pub const fn new(start: u8, zone: Zone) -> Self {
        Self { start, zone }
    }
}

/// Half-open hour range `[start, end)`. When `end <= start` the range wraps
/// across midnight; `start == end` covers the whole day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZoneRule {
    pub start: u8,
    pub end: u8,
    pub zone: Zone,
}

impl ZoneRule {
    pub const fn wraps(&self) -> bool {
        self.end <= self.start
    }

    /// Whether the rule covers the given hour of day
    pub const fn contains(&self, hour: u32) -> bool {
        let start = self.start as u32;
        let end = self.end as u32;
        if start == end {
            true
        } else if start < end {
            start <= hour && hour < end
        } else {
            hour >= start || hour < end
        }
    }
}

/// Ordered zone blocks for one (season, day kind) quadrant.
///
/// Blocks are kept in strictly ascending start order and the last block
/// wraps into the next day up to the first block's start. That makes the
/// schedule exhaustive and non-overlapping over the 24 hourly slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSchedule {
    blocks: Cow<'static, [ZoneBlock]>,
}

impl ZoneSchedule {
    /// Build a schedule from a compiled-in table.
    ///
    /// The table must satisfy the same rules `new` checks; the built-in
    /// tables are covered by `validate` in tests.
    pub(crate) const fn from_static(blocks: &'static [ZoneBlock]) -> Self {
        Self {
            blocks: Cow::Borrowed(blocks),
        }
    }

    /// Build and validate a schedule
    pub fn new(blocks: Vec<ZoneBlock>) -> Result<Self> {
        let schedule = Self {
            blocks: Cow::Owned(blocks),
        };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Check ordering, hour range, and that every boundary is a real zone change
    pub fn validate(&self) -> Result<()> {
        let blocks = self.blocks();
        if blocks.is_empty() {
            return Err(TariffError::validation(
                "schedule.blocks",
                "At least one block is required",
            ));
        }
        for block in blocks {
            if u32::from(block.start) >= HOURS_PER_DAY {
                return Err(TariffError::validation(
                    "schedule.blocks.start",
                    format!("Start hour {} is outside 0-23", block.start),
                ));
            }
        }
        for pair in blocks.windows(2) {
            if pair[0].start >= pair[1].start {
                return Err(TariffError::validation(
                    "schedule.blocks.start",
                    format!(
                        "Start hours must be strictly ascending ({} then {})",
                        pair[0].start, pair[1].start
                    ),
                ));
            }
        }
        if blocks.len() > 1 {
            let ring = blocks.iter().zip(blocks.iter().cycle().skip(1));
            for (current, next) in ring {
                if current.zone == next.zone {
                    return Err(TariffError::validation(
                        "schedule.blocks.zone",
                        format!(
                            "Blocks at {} and {} share zone {}; merge them",
                            current.start, next.start, current.zone
                        ),
                    ));
                }
            }
        }
        Ok(())
    }

    pub fn blocks(&self) -> &[ZoneBlock] {
        &self.blocks
    }

    /// The block covering `hour`. Hours before the first start belong to
    /// the last block, which wraps across midnight.
    pub fn block_at(&self, hour: u32) -> ZoneBlock {
        let blocks = self.blocks();
        match blocks.iter().rev().find(|b| u32::from(b.start) <= hour) {
            Some(block) => *block,
            // schedules are never empty
            None => blocks[blocks.len() - 1],
        }
    }

    pub fn zone_at(&self, hour: u32) -> Zone {
        self.block_at(hour).zone
    }

    /// Half-open hour rules implied by the blocks, in start order
    pub fn rules(&self) -> impl Iterator<Item = ZoneRule> + '_ {
        let blocks = self.blocks();
        let first_start = blocks.first().map_or(0, |b| b.start);
        blocks.iter().enumerate().map(move |(i, block)| ZoneRule {
            start: block.start,
            end: blocks.get(i + 1).map_or(first_start, |next| next.start),
            zone: block.zone,
        })
    }

    /// Hours at which the zone changes, ascending
    pub fn boundary_hours(&self) -> impl Iterator<Item = u8> + '_ {
        self.blocks().iter().map(|b| b.start)
    }

    /// Next boundary hour from `hour:minute`. A boundary hit exactly on the
    /// hour counts as the next boundary. Values of 24 and above refer to the
    /// following day.
    pub fn next_boundary(&self, hour: u32, minute: u32) -> u32 {
        let first = self.boundary_hours().next().map_or(0, u32::from);
        self.boundary_hours()
            .map(u32::from)
            .find(|&b| hour < b || (hour == b && minute == 0))
            .unwrap_or(first + HOURS_PER_DAY)
    }

    /// Time left in the current block
    pub fn remaining(&self, hour: u32, minute: u32) -> RemainingBlockTime {
        let now = i64::from(hour * 60 + minute);
        let next = i64::from(self.next_boundary(hour, minute) * 60);
        let day = i64::from(MINUTES_PER_DAY);
        RemainingBlockTime::from_minutes((next - now + day).rem_euclid(day) as u32)
    }

    /// Zone for each of the 24 hours of the day
    pub fn hourly(&self) -> [Zone; 24] {
        let mut hours = [Zone::One; 24];
        for (hour, zone) in (0..HOURS_PER_DAY).zip(hours.iter_mut()) {
            *zone = self.zone_at(hour);
        }
        hours
    }
}
