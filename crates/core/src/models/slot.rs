use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};

use crate::errors::StudioError;

/// Hour-granularity time of day.
///
/// Parsed from `"H"`, `"HH"`, `"H:MM"` or `"HH:MM"`. Anything after the
/// colon is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u32,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        Self { hour }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }
}

impl FromStr for TimeOfDay {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hour_part = s.trim().split(':').next().unwrap_or_default();
        let hour = hour_part.parse::<u32>().map_err(|_| {
            StudioError::Validation(format!("Invalid time of day '{}': expected HH:MM", s))
        })?;
        Ok(Self { hour })
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:00", self.hour)
    }
}

/// A bookable half-open hour `[start, start + 1)`.
///
/// Rendered and serialized as `"9:00 - 10:00"`, the same string stored in
/// booking records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot {
    start_hour: u32,
}

impl Slot {
    pub fn starting_at(start_hour: u32) -> Self {
        Self { start_hour }
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.start_hour + 1
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:00 - {}:00", self.start_hour, self.end_hour())
    }
}

impl Serialize for Slot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
