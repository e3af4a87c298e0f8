//! Enumeration types shared between providers and the wire format.
//!
//! Wire spellings follow the upstream game server, which reports its
//! enum constants in `SCREAMING_SNAKE_CASE` (`FULL_MOON`, `WINTER`).

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Account linking
// ---------------------------------------------------------------------------

/// Which side of a Discord/Minecraft account link a query starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "bindings/")]
pub enum LinkType {
    /// The target is a Discord user ID (snowflake).
    Discord,
    /// The target is a Minecraft account UUID.
    Minecraft,
}

/// Returned when a string names no [`LinkType`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown link type: {0}")]
pub struct UnknownLinkType(pub String);

impl FromStr for LinkType {
    type Err = UnknownLinkType;

    /// Case-insensitive: `discord`, `Discord`, and `DISCORD` are equal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("discord") {
            Ok(Self::Discord)
        } else if s.eq_ignore_ascii_case("minecraft") {
            Ok(Self::Minecraft)
        } else {
            Err(UnknownLinkType(s.to_owned()))
        }
    }
}

// ---------------------------------------------------------------------------
// Calendar
// ---------------------------------------------------------------------------

/// A season reported by the calendar provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "bindings/")]
pub enum Season {
    /// Spring.
    Spring,
    /// Summer.
    Summer,
    /// Autumn.
    Fall,
    /// Winter. Storms fall as snow.
    Winter,
}

// ---------------------------------------------------------------------------
// Worlds
// ---------------------------------------------------------------------------

/// The dimension type of a loaded world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "bindings/")]
pub enum WorldEnvironment {
    /// The overworld.
    Normal,
    /// The nether.
    Nether,
    /// The end.
    TheEnd,
    /// A custom generated dimension.
    Custom,
}

/// Phase of the moon in a world's current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "bindings/")]
pub enum MoonPhase {
    /// Full moon.
    FullMoon,
    /// Waning gibbous.
    WaningGibbous,
    /// Last quarter.
    LastQuarter,
    /// Waning crescent.
    WaningCrescent,
    /// New moon.
    NewMoon,
    /// Waxing crescent.
    WaxingCrescent,
    /// First quarter.
    FirstQuarter,
    /// Waxing gibbous.
    WaxingGibbous,
}
