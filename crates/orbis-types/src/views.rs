//! Wire views returned by the query API.
//!
//! Each view is the fixed JSON schema for one resource type. Renderers
//! in `orbis-query` fill these in from provider records; nothing else
//! constructs them. Field names are camelCase on the wire except for the
//! skills view, which keeps the snake_case spelling its clients expect.
//!
//! Optional strings are `None` rather than empty so that "unset" reaches
//! the client as `null`.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use ts_rs::TS;
use uuid::Uuid;

use crate::enums::{MoonPhase, Season};
use crate::structs::{Coordinates, HomeBlock, Permissions, SkillLevel};

/// Rank name to the names of members holding it.
pub type RankTable = BTreeMap<String, Vec<String>>;

// ---------------------------------------------------------------------------
// Summaries
// ---------------------------------------------------------------------------

/// One-level reference to a related resident, town, or nation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Summary {
    /// Display name.
    pub name: String,
    /// UUID.
    pub uuid: Uuid,
}

// ---------------------------------------------------------------------------
// Players
// ---------------------------------------------------------------------------

/// Full player schema.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PlayerView {
    /// Account name.
    pub name: String,
    /// Account UUID.
    pub uuid: Uuid,
    /// Title, if set.
    pub title: Option<String>,
    /// Surname, if set.
    pub surname: Option<String>,
    /// Name with title and surname.
    pub formatted_name: String,
    /// Profile text, if set.
    pub about: Option<String>,
    /// Town membership.
    pub town: Option<Summary>,
    /// Nation membership (through the town).
    pub nation: Option<Summary>,
    /// Timestamps in epoch milliseconds.
    pub timestamps: PlayerTimestamps,
    /// Status flags.
    pub status: PlayerStatus,
    /// Aggregate statistics.
    pub stats: PlayerStats,
    /// Personal plot permissions.
    pub perms: Permissions,
    /// Ranks held.
    pub ranks: PlayerRanks,
    /// Friends list.
    pub friends: Vec<Summary>,
}

/// Player timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PlayerTimestamps {
    /// First registration.
    pub registered: i64,
    /// Joined the current town; `null` without a town.
    pub joined_town_at: Option<i64>,
    /// Last seen online; `null` if never recorded.
    pub last_online: Option<i64>,
}

/// Player status flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PlayerStatus {
    /// Currently connected.
    pub is_online: bool,
    /// Server-managed placeholder.
    #[serde(rename = "isNPC")]
    pub is_npc: bool,
    /// Mayor of their town.
    pub is_mayor: bool,
    /// King of their nation.
    pub is_king: bool,
    /// Belongs to a town.
    pub has_town: bool,
    /// Belongs to a nation.
    pub has_nation: bool,
}

/// Player statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PlayerStats {
    /// Economy balance; zero without an economy.
    #[serde(with = "rust_decimal::serde::float")]
    #[ts(type = "number")]
    pub balance: Decimal,
    /// Size of the friends list.
    pub num_friends: usize,
}

/// Rank names a player holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PlayerRanks {
    /// Ranks in their town.
    pub town_ranks: Vec<String>,
    /// Ranks in their nation.
    pub nation_ranks: Vec<String>,
}

// ---------------------------------------------------------------------------
// Towns
// ---------------------------------------------------------------------------

/// Full town schema.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct TownView {
    /// Town name.
    pub name: String,
    /// Town UUID.
    pub uuid: Uuid,
    /// Board message, if set.
    pub board: Option<String>,
    /// Founder name, if known.
    pub founder: Option<String>,
    /// Mayor.
    pub mayor: Option<Summary>,
    /// Nation membership.
    pub nation: Option<Summary>,
    /// Timestamps in epoch milliseconds.
    pub timestamps: TownTimestamps,
    /// Status flags.
    pub status: TownStatus,
    /// Aggregate statistics.
    pub stats: TownStats,
    /// Default plot permissions.
    pub perms: Permissions,
    /// Spawn and home block.
    pub coordinates: TownCoordinates,
    /// Member names.
    pub residents: Vec<String>,
    /// Trusted non-member names.
    pub trusted: Vec<String>,
    /// Outlaw names.
    pub outlaws: Vec<String>,
    /// Town ranks and their holders.
    pub ranks: RankTable,
}

/// Town timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct TownTimestamps {
    /// Founding time.
    pub registered: i64,
    /// Joined the current nation; `null` without a nation.
    pub joined_nation_at: Option<i64>,
    /// Fell into ruin; `null` unless ruined.
    pub ruined_at: Option<i64>,
}

/// Town status flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct TownStatus {
    /// Spawn usable by outsiders.
    pub is_public: bool,
    /// Joinable without invite.
    pub is_open: bool,
    /// Opted out of wars.
    pub is_neutral: bool,
    /// Capital of its nation.
    pub is_capital: bool,
    /// Claimed beyond its allowance.
    pub is_over_claimed: bool,
    /// Abandoned.
    pub is_ruined: bool,
    /// Listed for sale.
    pub is_for_sale: bool,
    /// Belongs to a nation.
    pub has_nation: bool,
}

/// Town statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct TownStats {
    /// Claimed town blocks.
    pub num_town_blocks: usize,
    /// Town block allowance.
    pub max_town_blocks: usize,
    /// Member count.
    pub num_residents: usize,
    /// Trusted count.
    pub num_trusted: usize,
    /// Outlaw count.
    pub num_outlaws: usize,
    /// Bank balance; zero without an economy.
    #[serde(with = "rust_decimal::serde::float")]
    #[ts(type = "number")]
    pub balance: Decimal,
    /// Asking price; `null` unless for sale.
    #[serde(with = "rust_decimal::serde::float_option")]
    #[ts(type = "number | null")]
    pub for_sale_price: Option<Decimal>,
}

/// Town locations.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct TownCoordinates {
    /// Spawn point.
    pub spawn: Option<Coordinates>,
    /// Home block chunk.
    pub home_block: Option<HomeBlock>,
}

// ---------------------------------------------------------------------------
// Nations
// ---------------------------------------------------------------------------

/// Full nation schema.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct NationView {
    /// Nation name.
    pub name: String,
    /// Nation UUID.
    pub uuid: Uuid,
    /// Board message, if set.
    pub board: Option<String>,
    /// Mayor of the capital.
    pub king: Option<Summary>,
    /// Capital town.
    pub capital: Option<Summary>,
    /// Timestamps in epoch milliseconds.
    pub timestamps: NationTimestamps,
    /// Status flags.
    pub status: NationStatus,
    /// Aggregate statistics.
    pub stats: NationStats,
    /// Spawn point.
    pub coordinates: NationCoordinates,
    /// Names of every resident of every member town.
    pub residents: Vec<String>,
    /// Member towns.
    pub towns: Vec<Summary>,
    /// Allied nations.
    pub allies: Vec<Summary>,
    /// Enemy nations.
    pub enemies: Vec<Summary>,
    /// Sanctioned towns.
    pub sanctioned: Vec<Summary>,
    /// Nation ranks and their holders.
    pub ranks: RankTable,
}

/// Nation timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NationTimestamps {
    /// Founding time.
    pub registered: i64,
}

/// Nation status flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct NationStatus {
    /// Spawn usable by outsiders.
    pub is_public: bool,
    /// Joinable without invite.
    pub is_open: bool,
    /// Opted out of wars.
    pub is_neutral: bool,
}

/// Nation statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct NationStats {
    /// Claimed town blocks across member towns.
    pub num_town_blocks: usize,
    /// Residents across member towns.
    pub num_residents: usize,
    /// Member towns.
    pub num_towns: usize,
    /// Allied nations.
    pub num_allies: usize,
    /// Enemy nations.
    pub num_enemies: usize,
    /// Bank balance; zero without an economy.
    #[serde(with = "rust_decimal::serde::float")]
    #[ts(type = "number")]
    pub balance: Decimal,
}

/// Nation locations.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NationCoordinates {
    /// Spawn point.
    pub spawn: Option<Coordinates>,
}

// ---------------------------------------------------------------------------
// Account links
// ---------------------------------------------------------------------------

/// Both sides of a Discord/Minecraft account link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LinkView {
    /// Discord user ID, `null` if unlinked.
    pub id: Option<String>,
    /// Minecraft UUID, `null` if unlinked.
    pub uuid: Option<Uuid>,
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

/// Skill progression for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SkillsView {
    /// Account name.
    pub name: String,
    /// Account UUID.
    pub uuid: Uuid,
    /// Whether progression data was found.
    pub has_skill_data: bool,
    /// Sum of skill levels.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub power_level: Option<u32>,
    /// Per-skill progress keyed by skill name, in catalog order.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional, as = "Option<BTreeMap<String, SkillLevel>>")]
    pub skills: Option<SkillTable>,
    /// Skill names grouped by category.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub categories: Option<SkillCategories>,
    /// Why progression data is missing, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub error: Option<String>,
}

/// Skill progress keyed by skill name.
///
/// Serializes as a JSON object whose keys keep insertion order, which is
/// the order the skill store lists its skills in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillTable(Vec<(String, SkillLevel)>);

impl SkillTable {
    /// Progress for `skill`, if it was selected.
    pub fn get(&self, skill: &str) -> Option<&SkillLevel> {
        self.0
            .iter()
            .find(|(name, _)| name == skill)
            .map(|(_, level)| level)
    }

    /// Whether `skill` was selected.
    pub fn contains_key(&self, skill: &str) -> bool {
        self.get(skill).is_some()
    }

    /// Selected skill names, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }
}

impl FromIterator<(String, SkillLevel)> for SkillTable {
    fn from_iter<I: IntoIterator<Item = (String, SkillLevel)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for SkillTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(name, level)| (name, level)))
    }
}

/// Skill names grouped by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SkillCategories {
    /// Combat skills.
    pub combat: Vec<String>,
    /// Gathering skills.
    pub gathering: Vec<String>,
    /// Everything else.
    pub misc: Vec<String>,
}

// ---------------------------------------------------------------------------
// Server status
// ---------------------------------------------------------------------------

/// Server-wide status snapshot served at `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ServerStatusView {
    /// Game version string.
    pub version: String,
    /// Overworld moon phase.
    pub moon_phase: Option<MoonPhase>,
    /// Clock values.
    pub timestamps: ServerTimestamps,
    /// Overworld weather.
    pub status: WeatherStatus,
    /// Population and registry counts.
    pub stats: ServerStats,
    /// Calendar state per world.
    pub seasons: SeasonsView,
}

/// Server clock values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ServerTimestamps {
    /// Configured time of the daily upkeep, in seconds after midnight.
    pub new_day_time: i64,
    /// Wall-clock seconds since local midnight.
    pub server_time_of_day: u32,
}

/// Overworld weather flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct WeatherStatus {
    /// Raining.
    pub has_storm: bool,
    /// Thundering.
    pub is_thundering: bool,
    /// Storming during winter.
    pub is_snowing: bool,
}

/// Server-wide counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ServerStats {
    /// Overworld time of day in ticks.
    pub time: i64,
    /// Overworld total ticks.
    pub full_time: i64,
    /// Player slots.
    pub max_players: u32,
    /// Connected players.
    pub num_online_players: usize,
    /// Connected residents without a town.
    pub num_online_nomads: usize,
    /// Registered residents.
    pub num_residents: usize,
    /// Registered residents without a town.
    pub num_nomads: usize,
    /// Towns.
    pub num_towns: usize,
    /// Claimed town blocks across all towns.
    pub num_town_blocks: usize,
    /// Nations.
    pub num_nations: usize,
}

/// Calendar state for every world that has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SeasonsView {
    /// One entry per dated world.
    pub worlds: Vec<WorldSeasonView>,
}

/// Calendar state of one world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct WorldSeasonView {
    /// World name.
    pub world_name: String,
    /// Formatted date.
    pub date: String,
    /// Current season.
    pub current_season: Season,
    /// Weekday name.
    pub day_of_week: String,
    /// Month name.
    pub month_name: String,
    /// In-game seconds.
    pub world_seconds: u32,
    /// In-game minutes.
    pub world_minutes: u32,
    /// In-game hours.
    pub world_hours: u32,
}
