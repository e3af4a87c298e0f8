//! Records handed out by the game-world providers.
//!
//! These are read-only snapshots: a provider builds one per call and the
//! query layer never stores or mutates it. Most fields carry serde
//! defaults so snapshot files only need to spell out what is set.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::enums::{MoonPhase, Season, WorldEnvironment};
use crate::ids::{NationId, ResidentId, TownId};

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

/// A point in a named world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Coordinates {
    /// Name of the world the point lies in.
    pub world: String,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
    /// Head pitch in degrees.
    #[serde(default)]
    pub pitch: f32,
    /// Head yaw in degrees.
    #[serde(default)]
    pub yaw: f32,
}

/// Chunk coordinates of a town's home block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct HomeBlock {
    /// Chunk X.
    pub x: i32,
    /// Chunk Z.
    pub z: i32,
}

// ---------------------------------------------------------------------------
// Permissions
// ---------------------------------------------------------------------------

/// Which groups may perform one kind of action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "bindings/")]
pub struct PermissionSet {
    /// Members (or friends, for a resident's own plots).
    pub resident: bool,
    /// Members of the same nation.
    pub nation: bool,
    /// Members of allied nations.
    pub ally: bool,
    /// Everyone else.
    pub outsider: bool,
}

/// Toggles that apply to a plot regardless of who is acting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "bindings/")]
pub struct PermissionFlags {
    /// Player-versus-player combat.
    pub pvp: bool,
    /// Explosions damage blocks.
    pub explosion: bool,
    /// Fire spreads.
    pub fire: bool,
    /// Hostile mobs spawn.
    pub mobs: bool,
}

/// Plot permissions for a resident or a town.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Permissions {
    /// Placing blocks.
    pub build: PermissionSet,
    /// Breaking blocks.
    pub destroy: PermissionSet,
    /// Using switches (doors, levers, buttons).
    pub switch: PermissionSet,
    /// Using items.
    pub item_use: PermissionSet,
    /// Plot-wide toggles.
    pub flags: PermissionFlags,
}

// ---------------------------------------------------------------------------
// Town registry
// ---------------------------------------------------------------------------

/// A player registered with the town registry.
///
/// Timestamps are epoch milliseconds. `0` means "never" for
/// `last_online` and "not applicable" for `joined_town_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resident {
    /// Account UUID.
    pub id: ResidentId,
    /// Current account name.
    pub name: String,
    /// Title shown before the name. Empty when unset.
    #[serde(default)]
    pub title: String,
    /// Surname shown after the name. Empty when unset.
    #[serde(default)]
    pub surname: String,
    /// Free-form profile text. Empty when unset.
    #[serde(default)]
    pub about: String,
    /// The town this resident belongs to.
    #[serde(default)]
    pub town: Option<TownId>,
    /// When the resident was first registered.
    #[serde(default)]
    pub registered: i64,
    /// When the resident joined their current town.
    #[serde(default)]
    pub joined_town_at: i64,
    /// When the resident was last seen online.
    #[serde(default)]
    pub last_online: i64,
    /// Whether the resident is currently connected.
    #[serde(default)]
    pub is_online: bool,
    /// Whether this is a server-managed placeholder rather than a player.
    #[serde(default)]
    pub is_npc: bool,
    /// Friends list.
    #[serde(default)]
    pub friends: Vec<ResidentId>,
    /// Rank names held in the resident's town.
    #[serde(default)]
    pub town_ranks: Vec<String>,
    /// Rank names held in the resident's nation.
    #[serde(default)]
    pub nation_ranks: Vec<String>,
    /// Permissions on plots the resident personally owns.
    #[serde(default)]
    pub perms: Permissions,
}

impl Resident {
    /// Display name with title and surname attached, skipping empty parts.
    pub fn formatted_name(&self) -> String {
        [self.title.as_str(), self.name.as_str(), self.surname.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether the resident belongs to a town.
    pub const fn has_town(&self) -> bool {
        self.town.is_some()
    }
}

/// A town in the town registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Town {
    /// Town UUID.
    pub id: TownId,
    /// Town name.
    pub name: String,
    /// Message of the day. Empty when unset.
    #[serde(default)]
    pub board: String,
    /// Name of the player who founded the town. Empty when unknown.
    #[serde(default)]
    pub founder: String,
    /// The current mayor.
    #[serde(default)]
    pub mayor: Option<ResidentId>,
    /// The nation this town belongs to.
    #[serde(default)]
    pub nation: Option<NationId>,
    /// When the town was founded (epoch milliseconds).
    #[serde(default)]
    pub registered: i64,
    /// When the town joined its current nation (epoch milliseconds).
    #[serde(default)]
    pub joined_nation_at: i64,
    /// When the town fell into ruin (epoch milliseconds, `0` if standing).
    #[serde(default)]
    pub ruined_at: i64,
    /// Whether the town spawn is usable by outsiders.
    #[serde(default)]
    pub is_public: bool,
    /// Whether anyone may join without an invite.
    #[serde(default)]
    pub is_open: bool,
    /// Whether the town has opted out of wars.
    #[serde(default)]
    pub is_neutral: bool,
    /// Whether the town has been abandoned and left in ruin.
    #[serde(default)]
    pub is_ruined: bool,
    /// Whether the town is listed for sale.
    #[serde(default)]
    pub is_for_sale: bool,
    /// Asking price when listed for sale.
    #[serde(default)]
    pub for_sale_price: Decimal,
    /// Number of claimed town blocks.
    #[serde(default)]
    pub num_town_blocks: usize,
    /// Maximum town blocks the town may claim.
    #[serde(default)]
    pub max_town_blocks: usize,
    /// Town spawn point.
    #[serde(default)]
    pub spawn: Option<Coordinates>,
    /// Home block chunk.
    #[serde(default)]
    pub home_block: Option<HomeBlock>,
    /// Member residents.
    #[serde(default)]
    pub residents: Vec<ResidentId>,
    /// Non-members trusted on town plots.
    #[serde(default)]
    pub trusted: Vec<ResidentId>,
    /// Residents banned from the town.
    #[serde(default)]
    pub outlaws: Vec<ResidentId>,
    /// Default plot permissions.
    #[serde(default)]
    pub perms: Permissions,
}

impl Town {
    /// Whether the town has claimed more blocks than it is allowed.
    pub const fn is_over_claimed(&self) -> bool {
        self.num_town_blocks > self.max_town_blocks
    }
}

/// A nation in the town registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nation {
    /// Nation UUID.
    pub id: NationId,
    /// Nation name.
    pub name: String,
    /// Message of the day. Empty when unset.
    #[serde(default)]
    pub board: String,
    /// The capital town. Its mayor is the nation's king.
    #[serde(default)]
    pub capital: Option<TownId>,
    /// When the nation was founded (epoch milliseconds).
    #[serde(default)]
    pub registered: i64,
    /// Whether the nation spawn is usable by outsiders.
    #[serde(default)]
    pub is_public: bool,
    /// Whether any town may join without an invite.
    #[serde(default)]
    pub is_open: bool,
    /// Whether the nation has opted out of wars.
    #[serde(default)]
    pub is_neutral: bool,
    /// Nation spawn point.
    #[serde(default)]
    pub spawn: Option<Coordinates>,
    /// Member towns.
    #[serde(default)]
    pub towns: Vec<TownId>,
    /// Allied nations.
    #[serde(default)]
    pub allies: Vec<NationId>,
    /// Enemy nations.
    #[serde(default)]
    pub enemies: Vec<NationId>,
    /// Towns under sanction by this nation.
    #[serde(default)]
    pub sanctioned: Vec<TownId>,
}

// ---------------------------------------------------------------------------
// Account links
// ---------------------------------------------------------------------------

/// Both sides of a Discord/Minecraft link. An unlinked lookup leaves the
/// side that was not queried as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountLink {
    /// Discord user ID.
    pub discord_id: Option<String>,
    /// Minecraft account UUID.
    pub uuid: Option<Uuid>,
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

/// Progress in one skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SkillLevel {
    /// Current level.
    pub level: u32,
    /// Experience earned toward the next level.
    pub xp: u32,
    /// Experience still required for the next level.
    pub xp_to_next_level: u32,
}

/// A player's skill progression record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillProfile {
    /// Sum of all skill levels.
    #[serde(default)]
    pub power_level: u32,
    /// Per-skill progress keyed by skill name.
    #[serde(default)]
    pub skills: BTreeMap<String, SkillLevel>,
}

/// The skills a progression provider knows about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCatalog {
    /// Every skill, in display order.
    pub skills: Vec<String>,
    /// Skills derived from others; omitted from default lookups.
    pub child_skills: Vec<String>,
    /// Combat skills.
    pub combat: Vec<String>,
    /// Gathering skills.
    pub gathering: Vec<String>,
    /// Everything else.
    pub misc: Vec<String>,
}

impl SkillCatalog {
    /// Skills that are not derived from other skills.
    pub fn non_child_skills(&self) -> impl Iterator<Item = &String> {
        self.skills
            .iter()
            .filter(|skill| !self.child_skills.contains(skill))
    }
}

// ---------------------------------------------------------------------------
// Server and worlds
// ---------------------------------------------------------------------------

/// Live state of one loaded world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldState {
    /// World name.
    pub name: String,
    /// Dimension type.
    pub environment: WorldEnvironment,
    /// Time of day in ticks (0..24000).
    #[serde(default)]
    pub time: i64,
    /// Total ticks since the world was created.
    #[serde(default)]
    pub full_time: i64,
    /// Whether it is raining.
    #[serde(default)]
    pub has_storm: bool,
    /// Whether it is thundering.
    #[serde(default)]
    pub is_thundering: bool,
    /// Current moon phase.
    pub moon_phase: MoonPhase,
}

/// A world's in-game calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDate {
    /// Formatted date string.
    pub date: String,
    /// Current season.
    pub season: Season,
    /// Name of the weekday.
    pub day_of_week: String,
    /// Name of the month.
    pub month_name: String,
    /// In-game clock seconds.
    #[serde(default)]
    pub seconds: u32,
    /// In-game clock minutes.
    #[serde(default)]
    pub minutes: u32,
    /// In-game clock hours.
    #[serde(default)]
    pub hours: u32,
}
