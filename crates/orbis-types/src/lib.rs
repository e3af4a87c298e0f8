//! Shared type definitions for the Orbis query API.
//!
//! Three layers live here:
//!
//! - [`ids`] -- Type-safe UUID wrappers for residents, towns, and nations
//! - [`enums`] and [`structs`] -- Records handed out by the game-world
//!   providers (the registry, calendar, economy, and skill stores)
//! - [`views`] -- The JSON schemas the API renders, exported to
//!   `TypeScript` via `ts-rs` for API clients

pub mod enums;
pub mod ids;
pub mod structs;
pub mod views;

// Re-export all public types at crate root for convenience.
pub use enums::{LinkType, MoonPhase, Season, UnknownLinkType, WorldEnvironment};
pub use ids::{NationId, ResidentId, TownId};
pub use structs::{
    AccountLink, CalendarDate, Coordinates, HomeBlock, Nation, PermissionFlags, PermissionSet,
    Permissions, Resident, SkillCatalog, SkillLevel, SkillProfile, Town, WorldState,
};
pub use views::{
    LinkView, NationCoordinates, NationStats, NationStatus, NationTimestamps, NationView,
    PlayerRanks, PlayerStats, PlayerStatus, PlayerTimestamps, PlayerView, RankTable,
    SeasonsView, ServerStats, ServerStatusView, ServerTimestamps, SkillCategories, SkillTable,
    SkillsView, Summary, TownCoordinates, TownStats, TownStatus, TownTimestamps, TownView,
    WeatherStatus, WorldSeasonView,
};
