//! Read interfaces onto the game-world providers.
//!
//! The query layer never owns world state. Everything it renders comes
//! through these traits, and every call is a synchronous lookup-by-key
//! or enumeration. Implementations must be safe for concurrent reads
//! (`Send + Sync`); the query layer adds no locking of its own.
//!
//! The registry and server traits are mandatory. Economy, account links,
//! skills, and calendar are optional integrations: [`Providers`] holds
//! them as `Option` and each renderer falls back to a fixed shape when
//! one is missing.

use std::fmt;
use std::sync::Arc;

use orbis_types::{
    CalendarDate, Nation, NationId, Resident, ResidentId, SkillCatalog, SkillProfile, Town,
    TownId, WorldState,
};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::SkillError;

/// The town registry: residents, towns, nations, and rank definitions.
pub trait TownyProvider: Send + Sync {
    // Residents

    /// Resident by account UUID.
    fn resident(&self, id: ResidentId) -> Option<Resident>;

    /// Resident by name, case-insensitive.
    fn resident_by_name(&self, name: &str) -> Option<Resident>;

    /// Every registered resident.
    fn residents(&self) -> Vec<Resident>;

    // Towns

    /// Town by UUID.
    fn town(&self, id: TownId) -> Option<Town>;

    /// Town by name, case-insensitive.
    fn town_by_name(&self, name: &str) -> Option<Town>;

    /// Every town.
    fn towns(&self) -> Vec<Town>;

    // Nations

    /// Nation by UUID.
    fn nation(&self, id: NationId) -> Option<Nation>;

    /// Nation by name, case-insensitive.
    fn nation_by_name(&self, name: &str) -> Option<Nation>;

    /// Every nation.
    fn nations(&self) -> Vec<Nation>;

    // Configuration

    /// Rank names defined for towns.
    fn town_rank_names(&self) -> Vec<String>;

    /// Rank names defined for nations.
    fn nation_rank_names(&self) -> Vec<String>;

    /// Daily upkeep time in seconds after midnight.
    fn new_day_time(&self) -> i64;
}

/// The game server itself: version, capacity, and loaded worlds.
pub trait ServerProvider: Send + Sync {
    /// Game version string.
    fn version(&self) -> String;

    /// Configured player slots.
    fn max_players(&self) -> u32;

    /// Number of connected players.
    fn online_player_count(&self) -> usize;

    /// Loaded worlds, in load order.
    fn worlds(&self) -> Vec<WorldState>;
}

/// Account balances for players, towns, and nations.
pub trait EconomyProvider: Send + Sync {
    /// Balance of a player account.
    fn player_balance(&self, id: ResidentId) -> Decimal;

    /// Balance of a town bank.
    fn town_balance(&self, id: TownId) -> Decimal;

    /// Balance of a nation bank.
    fn nation_balance(&self, id: NationId) -> Decimal;
}

/// Discord/Minecraft account link store.
pub trait AccountLinkProvider: Send + Sync {
    /// Minecraft UUID linked to a Discord ID.
    fn uuid_for_discord(&self, discord_id: &str) -> Option<Uuid>;

    /// Discord ID linked to a Minecraft UUID.
    fn discord_for_uuid(&self, uuid: Uuid) -> Option<String>;
}

/// Skill progression store.
///
/// Both calls are best-effort: the store may sit behind an unstable
/// external API, so failures are reported rather than assumed away.
pub trait SkillProvider: Send + Sync {
    /// The skills the store knows about.
    fn catalog(&self) -> Result<SkillCatalog, SkillError>;

    /// Progression record for a player, if one exists.
    fn profile(&self, player: ResidentId) -> Result<Option<SkillProfile>, SkillError>;
}

/// In-game calendar.
pub trait CalendarProvider: Send + Sync {
    /// Current date in the named world, if the world has a calendar.
    fn date(&self, world: &str) -> Option<CalendarDate>;
}

/// Every provider the query layer reads from, wired once at startup.
#[derive(Clone)]
pub struct Providers {
    towny: Arc<dyn TownyProvider>,
    server: Arc<dyn ServerProvider>,
    economy: Option<Arc<dyn EconomyProvider>>,
    links: Option<Arc<dyn AccountLinkProvider>>,
    skills: Option<Arc<dyn SkillProvider>>,
    calendar: Option<Arc<dyn CalendarProvider>>,
}

impl Providers {
    /// Create a provider set with only the mandatory integrations.
    pub fn new(towny: Arc<dyn TownyProvider>, server: Arc<dyn ServerProvider>) -> Self {
        Self {
            towny,
            server,
            economy: None,
            links: None,
            skills: None,
            calendar: None,
        }
    }

    /// Install an economy.
    #[must_use]
    pub fn with_economy(mut self, economy: Arc<dyn EconomyProvider>) -> Self {
        self.economy = Some(economy);
        self
    }

    /// Install an account link store.
    #[must_use]
    pub fn with_account_links(mut self, links: Arc<dyn AccountLinkProvider>) -> Self {
        self.links = Some(links);
        self
    }

    /// Install a skill progression store.
    #[must_use]
    pub fn with_skills(mut self, skills: Arc<dyn SkillProvider>) -> Self {
        self.skills = Some(skills);
        self
    }

    /// Install a calendar.
    #[must_use]
    pub fn with_calendar(mut self, calendar: Arc<dyn CalendarProvider>) -> Self {
        self.calendar = Some(calendar);
        self
    }

    /// The town registry.
    pub fn towny(&self) -> &dyn TownyProvider {
        self.towny.as_ref()
    }

    /// The game server.
    pub fn server(&self) -> &dyn ServerProvider {
        self.server.as_ref()
    }

    /// The economy, if installed.
    pub fn economy(&self) -> Option<&dyn EconomyProvider> {
        self.economy.as_deref()
    }

    /// The account link store, if installed.
    pub fn links(&self) -> Option<&dyn AccountLinkProvider> {
        self.links.as_deref()
    }

    /// The skill progression store, if installed.
    pub fn skills(&self) -> Option<&dyn SkillProvider> {
        self.skills.as_deref()
    }

    /// The calendar, if installed.
    pub fn calendar(&self) -> Option<&dyn CalendarProvider> {
        self.calendar.as_deref()
    }

    /// Player balance, or zero without an economy.
    pub fn player_balance(&self, id: ResidentId) -> Decimal {
        self.economy()
            .map_or(Decimal::ZERO, |economy| economy.player_balance(id))
    }

    /// Town balance, or zero without an economy.
    pub fn town_balance(&self, id: TownId) -> Decimal {
        self.economy()
            .map_or(Decimal::ZERO, |economy| economy.town_balance(id))
    }

    /// Nation balance, or zero without an economy.
    pub fn nation_balance(&self, id: NationId) -> Decimal {
        self.economy()
            .map_or(Decimal::ZERO, |economy| economy.nation_balance(id))
    }
}

impl fmt::Debug for Providers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Providers")
            .field("economy", &self.economy.is_some())
            .field("links", &self.links.is_some())
            .field("skills", &self.skills.is_some())
            .field("calendar", &self.calendar.is_some())
            .finish_non_exhaustive()
    }
}
