//! In-memory world provider.
//!
//! [`InMemoryWorld`] implements every provider trait from a
//! [`WorldFixture`] snapshot, so the service runs and tests without a
//! live game server. The snapshot is immutable once loaded; concurrent
//! reads need no locking.
//!
//! Optional sections of the fixture (`economy`, `links`, `skills`,
//! `calendar`) install the matching optional provider only when present,
//! which is how a host without that integration is modelled.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use orbis_types::{
    CalendarDate, Nation, NationId, Resident, ResidentId, SkillCatalog, SkillProfile, Town,
    TownId, WorldState,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::error::{SkillError, SnapshotError};
use crate::provider::{
    AccountLinkProvider, CalendarProvider, EconomyProvider, Providers, ServerProvider,
    SkillProvider, TownyProvider,
};

// ---------------------------------------------------------------------------
// Snapshot format
// ---------------------------------------------------------------------------

/// A serialized world: registry contents plus optional integration data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WorldFixture {
    /// Registered residents.
    pub residents: Vec<Resident>,
    /// Towns.
    pub towns: Vec<Town>,
    /// Nations.
    pub nations: Vec<Nation>,
    /// Rank names defined for towns.
    pub town_ranks: Vec<String>,
    /// Rank names defined for nations.
    pub nation_ranks: Vec<String>,
    /// Daily upkeep time in seconds after midnight.
    pub new_day_time: i64,
    /// Game server state.
    pub server: ServerFixture,
    /// Account balances. Absent means no economy is installed.
    pub economy: Option<EconomyFixture>,
    /// Discord/Minecraft links. Absent means no link store is installed.
    pub links: Option<Vec<LinkFixture>>,
    /// Skill progression. Absent means no skill store is installed.
    pub skills: Option<SkillsFixture>,
    /// Calendar dates keyed by world name. Absent means no calendar.
    pub calendar: Option<HashMap<String, CalendarDate>>,
}

/// Game server section of a [`WorldFixture`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerFixture {
    /// Game version string.
    pub version: String,
    /// Configured player slots.
    pub max_players: u32,
    /// Loaded worlds, in load order.
    pub worlds: Vec<WorldState>,
}

impl Default for ServerFixture {
    fn default() -> Self {
        Self {
            version: String::from("unknown"),
            max_players: 20,
            worlds: Vec::new(),
        }
    }
}

/// Economy section of a [`WorldFixture`]. Unlisted accounts hold zero.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EconomyFixture {
    /// Player balances by account UUID.
    pub players: HashMap<Uuid, Decimal>,
    /// Town bank balances by town UUID.
    pub towns: HashMap<Uuid, Decimal>,
    /// Nation bank balances by nation UUID.
    pub nations: HashMap<Uuid, Decimal>,
}

/// One linked Discord/Minecraft account pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkFixture {
    /// Discord user ID.
    pub discord_id: String,
    /// Minecraft account UUID.
    pub uuid: Uuid,
}

/// Skill section of a [`WorldFixture`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SkillsFixture {
    /// Known skills and their categories.
    pub catalog: SkillCatalog,
    /// Progression records by account UUID.
    pub profiles: HashMap<Uuid, SkillProfile>,
    /// When set, every skill call fails with this message.
    pub failure: Option<String>,
}

// ---------------------------------------------------------------------------
// Provider
// ---------------------------------------------------------------------------

/// A read-only world backed by a loaded snapshot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorld {
    fixture: WorldFixture,
}

impl InMemoryWorld {
    /// Parse a JSON snapshot.
    pub fn from_json_str(raw: &str) -> Result<Self, SnapshotError> {
        Ok(Self::from(serde_json::from_str::<WorldFixture>(raw)?))
    }

    /// Parse a YAML snapshot.
    pub fn from_yaml_str(raw: &str) -> Result<Self, SnapshotError> {
        Ok(Self::from(serde_yml::from_str::<WorldFixture>(raw)?))
    }

    /// Load a snapshot file. `.yaml` and `.yml` files are parsed as YAML,
    /// everything else as JSON.
    pub fn from_file(path: &Path) -> Result<Self, SnapshotError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let world = if is_yaml {
            Self::from_yaml_str(&raw)?
        } else {
            Self::from_json_str(&raw)?
        };

        info!(
            path = %path.display(),
            residents = world.fixture.residents.len(),
            towns = world.fixture.towns.len(),
            nations = world.fixture.nations.len(),
            "World snapshot loaded"
        );
        Ok(world)
    }

    /// Wrap the world as a provider set, installing each optional
    /// integration whose section is present in the snapshot.
    pub fn into_providers(self) -> Providers {
        let has_economy = self.fixture.economy.is_some();
        let has_links = self.fixture.links.is_some();
        let has_skills = self.fixture.skills.is_some();
        let has_calendar = self.fixture.calendar.is_some();

        let world = Arc::new(self);
        let mut providers = Providers::new(Arc::clone(&world) as _, Arc::clone(&world) as _);
        if has_economy {
            providers = providers.with_economy(Arc::clone(&world) as _);
        }
        if has_links {
            providers = providers.with_account_links(Arc::clone(&world) as _);
        }
        if has_skills {
            providers = providers.with_skills(Arc::clone(&world) as _);
        }
        if has_calendar {
            providers = providers.with_calendar(world);
        }
        providers
    }
}

impl From<WorldFixture> for InMemoryWorld {
    fn from(fixture: WorldFixture) -> Self {
        Self { fixture }
    }
}

fn find_by_name<'a, T>(items: &'a [T], name: &str, name_of: impl Fn(&T) -> &str) -> Option<&'a T> {
    let needle = name.to_lowercase();
    items
        .iter()
        .find(|item| name_of(item).to_lowercase() == needle)
}

impl TownyProvider for InMemoryWorld {
    fn resident(&self, id: ResidentId) -> Option<Resident> {
        self.fixture.residents.iter().find(|r| r.id == id).cloned()
    }

    fn resident_by_name(&self, name: &str) -> Option<Resident> {
        find_by_name(&self.fixture.residents, name, |r| r.name.as_str()).cloned()
    }

    fn residents(&self) -> Vec<Resident> {
        self.fixture.residents.clone()
    }

    fn town(&self, id: TownId) -> Option<Town> {
        self.fixture.towns.iter().find(|t| t.id == id).cloned()
    }

    fn town_by_name(&self, name: &str) -> Option<Town> {
        find_by_name(&self.fixture.towns, name, |t| t.name.as_str()).cloned()
    }

    fn towns(&self) -> Vec<Town> {
        self.fixture.towns.clone()
    }

    fn nation(&self, id: NationId) -> Option<Nation> {
        self.fixture.nations.iter().find(|n| n.id == id).cloned()
    }

    fn nation_by_name(&self, name: &str) -> Option<Nation> {
        find_by_name(&self.fixture.nations, name, |n| n.name.as_str()).cloned()
    }

    fn nations(&self) -> Vec<Nation> {
        self.fixture.nations.clone()
    }

    fn town_rank_names(&self) -> Vec<String> {
        self.fixture.town_ranks.clone()
    }

    fn nation_rank_names(&self) -> Vec<String> {
        self.fixture.nation_ranks.clone()
    }

    fn new_day_time(&self) -> i64 {
        self.fixture.new_day_time
    }
}

impl ServerProvider for InMemoryWorld {
    fn version(&self) -> String {
        self.fixture.server.version.clone()
    }

    fn max_players(&self) -> u32 {
        self.fixture.server.max_players
    }

    fn online_player_count(&self) -> usize {
        self.fixture.residents.iter().filter(|r| r.is_online).count()
    }

    fn worlds(&self) -> Vec<WorldState> {
        self.fixture.server.worlds.clone()
    }
}

impl EconomyProvider for InMemoryWorld {
    fn player_balance(&self, id: ResidentId) -> Decimal {
        self.balance(|economy| &economy.players, id.into_inner())
    }

    fn town_balance(&self, id: TownId) -> Decimal {
        self.balance(|economy| &economy.towns, id.into_inner())
    }

    fn nation_balance(&self, id: NationId) -> Decimal {
        self.balance(|economy| &economy.nations, id.into_inner())
    }
}

impl InMemoryWorld {
    fn balance(
        &self,
        accounts: impl Fn(&EconomyFixture) -> &HashMap<Uuid, Decimal>,
        id: Uuid,
    ) -> Decimal {
        self.fixture
            .economy
            .as_ref()
            .and_then(|economy| accounts(economy).get(&id).copied())
            .unwrap_or(Decimal::ZERO)
    }

    fn skill_store(&self) -> Result<&SkillsFixture, SkillError> {
        let store = self
            .fixture
            .skills
            .as_ref()
            .ok_or_else(|| SkillError::Unavailable(String::from("no skill data loaded")))?;
        match &store.failure {
            Some(message) => Err(SkillError::Unavailable(message.clone())),
            None => Ok(store),
        }
    }
}

impl AccountLinkProvider for InMemoryWorld {
    fn uuid_for_discord(&self, discord_id: &str) -> Option<Uuid> {
        self.fixture
            .links
            .as_ref()?
            .iter()
            .find(|link| link.discord_id == discord_id)
            .map(|link| link.uuid)
    }

    fn discord_for_uuid(&self, uuid: Uuid) -> Option<String> {
        self.fixture
            .links
            .as_ref()?
            .iter()
            .find(|link| link.uuid == uuid)
            .map(|link| link.discord_id.clone())
    }
}

impl SkillProvider for InMemoryWorld {
    fn catalog(&self) -> Result<SkillCatalog, SkillError> {
        Ok(self.skill_store()?.catalog.clone())
    }

    fn profile(&self, player: ResidentId) -> Result<Option<SkillProfile>, SkillError> {
        Ok(self
            .skill_store()?
            .profiles
            .get(&player.into_inner())
            .cloned())
    }
}

impl CalendarProvider for InMemoryWorld {
    fn date(&self, world: &str) -> Option<CalendarDate> {
        self.fixture.calendar.as_ref()?.get(world).cloned()
    }
}
