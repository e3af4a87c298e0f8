//! Resource strategies: one parse, resolve, and render triple per
//! resource type.
//!
//! The batch pipeline and list endpoint are generic over [`Resource`];
//! adding a resource type means adding one implementation here.

use orbis_types::{
    AccountLink, LinkView, Nation, NationView, PlayerView, Resident, ServerStatusView,
    SkillsView, Town, TownView,
};
use serde::Serialize;
use serde_json::Value;

use crate::error::QueryError;
use crate::key::{LinkKey, LookupKey, SkillQuery, SkillSelection};
use crate::provider::Providers;
use crate::{parse, render, resolve};

/// How one resource type turns query elements into JSON.
pub trait Resource: Send + Sync {
    /// Resource name used in logs.
    const NAME: &'static str;

    /// Validated lookup key.
    type Key;
    /// Resolved provider record.
    type Object;
    /// Wire view.
    type View: Serialize;

    /// Validate one raw query element.
    fn parse(&self, raw: &Value) -> Result<Self::Key, QueryError>;

    /// Look the key up. Absence is `Ok(None)`.
    fn resolve(&self, key: &Self::Key) -> Result<Option<Self::Object>, QueryError>;

    /// Render a resolved record.
    fn render(&self, object: &Self::Object) -> Self::View;
}

/// A resource whose every object can be enumerated.
pub trait Catalog: Resource {
    /// Every object currently known to the provider.
    fn all(&self) -> Vec<Self::Object>;
}

// ---------------------------------------------------------------------------
// Registry resources
// ---------------------------------------------------------------------------

/// Players, keyed by name or UUID.
#[derive(Debug, Clone)]
pub struct Players {
    providers: Providers,
}

impl Players {
    /// Create the player resource.
    pub const fn new(providers: Providers) -> Self {
        Self { providers }
    }
}

impl Resource for Players {
    const NAME: &'static str = "players";

    type Key = LookupKey;
    type Object = Resident;
    type View = PlayerView;

    fn parse(&self, raw: &Value) -> Result<LookupKey, QueryError> {
        parse::parse_identifier(raw)
    }

    fn resolve(&self, key: &LookupKey) -> Result<Option<Resident>, QueryError> {
        Ok(resolve::resident(self.providers.towny(), key))
    }

    fn render(&self, resident: &Resident) -> PlayerView {
        render::player::render(&self.providers, resident)
    }
}

impl Catalog for Players {
    fn all(&self) -> Vec<Resident> {
        self.providers.towny().residents()
    }
}

/// Towns, keyed by name or UUID.
#[derive(Debug, Clone)]
pub struct Towns {
    providers: Providers,
}

impl Towns {
    /// Create the town resource.
    pub const fn new(providers: Providers) -> Self {
        Self { providers }
    }
}

impl Resource for Towns {
    const NAME: &'static str = "towns";

    type Key = LookupKey;
    type Object = Town;
    type View = TownView;

    fn parse(&self, raw: &Value) -> Result<LookupKey, QueryError> {
        parse::parse_identifier(raw)
    }

    fn resolve(&self, key: &LookupKey) -> Result<Option<Town>, QueryError> {
        Ok(resolve::town(self.providers.towny(), key))
    }

    fn render(&self, town: &Town) -> TownView {
        render::town::render(&self.providers, town)
    }
}

impl Catalog for Towns {
    fn all(&self) -> Vec<Town> {
        self.providers.towny().towns()
    }
}

/// Nations, keyed by name or UUID.
#[derive(Debug, Clone)]
pub struct Nations {
    providers: Providers,
}

impl Nations {
    /// Create the nation resource.
    pub const fn new(providers: Providers) -> Self {
        Self { providers }
    }
}

impl Resource for Nations {
    const NAME: &'static str = "nations";

    type Key = LookupKey;
    type Object = Nation;
    type View = NationView;

    fn parse(&self, raw: &Value) -> Result<LookupKey, QueryError> {
        parse::parse_identifier(raw)
    }

    fn resolve(&self, key: &LookupKey) -> Result<Option<Nation>, QueryError> {
        Ok(resolve::nation(self.providers.towny(), key))
    }

    fn render(&self, nation: &Nation) -> NationView {
        render::nation::render(&self.providers, nation)
    }
}

impl Catalog for Nations {
    fn all(&self) -> Vec<Nation> {
        self.providers.towny().nations()
    }
}

// ---------------------------------------------------------------------------
// Integration resources
// ---------------------------------------------------------------------------

/// Discord/Minecraft account links.
#[derive(Debug, Clone)]
pub struct DiscordLinks {
    providers: Providers,
}

impl DiscordLinks {
    /// Create the account link resource.
    pub const fn new(providers: Providers) -> Self {
        Self { providers }
    }
}

impl Resource for DiscordLinks {
    const NAME: &'static str = "discord";

    type Key = LinkKey;
    type Object = AccountLink;
    type View = LinkView;

    fn parse(&self, raw: &Value) -> Result<LinkKey, QueryError> {
        parse::parse_link(raw)
    }

    fn resolve(&self, key: &LinkKey) -> Result<Option<AccountLink>, QueryError> {
        let links = self
            .providers
            .links()
            .ok_or(QueryError::Unavailable("account link"))?;
        resolve::account_link(links, key).map(Some)
    }

    fn render(&self, link: &AccountLink) -> LinkView {
        render::link::render(link)
    }
}

/// A resident paired with the skills to report for them.
#[derive(Debug, Clone)]
pub struct SkillSubject {
    /// The player.
    pub resident: Resident,
    /// Which skills to report.
    pub selection: SkillSelection,
}

/// Skill progression, keyed by player.
#[derive(Debug, Clone)]
pub struct Skills {
    providers: Providers,
}

impl Skills {
    /// Create the skill resource.
    pub const fn new(providers: Providers) -> Self {
        Self { providers }
    }
}

impl Resource for Skills {
    const NAME: &'static str = "skills";

    type Key = SkillQuery;
    type Object = SkillSubject;
    type View = SkillsView;

    fn parse(&self, raw: &Value) -> Result<SkillQuery, QueryError> {
        parse::parse_skill_query(raw)
    }

    fn resolve(&self, key: &SkillQuery) -> Result<Option<SkillSubject>, QueryError> {
        Ok(
            resolve::resident(self.providers.towny(), &key.player).map(|resident| SkillSubject {
                resident,
                selection: key.selection,
            }),
        )
    }

    fn render(&self, subject: &SkillSubject) -> SkillsView {
        render::skills::render(self.providers.skills(), &subject.resident, subject.selection)
    }
}

// ---------------------------------------------------------------------------
// Server status
// ---------------------------------------------------------------------------

/// The server status snapshot. Not keyed, so not a [`Resource`].
#[derive(Debug, Clone)]
pub struct ServerStatus {
    providers: Providers,
}

impl ServerStatus {
    /// Create the status resource.
    pub const fn new(providers: Providers) -> Self {
        Self { providers }
    }

    /// Render the current status.
    pub fn render(&self) -> ServerStatusView {
        render::server::render(&self.providers)
    }
}
