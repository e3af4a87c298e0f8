//! Shared application state for the query API server.
//!
//! [`AppState`] holds one pipeline per resource, all built once at
//! startup over the same [`Providers`]. Pipelines are stateless, so the
//! state is shared across requests without locking.

use orbis_query::{
    BatchPipeline, DiscordLinks, ListEndpoint, Nations, Players, Providers, ServerStatus,
    Skills, Towns,
};

/// Default maximum number of elements processed per batch.
pub const DEFAULT_MAX_LOOKUP_SIZE: usize = 100;

/// Pipelines and list endpoints served by the router.
#[derive(Debug)]
pub struct AppState {
    /// Server status snapshot.
    pub status: ServerStatus,
    /// Player lookups.
    pub players: BatchPipeline<Players>,
    /// Every player.
    pub player_list: ListEndpoint<Players>,
    /// Town lookups.
    pub towns: BatchPipeline<Towns>,
    /// Every town.
    pub town_list: ListEndpoint<Towns>,
    /// Nation lookups.
    pub nations: BatchPipeline<Nations>,
    /// Every nation.
    pub nation_list: ListEndpoint<Nations>,
    /// Account link lookups.
    pub discord: BatchPipeline<DiscordLinks>,
    /// Skill lookups.
    pub skills: BatchPipeline<Skills>,
}

impl AppState {
    /// Build every pipeline over `providers`, capping batches at
    /// `max_lookup_size` elements.
    pub fn new(providers: &Providers, max_lookup_size: usize) -> Self {
        Self {
            status: ServerStatus::new(providers.clone()),
            players: BatchPipeline::new(Players::new(providers.clone()), max_lookup_size),
            player_list: ListEndpoint::new(Players::new(providers.clone())),
            towns: BatchPipeline::new(Towns::new(providers.clone()), max_lookup_size),
            town_list: ListEndpoint::new(Towns::new(providers.clone())),
            nations: BatchPipeline::new(Nations::new(providers.clone()), max_lookup_size),
            nation_list: ListEndpoint::new(Nations::new(providers.clone())),
            discord: BatchPipeline::new(DiscordLinks::new(providers.clone()), max_lookup_size),
            skills: BatchPipeline::new(Skills::new(providers.clone()), max_lookup_size),
        }
    }
}
