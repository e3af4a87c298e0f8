//! Batch lookup framework for the Orbis query API.
//!
//! Every resource endpoint is the same pipeline over a different
//! [`Resource`]:
//!
//! - [`parse`] -- Raw query elements to typed lookup keys
//! - [`resolve`] -- Keys to provider records, UUID first
//! - [`render`] -- Records to fixed wire schemas
//! - [`pipeline`] -- Batch orchestration with per-element failure
//!   isolation and a size cap, plus list endpoints
//!
//! World state is read through the traits in [`provider`]. [`memory`]
//! implements all of them from a snapshot file.

pub mod error;
pub mod key;
pub mod memory;
pub mod parse;
pub mod pipeline;
pub mod provider;
pub mod render;
pub mod resolve;
pub mod resource;

#[cfg(test)]
mod fixtures;

pub use error::{QueryError, SkillError, SnapshotError};
pub use key::{LinkKey, LookupKey, SkillQuery, SkillSelection, parse_hyphenated_uuid};
pub use memory::{InMemoryWorld, WorldFixture};
pub use pipeline::{BatchPipeline, ListEndpoint};
pub use provider::{
    AccountLinkProvider, CalendarProvider, EconomyProvider, Providers, ServerProvider,
    SkillProvider, TownyProvider,
};
pub use resource::{
    Catalog, DiscordLinks, Nations, Players, Resource, ServerStatus, SkillSubject, Skills, Towns,
};
