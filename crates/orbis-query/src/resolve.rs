//! Resolution: typed keys to provider records.
//!
//! Absence is `None`. Errors are reserved for link targets whose format
//! rules out the only applicable lookup.

use orbis_types::{AccountLink, LinkType, Nation, Resident, Town};
use crate::error::QueryError;
use crate::key::{LinkKey, LookupKey, parse_hyphenated_uuid};
use crate::provider::{AccountLinkProvider, TownyProvider};

/// Discord snowflakes are 17 to 19 decimal digits.
const SNOWFLAKE_DIGITS: core::ops::RangeInclusive<usize> = 17..=19;

/// Resolve a resident by UUID, or by name when the key is not a UUID.
pub fn resident(towny: &dyn TownyProvider, key: &LookupKey) -> Option<Resident> {
    match key {
        LookupKey::Uuid(uuid) => towny.resident((*uuid).into()),
        LookupKey::Name(name) => towny.resident_by_name(name),
    }
}

/// Resolve a town by UUID, or by name when the key is not a UUID.
pub fn town(towny: &dyn TownyProvider, key: &LookupKey) -> Option<Town> {
    match key {
        LookupKey::Uuid(uuid) => towny.town((*uuid).into()),
        LookupKey::Name(name) => towny.town_by_name(name),
    }
}

/// Resolve a nation by UUID, or by name when the key is not a UUID.
pub fn nation(towny: &dyn TownyProvider, key: &LookupKey) -> Option<Nation> {
    match key {
        LookupKey::Uuid(uuid) => towny.nation((*uuid).into()),
        LookupKey::Name(name) => towny.nation_by_name(name),
    }
}

/// Resolve one side of an account link to both sides.
///
/// Always yields a record for a well-formed target; an unlinked account
/// leaves the other side empty.
pub fn account_link(
    links: &dyn AccountLinkProvider,
    key: &LinkKey,
) -> Result<AccountLink, QueryError> {
    match key.kind {
        LinkType::Discord => {
            if !is_snowflake(&key.target) {
                return Err(QueryError::InvalidSnowflake(key.target.clone()));
            }
            Ok(AccountLink {
                uuid: links.uuid_for_discord(&key.target),
                discord_id: Some(key.target.clone()),
            })
        }
        LinkType::Minecraft => {
            let uuid = parse_hyphenated_uuid(&key.target)
                .ok_or_else(|| QueryError::InvalidUuid(key.target.clone()))?;
            Ok(AccountLink {
                discord_id: links.discord_for_uuid(uuid),
                uuid: Some(uuid),
            })
        }
    }
}

/// Whether `target` looks like a Discord snowflake.
pub fn is_snowflake(target: &str) -> bool {
    SNOWFLAKE_DIGITS.contains(&target.len()) && target.bytes().all(|b| b.is_ascii_digit())
}
