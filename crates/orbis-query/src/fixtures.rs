//! Shared test world.
//!
//! Two towns of the nation Avalon (Riverton, the capital, and Dunmere),
//! a ruined town, a rival nation, and a townless resident whose name is
//! Bob's UUID.

#![allow(clippy::unwrap_used)]

use serde_json::{Value, json};
use uuid::Uuid;

use crate::memory::{InMemoryWorld, WorldFixture};
use crate::provider::Providers;

pub const ALICE: Uuid = Uuid::from_u128(0x01);
pub const BOB: Uuid = Uuid::from_u128(0x02);
pub const CAROL: Uuid = Uuid::from_u128(0x03);
pub const DAVE: Uuid = Uuid::from_u128(0x04);
pub const IMPOSTOR: Uuid = Uuid::from_u128(0x05);

pub const RIVERTON: Uuid = Uuid::from_u128(0x11);
pub const DUNMERE: Uuid = Uuid::from_u128(0x12);
pub const HOLLOW: Uuid = Uuid::from_u128(0x13);

pub const AVALON: Uuid = Uuid::from_u128(0x21);
pub const UMBRA: Uuid = Uuid::from_u128(0x22);

pub const ALICE_DISCORD: &str = "111111111111111111";

/// The full snapshot, every optional section included.
pub fn document() -> Value {
    json!({
        "residents": [
            {
                "id": ALICE,
                "name": "Alice",
                "title": "Lady",
                "surname": "of Riverton",
                "about": "Founder of Riverton",
                "town": RIVERTON,
                "registered": 1_600_000_000_000_i64,
                "joined_town_at": 1_600_000_000_000_i64,
                "last_online": 1_700_000_000_000_i64,
                "is_online": true,
                "friends": [BOB],
                "perms": { "build": { "resident": true }, "flags": { "pvp": false } }
            },
            {
                "id": BOB,
                "name": "Bob",
                "town": RIVERTON,
                "registered": 1_610_000_000_000_i64,
                "joined_town_at": 1_610_000_000_000_i64,
                "last_online": 1_650_000_000_000_i64,
                "town_ranks": ["assistant"]
            },
            {
                "id": CAROL,
                "name": "Carol",
                "registered": 1_620_000_000_000_i64,
                "is_online": true
            },
            {
                "id": DAVE,
                "name": "Dave",
                "town": DUNMERE,
                "registered": 1_630_000_000_000_i64,
                "joined_town_at": 1_630_000_000_000_i64,
                "nation_ranks": ["Chancellor"]
            },
            {
                "id": IMPOSTOR,
                "name": BOB.to_string(),
                "registered": 1_640_000_000_000_i64
            }
        ],
        "towns": [
            {
                "id": RIVERTON,
                "name": "Riverton",
                "board": "Welcome to Riverton",
                "founder": "Alice",
                "mayor": ALICE,
                "nation": AVALON,
                "registered": 1_600_000_000_000_i64,
                "joined_nation_at": 1_600_000_500_000_i64,
                "is_public": true,
                "is_open": true,
                "is_for_sale": true,
                "for_sale_price": 1000,
                "num_town_blocks": 40,
                "max_town_blocks": 64,
                "spawn": { "world": "world", "x": 100.5, "y": 64.0, "z": -200.5 },
                "home_block": { "x": 3, "z": -7 },
                "residents": [ALICE, BOB],
                "trusted": [DAVE],
                "outlaws": [CAROL]
            },
            {
                "id": DUNMERE,
                "name": "Dunmere",
                "mayor": DAVE,
                "nation": AVALON,
                "registered": 1_630_000_000_000_i64,
                "joined_nation_at": 1_630_000_000_000_i64,
                "num_town_blocks": 24,
                "max_town_blocks": 32,
                "residents": [DAVE]
            },
            {
                "id": HOLLOW,
                "name": "Hollow",
                "registered": 1_500_000_000_000_i64,
                "is_ruined": true,
                "ruined_at": 1_700_000_000_000_i64,
                "num_town_blocks": 12,
                "max_town_blocks": 10
            }
        ],
        "nations": [
            {
                "id": AVALON,
                "name": "Avalon",
                "board": "For the realm",
                "capital": RIVERTON,
                "registered": 1_600_000_500_000_i64,
                "is_public": true,
                "towns": [RIVERTON, DUNMERE],
                "enemies": [UMBRA],
                "sanctioned": [HOLLOW]
            },
            {
                "id": UMBRA,
                "name": "Umbra",
                "registered": 1_650_000_000_000_i64,
                "enemies": [AVALON]
            }
        ],
        "town_ranks": ["assistant", "sheriff"],
        "nation_ranks": ["chancellor", "general"],
        "new_day_time": 43_200,
        "server": {
            "version": "1.21.4",
            "max_players": 100,
            "worlds": [
                {
                    "name": "world_nether",
                    "environment": "NETHER",
                    "time": 18_000,
                    "full_time": 1_218_000,
                    "moon_phase": "NEW_MOON"
                },
                {
                    "name": "world",
                    "environment": "NORMAL",
                    "time": 6000,
                    "full_time": 1_206_000,
                    "has_storm": true,
                    "moon_phase": "FULL_MOON"
                }
            ]
        },
        "economy": {
            "players": { (ALICE.to_string()): 250.5 },
            "towns": { (RIVERTON.to_string()): 1200 },
            "nations": { (AVALON.to_string()): 5000 }
        },
        "links": [
            { "discord_id": ALICE_DISCORD, "uuid": ALICE }
        ],
        "skills": {
            "catalog": {
                "skills": ["MINING", "SWORDS", "FISHING", "SALVAGE"],
                "child_skills": ["SALVAGE"],
                "combat": ["SWORDS"],
                "gathering": ["MINING", "FISHING"],
                "misc": ["SALVAGE"]
            },
            "profiles": {
                (ALICE.to_string()): {
                    "power_level": 57,
                    "skills": {
                        "MINING": { "level": 45, "xp": 120, "xp_to_next_level": 1000 },
                        "SWORDS": { "level": 12, "xp": 30, "xp_to_next_level": 400 }
                    }
                }
            }
        },
        "calendar": {
            "world": {
                "date": "12 Frostmonth 1024",
                "season": "WINTER",
                "day_of_week": "Moonday",
                "month_name": "Frostmonth",
                "seconds": 0,
                "minutes": 30,
                "hours": 8
            }
        }
    })
}

/// A world from an arbitrary snapshot document.
pub fn build(document: Value) -> InMemoryWorld {
    let fixture: WorldFixture = serde_json::from_value(document).unwrap();
    InMemoryWorld::from(fixture)
}

/// The full world.
pub fn world() -> InMemoryWorld {
    build(document())
}

/// The full world with every optional integration installed.
pub fn providers() -> Providers {
    world().into_providers()
}

/// The same registry with no economy, links, skills, or calendar.
pub fn providers_without_integrations() -> Providers {
    let mut document = document();
    if let Some(object) = document.as_object_mut() {
        for section in ["economy", "links", "skills", "calendar"] {
            object.remove(section);
        }
    }
    build(document).into_providers()
}

/// Avalon's two towns each claim `usize::MAX` blocks.
pub fn oversized_world() -> InMemoryWorld {
    let mut document = document();
    document["towns"][0]["num_town_blocks"] = json!(usize::MAX);
    document["towns"][1]["num_town_blocks"] = json!(usize::MAX);
    build(document)
}

/// Riverton, Alice, and Avalon each reference ids the registry never saw.
pub fn dangling_world() -> InMemoryWorld {
    let ghost = Uuid::from_u128(0xdead);
    let mut document = document();
    document["towns"][0]["residents"] = json!([ALICE, BOB, ghost]);
    document["towns"][0]["trusted"] = json!([DAVE, ghost]);
    document["towns"][0]["outlaws"] = json!([ghost]);
    document["residents"][0]["friends"] = json!([BOB, ghost]);
    document["nations"][0]["allies"] = json!([ghost]);
    document["nations"][0]["enemies"] = json!([UMBRA, ghost]);
    build(document)
}

/// A world whose skill store fails every call.
pub fn failing_skill_world() -> InMemoryWorld {
    let mut document = document();
    document["skills"]["failure"] = json!("connection refused");
    build(document)
}
