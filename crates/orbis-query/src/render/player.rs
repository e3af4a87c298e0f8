//! Player schema.

use orbis_types::{PlayerRanks, PlayerStats, PlayerStatus, PlayerTimestamps, PlayerView, Resident};

use super::{nation_summary, non_empty, resident_summaries, town_summary};
use crate::provider::Providers;

/// Render a resident as the full player schema.
pub fn render(providers: &Providers, resident: &Resident) -> PlayerView {
    let towny = providers.towny();
    let town = resident.town.and_then(|id| towny.town(id));
    let nation = town
        .as_ref()
        .and_then(|town| town.nation)
        .and_then(|id| towny.nation(id));

    let is_mayor = town
        .as_ref()
        .is_some_and(|town| town.mayor == Some(resident.id));
    let is_king = is_mayor
        && matches!((&town, &nation), (Some(town), Some(nation)) if nation.capital == Some(town.id));

    let friends = resident_summaries(towny, &resident.friends);

    PlayerView {
        name: resident.name.clone(),
        uuid: resident.id.into_inner(),
        title: non_empty(&resident.title),
        surname: non_empty(&resident.surname),
        formatted_name: resident.formatted_name(),
        about: non_empty(&resident.about),
        town: town.as_ref().map(town_summary),
        nation: nation.as_ref().map(nation_summary),
        timestamps: PlayerTimestamps {
            registered: resident.registered,
            joined_town_at: resident.has_town().then_some(resident.joined_town_at),
            last_online: (resident.last_online != 0).then_some(resident.last_online),
        },
        status: PlayerStatus {
            is_online: resident.is_online,
            is_npc: resident.is_npc,
            is_mayor,
            is_king,
            has_town: resident.has_town(),
            has_nation: nation.is_some(),
        },
        stats: PlayerStats {
            balance: providers.player_balance(resident.id),
            num_friends: friends.len(),
        },
        perms: resident.perms,
        ranks: PlayerRanks {
            town_ranks: resident.town_ranks.clone(),
            nation_ranks: resident.nation_ranks.clone(),
        },
        friends,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::json;

    use super::*;
    use crate::fixtures;

    fn player(id: uuid::Uuid, providers: &Providers) -> PlayerView {
        let resident = providers.towny().resident(id.into()).unwrap();
        render(providers, &resident)
    }

    #[test]
    fn mayor_of_capital_is_king() {
        let providers = fixtures::providers();
        let alice = player(fixtures::ALICE, &providers);
        assert!(alice.status.is_mayor);
        assert!(alice.status.is_king);
        assert!(alice.status.has_nation);
        assert_eq!(alice.nation.map(|n| n.name), Some(String::from("Avalon")));

        let bob = player(fixtures::BOB, &providers);
        assert!(!bob.status.is_mayor);
        assert!(!bob.status.is_king);
    }

    #[test]
    fn townless_player_has_null_town_fields() {
        let providers = fixtures::providers();
        let carol = player(fixtures::CAROL, &providers);
        assert!(carol.town.is_none());
        assert!(carol.nation.is_none());
        assert_eq!(carol.timestamps.joined_town_at, None);
        assert_eq!(carol.timestamps.last_online, None);
        assert!(!carol.status.has_town);
    }

    #[test]
    fn empty_strings_serialize_as_null() {
        let providers = fixtures::providers();
        let json = serde_json::to_value(player(fixtures::BOB, &providers)).unwrap();
        assert_eq!(json["title"], json!(null));
        assert_eq!(json["surname"], json!(null));
        assert_eq!(json["about"], json!(null));
        assert_eq!(json["formattedName"], json!("Bob"));
    }

    #[test]
    fn wire_shape_uses_camel_case() {
        let providers = fixtures::providers();
        let json = serde_json::to_value(player(fixtures::ALICE, &providers)).unwrap();
        assert_eq!(json["formattedName"], json!("Lady Alice of Riverton"));
        assert_eq!(json["status"]["isNPC"], json!(false));
        assert_eq!(json["stats"]["balance"], json!(250.5));
        assert_eq!(json["stats"]["numFriends"], json!(1));
        assert_eq!(json["friends"], json!([{ "name": "Bob", "uuid": fixtures::BOB }]));
        assert_eq!(json["ranks"]["townRanks"], json!([]));
        assert_eq!(json["perms"]["flags"]["pvp"], json!(false));
    }

    #[test]
    fn friend_count_skips_unknown_ids() {
        let providers = fixtures::dangling_world().into_providers();
        let alice = player(fixtures::ALICE, &providers);
        assert_eq!(alice.friends.len(), 1);
        assert_eq!(alice.stats.num_friends, 1);
    }

    #[test]
    fn balance_defaults_to_zero_without_economy() {
        let providers = fixtures::providers_without_integrations();
        let alice = player(fixtures::ALICE, &providers);
        assert_eq!(alice.stats.balance, Decimal::ZERO);
    }
}
