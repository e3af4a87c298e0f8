//! Town schema.

use orbis_types::{Town, TownCoordinates, TownStats, TownStatus, TownTimestamps, TownView};

use super::{
    nation_summary, non_empty, rank_table, resident_names, resident_summary, residents,
};
use crate::provider::Providers;

/// Render a town as the full town schema.
///
/// Counts cover the residents that resolve, matching the lists beside them.
pub fn render(providers: &Providers, town: &Town) -> TownView {
    let towny = providers.towny();
    let nation = town.nation.and_then(|id| towny.nation(id));
    let mayor = town.mayor.and_then(|id| towny.resident(id));
    let members = residents(towny, &town.residents);
    let trusted = resident_names(towny, &town.trusted);
    let outlaws = resident_names(towny, &town.outlaws);

    TownView {
        name: town.name.clone(),
        uuid: town.id.into_inner(),
        board: non_empty(&town.board),
        founder: non_empty(&town.founder),
        mayor: mayor.as_ref().map(resident_summary),
        nation: nation.as_ref().map(nation_summary),
        timestamps: TownTimestamps {
            registered: town.registered,
            joined_nation_at: nation.is_some().then_some(town.joined_nation_at),
            ruined_at: town.is_ruined.then_some(town.ruined_at),
        },
        status: TownStatus {
            is_public: town.is_public,
            is_open: town.is_open,
            is_neutral: town.is_neutral,
            is_capital: nation
                .as_ref()
                .is_some_and(|nation| nation.capital == Some(town.id)),
            is_over_claimed: town.is_over_claimed(),
            is_ruined: town.is_ruined,
            is_for_sale: town.is_for_sale,
            has_nation: nation.is_some(),
        },
        stats: TownStats {
            num_town_blocks: town.num_town_blocks,
            max_town_blocks: town.max_town_blocks,
            num_residents: members.len(),
            num_trusted: trusted.len(),
            num_outlaws: outlaws.len(),
            balance: providers.town_balance(town.id),
            for_sale_price: town.is_for_sale.then_some(town.for_sale_price),
        },
        perms: town.perms,
        coordinates: TownCoordinates {
            spawn: town.spawn.clone(),
            home_block: town.home_block,
        },
        residents: members.iter().map(|r| r.name.clone()).collect(),
        trusted,
        outlaws,
        ranks: rank_table(towny.town_rank_names(), &members, |r| {
            r.town_ranks.as_slice()
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::fixtures;

    fn town(id: uuid::Uuid, providers: &Providers) -> TownView {
        let town = providers.towny().town(id.into()).unwrap();
        render(providers, &town)
    }

    #[test]
    fn capital_town_status() {
        let providers = fixtures::providers();
        let riverton = town(fixtures::RIVERTON, &providers);
        assert!(riverton.status.is_capital);
        assert!(riverton.status.has_nation);
        assert_eq!(riverton.mayor.map(|m| m.name), Some(String::from("Alice")));
        assert_eq!(riverton.residents, vec!["Alice", "Bob"]);
        assert_eq!(riverton.stats.num_residents, 2);
        assert_eq!(riverton.timestamps.joined_nation_at, Some(1_600_000_500_000));
    }

    #[test]
    fn counts_match_resolved_lists() {
        let providers = fixtures::dangling_world().into_providers();
        let riverton = town(fixtures::RIVERTON, &providers);
        assert_eq!(riverton.residents, vec!["Alice", "Bob"]);
        assert_eq!(riverton.stats.num_residents, 2);
        assert_eq!(riverton.trusted, vec!["Dave"]);
        assert_eq!(riverton.stats.num_trusted, 1);
        assert!(riverton.outlaws.is_empty());
        assert_eq!(riverton.stats.num_outlaws, 0);
    }

    #[test]
    fn ranks_cover_every_defined_rank() {
        let providers = fixtures::providers();
        let riverton = town(fixtures::RIVERTON, &providers);
        assert_eq!(riverton.ranks.get("assistant"), Some(&vec![String::from("Bob")]));
        assert_eq!(riverton.ranks.get("sheriff"), Some(&Vec::new()));
    }

    #[test]
    fn optional_fields_are_null_unless_applicable() {
        let providers = fixtures::providers();
        let json = serde_json::to_value(town(fixtures::HOLLOW, &providers)).unwrap();
        assert_eq!(json["board"], json!(null));
        assert_eq!(json["founder"], json!(null));
        assert_eq!(json["nation"], json!(null));
        assert_eq!(json["timestamps"]["joinedNationAt"], json!(null));
        assert_eq!(json["stats"]["forSalePrice"], json!(null));
        assert_eq!(json["status"]["isOverClaimed"], json!(true));
    }

    #[test]
    fn for_sale_and_ruined_fields() {
        let providers = fixtures::providers();
        let json = serde_json::to_value(town(fixtures::HOLLOW, &providers)).unwrap();
        assert_eq!(json["timestamps"]["ruinedAt"], json!(1_700_000_000_000_i64));

        let json = serde_json::to_value(town(fixtures::RIVERTON, &providers)).unwrap();
        assert_eq!(json["stats"]["forSalePrice"], json!(1000.0));
        assert_eq!(json["timestamps"]["ruinedAt"], json!(null));
        assert_eq!(json["coordinates"]["homeBlock"], json!({ "x": 3, "z": -7 }));
        assert_eq!(json["outlaws"], json!(["Carol"]));
    }
}
