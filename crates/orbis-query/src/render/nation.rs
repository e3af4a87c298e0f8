//! Nation schema.

use orbis_types::{
    Nation, NationCoordinates, NationStats, NationStatus, NationTimestamps, NationView, Resident,
};

use super::{
    nation_summaries, non_empty, rank_table, resident_summary, total_town_blocks,
    town_summaries, town_summary,
};
use crate::provider::Providers;

/// Render a nation as the full nation schema.
///
/// The king is the capital's mayor. Residents and town blocks are the
/// totals over every member town. Ids the registry no longer knows are
/// left out of both the lists and their counts.
pub fn render(providers: &Providers, nation: &Nation) -> NationView {
    let towny = providers.towny();
    let capital = nation.capital.and_then(|id| towny.town(id));
    let king = capital
        .as_ref()
        .and_then(|town| town.mayor)
        .and_then(|id| towny.resident(id));

    let towns: Vec<_> = nation.towns.iter().filter_map(|id| towny.town(*id)).collect();
    let members: Vec<Resident> = towns
        .iter()
        .flat_map(|town| town.residents.iter())
        .filter_map(|id| towny.resident(*id))
        .collect();

    let allies = nation_summaries(towny, &nation.allies);
    let enemies = nation_summaries(towny, &nation.enemies);

    NationView {
        name: nation.name.clone(),
        uuid: nation.id.into_inner(),
        board: non_empty(&nation.board),
        king: king.as_ref().map(resident_summary),
        capital: capital.as_ref().map(town_summary),
        timestamps: NationTimestamps {
            registered: nation.registered,
        },
        status: NationStatus {
            is_public: nation.is_public,
            is_open: nation.is_open,
            is_neutral: nation.is_neutral,
        },
        stats: NationStats {
            num_town_blocks: total_town_blocks(&towns),
            num_residents: members.len(),
            num_towns: towns.len(),
            num_allies: allies.len(),
            num_enemies: enemies.len(),
            balance: providers.nation_balance(nation.id),
        },
        coordinates: NationCoordinates {
            spawn: nation.spawn.clone(),
        },
        residents: members.iter().map(|r| r.name.clone()).collect(),
        towns: towns.iter().map(town_summary).collect(),
        allies,
        enemies,
        sanctioned: town_summaries(towny, &nation.sanctioned),
        ranks: rank_table(towny.nation_rank_names(), &members, |r| {
            r.nation_ranks.as_slice()
        }),
    }
}
