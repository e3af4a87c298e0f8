//! Renderers: provider records to wire views.
//!
//! Every renderer is a pure function of its record and the providers it
//! reads related entities from. How the record was obtained (batch, list,
//! or single lookup) never changes the output.
//!
//! Related entities render one level deep as [`Summary`] values. Ids
//! that no longer resolve are skipped rather than rendered as holes.

pub mod link;
pub mod nation;
pub mod player;
pub mod server;
pub mod skills;
pub mod town;

use orbis_types::{Nation, NationId, RankTable, Resident, ResidentId, Summary, Town, TownId};

use crate::provider::TownyProvider;

/// `None` for an empty string, so unset text reaches the client as `null`.
pub fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

/// One-level reference to a resident.
pub fn resident_summary(resident: &Resident) -> Summary {
    Summary {
        name: resident.name.clone(),
        uuid: resident.id.into_inner(),
    }
}

/// One-level reference to a town.
pub fn town_summary(town: &Town) -> Summary {
    Summary {
        name: town.name.clone(),
        uuid: town.id.into_inner(),
    }
}

/// One-level reference to a nation.
pub fn nation_summary(nation: &Nation) -> Summary {
    Summary {
        name: nation.name.clone(),
        uuid: nation.id.into_inner(),
    }
}

/// Resolve resident ids, skipping any the registry no longer knows.
pub(crate) fn residents(towny: &dyn TownyProvider, ids: &[ResidentId]) -> Vec<Resident> {
    ids.iter().filter_map(|id| towny.resident(*id)).collect()
}

/// Names of the given residents, in order.
pub(crate) fn resident_names(towny: &dyn TownyProvider, ids: &[ResidentId]) -> Vec<String> {
    ids.iter()
        .filter_map(|id| towny.resident(*id))
        .map(|resident| resident.name)
        .collect()
}

/// Summaries of the given residents, in order.
pub(crate) fn resident_summaries(towny: &dyn TownyProvider, ids: &[ResidentId]) -> Vec<Summary> {
    ids.iter()
        .filter_map(|id| towny.resident(*id))
        .map(|resident| resident_summary(&resident))
        .collect()
}

/// Summaries of the given towns, in order.
pub(crate) fn town_summaries(towny: &dyn TownyProvider, ids: &[TownId]) -> Vec<Summary> {
    ids.iter()
        .filter_map(|id| towny.town(*id))
        .map(|town| town_summary(&town))
        .collect()
}

/// Summaries of the given nations, in order.
pub(crate) fn nation_summaries(towny: &dyn TownyProvider, ids: &[NationId]) -> Vec<Summary> {
    ids.iter()
        .filter_map(|id| towny.nation(*id))
        .map(|nation| nation_summary(&nation))
        .collect()
}

/// Town blocks claimed across `towns`, saturating at `usize::MAX`.
pub(crate) fn total_town_blocks(towns: &[Town]) -> usize {
    towns
        .iter()
        .fold(0_usize, |total, town| total.saturating_add(town.num_town_blocks))
}

/// One entry per known rank name, listing the members who hold it.
///
/// `held` picks the rank list to check (town or nation ranks). Rank names
/// compare case-insensitively; the table keeps the registry's spelling.
pub(crate) fn rank_table(
    rank_names: Vec<String>,
    members: &[Resident],
    held: impl Fn(&Resident) -> &[String],
) -> RankTable {
    rank_names
        .into_iter()
        .map(|rank| {
            let holders = members
                .iter()
                .filter(|member| held(member).iter().any(|r| r.eq_ignore_ascii_case(&rank)))
                .map(|member| member.name.clone())
                .collect();
            (rank, holders)
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn empty_strings_become_none() {
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty("Welcome"), Some(String::from("Welcome")));
    }

    #[test]
    fn unknown_ids_are_skipped() {
        let world = fixtures::world();
        let ids = [ResidentId::new(), ResidentId::from(fixtures::ALICE)];
        assert_eq!(resident_names(&world, &ids), vec!["Alice"]);
        assert_eq!(resident_summaries(&world, &ids).len(), 1);
    }

    #[test]
    fn rank_table_lists_every_rank() {
        let world = fixtures::world();
        let members = residents(&world, &[fixtures::ALICE.into(), fixtures::BOB.into()]);
        let table = rank_table(
            vec![String::from("assistant"), String::from("sheriff")],
            &members,
            |r| r.town_ranks.as_slice(),
        );
        assert_eq!(table.len(), 2);
        assert_eq!(table["assistant"], vec!["Bob"]);
        assert!(table["sheriff"].is_empty());
    }
}
