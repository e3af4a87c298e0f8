//! Skill progression schema.
//!
//! The skill store is optional and may fail at call time, so this
//! renderer always produces a view: problems are reported inside it
//! through `has_skill_data` and `error` rather than as a lookup failure.

use orbis_types::{Resident, SkillCatalog, SkillCategories, SkillProfile, SkillTable, SkillsView};
use tracing::warn;

use crate::key::SkillSelection;
use crate::provider::SkillProvider;

/// Reported when no skill store is installed.
pub const UNAVAILABLE_MESSAGE: &str = "Skill data is not available on this server";

/// Render a player's skill progression.
pub fn render(
    skills: Option<&dyn SkillProvider>,
    resident: &Resident,
    selection: SkillSelection,
) -> SkillsView {
    let mut view = SkillsView {
        name: resident.name.clone(),
        uuid: resident.id.into_inner(),
        has_skill_data: false,
        power_level: None,
        skills: None,
        categories: None,
        error: None,
    };

    let Some(store) = skills else {
        view.error = Some(String::from(UNAVAILABLE_MESSAGE));
        return view;
    };

    let fetched = store
        .profile(resident.id)
        .and_then(|profile| match profile {
            Some(profile) => store.catalog().map(|catalog| Some((profile, catalog))),
            None => Ok(None),
        });

    match fetched {
        Ok(Some((profile, catalog))) => {
            view.has_skill_data = true;
            view.power_level = Some(profile.power_level);
            view.skills = Some(select(&catalog, &profile, selection));
            view.categories = Some(SkillCategories {
                combat: catalog.combat,
                gathering: catalog.gathering,
                misc: catalog.misc,
            });
        }
        Ok(None) => {}
        Err(e) => {
            warn!(player = %resident.name, error = %e, "Skill store lookup failed");
            view.error = Some(format!("Failed to retrieve skill data: {e}"));
        }
    }

    view
}

/// Progress for each selected skill, in catalog order. Skills the
/// profile has no record of report as level zero.
fn select(
    catalog: &SkillCatalog,
    profile: &SkillProfile,
    selection: SkillSelection,
) -> SkillTable {
    let progress = |name: &String| {
        (
            name.clone(),
            profile.skills.get(name).copied().unwrap_or_default(),
        )
    };

    match selection {
        SkillSelection::NonChild => catalog.non_child_skills().map(progress).collect(),
        SkillSelection::All => catalog.skills.iter().map(progress).collect(),
        SkillSelection::Leveled => catalog
            .skills
            .iter()
            .map(progress)
            .filter(|(_, level)| level.level > 0)
            .collect(),
    }
}
