//! Server status schema served at `GET /`.

use chrono::{Local, NaiveTime, Timelike};
use orbis_types::{
    Season, SeasonsView, ServerStats, ServerStatusView, ServerTimestamps, WeatherStatus,
    WorldEnvironment, WorldSeasonView, WorldState,
};

use super::total_town_blocks;
use crate::provider::Providers;

/// Render the server status using the current wall-clock time.
pub fn render(providers: &Providers) -> ServerStatusView {
    render_at(providers, Local::now().time())
}

/// Render the server status as of the given local time of day.
pub fn render_at(providers: &Providers, now: NaiveTime) -> ServerStatusView {
    let towny = providers.towny();
    let server = providers.server();
    let worlds = server.worlds();
    let overworld = overworld(&worlds);

    let residents = towny.residents();
    let towns = towny.towns();

    let is_winter = overworld
        .and_then(|world| providers.calendar().and_then(|c| c.date(&world.name)))
        .is_some_and(|date| date.season == Season::Winter);

    ServerStatusView {
        version: server.version(),
        moon_phase: overworld.map(|world| world.moon_phase),
        timestamps: ServerTimestamps {
            new_day_time: towny.new_day_time(),
            server_time_of_day: now.num_seconds_from_midnight(),
        },
        status: WeatherStatus {
            has_storm: overworld.is_some_and(|world| world.has_storm),
            is_thundering: overworld.is_some_and(|world| world.is_thundering),
            is_snowing: is_winter
                && overworld.is_some_and(|world| world.has_storm || world.is_thundering),
        },
        stats: ServerStats {
            time: overworld.map_or(0, |world| world.time),
            full_time: overworld.map_or(0, |world| world.full_time),
            max_players: server.max_players(),
            num_online_players: server.online_player_count(),
            num_online_nomads: residents
                .iter()
                .filter(|r| r.is_online && !r.has_town())
                .count(),
            num_residents: residents.len(),
            num_nomads: residents.iter().filter(|r| !r.has_town()).count(),
            num_towns: towns.len(),
            num_town_blocks: total_town_blocks(&towns),
            num_nations: towny.nations().len(),
        },
        seasons: SeasonsView {
            worlds: seasons(providers, &worlds),
        },
    }
}

/// The first `NORMAL` world, falling back to the first loaded world.
fn overworld(worlds: &[WorldState]) -> Option<&WorldState> {
    worlds
        .iter()
        .find(|world| world.environment == WorldEnvironment::Normal)
        .or_else(|| worlds.first())
}

fn seasons(providers: &Providers, worlds: &[WorldState]) -> Vec<WorldSeasonView> {
    let Some(calendar) = providers.calendar() else {
        return Vec::new();
    };

    worlds
        .iter()
        .filter_map(|world| {
            calendar.date(&world.name).map(|date| WorldSeasonView {
                world_name: world.name.clone(),
                date: date.date,
                current_season: date.season,
                day_of_week: date.day_of_week,
                month_name: date.month_name,
                world_seconds: date.seconds,
                world_minutes: date.minutes,
                world_hours: date.hours,
            })
        })
        .collect()
}
