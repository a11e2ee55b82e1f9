//! Resolving transcript episode titles to overall episode numbers and seasons.

use super::{AliasTable, EpisodeRecord, UNKNOWN_NUMBER};
use crate::script::SceneRecord;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileSummary {
    pub by_title: usize,
    pub by_alias: usize,
    pub unresolved: usize,
    /// Resolved to an episode number that neither index lists.
    pub without_season: usize,
    /// Only found a season once the two-part rows were added.
    pub season_after_repair: usize,
}

/// First row per title, ignoring rows with an unknown number.
fn numbers_by_title(index: &[EpisodeRecord]) -> HashMap<&str, i64> {
    let mut map = HashMap::new();
    for e in index.iter().filter(|e| e.overall != UNKNOWN_NUMBER) {
        map.entry(e.title.as_str()).or_insert(e.overall);
    }
    map
}

/// First season per overall number, ignoring unknown numbers.
fn seasons_by_number(index: &[EpisodeRecord]) -> HashMap<i64, u32> {
    let mut map = HashMap::new();
    for e in index.iter().filter(|e| e.overall != UNKNOWN_NUMBER) {
        map.entry(e.overall).or_insert(e.season);
    }
    map
}

/// Attach `episode_id` and `season` to every scene.
///
/// Titles are matched exactly against `index` first, then through the alias
/// table. Seasons are looked up by number in `index` and then again in
/// `repaired`; the second lookup is final, so halves of two-part episodes
/// that only exist in the repaired index still get a season. Scenes that
/// match nothing keep `None` for both.
pub fn reconcile_scenes(
    mut scenes: Vec<SceneRecord>,
    index: &[EpisodeRecord],
    repaired: &[EpisodeRecord],
    aliases: &AliasTable,
) -> (Vec<SceneRecord>, ReconcileSummary) {
    let titles = numbers_by_title(index);
    let seasons = seasons_by_number(index);
    let repaired_seasons = seasons_by_number(repaired);
    let mut summary = ReconcileSummary::default();

    for scene in scenes.iter_mut() {
        let episode_id = match titles.get(scene.episode.as_str()) {
            Some(&n) => {
                summary.by_title += 1;
                Some(n)
            }
            None => match aliases.get(&scene.episode) {
                Some(n) => {
                    summary.by_alias += 1;
                    Some(n)
                }
                None => {
                    summary.unresolved += 1;
                    None
                }
            },
        };

        let first_pass = episode_id.and_then(|id| seasons.get(&id).copied());
        let season = episode_id.and_then(|id| repaired_seasons.get(&id).copied());
        if episode_id.is_some() {
            if season.is_none() {
                summary.without_season += 1;
            } else if first_pass.is_none() {
                summary.season_after_repair += 1;
            }
        }

        scene.episode_id = episode_id;
        scene.season = season;
    }

    log::info!(
        "Matched scenes to episodes: {} by title, {} by alias, {} unresolved, {} without season ({} via repaired index)",
        summary.by_title,
        summary.by_alias,
        summary.unresolved,
        summary.without_season,
        summary.season_after_repair
    );
    (scenes, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::episodes::index::{apply_repairs, EpisodeRepairs};

    fn episode(overall: i64, in_season: i64, title: &str, season: u32) -> EpisodeRecord {
        EpisodeRecord {
            overall,
            in_season,
            title: title.to_string(),
            season,
            ..Default::default()
        }
    }

    fn scene(n: i64, episode: &str) -> SceneRecord {
        SceneRecord {
            scene_number: n,
            episode: episode.to_string(),
            scene: format!("Scene {}", n),
            episode_id: None,
            season: None,
        }
    }

    /// An index shaped like the source: two-part episodes listed once, with
    /// the stale combined rows at the positions the repair set drops.
    fn source_index() -> Vec<EpisodeRecord> {
        let mut index = Vec::new();
        for i in 0..200 {
            let overall = i as i64 + 1;
            let (title, season) = match overall {
                1 => ("The One Where Monica Gets A New Roommate".to_string(), 1),
                2 => ("The One With The Sonogram At The End".to_string(), 1),
                16 => ("The One With Two Parts".to_string(), 1),
                94 => ("The One With Ross'S Wedding".to_string(), 4),
                163 => ("The One With Monica And Chandler'S Wedding".to_string(), 7),
                n if n < 25 => (format!("Season One Episode {}", n), 1),
                n if n < 49 => (format!("Season Two Episode {}", n), 2),
                n if n < 74 => (format!("Season Three Episode {}", n), 3),
                n if n < 98 => (format!("Season Four Episode {}", n), 4),
                n if n < 122 => (format!("Season Five Episode {}", n), 5),
                n if n < 147 => (format!("Season Six Episode {}", n), 6),
                n if n < 171 => (format!("Season Seven Episode {}", n), 7),
                n => (format!("Later Episode {}", n), 8),
            };
            // Combined rows carry no usable number
            let overall = if [16, 94, 163].contains(&overall) { UNKNOWN_NUMBER } else { overall };
            index.push(episode(overall, 1, &title, season));
        }
        // Make 17, 97 and 170 absent before repair
        for e in index.iter_mut() {
            if [17, 97, 170].contains(&e.overall) {
                e.overall = UNKNOWN_NUMBER;
            }
        }
        index
    }

    #[test]
    fn test_exact_title_match() {
        let index = source_index();
        let aliases = AliasTable::builtin().unwrap();
        let (scenes, summary) = reconcile_scenes(
            vec![scene(0, "The One With The Sonogram At The End")],
            &index,
            &index,
            &aliases,
        );
        assert_eq!(scenes[0].episode_id, Some(2));
        assert_eq!(scenes[0].season, Some(1));
        assert_eq!(summary.by_title, 1);
    }

    #[test]
    fn test_alias_match() {
        let index = source_index();
        let aliases = AliasTable::builtin().unwrap();
        let (scenes, summary) = reconcile_scenes(
            vec![scene(0, "The One Where Monica Gets A New Roomate")],
            &index,
            &index,
            &aliases,
        );
        assert_eq!(scenes[0].episode_id, Some(1));
        assert_eq!(scenes[0].season, Some(1));
        assert_eq!(summary.by_alias, 1);
    }

    #[test]
    fn test_unknown_number_never_matches() {
        let index = vec![episode(UNKNOWN_NUMBER, UNKNOWN_NUMBER, "The One With Two Parts", 1)];
        let aliases = AliasTable::builtin().unwrap();
        let (scenes, summary) =
            reconcile_scenes(vec![scene(0, "The One With Two Parts")], &index, &index, &aliases);
        assert_eq!(scenes[0].episode_id, None);
        assert_eq!(scenes[0].season, None);
        assert_eq!(summary.unresolved, 1);
    }

    #[test]
    fn test_unresolved_title_stays_null() {
        let index = source_index();
        let aliases = AliasTable::builtin().unwrap();
        let (scenes, summary) = reconcile_scenes(
            vec![scene(0, "The One Nobody Wrote Down")],
            &index,
            &index,
            &aliases,
        );
        assert_eq!(scenes[0].episode_id, None);
        assert_eq!(scenes[0].season, None);
        assert_eq!(scenes[0].episode, "The One Nobody Wrote Down");
        assert_eq!(summary.unresolved, 1);
    }

    #[test]
    fn test_two_part_halves_resolve_after_repair() {
        let index = source_index();
        let repairs = EpisodeRepairs::builtin().unwrap();
        let repaired = apply_repairs(&index, &repairs);
        let aliases = AliasTable::builtin().unwrap();

        let (scenes, summary) = reconcile_scenes(
            vec![
                scene(0, "The One With Two Parts, Part 1"),
                scene(1, "The One With Two Parts, Part 2"),
                scene(2, "The One With Ross'S Wedding Parts I And Ii"),
                scene(3, "The One With Ross'S Wedding - Uncut Version"),
                scene(4, "The One With Chandler And Monicas Wedding"),
            ],
            &index,
            &repaired,
            &aliases,
        );

        assert_eq!(scenes[0].episode_id, Some(16));
        assert_eq!(scenes[0].season, Some(1));
        assert_eq!(scenes[1].episode_id, Some(17));
        assert_eq!(scenes[1].season, Some(1));
        assert_eq!(scenes[2].episode_id, Some(96));
        assert_eq!(scenes[3].episode_id, Some(97));
        assert_eq!(scenes[2].season, Some(4));
        assert_eq!(scenes[3].season, Some(4));
        assert_eq!(scenes[4].episode_id, Some(169));
        assert_eq!(scenes[4].season, Some(7));
        assert!(summary.season_after_repair >= 2);
        assert_eq!(summary.without_season, 0);

        // Halves are distinct, adjacent within the season, same season
        for (a, b) in [(16, 17), (96, 97), (169, 170)] {
            let ea = repaired.iter().find(|e| e.overall == a).unwrap();
            let eb = repaired.iter().find(|e| e.overall == b).unwrap();
            assert_ne!(ea.overall, eb.overall);
            assert_eq!(eb.in_season - ea.in_season, 1);
            assert_eq!(ea.season, eb.season);
        }
    }

    #[test]
    fn test_every_known_title_resolves() {
        let index = source_index();
        let repaired = apply_repairs(&index, &EpisodeRepairs::builtin().unwrap());
        let aliases = AliasTable::builtin().unwrap();

        let mut titles: Vec<String> = aliases.titles().map(String::from).collect();
        titles.extend(
            index
                .iter()
                .filter(|e| e.overall != UNKNOWN_NUMBER)
                .map(|e| e.title.clone()),
        );
        let scenes: Vec<SceneRecord> = titles
            .iter()
            .enumerate()
            .map(|(i, t)| scene(i as i64, t))
            .collect();

        let (scenes, summary) = reconcile_scenes(scenes, &index, &repaired, &aliases);
        assert!(scenes.iter().all(|s| s.episode_id.is_some()));
        assert_eq!(summary.unresolved, 0);
    }
}
